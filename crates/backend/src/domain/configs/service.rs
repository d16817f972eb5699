use contracts::domain::processing_config::aggregate::{
    ProcessingConfig, ProcessingConfigDto, ProcessingConfigId,
};
use uuid::Uuid;

use super::repository;

/// Создание конфигурации. `id` назначает сервер.
pub async fn create(dto: ProcessingConfigDto) -> anyhow::Result<ProcessingConfig> {
    dto.validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;

    let config = ProcessingConfig {
        id: ProcessingConfigId::new_v4(),
        input: dto.input,
        output: dto.output,
        args: dto.args,
    };
    repository::insert(&config).await?;
    Ok(config)
}

/// Полная замена полей конфигурации. false — записи нет.
pub async fn update(id: Uuid, dto: ProcessingConfigDto) -> anyhow::Result<bool> {
    dto.validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;

    let config = ProcessingConfig {
        id: ProcessingConfigId::new(id),
        input: dto.input,
        output: dto.output,
        args: dto.args,
    };
    repository::update(&config).await
}

/// Удаление конфигурации. false — записи уже нет.
pub async fn delete(id: Uuid) -> anyhow::Result<bool> {
    repository::delete_by_id(id).await
}

/// Все конфигурации
pub async fn list_all() -> anyhow::Result<Vec<ProcessingConfig>> {
    repository::list_all().await
}

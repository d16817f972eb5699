use chrono::Utc;
use contracts::domain::log_entry::aggregate::{LogEntry, LogEntryId, NewLogEntry};
use contracts::query::log_query::LogQuery;
use uuid::Uuid;

use super::repository;

/// Выборка журнала по параметрам запроса
pub async fn list(query: &LogQuery) -> anyhow::Result<Vec<LogEntry>> {
    repository::list(query).await
}

/// Создание записи журнала. `id` и `datetime` назначает сервер.
pub async fn create(dto: NewLogEntry) -> anyhow::Result<LogEntry> {
    dto.validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;

    let entry = LogEntry {
        id: LogEntryId::new_v4(),
        datetime: Utc::now(),
        level: dto.level,
        input: dto.input,
        output: dto.output,
        info: dto.info,
        size: dto.size,
        check: dto.check,
    };
    repository::insert(&entry).await?;
    Ok(entry)
}

/// Удаление записи. false — записи уже нет.
pub async fn delete(id: Uuid) -> anyhow::Result<bool> {
    repository::delete_by_id(id).await
}

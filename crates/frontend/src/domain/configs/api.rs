use contracts::domain::processing_config::aggregate::{ProcessingConfig, ProcessingConfigDto};
use gloo_net::http::Request;

use crate::shared::api_utils::api_base;
use crate::shared::error::{server_error, ApiError};

/// Все конфигурации
pub async fn fetch_configs() -> Result<Vec<ProcessingConfig>, ApiError> {
    let url = format!("{}/api/configs", api_base());
    let response = Request::get(&url).send().await?;
    if !response.ok() {
        return Err(server_error(&response).await);
    }
    response
        .json::<Vec<ProcessingConfig>>()
        .await
        .map_err(ApiError::from)
}

/// Создание. Сервер назначает id и возвращает сущность целиком.
pub async fn create_config(dto: &ProcessingConfigDto) -> Result<ProcessingConfig, ApiError> {
    dto.validate().map_err(ApiError::Validation)?;

    let url = format!("{}/api/configs", api_base());
    let response = Request::post(&url).json(dto)?.send().await?;
    if !response.ok() {
        return Err(server_error(&response).await);
    }
    response
        .json::<ProcessingConfig>()
        .await
        .map_err(ApiError::from)
}

/// Полная замена полей конфигурации.
///
/// Тело ответа не используется: вызывающий код сам вливает
/// отправленные поля в свою локальную копию.
pub async fn update_config(id: &str, dto: &ProcessingConfigDto) -> Result<(), ApiError> {
    dto.validate().map_err(ApiError::Validation)?;

    let url = format!("{}/api/configs/{}", api_base(), id);
    let response = Request::put(&url).json(dto)?.send().await?;
    if !response.ok() {
        return Err(server_error(&response).await);
    }
    Ok(())
}

/// Удаление по id. Повторное удаление того же id даёт Server{404}.
pub async fn delete_config(id: &str) -> Result<(), ApiError> {
    let url = format!("{}/api/configs/{}", api_base(), id);
    let response = Request::delete(&url).send().await?;
    if !response.ok() {
        return Err(server_error(&response).await);
    }
    Ok(())
}

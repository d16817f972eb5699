use axum::extract::Path;
use axum::http::StatusCode;
use axum::Json;

use contracts::domain::processing_config::aggregate::{ProcessingConfig, ProcessingConfigDto};

use super::{error_body, ErrorBody};
use crate::domain::configs;

/// GET /api/configs
pub async fn list() -> Result<Json<Vec<ProcessingConfig>>, ErrorBody> {
    match configs::service::list_all().await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Ошибка выборки конфигураций: {e}");
            Err(error_body(StatusCode::INTERNAL_SERVER_ERROR, e))
        }
    }
}

/// POST /api/configs
pub async fn create(
    Json(dto): Json<ProcessingConfigDto>,
) -> Result<(StatusCode, Json<ProcessingConfig>), ErrorBody> {
    if let Err(msg) = dto.validate() {
        return Err(error_body(StatusCode::UNPROCESSABLE_ENTITY, msg));
    }
    match configs::service::create(dto).await {
        Ok(config) => Ok((StatusCode::CREATED, Json(config))),
        Err(e) => {
            tracing::error!("Ошибка создания конфигурации: {e}");
            Err(error_body(StatusCode::INTERNAL_SERVER_ERROR, e))
        }
    }
}

/// PUT /api/configs/:id — полная замена полей, тело ответа пустое.
pub async fn update(
    Path(id): Path<String>,
    Json(dto): Json<ProcessingConfigDto>,
) -> Result<StatusCode, ErrorBody> {
    let uuid = match uuid::Uuid::parse_str(&id) {
        Ok(uuid) => uuid,
        Err(_) => return Err(error_body(StatusCode::BAD_REQUEST, "Invalid id")),
    };
    if let Err(msg) = dto.validate() {
        return Err(error_body(StatusCode::UNPROCESSABLE_ENTITY, msg));
    }
    match configs::service::update(uuid, dto).await {
        Ok(true) => Ok(StatusCode::NO_CONTENT),
        Ok(false) => Err(error_body(StatusCode::NOT_FOUND, "Config not found")),
        Err(e) => {
            tracing::error!("Ошибка обновления конфигурации: {e}");
            Err(error_body(StatusCode::INTERNAL_SERVER_ERROR, e))
        }
    }
}

/// DELETE /api/configs/:id
pub async fn delete(Path(id): Path<String>) -> Result<StatusCode, ErrorBody> {
    let uuid = match uuid::Uuid::parse_str(&id) {
        Ok(uuid) => uuid,
        Err(_) => return Err(error_body(StatusCode::BAD_REQUEST, "Invalid id")),
    };
    match configs::service::delete(uuid).await {
        Ok(true) => Ok(StatusCode::NO_CONTENT),
        Ok(false) => Err(error_body(StatusCode::NOT_FOUND, "Config not found")),
        Err(e) => {
            tracing::error!("Ошибка удаления конфигурации: {e}");
            Err(error_body(StatusCode::INTERNAL_SERVER_ERROR, e))
        }
    }
}

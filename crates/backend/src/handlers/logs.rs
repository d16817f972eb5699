use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::Json;

use contracts::domain::log_entry::aggregate::{LogEntry, NewLogEntry};
use contracts::query::log_query::LogQuery;

use super::{error_body, ErrorBody};
use crate::domain::logs;

/// GET /api/logs
pub async fn list(Query(query): Query<LogQuery>) -> Result<Json<Vec<LogEntry>>, ErrorBody> {
    match logs::service::list(&query).await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Ошибка выборки логов: {e}");
            Err(error_body(StatusCode::INTERNAL_SERVER_ERROR, e))
        }
    }
}

/// POST /api/logs
pub async fn create(
    Json(dto): Json<NewLogEntry>,
) -> Result<(StatusCode, Json<LogEntry>), ErrorBody> {
    if let Err(msg) = dto.validate() {
        return Err(error_body(StatusCode::UNPROCESSABLE_ENTITY, msg));
    }
    match logs::service::create(dto).await {
        Ok(entry) => Ok((StatusCode::CREATED, Json(entry))),
        Err(e) => {
            tracing::error!("Ошибка добавления лога: {e}");
            Err(error_body(StatusCode::INTERNAL_SERVER_ERROR, e))
        }
    }
}

/// DELETE /api/logs/:id
pub async fn delete(Path(id): Path<String>) -> Result<StatusCode, ErrorBody> {
    let uuid = match uuid::Uuid::parse_str(&id) {
        Ok(uuid) => uuid,
        Err(_) => return Err(error_body(StatusCode::BAD_REQUEST, "Invalid id")),
    };
    match logs::service::delete(uuid).await {
        Ok(true) => Ok(StatusCode::NO_CONTENT),
        Ok(false) => Err(error_body(StatusCode::NOT_FOUND, "Log not found")),
        Err(e) => {
            tracing::error!("Ошибка удаления лога: {e}");
            Err(error_body(StatusCode::INTERNAL_SERVER_ERROR, e))
        }
    }
}

pub mod configs;
pub mod logs;

use axum::http::StatusCode;
use axum::Json;
use serde_json::json;

pub type ErrorBody = (StatusCode, Json<serde_json::Value>);

/// Тело ошибки вида {"error": "..."} с заданным статусом.
pub fn error_body(status: StatusCode, message: impl std::fmt::Display) -> ErrorBody {
    (status, Json(json!({ "error": message.to_string() })))
}

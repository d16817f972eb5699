use contracts::domain::log_entry::aggregate::{LogEntry, NewLogEntry};
use contracts::query::log_query::{most_recent, LogFilter};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_base, build_query};
use crate::shared::error::{server_error, ApiError};

/// Список логов с учётом фильтров
pub async fn fetch_logs(filter: &LogFilter) -> Result<Vec<LogEntry>, ApiError> {
    let query = build_query(&filter.to_query_pairs());
    let url = format!("{}/api/logs{}", api_base(), query);

    let response = Request::get(&url).send().await?;
    if !response.ok() {
        return Err(server_error(&response).await);
    }
    response
        .json::<Vec<LogEntry>>()
        .await
        .map_err(ApiError::from)
}

/// Последние записи для сводки.
///
/// Сервер просит отсортировать и ограничить выборку сам
/// (sort=desc, limit=N), ответ дополнительно нормализуется на клиенте.
pub async fn fetch_recent_logs(limit: usize) -> Result<Vec<LogEntry>, ApiError> {
    let url = format!("{}/api/logs?sort=desc&limit={}", api_base(), limit);

    let response = Request::get(&url).send().await?;
    if !response.ok() {
        return Err(server_error(&response).await);
    }
    let entries = response
        .json::<Vec<LogEntry>>()
        .await
        .map_err(ApiError::from)?;
    Ok(most_recent(entries, limit))
}

/// Создание записи. Сервер назначает id и datetime и возвращает
/// запись целиком.
pub async fn create_log(dto: &NewLogEntry) -> Result<LogEntry, ApiError> {
    dto.validate().map_err(ApiError::Validation)?;

    let url = format!("{}/api/logs", api_base());
    let response = Request::post(&url).json(dto)?.send().await?;
    if !response.ok() {
        return Err(server_error(&response).await);
    }
    response.json::<LogEntry>().await.map_err(ApiError::from)
}

/// Удаление по id. Повторное удаление того же id даёт Server{404}.
pub async fn delete_log(id: &str) -> Result<(), ApiError> {
    let url = format!("{}/api/logs/{}", api_base(), id);
    let response = Request::delete(&url).send().await?;
    if !response.ok() {
        return Err(server_error(&response).await);
    }
    Ok(())
}

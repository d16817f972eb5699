use axum::{
    routing::{delete, get, put},
    Router,
};

use crate::handlers;

/// Конфигурация всех роутов приложения
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // Журнал обработки
        .route(
            "/api/logs",
            get(handlers::logs::list).post(handlers::logs::create),
        )
        .route("/api/logs/:id", delete(handlers::logs::delete))
        // Конфигурации обработки
        .route(
            "/api/configs",
            get(handlers::configs::list).post(handlers::configs::create),
        )
        .route(
            "/api/configs/:id",
            put(handlers::configs::update).delete(handlers::configs::delete),
        )
}

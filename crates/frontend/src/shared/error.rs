use thiserror::Error;

/// Ошибки клиентского API-слоя.
///
/// `Network`: транспорт не доставил запрос или ответ не разобрался.
/// `Server`: сервер ответил не-2xx, `message` берётся из тела ответа.
/// `Validation`: форма не прошла проверку обязательных полей,
/// запрос при этом не отправлялся.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("сеть недоступна: {0}")]
    Network(String),
    #[error("HTTP {status}: {message}")]
    Server { status: u16, message: String },
    #[error("{0}")]
    Validation(String),
}

impl ApiError {
    /// Повторное удаление уже удалённой записи даёт 404; вызывающий
    /// код считает такую запись уже убранной.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Server { status: 404, .. })
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}

/// Читает `{"error": "..."}` из не-2xx ответа; без тела остаётся
/// только статус.
pub async fn server_error(response: &gloo_net::http::Response) -> ApiError {
    let status = response.status();
    let message = match response.json::<serde_json::Value>().await {
        Ok(body) => body["error"].as_str().unwrap_or("").to_string(),
        Err(_) => String::new(),
    };
    ApiError::Server { status, message }
}

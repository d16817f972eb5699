//! Вспомогательные функции для обращения к REST API.

/// Базовый URL сервера API.
///
/// Собирается из текущего window.location; сервер слушает порт 3000.
/// Вне браузера возвращает пустую строку.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Собирает строку запроса из пар ключ-значение.
///
/// Значения кодируются percent-encoding; пустой набор пар даёт
/// пустую строку, запрос уходит без параметров.
pub fn build_query(pairs: &[(&'static str, String)]) -> String {
    if pairs.is_empty() {
        return String::new();
    }
    let encoded: Vec<String> = pairs
        .iter()
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
        .collect();
    format!("?{}", encoded.join("&"))
}

#[cfg(test)]
mod tests {
    use super::build_query;

    #[test]
    fn empty_pairs_give_empty_query() {
        assert_eq!(build_query(&[]), "");
    }

    #[test]
    fn pairs_are_joined_and_encoded() {
        let pairs = vec![
            ("type", "error".to_string()),
            ("input", "/data/in file".to_string()),
        ];
        assert_eq!(build_query(&pairs), "?type=error&input=%2Fdata%2Fin%20file");
    }
}

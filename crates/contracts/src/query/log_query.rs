use serde::{Deserialize, Serialize};

use crate::domain::log_entry::aggregate::{LogEntry, LogLevel};

/// Фильтр по типу записи в панели фильтров
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LevelFilter {
    #[default]
    All,
    Level(LogLevel),
}

impl LevelFilter {
    pub fn as_code(&self) -> &'static str {
        match self {
            LevelFilter::All => "all",
            LevelFilter::Level(level) => level.as_str(),
        }
    }

    /// Неизвестный код трактуется как "all"
    pub fn from_code(code: &str) -> Self {
        LogLevel::from_code(code)
            .map(LevelFilter::Level)
            .unwrap_or(LevelFilter::All)
    }
}

/// Фильтр по флагу успешности
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SuccessFilter {
    #[default]
    All,
    Success,
    Error,
}

impl SuccessFilter {
    pub fn as_code(&self) -> &'static str {
        match self {
            SuccessFilter::All => "all",
            SuccessFilter::Success => "success",
            SuccessFilter::Error => "error",
        }
    }

    pub fn from_code(code: &str) -> Self {
        match code {
            "success" => SuccessFilter::Success,
            "error" => SuccessFilter::Error,
            _ => SuccessFilter::All,
        }
    }

    /// Значение параметра запроса: "1" — успешные, "0" — неуспешные
    fn query_value(&self) -> Option<&'static str> {
        match self {
            SuccessFilter::All => None,
            SuccessFilter::Success => Some("1"),
            SuccessFilter::Error => Some("0"),
        }
    }
}

/// Состояние панели фильтров. Живёт только на клиенте и никуда
/// не сохраняется; размеры держатся строками, как их вводят в форме.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LogFilter {
    pub datetime: String,
    pub level: LevelFilter,
    pub input: String,
    pub output: String,
    pub min_size: String,
    pub max_size: String,
    pub success: SuccessFilter,
}

impl LogFilter {
    /// Переводит состояние фильтров в пары параметров запроса.
    ///
    /// Ключ попадает в запрос только когда поле активно: строковые
    /// поля — непустые, выпадающие списки — не "all". `success`
    /// кодируется как "1"/"0", размеры уходят как `min_size`/`max_size`.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if !self.datetime.is_empty() {
            pairs.push(("datetime", self.datetime.clone()));
        }
        if let LevelFilter::Level(level) = self.level {
            pairs.push(("type", level.as_str().to_string()));
        }
        if !self.input.is_empty() {
            pairs.push(("input", self.input.clone()));
        }
        if !self.output.is_empty() {
            pairs.push(("output", self.output.clone()));
        }
        if !self.min_size.is_empty() {
            pairs.push(("min_size", self.min_size.clone()));
        }
        if !self.max_size.is_empty() {
            pairs.push(("max_size", self.max_size.clone()));
        }
        if let Some(value) = self.success.query_value() {
            pairs.push(("success", value.to_string()));
        }
        pairs
    }
}

/// Параметры строки запроса `GET /api/logs`, как их видит сервер.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogQuery {
    pub datetime: Option<String>,
    #[serde(rename = "type")]
    pub level: Option<String>,
    pub input: Option<String>,
    pub output: Option<String>,
    pub min_size: Option<u64>,
    pub max_size: Option<u64>,
    pub success: Option<String>,
    pub limit: Option<u64>,
    pub sort: Option<String>,
}

/// Канонический порядок "последних" записей: по убыванию `datetime`,
/// не больше `limit` штук.
///
/// Применяется к ответу сервера независимо от того, отсортировал ли
/// он выборку сам: сервер, игнорирующий `sort`/`limit`, не ломает
/// сводку на главной странице.
pub fn most_recent(mut entries: Vec<LogEntry>, limit: usize) -> Vec<LogEntry> {
    entries.sort_by(|a, b| b.datetime.cmp(&a.datetime));
    entries.truncate(limit);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::log_entry::aggregate::LogEntryId;
    use std::collections::HashMap;

    fn entry(ts: &str) -> LogEntry {
        LogEntry {
            id: LogEntryId::new_v4(),
            datetime: ts.parse().unwrap(),
            level: LogLevel::Info,
            input: "/data/in/a.csv".into(),
            output: "/data/out/a.csv".into(),
            info: "обработка завершена".into(),
            size: 10,
            check: true,
        }
    }

    fn as_map(filter: &LogFilter) -> HashMap<&'static str, String> {
        filter.to_query_pairs().into_iter().collect()
    }

    #[test]
    fn default_filter_maps_to_empty_query() {
        assert!(LogFilter::default().to_query_pairs().is_empty());
    }

    #[test]
    fn key_present_iff_field_is_active() {
        let filter = LogFilter {
            level: LevelFilter::All,
            success: SuccessFilter::Success,
            min_size: "10".into(),
            max_size: String::new(),
            ..Default::default()
        };
        let map = as_map(&filter);
        assert_eq!(map.len(), 2);
        assert_eq!(map["success"], "1");
        assert_eq!(map["min_size"], "10");
    }

    #[test]
    fn success_error_translates_to_zero() {
        let filter = LogFilter {
            success: SuccessFilter::Error,
            ..Default::default()
        };
        assert_eq!(as_map(&filter)["success"], "0");
    }

    #[test]
    fn string_fields_pass_through_when_non_empty() {
        let filter = LogFilter {
            datetime: "2026-08-07".into(),
            level: LevelFilter::Level(LogLevel::Error),
            input: "report".into(),
            output: "/data/out".into(),
            ..Default::default()
        };
        let map = as_map(&filter);
        assert_eq!(map["datetime"], "2026-08-07");
        assert_eq!(map["type"], "error");
        assert_eq!(map["input"], "report");
        assert_eq!(map["output"], "/data/out");
        assert!(!map.contains_key("success"));
    }

    #[test]
    fn most_recent_sorts_descending_and_truncates() {
        let entries = vec![
            entry("2026-08-05T09:00:00Z"),
            entry("2026-08-07T12:30:00Z"),
            entry("2026-08-06T23:59:59Z"),
            entry("2026-08-01T00:00:00Z"),
            entry("2026-08-07T08:00:00Z"),
        ];
        let recent = most_recent(entries, 4);
        assert_eq!(recent.len(), 4);
        for pair in recent.windows(2) {
            assert!(pair[0].datetime >= pair[1].datetime);
        }
        assert_eq!(
            recent[0].datetime,
            "2026-08-07T12:30:00Z".parse::<chrono::DateTime<chrono::Utc>>().unwrap()
        );
    }

    #[test]
    fn most_recent_keeps_short_lists_whole() {
        let entries = vec![entry("2026-08-05T09:00:00Z"), entry("2026-08-06T09:00:00Z")];
        assert_eq!(most_recent(entries, 4).len(), 2);
    }
}

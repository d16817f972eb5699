use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LogEntryId(pub Uuid);

impl LogEntryId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }

    pub fn as_string(&self) -> String {
        self.0.to_string()
    }

    pub fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(LogEntryId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Level
// ============================================================================

/// Тип записи журнала обработки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Info,
    Error,
    Warning,
}

impl LogLevel {
    /// Код уровня, он же значение поля `type` на проводе
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Info => "info",
            LogLevel::Error => "error",
            LogLevel::Warning => "warning",
        }
    }

    /// Человекочитаемое название для форм и списков
    pub fn display_name(&self) -> &'static str {
        match self {
            LogLevel::Info => "Информация",
            LogLevel::Error => "Ошибка",
            LogLevel::Warning => "Предупреждение",
        }
    }

    /// Все уровни, в порядке показа в выпадающих списках
    pub fn all() -> Vec<LogLevel> {
        vec![LogLevel::Info, LogLevel::Error, LogLevel::Warning]
    }

    /// Парсинг из кода
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "info" => Some(LogLevel::Info),
            "error" => Some(LogLevel::Error),
            "warning" => Some(LogLevel::Warning),
            _ => None,
        }
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Одна запись журнала: результат обработки одного файла.
///
/// Запись неизменяема после создания, единственная операция над ней
/// после этого — удаление. `id` и `datetime` назначает сервер.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: LogEntryId,
    pub datetime: DateTime<Utc>,
    #[serde(rename = "type")]
    pub level: LogLevel,
    pub input: String,
    pub output: String,
    pub info: String,
    pub size: u64,
    pub check: bool,
}

impl LogEntry {
    pub fn to_string_id(&self) -> String {
        self.id.as_string()
    }
}

// ============================================================================
// DTO
// ============================================================================

/// Данные формы добавления записи. Без `id` и `datetime`: их выдаёт сервер.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewLogEntry {
    #[serde(rename = "type")]
    pub level: LogLevel,
    pub input: String,
    pub output: String,
    pub info: String,
    pub size: u64,
    pub check: bool,
}

impl Default for NewLogEntry {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            input: String::new(),
            output: String::new(),
            info: String::new(),
            size: 0,
            check: true,
        }
    }
}

impl NewLogEntry {
    pub fn validate(&self) -> Result<(), String> {
        if self.input.trim().is_empty() {
            return Err("Путь к входному файлу не может быть пустым".into());
        }
        if self.output.trim().is_empty() {
            return Err("Путь к выходному файлу не может быть пустым".into());
        }
        if self.info.trim().is_empty() {
            return Err("Описание операции не может быть пустым".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> NewLogEntry {
        NewLogEntry {
            level: LogLevel::Info,
            input: "/data/in/report.csv".into(),
            output: "/data/out/report.csv".into(),
            info: "обработка завершена".into(),
            size: 100,
            check: true,
        }
    }

    #[test]
    fn validate_accepts_filled_form() {
        assert!(filled().validate().is_ok());
    }

    #[test]
    fn validate_rejects_blank_required_fields() {
        let mut dto = filled();
        dto.input = "   ".into();
        assert!(dto.validate().is_err());

        let mut dto = filled();
        dto.output = String::new();
        assert!(dto.validate().is_err());

        let mut dto = filled();
        dto.info = String::new();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn level_uses_type_on_the_wire() {
        let mut dto = filled();
        dto.level = LogLevel::Warning;
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["type"], "warning");
        assert!(json.get("level").is_none());
    }

    #[test]
    fn level_round_trips_through_code() {
        for level in LogLevel::all() {
            assert_eq!(LogLevel::from_code(level.as_str()), Some(level));
        }
        assert_eq!(LogLevel::from_code("debug"), None);
    }
}

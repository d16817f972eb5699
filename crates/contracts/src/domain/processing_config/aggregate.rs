use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProcessingConfigId(pub Uuid);

impl ProcessingConfigId {
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
            .map(ProcessingConfigId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Сохранённая конфигурация обработки: пара путей и список аргументов.
///
/// Порядок аргументов значим и сохраняется при любом цикле
/// сохранения и чтения; значения внутри одной конфигурации уникальны.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessingConfig {
    pub id: ProcessingConfigId,
    pub input: String,
    pub output: String,
    pub args: Vec<String>,
}

impl ProcessingConfig {
    pub fn to_string_id(&self) -> String {
        self.id.as_string()
    }
}

// ============================================================================
// DTO
// ============================================================================

/// Данные формы добавления/редактирования. `id` задан при редактировании.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProcessingConfigDto {
    pub id: Option<String>,
    pub input: String,
    pub output: String,
    #[serde(default)]
    pub args: Vec<String>,
}

impl ProcessingConfigDto {
    pub fn from_entity(config: &ProcessingConfig) -> Self {
        Self {
            id: Some(config.to_string_id()),
            input: config.input.clone(),
            output: config.output.clone(),
            args: config.args.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.input.trim().is_empty() {
            return Err("Путь к входной папке не может быть пустым".into());
        }
        if self.output.trim().is_empty() {
            return Err("Путь к выходной папке не может быть пустым".into());
        }
        Ok(())
    }

    /// Добавляет аргумент в конец списка.
    ///
    /// Значение обрезается по краям; пустые и уже присутствующие
    /// значения отклоняются. Возвращает true, если список изменился.
    pub fn add_arg(&mut self, raw: &str) -> bool {
        let value = raw.trim();
        if value.is_empty() || self.args.iter().any(|a| a == value) {
            return false;
        }
        self.args.push(value.to_string());
        true
    }

    /// Удаляет аргумент по позиции; порядок остальных не меняется.
    pub fn remove_arg(&mut self, index: usize) {
        if index < self.args.len() {
            self.args.remove(index);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_arg_trims_and_appends() {
        let mut dto = ProcessingConfigDto::default();
        assert!(dto.add_arg("  -v "));
        assert!(dto.add_arg("--fast"));
        assert_eq!(dto.args, vec!["-v", "--fast"]);
    }

    #[test]
    fn add_arg_rejects_blank_and_duplicate() {
        let mut dto = ProcessingConfigDto::default();
        assert!(!dto.add_arg("   "));
        assert!(dto.add_arg("-v"));
        assert!(!dto.add_arg("-v"));
        assert!(!dto.add_arg(" -v "));
        assert_eq!(dto.args, vec!["-v"]);
    }

    #[test]
    fn remove_arg_keeps_order_of_the_rest() {
        let mut dto = ProcessingConfigDto::default();
        dto.add_arg("-a");
        dto.add_arg("-b");
        dto.add_arg("-c");
        dto.remove_arg(1);
        assert_eq!(dto.args, vec!["-a", "-c"]);

        // Позиция за концом списка ничего не трогает
        dto.remove_arg(10);
        assert_eq!(dto.args, vec!["-a", "-c"]);
    }

    #[test]
    fn order_survives_add_then_remove_cycle() {
        let mut dto = ProcessingConfigDto::default();
        dto.add_arg("--in=csv");
        dto.add_arg("--out=json");
        dto.add_arg("--strict");
        dto.remove_arg(2);
        dto.add_arg("--trace");
        assert_eq!(dto.args, vec!["--in=csv", "--out=json", "--trace"]);
    }

    #[test]
    fn validate_requires_both_paths() {
        let mut dto = ProcessingConfigDto {
            input: "/data/in".into(),
            output: "/data/out".into(),
            ..Default::default()
        };
        assert!(dto.validate().is_ok());

        dto.output = " ".into();
        assert!(dto.validate().is_err());
    }
}

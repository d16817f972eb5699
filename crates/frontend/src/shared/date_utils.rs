//! Форматирование дат и размеров для отображения.

use chrono::{DateTime, Utc};

/// "2026-03-15T14:02:26Z" -> "15.03.2026 14:02:26"
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.format("%d.%m.%Y %H:%M:%S").to_string()
}

/// Размер в байтах с разделителями триад: 1234567 -> "1 234 567"
pub fn format_size(size: u64) -> String {
    let s = size.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(' ');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        let dt: DateTime<Utc> = "2026-03-15T14:02:26Z".parse().unwrap();
        assert_eq!(format_datetime(&dt), "15.03.2026 14:02:26");
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0");
        assert_eq!(format_size(999), "999");
        assert_eq!(format_size(1000), "1 000");
        assert_eq!(format_size(1234567), "1 234 567");
    }
}

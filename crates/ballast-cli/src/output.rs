// crates/ballast-cli/src/output.rs
//
// Output formatting utilities for the Ballast CLI.
// Supports table and JSON output modes.

use rust_decimal::Decimal;
use serde::Serialize;
use tabled::{Table, Tabled};

/// Output format for CLI commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputFormat {
    /// Pretty-printed table output (default).
    Table,
    /// JSON output for machine consumption.
    Json,
}

/// One indicator value in a table.
#[derive(Debug, Tabled)]
pub struct IndicatorRow {
    #[tabled(rename = "Indicator")]
    pub indicator: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

impl IndicatorRow {
    pub fn new(indicator: &str, value: Option<Decimal>) -> Self {
        Self {
            indicator: indicator.to_string(),
            value: format_decimal(value),
        }
    }
}

/// Render a decimal without trailing zeros; undefined values show as "undefined".
pub fn format_decimal(value: Option<Decimal>) -> String {
    match value {
        Some(v) => v.normalize().to_string(),
        None => "undefined".to_string(),
    }
}

/// Format a slice of Tabled items as a table string.
pub fn format_table<T: Tabled>(data: &[T]) -> String {
    Table::new(data).to_string()
}

/// Format a serializable value as a pretty-printed JSON string.
pub fn format_json<T: Serialize>(data: &T) -> String {
    serde_json::to_string_pretty(data).unwrap_or_else(|e| format!("JSON serialization error: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_decimal() {
        assert_eq!(format_decimal(Some(Decimal::new(35050, 2))), "350.5");
        assert_eq!(format_decimal(Some(Decimal::new(1000, 1))), "100");
        assert_eq!(format_decimal(None), "undefined");
    }

    #[test]
    fn test_format_table_contains_rows() {
        let rows = vec![IndicatorRow::new("tax", Some(Decimal::from(12)))];
        let table = format_table(&rows);
        assert!(table.contains("Indicator"));
        assert!(table.contains("tax"));
        assert!(table.contains("12"));
    }
}

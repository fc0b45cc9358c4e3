//! Output formatting for CLI commands.

use colored::Colorize;
use serde::Serialize;
use tabled::{Table, Tabled};

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable table format.
    #[default]
    Table,
    /// JSON format.
    Json,
}

impl OutputFormat {
    /// Parse a format name (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "table" => Some(Self::Table),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Print data in the specified format.
pub fn print_output<T: Serialize + Tabled>(data: &[T], format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            if data.is_empty() {
                println!("{}", "No items found.".dimmed());
            } else {
                println!("{}", Table::new(data));
            }
        }
        OutputFormat::Json => println!("{}", format_json(data, "[]")),
    }
}

/// Print a single item in the specified format.
pub fn print_single<T: Serialize + Tabled>(data: &T, format: OutputFormat) {
    match format {
        OutputFormat::Table => println!("{}", Table::new(std::iter::once(data))),
        OutputFormat::Json => println!("{}", format_json(data, "{}")),
    }
}

/// Print a bare value: the value itself for tables, a JSON object otherwise.
pub fn print_value(key: &str, value: &str, format: OutputFormat) {
    match format {
        OutputFormat::Table => println!("{}", value),
        OutputFormat::Json => {
            let json = format_json(&serde_json::json!({ key: value }), "{}");
            println!("{}", json);
        }
    }
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", "Success:".green().bold(), message);
}

fn format_json<T: Serialize + ?Sized>(data: &T, fallback: &str) -> String {
    serde_json::to_string_pretty(data).unwrap_or_else(|_| fallback.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize, Tabled)]
    struct Row {
        kind: &'static str,
    }

    #[test]
    fn test_parse_format() {
        assert_eq!(OutputFormat::parse("json"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::parse("TABLE"), Some(OutputFormat::Table));
        assert_eq!(OutputFormat::parse("yaml"), None);
    }

    #[test]
    fn test_format_json() {
        let rows = [Row { kind: "Pod" }];
        let json = format_json(&rows[..], "[]");
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value, serde_json::json!([{ "kind": "Pod" }]));
    }
}

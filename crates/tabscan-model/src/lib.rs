//! Data model shared by the tabscan crates.
//!
//! The parser produces a [`Table`], the analyzer turns it into one
//! [`ColumnStats`] per column, and the renderers consume both.

pub mod options;
pub mod stats;
pub mod table;

pub use options::{AnalyzeOptions, DEFAULT_MAX_ROWS, DEFAULT_TOP_VALUES, ParseOptions, Settings};
pub use stats::{ColumnStats, ColumnType, TopValue};
pub use table::{Table, column_keys, synthetic_header};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_drive_parse_options() {
        let settings = Settings::default();
        let options = settings.parse_options();
        assert_eq!(options.max_rows, Some(1000));
        assert!(options.has_headers.is_none());
        assert!(options.delimiter.is_none());
    }

    #[test]
    fn stats_serialize_with_lowercase_type() {
        let stats = ColumnStats {
            column_type: ColumnType::Decimal,
            count: 2,
            non_empty_count: 2,
            distinct_count: 2,
            null_count: 0,
            min: Some("1".to_string()),
            max: Some("2.5".to_string()),
            sum: Some(3.5),
            average: Some(1.75),
            top_values: vec![TopValue::new("1", 1), TopValue::new("2.5", 1)],
        };
        let json = serde_json::to_value(&stats).expect("serialize stats");
        assert_eq!(json["type"], "decimal");
        assert_eq!(json["topValues"][0]["value"], "1");
    }
}

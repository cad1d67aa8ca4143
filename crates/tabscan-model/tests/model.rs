//! Tests for tabscan-model types.

use tabscan_model::{
    AnalyzeOptions, ColumnStats, ColumnType, ParseOptions, Settings, Table, TopValue,
};

#[test]
fn table_serializes_camel_case() {
    let table = Table {
        headers: vec!["name".to_string()],
        rows: vec![vec!["Alice".to_string()]],
        delimiter: ';',
        has_headers: true,
    };
    let json = serde_json::to_string(&table).expect("serialize table");
    assert!(json.contains("\"hasHeaders\":true"));
    let round: Table = serde_json::from_str(&json).expect("deserialize table");
    assert_eq!(round, table);
}

#[test]
fn empty_table_has_no_headers() {
    let table = Table::empty('\t');
    assert!(table.is_empty());
    assert!(!table.has_headers);
    assert_eq!(table.delimiter, '\t');
    assert_eq!(table.column_count(), 0);
}

#[test]
fn settings_fill_missing_fields_with_defaults() {
    let settings: Settings = serde_json::from_str(r#"{"max_rows": 50}"#).expect("parse settings");
    assert_eq!(settings.max_rows, 50);
    assert_eq!(settings.top_values_limit, 20);
    assert_eq!(
        settings.analyze_options(),
        AnalyzeOptions {
            top_values_limit: 20
        }
    );
}

#[test]
fn parse_options_builder() {
    let options = ParseOptions::new()
        .with_delimiter('|')
        .with_has_headers(false)
        .with_max_rows(3);
    assert_eq!(options.delimiter, Some('|'));
    assert_eq!(options.has_headers, Some(false));
    assert_eq!(options.max_rows, Some(3));
}

#[test]
fn column_stats_round_trip() {
    let stats = ColumnStats {
        column_type: ColumnType::Mixed,
        count: 3,
        non_empty_count: 3,
        distinct_count: 3,
        null_count: 0,
        min: Some("1".to_string()),
        max: Some("abc".to_string()),
        sum: None,
        average: None,
        top_values: vec![TopValue::new("1", 1)],
    };
    let json = serde_json::to_string(&stats).expect("serialize");
    let round: ColumnStats = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(round, stats);
    assert_eq!(round.column_type.to_string(), "mixed");
}

//! Integration tests for the `view` and `stats` renderers.

use std::io::Write;

use clap::ColorChoice;
use insta::assert_snapshot;
use tabscan_analyze::analyze;
use tabscan_cli::report::{ViewFormat, render_stats, render_view};
use tabscan_ingest::read_table;
use tabscan_model::{ParseOptions, Table};
use tempfile::NamedTempFile;

fn load(content: &[u8]) -> Table {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content).unwrap();
    read_table(file.path(), &ParseOptions::default())
        .unwrap()
        .table
}

#[test]
fn view_markdown_from_semicolon_file() {
    let table = load(b"city;population\nBerlin;3645000\nMunich;1472000\n");
    let rendered = render_view(&table, ViewFormat::Markdown, "data", ColorChoice::Never).unwrap();
    assert_snapshot!(rendered, @r"
    | city | population |
    | --- | --- |
    | Berlin | 3645000 |
    | Munich | 1472000 |
    ");
}

#[test]
fn view_sql_uses_table_name() {
    let table = load(b"id,name\n1,Ann\n");
    let rendered = render_view(&table, ViewFormat::Sql, "people", ColorChoice::Never).unwrap();
    assert_snapshot!(rendered, @r#"INSERT INTO "people" ("id", "name") VALUES ('1', 'Ann');"#);
}

#[test]
fn view_table_lists_every_cell() {
    let table = load(b"id,name\n1,Ann\n2,Bob\n");
    let rendered = render_view(&table, ViewFormat::Table, "data", ColorChoice::Never).unwrap();
    for expected in ["id", "name", "Ann", "Bob"] {
        assert!(rendered.contains(expected), "{expected} missing from\n{rendered}");
    }
}

#[test]
fn view_tsv_converts_delimiter() {
    let table = load(b"name,age\nAnn,30\n");
    let rendered = render_view(&table, ViewFormat::Tsv, "data", ColorChoice::Never).unwrap();
    assert_eq!(rendered, "name\tage\nAnn\t30\n");
}

#[test]
fn stats_table_shows_types_and_fill_rate() {
    let table = load(b"id,score,note\n1,2.5,\n2,3.5,late\n");
    let stats = analyze(&table);
    let rendered = render_stats(&table, &stats, false, ColorChoice::Never).unwrap();
    assert!(rendered.contains("integer"));
    assert!(rendered.contains("decimal"));
    assert!(rendered.contains("50.0%"));
    assert!(rendered.contains("(empty) (1)"));
}

#[test]
fn stats_json_is_keyed_by_header() {
    let table = load(b"id,score\n1,2.5\n2,3.5\n");
    let stats = analyze(&table);
    let rendered = render_stats(&table, &stats, true, ColorChoice::Never).unwrap();
    let id_at = rendered.find("\"id\"").unwrap();
    let score_at = rendered.find("\"score\"").unwrap();
    assert!(id_at < score_at);
    assert!(rendered.contains("\"average\": 3.0"));
}

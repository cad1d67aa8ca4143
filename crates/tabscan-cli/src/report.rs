//! Terminal and text rendering for the `view` and `stats` commands.

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use clap::{ColorChoice, ValueEnum};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table as TermTable};
use tabscan_analyze::format_number;
use tabscan_model::{ColumnStats, ColumnType, Table, column_keys};
use tabscan_output::{
    render_delimited, render_html, render_json, render_markdown, render_sql_inserts,
    render_stats_json,
};

/// Output formats for `view`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ViewFormat {
    /// Boxed terminal table.
    Table,
    Markdown,
    Html,
    Json,
    /// SQL `INSERT` statements.
    Sql,
    Csv,
    Tsv,
}

/// Renders the parsed rows in the requested format.
pub fn render_view(
    table: &Table,
    format: ViewFormat,
    table_name: &str,
    color: ColorChoice,
) -> Result<String> {
    let rendered = match format {
        ViewFormat::Table => rows_table(table, color).to_string(),
        ViewFormat::Markdown => render_markdown(table),
        ViewFormat::Html => render_html(table),
        ViewFormat::Json => render_json(table).context("render json")?,
        ViewFormat::Sql => render_sql_inserts(table, table_name),
        ViewFormat::Csv => render_delimited(table, ',').context("render csv")?,
        ViewFormat::Tsv => render_delimited(table, '\t').context("render tsv")?,
    };
    Ok(rendered)
}

/// Renders column statistics as a terminal table or as JSON.
pub fn render_stats(
    table: &Table,
    stats: &BTreeMap<String, ColumnStats>,
    json: bool,
    color: ColorChoice,
) -> Result<String> {
    if json {
        return render_stats_json(&table.headers, stats).context("render stats json");
    }
    Ok(stats_table(table, stats, color).to_string())
}

fn rows_table(table: &Table, color: ColorChoice) -> TermTable {
    let mut term = TermTable::new();
    apply_table_style(&mut term, color);
    term.set_header(table.headers.iter().map(|header| header_cell(header)));
    for row in &table.rows {
        term.add_row(row.iter().map(|value| {
            if value.is_empty() {
                dim_cell("")
            } else {
                Cell::new(value)
            }
        }));
    }
    term
}

fn stats_table(
    table: &Table,
    stats: &BTreeMap<String, ColumnStats>,
    color: ColorChoice,
) -> TermTable {
    let mut term = TermTable::new();
    apply_table_style(&mut term, color);
    term.set_header(vec![
        header_cell("Column"),
        header_cell("Type"),
        header_cell("Count"),
        header_cell("Filled"),
        header_cell("Distinct"),
        header_cell("Min"),
        header_cell("Max"),
        header_cell("Average"),
        header_cell("Top values"),
    ]);
    for key in column_keys(&table.headers) {
        let Some(column) = stats.get(&key) else {
            continue;
        };
        term.add_row(vec![
            Cell::new(&key).add_attribute(Attribute::Bold),
            type_cell(column.column_type),
            Cell::new(column.count),
            Cell::new(format!("{:.1}%", column.fill_rate())),
            Cell::new(column.distinct_count),
            optional_cell(column.min.as_deref()),
            optional_cell(column.max.as_deref()),
            optional_cell(column.average.map(format_number).as_deref()),
            Cell::new(top_values_summary(column)),
        ]);
    }
    for index in [2, 3, 4] {
        if let Some(column) = term.column_mut(index) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }
    term
}

fn top_values_summary(column: &ColumnStats) -> String {
    column
        .top_values
        .iter()
        .map(|top| {
            let value = if top.value.is_empty() {
                "(empty)"
            } else {
                top.value.as_str()
            };
            format!("{value} ({})", top.count)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn apply_table_style(table: &mut TermTable, color: ColorChoice) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    match color {
        ColorChoice::Always => {
            table.enforce_styling();
        }
        ColorChoice::Never => {
            table.force_no_tty();
        }
        ColorChoice::Auto => {}
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn type_cell(column_type: ColumnType) -> Cell {
    let color = match column_type {
        ColumnType::Empty => Color::DarkGrey,
        ColumnType::Boolean => Color::Magenta,
        ColumnType::Integer | ColumnType::Decimal => Color::Blue,
        ColumnType::Date => Color::Green,
        ColumnType::Text => Color::Reset,
        ColumnType::Mixed => Color::Yellow,
    };
    Cell::new(column_type).fg(color)
}

fn optional_cell(value: Option<&str>) -> Cell {
    match value {
        Some(value) => Cell::new(value),
        None => dim_cell("-"),
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabscan_model::TopValue;

    #[test]
    fn empty_top_value_is_labelled() {
        let column = ColumnStats {
            column_type: ColumnType::Text,
            count: 3,
            non_empty_count: 1,
            distinct_count: 1,
            null_count: 2,
            min: Some("a".to_string()),
            max: Some("a".to_string()),
            sum: None,
            average: None,
            top_values: vec![TopValue::new("", 2), TopValue::new("a", 1)],
        };
        assert_eq!(top_values_summary(&column), "(empty) (2)\na (1)");
    }
}

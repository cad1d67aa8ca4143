use tabscan_model::Table;

/// Double-quotes an SQL identifier, doubling embedded quotes.
pub fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Single-quotes an SQL string literal; empty values become `NULL`.
pub fn quote_literal(value: &str) -> String {
    if value.is_empty() {
        "NULL".to_string()
    } else {
        format!("'{}'", value.replace('\'', "''"))
    }
}

/// Renders one `INSERT INTO` statement per row, in row order.
pub fn render_sql_inserts(table: &Table, table_name: &str) -> String {
    if table.headers.is_empty() {
        return String::new();
    }
    let columns = table
        .headers
        .iter()
        .map(|header| quote_identifier(header))
        .collect::<Vec<_>>()
        .join(", ");
    let target = quote_identifier(table_name);
    let mut out = String::new();
    for row in &table.rows {
        let values = row
            .iter()
            .map(|value| quote_literal(value))
            .collect::<Vec<_>>()
            .join(", ");
        out.push_str(&format!(
            "INSERT INTO {target} ({columns}) VALUES ({values});\n"
        ));
    }
    out
}

use tabscan_model::Table;

fn escape_cell(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('|', "\\|")
        .replace('\n', "<br>")
}

fn push_row<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>) {
    out.push('|');
    for cell in cells {
        out.push(' ');
        out.push_str(&escape_cell(cell));
        out.push_str(" |");
    }
    out.push('\n');
}

/// Renders a GitHub-flavored Markdown pipe table.
///
/// A table without columns renders as an empty string.
pub fn render_markdown(table: &Table) -> String {
    if table.headers.is_empty() {
        return String::new();
    }
    let mut out = String::new();
    push_row(&mut out, table.headers.iter().map(String::as_str));
    push_row(&mut out, table.headers.iter().map(|_| "---"));
    for row in &table.rows {
        push_row(&mut out, row.iter().map(String::as_str));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separator_is_not_escaped() {
        let table = Table {
            headers: vec!["a".to_string()],
            rows: vec![],
            delimiter: ',',
            has_headers: true,
        };
        assert_eq!(render_markdown(&table), "| a |\n| --- |\n");
    }

    #[test]
    fn pipes_and_newlines_are_escaped() {
        assert_eq!(escape_cell("a|b\nc"), "a\\|b<br>c");
        assert_eq!(escape_cell("back\\slash"), "back\\\\slash");
    }

    #[test]
    fn no_columns_renders_nothing() {
        assert_eq!(render_markdown(&Table::empty(',')), "");
    }
}

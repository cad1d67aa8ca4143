//! Text-to-table parsing.

use tabscan_model::{ParseOptions, Table, synthetic_header};
use tracing::{debug, warn};

use crate::delimiter::detect_delimiter;
use crate::header::{HEADER_PROBE_ROWS, detect_header};
use crate::scanner::scan_records;
use crate::text::normalize_line_endings;

/// Delimiter used when detection finds no better candidate.
pub const DEFAULT_DELIMITER: char = ',';

/// Column count above which a warning is logged.
const WIDE_TABLE_COLUMNS: usize = 500;

/// Records to scan so that `max_rows` data rows survive header handling.
///
/// When the header row must be detected, at least the probe window is scanned
/// so the decision does not depend on `max_rows`.
fn scan_limit(max_rows: usize, has_headers: Option<bool>) -> usize {
    match has_headers {
        Some(false) => max_rows.max(1),
        Some(true) => max_rows.saturating_add(1),
        None => max_rows.saturating_add(1).max(HEADER_PROBE_ROWS + 1),
    }
}

/// Parses delimited text into a rectangular [`Table`].
///
/// Line endings are normalized first. Options left unset are detected:
/// the delimiter by [`detect_delimiter`](crate::detect_delimiter), the header
/// row by [`detect_header`](crate::detect_header). Parsing never fails; empty
/// input yields an empty table.
pub fn parse(text: &str, options: &ParseOptions) -> Table {
    let text = normalize_line_endings(text);
    let delimiter = options
        .delimiter
        .unwrap_or_else(|| detect_delimiter(&text));
    let limit = options
        .max_rows
        .map(|max_rows| scan_limit(max_rows, options.has_headers));

    let mut records = scan_records(&text, delimiter, limit);
    if records.is_empty() {
        debug!("input has no records");
        return Table::empty(delimiter);
    }

    let has_headers = options
        .has_headers
        .unwrap_or_else(|| detect_header(&records[0], &records[1..]));
    let header_record = if has_headers {
        Some(records.remove(0))
    } else {
        None
    };
    // Width comes from every scanned record, so a small max_rows keeps the
    // column shape.
    let width = records
        .iter()
        .chain(header_record.iter())
        .map(Vec::len)
        .max()
        .unwrap_or(0);
    if let Some(max_rows) = options.max_rows {
        records.truncate(max_rows);
    }
    let headers = match header_record {
        Some(mut names) => {
            let named = names.len();
            names.extend((named + 1..=width).map(synthetic_header));
            names
        }
        None => (1..=width).map(synthetic_header).collect(),
    };
    for record in &mut records {
        record.resize(width, String::new());
    }

    if width > WIDE_TABLE_COLUMNS {
        warn!(columns = width, "table has more than 500 columns");
    }
    debug!(
        delimiter = ?delimiter,
        has_headers,
        columns = width,
        rows = records.len(),
        "parsed table"
    );

    Table {
        headers,
        rows: records,
        delimiter,
        has_headers,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_limit_reserves_header_probe() {
        assert_eq!(scan_limit(1, None), 6);
        assert_eq!(scan_limit(100, None), 101);
        assert_eq!(scan_limit(3, Some(true)), 4);
        assert_eq!(scan_limit(3, Some(false)), 3);
        assert_eq!(scan_limit(0, Some(false)), 1);
        assert_eq!(scan_limit(usize::MAX, Some(true)), usize::MAX);
    }

    #[test]
    fn wider_data_rows_extend_headers() {
        let table = parse("a,b\n1,2,3\n", &ParseOptions::default());
        assert!(table.has_headers);
        assert_eq!(table.headers, vec!["a", "b", "Column 3"]);
        assert_eq!(table.rows, vec![vec!["1", "2", "3"]]);
    }

    #[test]
    fn synthetic_headers_cover_widest_record() {
        let table = parse("x,y\nz\n", &ParseOptions::new().with_has_headers(false));
        assert_eq!(table.headers, vec!["Column 1", "Column 2"]);
        assert_eq!(table.rows, vec![vec!["x", "y"], vec!["z", ""]]);
    }

    #[test]
    fn zero_max_rows_keeps_columns() {
        let options = ParseOptions::new()
            .with_has_headers(false)
            .with_max_rows(0);
        let table = parse("a,b\nc,d", &options);
        assert_eq!(table.headers, vec!["Column 1", "Column 2"]);
        assert!(table.rows.is_empty());
    }

    #[test]
    fn scanning_stops_at_max_rows() {
        let options = ParseOptions::new()
            .with_has_headers(false)
            .with_max_rows(1);
        let table = parse("a\nb,c,d", &options);
        assert_eq!(table.headers, vec!["Column 1"]);
        assert_eq!(table.rows, vec![vec!["a"]]);
    }

    #[test]
    fn empty_input_uses_supplied_delimiter() {
        let table = parse("", &ParseOptions::new().with_delimiter('\t'));
        assert_eq!(table, Table::empty('\t'));
    }

    #[test]
    fn blank_only_input_is_empty() {
        let table = parse("\n\r\n , \n", &ParseOptions::default());
        assert!(table.headers.is_empty());
        assert!(table.rows.is_empty());
        assert_eq!(table.delimiter, ',');
    }
}

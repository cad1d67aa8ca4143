use csv::WriterBuilder;
use tabscan_model::Table;

use crate::error::{OutputError, Result};

/// Renders the table as delimited text (CSV, TSV, ...).
///
/// The header row is written only when the table consumed one, so parsing
/// the output with the same delimiter and header setting gives back the same
/// table.
pub fn render_delimited(table: &Table, delimiter: char) -> Result<String> {
    let byte = u8::try_from(delimiter)
        .ok()
        .filter(u8::is_ascii)
        .ok_or(OutputError::Delimiter(delimiter))?;
    let mut writer = WriterBuilder::new()
        .delimiter(byte)
        .flexible(true)
        .from_writer(Vec::new());
    if table.has_headers {
        writer.write_record(&table.headers)?;
    }
    for row in &table.rows {
        writer.write_record(row)?;
    }
    let bytes = writer.into_inner().map_err(|err| OutputError::Flush {
        message: err.error().to_string(),
    })?;
    Ok(String::from_utf8(bytes)?)
}

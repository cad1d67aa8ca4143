use std::collections::BTreeMap;

use serde_json::{Map, Value};
use tabscan_model::{ColumnStats, Table, column_keys};

use crate::error::Result;

/// Renders rows as a pretty-printed JSON array of objects.
///
/// Object keys follow header order; repeated header names are made unique
/// with [`column_keys`].
pub fn render_json(table: &Table) -> Result<String> {
    let keys = column_keys(&table.headers);
    let records: Vec<Value> = table
        .rows
        .iter()
        .map(|row| {
            let object: Map<String, Value> = keys
                .iter()
                .zip(row)
                .map(|(key, value)| (key.clone(), Value::String(value.clone())))
                .collect();
            Value::Object(object)
        })
        .collect();
    Ok(serde_json::to_string_pretty(&Value::Array(records))?)
}

/// Renders column statistics as a JSON object in header order.
///
/// Each entry also carries the derived `fillRate`.
pub fn render_stats_json(
    headers: &[String],
    stats: &BTreeMap<String, ColumnStats>,
) -> Result<String> {
    let mut columns = Map::new();
    for key in column_keys(headers) {
        let Some(column) = stats.get(&key) else {
            continue;
        };
        let mut value = serde_json::to_value(column)?;
        if let Value::Object(fields) = &mut value {
            fields.insert("fillRate".to_string(), Value::from(column.fill_rate()));
        }
        columns.insert(key, value);
    }
    Ok(serde_json::to_string_pretty(&Value::Object(columns))?)
}

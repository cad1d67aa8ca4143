//! Column analysis for parsed tables.
//!
//! Each column gets a dominant [`ColumnType`] and a [`ColumnStats`] record.
//! Everything here is a pure function of its input, so columns of one table
//! or several tables can be analyzed concurrently.
//!
//! # Example
//!
//! ```
//! use tabscan_analyze::classify;
//! use tabscan_model::ColumnType;
//!
//! let stats = classify(["10", "20", "30"]);
//! assert_eq!(stats.column_type, ColumnType::Integer);
//! assert_eq!(stats.sum, Some(60.0));
//! assert_eq!(stats.max.as_deref(), Some("30"));
//! ```
//!
//! [`ColumnType`]: tabscan_model::ColumnType
//! [`ColumnStats`]: tabscan_model::ColumnStats

use std::collections::BTreeMap;

use tabscan_model::{AnalyzeOptions, ColumnStats, Table, column_keys};
use tracing::{debug, trace};

mod column;
mod frequency;
mod number;
mod value_type;

pub use column::{classify, classify_with};
pub use frequency::FrequencyTable;
pub use number::format_number;
pub use value_type::{
    ValueType, detect_value_type, is_boolean, is_date, is_integer, parse_decimal, parse_number,
};

/// Analyzes every column of `table` with default options.
pub fn analyze(table: &Table) -> BTreeMap<String, ColumnStats> {
    analyze_with(table, &AnalyzeOptions::default())
}

/// Analyzes every column of `table`, keyed by header name.
///
/// Keys come from [`column_keys`], so repeated header names stay distinct.
pub fn analyze_with(table: &Table, options: &AnalyzeOptions) -> BTreeMap<String, ColumnStats> {
    let stats: BTreeMap<String, ColumnStats> = column_keys(&table.headers)
        .into_iter()
        .enumerate()
        .map(|(idx, key)| {
            let column = classify_with(table.column(idx), options);
            trace!(
                column = %key,
                column_type = %column.column_type,
                distinct = column.distinct_count,
                "classified column"
            );
            (key, column)
        })
        .collect();
    debug!(
        columns = stats.len(),
        rows = table.row_count(),
        "analyzed table"
    );
    stats
}

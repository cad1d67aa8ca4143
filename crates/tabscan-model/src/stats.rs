//! Column statistics produced by the analyzer.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Dominant semantic type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    /// No non-empty values.
    Empty,
    Boolean,
    Integer,
    Decimal,
    Date,
    Text,
    /// Two or more incompatible value types; a data-quality signal.
    Mixed,
}

impl ColumnType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::Decimal => "decimal",
            Self::Date => "date",
            Self::Text => "text",
            Self::Mixed => "mixed",
        }
    }

    /// Returns true for the integer and decimal types.
    pub fn is_numeric(self) -> bool {
        matches!(self, Self::Integer | Self::Decimal)
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of a column's frequency ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopValue {
    pub value: String,
    pub count: usize,
}

impl TopValue {
    pub fn new(value: impl Into<String>, count: usize) -> Self {
        Self {
            value: value.into(),
            count,
        }
    }
}

/// Descriptive statistics for a single column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnStats {
    #[serde(rename = "type")]
    pub column_type: ColumnType,
    /// Total values, including empty ones.
    pub count: usize,
    pub non_empty_count: usize,
    /// Distinct trimmed non-empty values.
    pub distinct_count: usize,
    /// Empty or blank values.
    pub null_count: usize,
    /// Display-formatted for numeric columns, lexicographic otherwise.
    pub min: Option<String>,
    pub max: Option<String>,
    pub sum: Option<f64>,
    pub average: Option<f64>,
    /// Most frequent values, highest count first.
    pub top_values: Vec<TopValue>,
}

impl ColumnStats {
    /// Percentage of non-empty values, 0 for a column without values.
    pub fn fill_rate(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.non_empty_count as f64 / self.count as f64 * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(count: usize, non_empty_count: usize) -> ColumnStats {
        ColumnStats {
            column_type: ColumnType::Text,
            count,
            non_empty_count,
            distinct_count: non_empty_count,
            null_count: count - non_empty_count,
            min: None,
            max: None,
            sum: None,
            average: None,
            top_values: Vec::new(),
        }
    }

    #[test]
    fn fill_rate_is_percentage() {
        assert!((stats(4, 3).fill_rate() - 75.0).abs() < 1e-9);
    }

    #[test]
    fn fill_rate_without_values_is_zero() {
        assert_eq!(stats(0, 0).fill_rate(), 0.0);
    }

    #[test]
    fn only_integer_and_decimal_are_numeric() {
        assert!(ColumnType::Integer.is_numeric());
        assert!(ColumnType::Decimal.is_numeric());
        assert!(!ColumnType::Boolean.is_numeric());
        assert!(!ColumnType::Mixed.is_numeric());
    }
}

//! Column classification and statistics.

use std::collections::BTreeMap;

use tabscan_model::{AnalyzeOptions, ColumnStats, ColumnType};

use crate::frequency::FrequencyTable;
use crate::number::format_number;
use crate::value_type::{ValueType, detect_value_type, parse_number};

/// Running per-value type counts for one column.
#[derive(Debug, Default, Clone)]
struct TypeTally {
    counts: BTreeMap<ValueType, usize>,
    /// Boolean-typed values that are literally `0` or `1`.
    binary_booleans: usize,
}

impl TypeTally {
    fn add(&mut self, value_type: ValueType, value: &str) {
        if value_type == ValueType::Empty {
            return;
        }
        if value_type == ValueType::Boolean && matches!(value, "0" | "1") {
            self.binary_booleans += 1;
        }
        *self.counts.entry(value_type).or_insert(0) += 1;
    }

    fn count(&self, value_type: ValueType) -> usize {
        self.counts.get(&value_type).copied().unwrap_or(0)
    }

    /// Resolves the dominant column type.
    ///
    /// `0`/`1` match the boolean literals first; when every boolean in a
    /// column is one of those and the column also holds numbers, they are
    /// counted as integers instead.
    fn resolve(&self) -> ColumnType {
        let mut counts = self.counts.clone();
        let booleans = self.count(ValueType::Boolean);
        let has_numbers =
            self.count(ValueType::Integer) > 0 || self.count(ValueType::Decimal) > 0;
        if booleans > 0 && booleans == self.binary_booleans && has_numbers {
            counts.remove(&ValueType::Boolean);
            *counts.entry(ValueType::Integer).or_insert(0) += booleans;
        }

        let present: Vec<ValueType> = counts
            .into_iter()
            .filter(|&(_, count)| count > 0)
            .map(|(value_type, _)| value_type)
            .collect();
        match present.as_slice() {
            [] => ColumnType::Empty,
            [single] => column_type(*single),
            [ValueType::Integer, ValueType::Decimal] => ColumnType::Decimal,
            _ => ColumnType::Mixed,
        }
    }
}

fn column_type(value_type: ValueType) -> ColumnType {
    match value_type {
        ValueType::Empty => ColumnType::Empty,
        ValueType::Boolean => ColumnType::Boolean,
        ValueType::Integer => ColumnType::Integer,
        ValueType::Decimal => ColumnType::Decimal,
        ValueType::Date => ColumnType::Date,
        ValueType::Text => ColumnType::Text,
    }
}

#[derive(Debug, Default, Clone, Copy)]
struct NumericSummary {
    count: usize,
    sum: f64,
    min: f64,
    max: f64,
}

impl NumericSummary {
    fn add(&mut self, value: f64) {
        if self.count == 0 {
            self.min = value;
            self.max = value;
        } else {
            self.min = self.min.min(value);
            self.max = self.max.max(value);
        }
        self.count += 1;
        self.sum += value;
    }
}

#[derive(Debug, Default, Clone)]
struct LexicalRange {
    min: Option<String>,
    max: Option<String>,
}

impl LexicalRange {
    fn add(&mut self, value: &str) {
        if self.min.as_deref().is_none_or(|min| value < min) {
            self.min = Some(value.to_string());
        }
        if self.max.as_deref().is_none_or(|max| value > max) {
            self.max = Some(value.to_string());
        }
    }
}

/// Classifies one column with default options.
pub fn classify<I, S>(values: I) -> ColumnStats
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    classify_with(values, &AnalyzeOptions::default())
}

/// Infers a column's dominant type and computes its statistics.
///
/// A pure function of `values`. When every non-empty value parses as a
/// number, min/max are display-formatted numbers and sum/average are set,
/// whatever the resolved type; otherwise min/max are lexicographic bounds.
pub fn classify_with<I, S>(values: I, options: &AnalyzeOptions) -> ColumnStats
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut count = 0usize;
    let mut null_count = 0usize;
    let mut tally = TypeTally::default();
    let mut numbers = NumericSummary::default();
    let mut range = LexicalRange::default();
    let mut frequencies = FrequencyTable::new();

    for value in values {
        let trimmed = value.as_ref().trim();
        count += 1;
        frequencies.add(trimmed);
        let value_type = detect_value_type(trimmed);
        tally.add(value_type, trimmed);
        if value_type == ValueType::Empty {
            null_count += 1;
            continue;
        }
        range.add(trimmed);
        if let Some(number) = parse_number(trimmed) {
            numbers.add(number);
        }
    }

    let column_type = tally.resolve();
    let numeric = numbers.count > 0 && numbers.count == count - null_count;
    let (min, max, sum, average) = if numeric {
        (
            Some(format_number(numbers.min)),
            Some(format_number(numbers.max)),
            Some(numbers.sum),
            Some(numbers.sum / numbers.count as f64),
        )
    } else {
        (range.min, range.max, None, None)
    };

    ColumnStats {
        column_type,
        count,
        non_empty_count: count - null_count,
        distinct_count: frequencies.distinct_non_empty(),
        null_count,
        min,
        max,
        sum,
        average,
        top_values: frequencies.top(options.top_values_limit),
    }
}

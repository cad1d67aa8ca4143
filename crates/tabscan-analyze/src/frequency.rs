//! Order-stable value frequency counting.

use std::collections::HashMap;

use tabscan_model::TopValue;

/// Counts values while remembering first-insertion order.
///
/// Ranking sorts by count with a stable sort, so values with equal counts
/// keep the order in which they were first seen.
#[derive(Debug, Default, Clone)]
pub struct FrequencyTable {
    index: HashMap<String, usize>,
    entries: Vec<(String, usize)>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, value: &str) {
        match self.index.get(value) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.index.insert(value.to_string(), self.entries.len());
                self.entries.push((value.to_string(), 1));
            }
        }
    }

    pub fn count(&self, value: &str) -> usize {
        self.index
            .get(value)
            .map_or(0, |&slot| self.entries[slot].1)
    }

    /// Number of distinct keys other than the empty string.
    pub fn distinct_non_empty(&self) -> usize {
        self.entries
            .iter()
            .filter(|(value, _)| !value.is_empty())
            .count()
    }

    /// Highest counts first, at most `limit` entries.
    pub fn top(&self, limit: usize) -> Vec<TopValue> {
        let mut ranked: Vec<&(String, usize)> = self.entries.iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
            .into_iter()
            .take(limit)
            .map(|(value, count)| TopValue::new(value.clone(), *count))
            .collect()
    }
}

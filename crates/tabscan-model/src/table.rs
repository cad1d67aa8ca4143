use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

/// Result of parsing one delimited-text input.
///
/// Every row has exactly `headers.len()` fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub delimiter: char,
    /// Whether the first physical row was consumed as headers.
    pub has_headers: bool,
}

impl Table {
    /// Creates a table with no columns and no rows.
    pub fn empty(delimiter: char) -> Self {
        Self {
            headers: Vec::new(),
            rows: Vec::new(),
            delimiter,
            has_headers: false,
        }
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterates over the values of one column, top to bottom.
    pub fn column(&self, index: usize) -> impl Iterator<Item = &str> + '_ {
        self.rows
            .iter()
            .map(move |row| row.get(index).map(String::as_str).unwrap_or(""))
    }
}

/// Name used for generated headers, 1-based.
pub fn synthetic_header(position: usize) -> String {
    format!("Column {position}")
}

/// Builds one unique key per header, in header order.
///
/// Headers are not required to be unique, so a repeated name gets a
/// ` (n)` suffix for its n-th occurrence and a blank name falls back to
/// the synthetic `Column i` name.
pub fn column_keys(headers: &[String]) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut emitted: HashSet<String> = HashSet::with_capacity(headers.len());
    let mut keys = Vec::with_capacity(headers.len());
    for (idx, header) in headers.iter().enumerate() {
        let trimmed = header.trim();
        let base = if trimmed.is_empty() {
            synthetic_header(idx + 1)
        } else {
            trimmed.to_string()
        };
        let mut occurrence = seen.get(&base).copied().unwrap_or(0) + 1;
        let mut key = if occurrence == 1 {
            base.clone()
        } else {
            format!("{base} ({occurrence})")
        };
        // A literal "name (2)" header may already have claimed the suffixed key.
        while emitted.contains(&key) {
            occurrence += 1;
            key = format!("{base} ({occurrence})");
        }
        seen.insert(base, occurrence);
        emitted.insert(key.clone());
        keys.push(key);
    }
    keys
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| (*name).to_string()).collect()
    }

    #[test]
    fn unique_headers_are_kept() {
        assert_eq!(column_keys(&headers(&["a", "b"])), vec!["a", "b"]);
    }

    #[test]
    fn repeated_headers_get_suffix() {
        assert_eq!(
            column_keys(&headers(&["id", "id", "name", "id"])),
            vec!["id", "id (2)", "name", "id (3)"]
        );
    }

    #[test]
    fn blank_headers_use_position() {
        assert_eq!(
            column_keys(&headers(&["a", " ", "c"])),
            vec!["a", "Column 2", "c"]
        );
    }

    #[test]
    fn suffix_does_not_collide_with_literal_header() {
        assert_eq!(
            column_keys(&headers(&["x (2)", "x", "x"])),
            vec!["x (2)", "x", "x (3)"]
        );
    }

    #[test]
    fn many_repeated_headers_stay_unique() {
        let names = vec!["x".to_string(); 2000];
        let keys = column_keys(&names);
        assert_eq!(keys[0], "x");
        assert_eq!(keys[1999], "x (2000)");
        let unique: HashSet<&String> = keys.iter().collect();
        assert_eq!(unique.len(), 2000);
    }

    #[test]
    fn column_iterates_values() {
        let table = Table {
            headers: headers(&["a", "b"]),
            rows: vec![headers(&["1", "2"]), headers(&["3", "4"])],
            delimiter: ',',
            has_headers: true,
        };
        assert_eq!(table.column(1).collect::<Vec<_>>(), vec!["2", "4"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.column_count(), 2);
    }
}

//! Header-row detection.
//!
//! The first record is taken as headers when it looks like a row of names
//! (all present, none numeric, none overly long) and the data after it looks
//! like data (some numeric field within the next few records). A file with a
//! single record is read as headers only. Numeric-looking header names, such
//! as a row of years, are read as data.

/// Fields this long or longer are not treated as header names.
pub const MAX_HEADER_LEN: usize = 100;

/// Records after the first inspected for numeric fields.
pub(crate) const HEADER_PROBE_ROWS: usize = 5;

#[derive(Debug, Default, Clone, Copy)]
struct RowProfile {
    total: usize,
    non_empty: usize,
    numeric: usize,
    longest: usize,
}

impl RowProfile {
    fn is_header_like(self) -> bool {
        self.total > 0
            && self.non_empty == self.total
            && self.numeric == 0
            && self.longest < MAX_HEADER_LEN
    }

    fn has_numeric(self) -> bool {
        self.numeric > 0
    }
}

fn row_profile(row: &[String]) -> RowProfile {
    let mut profile = RowProfile {
        total: row.len(),
        ..RowProfile::default()
    };
    for cell in row {
        let trimmed = cell.trim();
        profile.longest = profile.longest.max(trimmed.chars().count());
        if trimmed.is_empty() {
            continue;
        }
        profile.non_empty += 1;
        if looks_numeric(trimmed) {
            profile.numeric += 1;
        }
    }
    profile
}

/// Returns true if `value` is a plain number (sign, digits, fraction, exponent).
///
/// Words such as `inf` or `NaN` are rejected even though `f64` parses them.
pub fn looks_numeric(value: &str) -> bool {
    let value = value.trim();
    value.chars().any(|ch| ch.is_ascii_digit())
        && value
            .chars()
            .all(|ch| ch.is_ascii_digit() || matches!(ch, '+' | '-' | '.' | 'e' | 'E'))
        && value.parse::<f64>().is_ok()
}

/// Decides whether `first` is a header row, given the records after it.
pub fn detect_header(first: &[String], following: &[Vec<String>]) -> bool {
    if !row_profile(first).is_header_like() {
        return false;
    }
    following.is_empty()
        || following
            .iter()
            .take(HEADER_PROBE_ROWS)
            .any(|row| row_profile(row).has_numeric())
}

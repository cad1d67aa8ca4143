//! Options controlling parsing and analysis.

use serde::{Deserialize, Serialize};

/// Default bound on data rows returned by the parser.
pub const DEFAULT_MAX_ROWS: usize = 1000;

/// Default length of a column's top-values list.
pub const DEFAULT_TOP_VALUES: usize = 20;

/// Caller overrides for the parser heuristics.
///
/// Any option left as `None` is detected from the input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseOptions {
    /// Upper bound on data rows (the header row does not count).
    pub max_rows: Option<usize>,
    /// Whether the first record holds column names.
    pub has_headers: Option<bool>,
    /// Field separator.
    pub delimiter: Option<char>,
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_max_rows(mut self, max_rows: usize) -> Self {
        self.max_rows = Some(max_rows);
        self
    }

    #[must_use]
    pub fn with_has_headers(mut self, has_headers: bool) -> Self {
        self.has_headers = Some(has_headers);
        self
    }

    #[must_use]
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = Some(delimiter);
        self
    }
}

/// Options for column analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeOptions {
    /// Maximum entries kept in each column's top-values list.
    pub top_values_limit: usize,
}

impl Default for AnalyzeOptions {
    fn default() -> Self {
        Self {
            top_values_limit: DEFAULT_TOP_VALUES,
        }
    }
}

/// User-configurable limits supplied by the host application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Row display limit, passed to the parser as `max_rows`.
    pub max_rows: usize,
    pub top_values_limit: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_rows: DEFAULT_MAX_ROWS,
            top_values_limit: DEFAULT_TOP_VALUES,
        }
    }
}

impl Settings {
    /// Parser options with detection left to the heuristics.
    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions::new().with_max_rows(self.max_rows)
    }

    pub fn analyze_options(&self) -> AnalyzeOptions {
        AnalyzeOptions {
            top_values_limit: self.top_values_limit,
        }
    }
}

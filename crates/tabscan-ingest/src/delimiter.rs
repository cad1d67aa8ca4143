//! Delimiter auto-detection.
//!
//! A heuristic, not a guarantee: each candidate is scored on how consistent
//! and how wide the quote-aware field counts of the first lines are.

use tracing::{debug, trace};

use crate::parser::DEFAULT_DELIMITER;
use crate::scanner::count_fields;

/// Candidates in tie-break order.
pub const CANDIDATE_DELIMITERS: [char; 4] = [',', '\t', ';', '|'];

/// Physical lines sampled for detection.
const SAMPLE_LINES: usize = 10;

const CONSISTENCY_WEIGHT: f64 = 0.7;
const BREADTH_WEIGHT: f64 = 0.3;
/// Field count at which breadth saturates.
const BREADTH_SATURATION: f64 = 10.0;

/// Scores one candidate from its per-line field counts.
///
/// Returns `None` when the candidate is disqualified (no lines, or the first
/// line has at most one field).
pub fn score_delimiter(field_counts: &[usize]) -> Option<f64> {
    let (&first, _) = field_counts.split_first()?;
    if first <= 1 {
        return None;
    }
    let expected = first as f64;
    let consistency = if field_counts.iter().all(|&count| count == first) {
        1.0
    } else {
        let deviation: f64 = field_counts
            .iter()
            .map(|&count| (count as f64 - expected).abs())
            .sum::<f64>()
            / field_counts.len() as f64;
        (1.0 - deviation / expected).max(0.0)
    };
    let breadth = (expected / BREADTH_SATURATION).min(1.0);
    Some(CONSISTENCY_WEIGHT * consistency + BREADTH_WEIGHT * breadth)
}

/// Picks the most plausible field delimiter for LF-normalized text.
///
/// Falls back to comma when no candidate splits the first line.
pub fn detect_delimiter(text: &str) -> char {
    let lines: Vec<&str> = text
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .take(SAMPLE_LINES)
        .collect();

    let mut best: Option<(char, f64)> = None;
    for candidate in CANDIDATE_DELIMITERS {
        let counts: Vec<usize> = lines
            .iter()
            .map(|line| count_fields(line, candidate))
            .collect();
        let Some(score) = score_delimiter(&counts) else {
            trace!(delimiter = ?candidate, "delimiter candidate disqualified");
            continue;
        };
        trace!(delimiter = ?candidate, score, "delimiter candidate scored");
        if best.is_none_or(|(_, top)| score > top) {
            best = Some((candidate, score));
        }
    }

    let delimiter = best.map_or(DEFAULT_DELIMITER, |(candidate, _)| candidate);
    debug!(delimiter = ?delimiter, sampled_lines = lines.len(), "detected delimiter");
    delimiter
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_field_first_line_is_disqualified() {
        assert_eq!(score_delimiter(&[1, 3, 3]), None);
        assert_eq!(score_delimiter(&[]), None);
    }

    #[test]
    fn consistent_counts_score_full_consistency() {
        let score = score_delimiter(&[4, 4, 4]).unwrap();
        assert!((score - (0.7 + 0.3 * 0.4)).abs() < 1e-9);
    }

    #[test]
    fn inconsistent_counts_are_penalized() {
        // deviations 0, 2, 2 -> mean 4/3 over an expected 4
        let score = score_delimiter(&[4, 2, 6]).unwrap();
        let consistency = 1.0 - (4.0 / 3.0) / 4.0;
        assert!((score - (0.7 * consistency + 0.3 * 0.4)).abs() < 1e-9);
    }

    #[test]
    fn breadth_saturates_at_ten_fields() {
        let wide = score_delimiter(&[25]).unwrap();
        assert!((wide - 1.0).abs() < 1e-9);
    }

    #[test]
    fn detects_semicolon() {
        assert_eq!(detect_delimiter("a;b;c\n1;2;3\n"), ';');
    }

    #[test]
    fn detects_pipe() {
        assert_eq!(detect_delimiter("a|b\n1|2\n"), '|');
    }

    #[test]
    fn quoted_commas_do_not_count() {
        let text = "\"x, y\";z\n\"1, 2\";3\n";
        assert_eq!(detect_delimiter(text), ';');
    }

    #[test]
    fn ties_keep_comma() {
        assert_eq!(detect_delimiter("a,b;c\n1,2;3\n"), ',');
    }

    #[test]
    fn falls_back_to_comma() {
        assert_eq!(detect_delimiter("single\ncolumn\n"), ',');
        assert_eq!(detect_delimiter(""), ',');
    }
}

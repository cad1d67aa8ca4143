//! Quote-aware record and field scanner.
//!
//! A single left-to-right walk over normalized text with two states. Inside a
//! quoted section `""` is a literal quote and any other quote closes the
//! section; delimiters and line breaks are literal there. Outside, a quote
//! opens a section, the delimiter ends the field and a line break ends the
//! record. Unterminated quotes are not an error: whatever was accumulated is
//! flushed as the final field.

use std::iter::Peekable;
use std::str::Chars;

/// Character that opens and closes quoted sections.
pub const QUOTE: char = '"';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Unquoted,
    Quoted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Quote,
    Delimiter,
    Newline,
    Other,
}

fn char_class(ch: char, delimiter: char) -> CharClass {
    if ch == QUOTE {
        CharClass::Quote
    } else if ch == delimiter {
        CharClass::Delimiter
    } else if ch == '\n' {
        CharClass::Newline
    } else {
        CharClass::Other
    }
}

fn finish_field(field: &mut String) -> String {
    let value = field.trim().to_string();
    field.clear();
    value
}

/// Iterator over raw records of LF-normalized text.
///
/// Blank records are yielded as-is; [`scan_records`] filters them.
#[derive(Debug, Clone)]
pub struct RecordScanner<'a> {
    chars: Peekable<Chars<'a>>,
    delimiter: char,
}

impl<'a> RecordScanner<'a> {
    pub fn new(text: &'a str, delimiter: char) -> Self {
        Self {
            chars: text.chars().peekable(),
            delimiter,
        }
    }
}

impl Iterator for RecordScanner<'_> {
    type Item = Vec<String>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut record = Vec::new();
        let mut field = String::new();
        let mut state = ScanState::Unquoted;
        let mut pending = false;

        while let Some(ch) = self.chars.next() {
            pending = true;
            match (state, char_class(ch, self.delimiter)) {
                (ScanState::Quoted, CharClass::Quote) => {
                    if self.chars.peek() == Some(&QUOTE) {
                        field.push(QUOTE);
                        self.chars.next();
                    } else {
                        state = ScanState::Unquoted;
                    }
                }
                (ScanState::Quoted, _) => field.push(ch),
                (ScanState::Unquoted, CharClass::Quote) => state = ScanState::Quoted,
                (ScanState::Unquoted, CharClass::Delimiter) => {
                    record.push(finish_field(&mut field));
                }
                (ScanState::Unquoted, CharClass::Newline) => {
                    record.push(finish_field(&mut field));
                    return Some(record);
                }
                (ScanState::Unquoted, CharClass::Other) => field.push(ch),
            }
        }

        if pending {
            record.push(finish_field(&mut field));
            Some(record)
        } else {
            None
        }
    }
}

fn is_blank_record(record: &[String]) -> bool {
    record.iter().all(String::is_empty)
}

/// Scans normalized text into non-blank records.
///
/// With a `limit`, scanning stops as soon as that many records are collected.
pub fn scan_records(text: &str, delimiter: char, limit: Option<usize>) -> Vec<Vec<String>> {
    let records = RecordScanner::new(text, delimiter).filter(|record| !is_blank_record(record));
    match limit {
        Some(limit) => records.take(limit).collect(),
        None => records.collect(),
    }
}

/// Number of fields in the first record of `line`, 0 for empty input.
pub fn count_fields(line: &str, delimiter: char) -> usize {
    RecordScanner::new(line, delimiter)
        .next()
        .as_deref()
        .map_or(0, <[String]>::len)
}

//! Delimited-text ingestion.
//!
//! This crate turns raw text (or raw file bytes) into a [`Table`]:
//!
//! - **Decoding**: pick the first of UTF-8, UTF-16, Windows-1252 and Latin-1
//!   that yields usable text
//! - **Scanning**: quote-aware record/field splitting with `""` escapes and
//!   embedded delimiters or line breaks
//! - **Detection**: delimiter and header-row heuristics, each overridable
//!   through [`ParseOptions`]
//! - **Rectangularization**: short records are padded, never truncated
//!
//! # Example
//!
//! ```
//! use tabscan_ingest::parse;
//! use tabscan_model::ParseOptions;
//!
//! let table = parse("name;age\nAlice;30\n", &ParseOptions::default());
//! assert_eq!(table.delimiter, ';');
//! assert!(table.has_headers);
//! assert_eq!(table.rows, vec![vec!["Alice".to_string(), "30".to_string()]]);
//! ```
//!
//! [`Table`]: tabscan_model::Table
//! [`ParseOptions`]: tabscan_model::ParseOptions

mod decode;
mod delimiter;
mod error;
mod header;
mod parser;
mod reader;
mod scanner;
mod text;

// === Error Types ===
pub use error::{IngestError, Result};

// === Parsing ===
pub use parser::{DEFAULT_DELIMITER, parse};
pub use scanner::{QUOTE, RecordScanner, count_fields, scan_records};
pub use text::normalize_line_endings;

// === Heuristics ===
pub use delimiter::{CANDIDATE_DELIMITERS, detect_delimiter, score_delimiter};
pub use header::{MAX_HEADER_LEN, detect_header, looks_numeric};

// === Decoding and Files ===
pub use decode::{DecodedText, TextEncoding, decode_bytes};
pub use reader::{
    LoadedTable, MAX_FILE_SIZE, check_file_size, check_file_size_with_limit, read_table,
};

//! Error types for tabular ingestion.
//!
//! Parsing itself never fails; every error here comes from reading or
//! decoding input before the parser runs.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading delimited text.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File exceeds the configured size limit.
    #[error("file {path} is too large ({size} bytes, limit {max_size} bytes)")]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    // === Decoding Errors ===
    /// Bytes did not decode to text under any supported encoding.
    #[error("input could not be decoded as UTF-8, UTF-16, Windows-1252 or Latin-1 text")]
    Undecodable,

    /// A file's bytes did not decode to text under any supported encoding.
    #[error("could not decode {path} as text")]
    UndecodableFile { path: PathBuf },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/path/to/file.csv"),
        };
        assert_eq!(err.to_string(), "file not found: /path/to/file.csv");
    }

    #[test]
    fn test_file_too_large_display() {
        let err = IngestError::FileTooLarge {
            path: PathBuf::from("big.csv"),
            size: 20,
            max_size: 10,
        };
        assert_eq!(
            err.to_string(),
            "file big.csv is too large (20 bytes, limit 10 bytes)"
        );
    }
}

//! Error types for rendering.

use thiserror::Error;

/// Errors that can occur while rendering output.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Failed to serialize JSON.
    #[error("failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Failed to write a delimited record.
    #[error("failed to write delimited text: {0}")]
    Csv(#[from] csv::Error),

    /// Failed to flush the delimited writer.
    #[error("failed to flush delimited text: {message}")]
    Flush { message: String },

    /// The csv writer only supports single-byte delimiters.
    #[error("delimiter {0:?} is not a single-byte ASCII character")]
    Delimiter(char),

    /// Written bytes were not valid UTF-8.
    #[error("rendered text is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Result type for rendering operations.
pub type Result<T> = std::result::Result<T, OutputError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delimiter_error_display() {
        let err = OutputError::Delimiter('→');
        assert_eq!(
            err.to_string(),
            "delimiter '→' is not a single-byte ASCII character"
        );
    }
}

//! Loading delimited text from disk.

use std::path::Path;

use tabscan_model::{ParseOptions, Table};
use tracing::{debug, info_span};

use crate::decode::{TextEncoding, decode_bytes};
use crate::error::{IngestError, Result};
use crate::parser::parse;

/// Maximum file size accepted by [`read_table`] (500 MB).
pub const MAX_FILE_SIZE: u64 = 500 * 1024 * 1024;

/// A parsed file and the encoding its bytes were decoded with.
#[derive(Debug, Clone)]
pub struct LoadedTable {
    pub table: Table,
    pub encoding: TextEncoding,
}

fn file_error(path: &Path, error: std::io::Error) -> IngestError {
    if error.kind() == std::io::ErrorKind::NotFound {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source: error,
        }
    }
}

/// Check file size before loading.
pub fn check_file_size(path: &Path) -> Result<()> {
    check_file_size_with_limit(path, MAX_FILE_SIZE)
}

/// Check file size against a custom limit.
pub fn check_file_size_with_limit(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| file_error(path, e))?;
    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }
    Ok(())
}

/// Reads, decodes and parses a delimited-text file.
pub fn read_table(path: &Path, options: &ParseOptions) -> Result<LoadedTable> {
    let _span = info_span!("read_table", path = %path.display()).entered();
    check_file_size(path)?;
    let bytes = std::fs::read(path).map_err(|e| file_error(path, e))?;
    let decoded = decode_bytes(&bytes).map_err(|_| IngestError::UndecodableFile {
        path: path.to_path_buf(),
    })?;
    debug!(
        bytes = bytes.len(),
        encoding = %decoded.encoding,
        "decoded file"
    );
    Ok(LoadedTable {
        table: parse(&decoded.text, options),
        encoding: decoded.encoding,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_file(content: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content).unwrap();
        file
    }

    #[test]
    fn test_read_table_detects_everything() {
        let file = create_temp_file(b"A\tB\r\n1\t2\r\n3\t4\r\n");
        let loaded = read_table(file.path(), &ParseOptions::default()).unwrap();

        assert_eq!(loaded.encoding, TextEncoding::Utf8);
        assert_eq!(loaded.table.delimiter, '\t');
        assert_eq!(loaded.table.headers, vec!["A", "B"]);
        assert_eq!(loaded.table.rows.len(), 2);
    }

    #[test]
    fn test_read_table_missing_file() {
        let result = read_table(Path::new("/nonexistent/table.csv"), &ParseOptions::default());
        assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
    }

    #[test]
    fn test_check_file_size_with_limit() {
        let file = create_temp_file(b"a,b\n1,2\n");
        assert!(check_file_size_with_limit(file.path(), 1024).is_ok());
        assert!(matches!(
            check_file_size_with_limit(file.path(), 4),
            Err(IngestError::FileTooLarge { size: 8, .. })
        ));
    }

    #[test]
    fn test_read_table_binary_file() {
        let file = create_temp_file(&[0x00, 0x9F, 0x00, 0x00, 0x01]);
        let result = read_table(file.path(), &ParseOptions::default());
        assert!(matches!(result, Err(IngestError::UndecodableFile { .. })));
    }
}

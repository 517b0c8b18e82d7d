//! Error taxonomy for the table pipeline
//!
//! Every stage returns `Result<T, TableError>`. The CLI wraps these in
//! `anyhow` and decides once, in `main`, to halt.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type TableResult<T> = Result<T, TableError>;

#[derive(Debug, Error)]
pub enum TableError {
    /// The scanned root could not be listed
    #[error("failed to read directory {path:?}: {source}")]
    ReadDirectory {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("failed to read data file {path:?}: {source}")]
    ReadData {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse data file {path:?}: {source}")]
    ParseData {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write output {path:?}: {source}")]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read raw book list {path:?}: {source}")]
    ReadRaw {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A raw line without the three tab-separated columns
    #[error("line {line}: expected `id<TAB>author<TAB>title`, found {columns} column(s)")]
    MalformedRawLine { line: usize, columns: usize },

    #[error("line {line}: invalid book id {value:?}")]
    InvalidRawId { line: usize, value: String },

    #[error("failed to serialize records for {path:?}: {source}")]
    SerializeData {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write data file {path:?}: {source}")]
    WriteData {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_line_message() {
        let err = TableError::MalformedRawLine { line: 3, columns: 2 };
        assert_eq!(
            err.to_string(),
            "line 3: expected `id<TAB>author<TAB>title`, found 2 column(s)"
        );
    }

    #[test]
    fn test_io_error_keeps_source() {
        use std::error::Error as _;

        let err = TableError::ReadData {
            path: PathBuf::from("data.json"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.to_string().contains("data.json"));
        assert!(err.source().is_some());
    }
}

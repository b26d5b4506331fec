//! Error types for minirel tables.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using TableError.
pub type TableResult<T> = std::result::Result<T, TableError>;

/// Errors that can occur while building, saving or loading tables.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Snapshot serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{0}")]
    Core(minirel_core::Error),

    #[error("Table not found: {0}")]
    TableNotFound(String),
}

impl TableError {
    /// Wraps an I/O error with the path it occurred on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TableError::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<minirel_core::Error> for TableError {
    fn from(err: minirel_core::Error) -> Self {
        TableError::Core(err)
    }
}

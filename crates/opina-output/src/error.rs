//! Error types for cleaned-table persistence.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while writing the cleaned CSV.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Filesystem operation failed.
    #[error("failed to {operation} {path}: {source}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The temp-file rename into place failed; no partial output is
    /// left at the target path.
    #[error("atomic rename failed: {temp_path} -> {target_path}: {source}")]
    AtomicWriteFailed {
        temp_path: PathBuf,
        target_path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV serialization failed.
    #[error("CSV serialization failed: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type for persistence operations.
pub type Result<T> = std::result::Result<T, OutputError>;

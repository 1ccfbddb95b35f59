//! Error types for raw comment ingestion.

use std::path::PathBuf;

use thiserror::Error;

use crate::probe::DelimiterProbe;

/// Errors that can occur while loading a raw export.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Input file not found.
    #[error("input file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file content.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Every delimiter candidate failed or yielded a single column.
    #[error("{path} is not table-shaped: {}", format_attempts(.attempts))]
    UnparsableTable {
        path: PathBuf,
        attempts: Vec<DelimiterProbe>,
    },
}

fn format_attempts(attempts: &[DelimiterProbe]) -> String {
    attempts
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

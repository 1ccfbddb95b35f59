//! Error types for the cleaning stages.

use thiserror::Error;

/// Errors that can occur while reconciling a raw table.
#[derive(Debug, Error)]
pub enum CleanError {
    /// No column resembles a comment/text field; the table cannot be
    /// reconciled automatically.
    #[error("no comment column recognized among: {}", .columns.join(", "))]
    SchemaMismatch { columns: Vec<String> },
}

/// Result type for cleaning operations.
pub type Result<T> = std::result::Result<T, CleanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_mismatch_names_observed_columns() {
        let error = CleanError::SchemaMismatch {
            columns: vec!["id".to_string(), "fecha".to_string()],
        };
        assert_eq!(error.to_string(), "no comment column recognized among: id, fecha");
    }
}

//! Tabular loader: file bytes in, structured table or definite failure out.

use std::path::Path;

use tracing::debug;

use crate::encoding::decode_bytes;
use crate::error::{IngestError, Result};
use crate::probe::probe_delimiters;

use opina_model::Table;

/// A raw record set parsed from one source file.
///
/// Column names are whatever the source provided (whitespace-collapsed
/// only); reconciliation onto the canonical schema happens downstream.
#[derive(Debug, Clone)]
pub struct RawTable {
    pub table: Table,
    /// Name of the detected encoding (e.g. "UTF-8", "windows-1252").
    pub encoding: &'static str,
    /// The accepted delimiter candidate.
    pub delimiter: char,
    /// Malformed data rows skipped during parsing.
    pub skipped_rows: usize,
}

/// Load a raw export into a [`RawTable`].
///
/// Never half-loads: the result is either a complete multi-column
/// table or an error. Loading the same file twice yields structurally
/// identical tables.
pub fn load_table(path: &Path) -> Result<RawTable> {
    let bytes = std::fs::read(path).map_err(|error| {
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
    })?;

    let (content, encoding) = decode_bytes(&bytes);
    let result = probe_delimiters(&content);
    for attempt in &result.attempts {
        debug!(path = %path.display(), encoding, attempt = %attempt, "delimiter probe");
    }
    let Some(probed) = result.accepted else {
        return Err(IngestError::UnparsableTable {
            path: path.to_path_buf(),
            attempts: result.attempts,
        });
    };

    debug!(
        path = %path.display(),
        encoding,
        delimiter = %probed.delimiter,
        columns = probed.table.width(),
        rows = probed.table.height(),
        skipped_rows = probed.skipped_rows,
        "loaded raw table"
    );
    Ok(RawTable {
        table: probed.table,
        encoding,
        delimiter: probed.delimiter,
        skipped_rows: probed.skipped_rows,
    })
}

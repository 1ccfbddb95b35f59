//! Canonical CSV serialization with atomic writes.
//!
//! Output format is fixed: UTF-8, comma delimiter, one header row with
//! the table's column names, no row-index column. The file is written
//! to a temp path in the same directory and renamed into place, so a
//! crash or a concurrent run never leaves a partial file at the target
//! (last writer wins).

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use tracing::info;

use opina_model::Table;

use crate::error::{OutputError, Result};

/// Serialize `table` as canonical CSV bytes.
fn serialize_table(table: &Table) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(&table.headers)?;
    for row in &table.rows {
        writer.write_record(row)?;
    }
    writer
        .into_inner()
        .map_err(|error| OutputError::Csv(error.into_error().into()))
}

/// Write the cleaned table to `path` atomically.
pub fn write_table(table: &Table, path: &Path) -> Result<()> {
    let bytes = serialize_table(table)?;

    let temp_path = path.with_extension("csv.tmp");
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|error| OutputError::Io {
            operation: "create directory",
            path: parent.to_path_buf(),
            source: error,
        })?;
    }

    let mut file = File::create(&temp_path).map_err(|error| OutputError::Io {
        operation: "create",
        path: temp_path.clone(),
        source: error,
    })?;
    file.write_all(&bytes).map_err(|error| OutputError::Io {
        operation: "write",
        path: temp_path.clone(),
        source: error,
    })?;
    file.sync_all().map_err(|error| OutputError::Io {
        operation: "sync",
        path: temp_path.clone(),
        source: error,
    })?;

    fs::rename(&temp_path, path).map_err(|error| OutputError::AtomicWriteFailed {
        temp_path: temp_path.clone(),
        target_path: path.to_path_buf(),
        source: error,
    })?;

    info!(path = %path.display(), rows = table.height(), "wrote cleaned CSV");
    Ok(())
}

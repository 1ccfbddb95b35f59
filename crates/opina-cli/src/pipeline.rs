//! File cleaning pipeline with explicit stages.
//!
//! Stages in order, each consuming its predecessor's complete output:
//!
//! 1. **Load**: detect encoding/delimiter, parse the raw table
//! 2. **Reconcile**: map source columns onto the canonical schema
//! 3. **Normalize**: lowercase/trim/alphabet-restrict, country aliases
//! 4. **Filter**: drop incomplete rows, then exact duplicates
//! 5. **Persist**: atomic canonical CSV write
//!
//! Any fatal error aborts the run before persistence, so no partial
//! cleaned file is ever produced. Each input file gets a fully
//! isolated run.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span, warn};

use opina_clean::{CleanConfig, FilterReport, filter_rows, normalize_table, reconcile};
use opina_ingest::load_table;
use opina_output::write_table;

/// Result of cleaning one input file.
#[derive(Debug)]
pub struct CleanOutcome {
    pub input: PathBuf,
    /// Written output path; `None` on a dry run.
    pub output: Option<PathBuf>,
    pub encoding: &'static str,
    pub delimiter: char,
    /// Data rows parsed from the source.
    pub input_rows: usize,
    /// Malformed rows skipped during parsing.
    pub skipped_rows: usize,
    /// Rows removed by the filter stage.
    pub filter: FilterReport,
    /// Rows in the cleaned table.
    pub output_rows: usize,
}

/// Run the full pipeline on one file.
///
/// `output` of `None` is a dry run: every stage executes, nothing is
/// written.
pub fn clean_file(
    input: &Path,
    output: Option<&Path>,
    config: &CleanConfig,
) -> Result<CleanOutcome> {
    let span = info_span!("clean_file", input = %input.display());
    let _guard = span.enter();
    let start = Instant::now();

    let raw = info_span!("load").in_scope(|| load_table(input))?;
    let input_rows = raw.table.height();
    if raw.skipped_rows > 0 {
        warn!(
            input = %input.display(),
            skipped_rows = raw.skipped_rows,
            "skipped malformed rows during parse"
        );
    }

    let mut table = info_span!("reconcile")
        .in_scope(|| reconcile(raw.table, &config.rules))
        .with_context(|| format!("reconcile {}", input.display()))?;

    info_span!("normalize").in_scope(|| normalize_table(&mut table, config));

    let filter = info_span!("filter").in_scope(|| filter_rows(&mut table));

    let written = match output {
        Some(path) => {
            info_span!("persist").in_scope(|| write_table(&table, path))?;
            Some(path.to_path_buf())
        }
        None => {
            debug!("dry run, skipping persistence");
            None
        }
    };

    info!(
        input = %input.display(),
        input_rows,
        output_rows = table.height(),
        duration_ms = start.elapsed().as_millis(),
        "cleaned file"
    );
    Ok(CleanOutcome {
        input: input.to_path_buf(),
        output: written,
        encoding: raw.encoding,
        delimiter: raw.delimiter,
        input_rows,
        skipped_rows: raw.skipped_rows,
        filter,
        output_rows: table.height(),
    })
}

/// Default output path for an input: `<stem>.clean.csv` next to the
/// input, or inside `output_dir` when given.
pub fn default_output_path(input: &Path, output_dir: Option<&Path>) -> PathBuf {
    let stem = input
        .file_stem()
        .map_or_else(|| "cleaned".to_string(), |s| s.to_string_lossy().into_owned());
    let file_name = format!("{stem}.clean.csv");
    match output_dir {
        Some(dir) => dir.join(file_name),
        None => input.with_file_name(file_name),
    }
}

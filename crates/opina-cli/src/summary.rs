//! Human-readable batch summary.

use crate::commands::BatchResult;

/// Print a per-file summary of a batch run to stdout.
pub fn print_summary(batch: &BatchResult) {
    for outcome in &batch.outcomes {
        let destination = outcome
            .output
            .as_ref()
            .map_or_else(|| "(dry run)".to_string(), |path| path.display().to_string());
        println!(
            "{}: {} rows in ({}, '{}'), {} malformed skipped, {} incomplete dropped, \
             {} duplicates dropped, {} rows out -> {}",
            outcome.input.display(),
            outcome.input_rows,
            outcome.encoding,
            if outcome.delimiter == '\t' { "\\t".to_string() } else { outcome.delimiter.to_string() },
            outcome.skipped_rows,
            outcome.filter.missing_dropped,
            outcome.filter.duplicate_dropped,
            outcome.output_rows,
            destination,
        );
    }
    for (input, message) in &batch.failures {
        eprintln!("error: {input}: {message}");
    }
    if !batch.outcomes.is_empty() || batch.has_failures() {
        println!(
            "{} file(s) cleaned, {} failed",
            batch.outcomes.len(),
            batch.failures.len()
        );
    }
}

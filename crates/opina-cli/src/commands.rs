//! Command handlers for the `opina` CLI.

use anyhow::{Result, bail};

use opina_clean::CleanConfig;
use opina_model::schema;

use crate::cli::CleanArgs;
use crate::pipeline::{CleanOutcome, clean_file, default_output_path};

/// Result of a batch clean run.
#[derive(Debug, Default)]
pub struct BatchResult {
    pub outcomes: Vec<CleanOutcome>,
    /// Per-file failures as `(input, message)`; one file failing does
    /// not stop the others.
    pub failures: Vec<(String, String)>,
}

impl BatchResult {
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// Clean every input file, each in an isolated pipeline run.
pub fn run_clean(args: &CleanArgs) -> Result<BatchResult> {
    if args.output.is_some() && args.inputs.len() > 1 {
        bail!("--output requires exactly one INPUT; use --output-dir for batches");
    }

    let config = CleanConfig::default();
    let mut batch = BatchResult::default();

    for input in &args.inputs {
        let output = if args.dry_run {
            None
        } else {
            Some(args.output.clone().unwrap_or_else(|| {
                default_output_path(input, args.output_dir.as_deref())
            }))
        };
        match clean_file(input, output.as_deref(), &config) {
            Ok(outcome) => batch.outcomes.push(outcome),
            Err(error) => batch
                .failures
                .push((input.display().to_string(), format!("{error:#}"))),
        }
    }
    Ok(batch)
}

/// Print the canonical schema columns.
pub fn run_columns() {
    for name in schema::CANONICAL_COLUMNS {
        let required = if schema::REQUIRED_COLUMNS.contains(&name) {
            "required"
        } else {
            "optional"
        };
        println!("{name}\t{required}");
    }
}

//! CLI argument definitions for the comment cleaner.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "opina",
    version,
    about = "Clean raw tourism-comment CSV exports into a canonical dataset",
    long_about = "Clean raw tourism-comment CSV exports into a canonical dataset.\n\n\
                  Auto-detects encoding and delimiter, reconciles source columns onto\n\
                  the canonical schema, normalizes text, and removes incomplete and\n\
                  duplicate rows."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Clean one or more raw exports into canonical CSVs.
    Clean(CleanArgs),

    /// List the canonical output columns.
    Columns,
}

#[derive(Parser)]
pub struct CleanArgs {
    /// Raw CSV export files to clean.
    #[arg(value_name = "INPUT", required = true)]
    pub inputs: Vec<PathBuf>,

    /// Directory for cleaned files (default: alongside each input).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Explicit output path (only valid with a single input).
    #[arg(long = "output", value_name = "PATH", conflicts_with = "output_dir")]
    pub output: Option<PathBuf>,

    /// Run every stage but skip writing the cleaned file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

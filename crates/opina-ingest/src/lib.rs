//! Raw comment ingestion.
//!
//! Reads heterogeneous CSV exports (unknown encoding, unknown
//! delimiter) into a [`RawTable`] ready for schema reconciliation.
//!
//! - **Encoding detection**: BOM sniffing, BOM-less UTF-16 heuristics,
//!   strict UTF-8 validation, Windows-1252 fallback
//! - **Delimiter probing**: ordered candidates (`,` `;` tab), first
//!   multi-column parse wins, per-candidate outcomes retained
//! - **Loading**: all-or-nothing; malformed rows are skipped but
//!   counted

mod encoding;
mod error;
mod loader;
mod probe;

pub use encoding::decode_bytes;
pub use error::{IngestError, Result};
pub use loader::{RawTable, load_table};
pub use probe::{
    DELIMITER_CANDIDATES, DelimiterProbe, ProbeOutcome, ProbeResult, ProbedTable, probe_delimiters,
};

//! Ordered delimiter probing over decoded text.
//!
//! Candidates are tried in fixed priority order; the first one that
//! parses the content into a table with more than one column wins.
//! This is a deterministic tie-break, not a best-of-all scoring pass.
//! Every candidate's outcome is kept so a total failure can explain
//! what was tried.

use csv::ReaderBuilder;

use opina_model::Table;

/// Delimiter candidates, in priority order.
pub const DELIMITER_CANDIDATES: [u8; 3] = [b',', b';', b'\t'];

/// Outcome of trying one delimiter candidate.
#[derive(Debug, Clone)]
pub struct DelimiterProbe {
    pub delimiter: char,
    pub outcome: ProbeOutcome,
}

#[derive(Debug, Clone)]
pub enum ProbeOutcome {
    /// Parsed into a multi-column table.
    Accepted {
        columns: usize,
        rows: usize,
        skipped_rows: usize,
    },
    /// Parsed, but everything landed in one column.
    SingleColumn,
    /// No non-empty rows at all.
    Empty,
    /// The reader could not produce a header record.
    Failed { message: String },
}

impl std::fmt::Display for DelimiterProbe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let delimiter = match self.delimiter {
            '\t' => "\\t".to_string(),
            other => other.to_string(),
        };
        match &self.outcome {
            ProbeOutcome::Accepted {
                columns,
                rows,
                skipped_rows,
            } => write!(
                f,
                "'{delimiter}': accepted ({columns} columns, {rows} rows, {skipped_rows} skipped)"
            ),
            ProbeOutcome::SingleColumn => write!(f, "'{delimiter}': single column"),
            ProbeOutcome::Empty => write!(f, "'{delimiter}': empty"),
            ProbeOutcome::Failed { message } => write!(f, "'{delimiter}': {message}"),
        }
    }
}

/// A table accepted by one of the candidates.
#[derive(Debug, Clone)]
pub struct ProbedTable {
    pub table: Table,
    pub delimiter: char,
    /// Malformed data rows skipped during the accepted parse.
    pub skipped_rows: usize,
}

/// Result of the full candidate sweep.
///
/// `attempts` holds one entry per candidate tried, in order, up to and
/// including the accepted one.
#[derive(Debug)]
pub struct ProbeResult {
    pub accepted: Option<ProbedTable>,
    pub attempts: Vec<DelimiterProbe>,
}

/// Try each delimiter candidate in order until one is accepted.
pub fn probe_delimiters(content: &str) -> ProbeResult {
    let mut attempts = Vec::new();
    for &delimiter in &DELIMITER_CANDIDATES {
        let (outcome, table) = probe_one(content, delimiter);
        let accepted = table.is_some();
        attempts.push(DelimiterProbe {
            delimiter: delimiter as char,
            outcome,
        });
        if accepted {
            return ProbeResult {
                accepted: table,
                attempts,
            };
        }
    }
    ProbeResult {
        accepted: None,
        attempts,
    }
}

/// Collapse surrounding and internal whitespace runs in a header name.
fn normalize_header(raw: &str) -> String {
    raw.trim()
        .trim_matches('\u{feff}')
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn probe_one(content: &str, delimiter: u8) -> (ProbeOutcome, Option<ProbedTable>) {
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut headers: Option<Vec<String>> = None;
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut skipped_rows = 0usize;

    for record in reader.records() {
        let record = match record {
            Ok(record) => record,
            Err(error) => {
                // Broken quoting or unreadable record. Skip it, keep
                // parsing, remember that we did.
                if headers.is_none() {
                    return (
                        ProbeOutcome::Failed {
                            message: error.to_string(),
                        },
                        None,
                    );
                }
                skipped_rows += 1;
                continue;
            }
        };
        let cells: Vec<String> = record.iter().map(|cell| cell.trim().to_string()).collect();
        if cells.iter().all(String::is_empty) {
            continue;
        }
        match &headers {
            None => headers = Some(cells.iter().map(|cell| normalize_header(cell)).collect()),
            Some(header_row) => {
                // A row with more fields than the header is malformed
                // and skipped; a shorter row is padded to header width
                // when pushed.
                if cells.len() > header_row.len() {
                    skipped_rows += 1;
                } else {
                    rows.push(cells);
                }
            }
        }
    }

    let Some(headers) = headers else {
        return (ProbeOutcome::Empty, None);
    };
    if headers.len() < 2 {
        return (ProbeOutcome::SingleColumn, None);
    }

    let mut table = Table::new(headers);
    for row in rows {
        table.push_row(row);
    }
    let outcome = ProbeOutcome::Accepted {
        columns: table.width(),
        rows: table.height(),
        skipped_rows,
    };
    let probed = ProbedTable {
        table,
        delimiter: delimiter as char,
        skipped_rows,
    };
    (outcome, Some(probed))
}

//! Row filtering: required-field enforcement and stable deduplication.

use std::collections::BTreeSet;

use tracing::debug;

use opina_model::{Table, schema};

/// Rows removed at each filter stage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterReport {
    /// Rows dropped for an empty required field.
    pub missing_dropped: usize,
    /// Exact-duplicate rows dropped (first occurrence kept).
    pub duplicate_dropped: usize,
}

/// Drop rows with empty required fields, then exact duplicates across
/// all canonical columns, keeping the first occurrence in original
/// order.
pub fn filter_rows(table: &mut Table) -> FilterReport {
    let mut report = FilterReport::default();

    let required: Vec<usize> = schema::REQUIRED_COLUMNS
        .iter()
        .filter_map(|name| table.column_index(name))
        .collect();

    let before = table.height();
    table
        .rows
        .retain(|row| required.iter().all(|&index| !row[index].trim().is_empty()));
    report.missing_dropped = before - table.height();

    // Normalized cells cannot contain '|', so the join is collision-free.
    let mut seen = BTreeSet::new();
    let before = table.height();
    table.rows.retain(|row| seen.insert(row.join("|")));
    report.duplicate_dropped = before - table.height();

    debug!(
        missing_dropped = report.missing_dropped,
        duplicate_dropped = report.duplicate_dropped,
        remaining = table.height(),
        "filtered rows"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use opina_model::schema::CANONICAL_COLUMNS;

    fn canonical(rows: &[&[&str]]) -> Table {
        let mut table = Table::new(CANONICAL_COLUMNS.iter().map(ToString::to_string).collect());
        for row in rows {
            table.push_row(row.iter().map(ToString::to_string).collect());
        }
        table
    }

    #[test]
    fn drops_rows_with_missing_required_fields() {
        let mut table = canonical(&[
            &["ana", "colombia", "buena", "unclassified"],
            &["", "colombia", "buena", "unclassified"],
            &["luis", "", "buena", "unclassified"],
            &["luis", "brasil", "", "unclassified"],
        ]);
        let report = filter_rows(&mut table);
        assert_eq!(report.missing_dropped, 3);
        assert_eq!(table.height(), 1);
    }

    #[test]
    fn empty_sentiment_is_not_a_drop_reason() {
        let mut table = canonical(&[&["ana", "colombia", "buena", ""]]);
        let report = filter_rows(&mut table);
        assert_eq!(report.missing_dropped, 0);
        assert_eq!(table.height(), 1);
    }

    #[test]
    fn dedup_is_stable_and_exact() {
        let mut table = canonical(&[
            &["ana", "colombia", "buena", "unclassified"],
            &["luis", "brasil", "excelente", "unclassified"],
            &["ana", "colombia", "buena", "unclassified"],
            &["ana", "colombia", "buena playa", "unclassified"],
        ]);
        let report = filter_rows(&mut table);
        assert_eq!(report.duplicate_dropped, 1);
        assert_eq!(table.height(), 3);
        // First occurrence order preserved.
        assert_eq!(table.cell(0, 0), "ana");
        assert_eq!(table.cell(1, 0), "luis");
        assert_eq!(table.cell(2, 2), "buena playa");
    }

    #[test]
    fn duplicate_check_spans_all_canonical_columns() {
        let mut table = canonical(&[
            &["ana", "colombia", "buena", "positivo"],
            &["ana", "colombia", "buena", "negativo"],
        ]);
        let report = filter_rows(&mut table);
        assert_eq!(report.duplicate_dropped, 0);
        assert_eq!(table.height(), 2);
    }
}

//! Schema reconciliation: arbitrary source columns onto the canonical
//! schema.
//!
//! Rules, in order:
//! 1. normalize every header (trim, lowercase)
//! 2. locate the comment column (literal alias, then token search);
//!    none found is a hard `SchemaMismatch`
//! 3. synthesize a sentinel-filled sentiment column when absent
//! 4. merge handle and display-name columns into `commenter_id`
//!    (null-coalescing, handle wins)
//! 5. project onto the canonical allow-list, dropping everything else

use tracing::debug;

use opina_model::{Table, schema};

use crate::error::{CleanError, Result};
use crate::rules::ReconcileRules;

/// Reconcile a raw table onto the canonical schema.
///
/// On success the returned table has exactly the canonical columns, in
/// canonical order. Cell values are untouched; normalization is the
/// next stage's job.
pub fn reconcile(mut table: Table, rules: &ReconcileRules) -> Result<Table> {
    for header in &mut table.headers {
        *header = header.trim().to_lowercase();
    }

    locate_comment_column(&mut table, rules)?;
    locate_country_column(&mut table, rules);
    ensure_sentiment_column(&mut table, rules);
    merge_identity_columns(&mut table, rules);

    let canonical: Vec<&str> = schema::CANONICAL_COLUMNS.to_vec();
    table.retain_columns(&canonical);

    // A source missing an identity or country column still yields the
    // full canonical header; the row filter drops what cannot be kept.
    for name in schema::CANONICAL_COLUMNS {
        if !table.has_column(name) {
            table.add_column(name, "");
        }
    }
    table.retain_columns(&canonical);

    debug!(
        columns = table.width(),
        rows = table.height(),
        "reconciled onto canonical schema"
    );
    Ok(table)
}

fn locate_comment_column(table: &mut Table, rules: &ReconcileRules) -> Result<()> {
    if table.has_column(schema::COMMENT_TEXT) {
        return Ok(());
    }
    let index = rules
        .find_alias(&table.headers, &rules.comment_aliases)
        .or_else(|| rules.find_comment_by_token(&table.headers));
    match index {
        Some(index) => {
            let found = table.headers[index].clone();
            debug!(column = %found, "recognized comment column");
            table.headers[index] = schema::COMMENT_TEXT.to_string();
            Ok(())
        }
        None => Err(CleanError::SchemaMismatch {
            columns: table.headers.clone(),
        }),
    }
}

fn locate_country_column(table: &mut Table, rules: &ReconcileRules) {
    if table.has_column(schema::COUNTRY) {
        return;
    }
    if let Some(index) = rules.find_alias(&table.headers, &rules.country_aliases) {
        table.headers[index] = schema::COUNTRY.to_string();
    }
}

fn ensure_sentiment_column(table: &mut Table, rules: &ReconcileRules) {
    if table.has_column(schema::SENTIMENT_LABEL) {
        return;
    }
    if let Some(index) = rules.find_alias(&table.headers, &rules.sentiment_aliases) {
        table.headers[index] = schema::SENTIMENT_LABEL.to_string();
        return;
    }
    table.add_column(schema::SENTIMENT_LABEL, schema::SENTIMENT_UNCLASSIFIED);
}

/// Null-coalescing identity merge: handle wins, display name fills the
/// gaps. Neither field is reliably populated alone in real exports.
fn merge_identity_columns(table: &mut Table, rules: &ReconcileRules) {
    if table.has_column(schema::COMMENTER_ID) {
        return;
    }
    let handle = rules.find_alias(&table.headers, &rules.handle_aliases);
    let display = rules.find_alias(&table.headers, &rules.display_name_aliases);

    match (handle, display) {
        (Some(handle), Some(display)) => {
            for row in &mut table.rows {
                if row[handle].trim().is_empty() {
                    row[handle] = row[display].clone();
                }
            }
            table.headers[handle] = schema::COMMENTER_ID.to_string();
        }
        (Some(only), None) | (None, Some(only)) => {
            table.headers[only] = schema::COMMENTER_ID.to_string();
        }
        (None, None) => {}
    }
}

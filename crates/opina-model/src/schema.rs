//! Canonical schema for the cleaned comment dataset.
//!
//! Every stage after reconciliation speaks this schema. Downstream
//! enrichment (sentiment, clustering, comment length) may append extra
//! columns; it must never rename or remove these.

/// Merged author identity (handle preferred, display name fallback).
pub const COMMENTER_ID: &str = "commenter_id";

/// Normalized country of the commenter.
pub const COUNTRY: &str = "country";

/// Normalized free-text comment body.
pub const COMMENT_TEXT: &str = "comment_text";

/// Sentiment label, sentinel-filled until downstream enrichment runs.
pub const SENTIMENT_LABEL: &str = "sentiment_label";

/// The canonical output columns, in output order.
pub const CANONICAL_COLUMNS: [&str; 4] = [COMMENTER_ID, COUNTRY, COMMENT_TEXT, SENTIMENT_LABEL];

/// Columns that must be non-empty in every cleaned row.
pub const REQUIRED_COLUMNS: [&str; 3] = [COMMENTER_ID, COUNTRY, COMMENT_TEXT];

/// Sentinel written into a synthesized sentiment column.
pub const SENTIMENT_UNCLASSIFIED: &str = "unclassified";

/// Characters permitted in normalized text columns.
///
/// Lowercase Latin letters, the Spanish accented set, digits, and the
/// space. Everything else (punctuation included) is stripped during
/// normalization.
pub fn is_permitted_char(ch: char) -> bool {
    ch.is_ascii_lowercase()
        || ch.is_ascii_digit()
        || ch == ' '
        || matches!(ch, 'á' | 'é' | 'í' | 'ó' | 'ú' | 'ü' | 'ñ')
}

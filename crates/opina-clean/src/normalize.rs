//! Text normalization over the canonical table.
//!
//! Every canonical column holds string values, so normalization runs
//! on the whole table: lowercase, trim, then strip every character
//! outside the permitted alphabet. Stripping punctuation (sentence
//! marks included) is intentional and lossy; downstream word-frequency
//! analysis assumes punctuation-free tokens.
//!
//! After normalization, known categorical aliases are corrected by
//! exact-match substitution (no fuzzy matching).

use tracing::debug;

use opina_model::{Table, schema};

use crate::rules::CleanConfig;

/// Normalize one string value: lowercase, trim, restrict alphabet.
///
/// Total function; never fails.
pub fn normalize_value(raw: &str) -> String {
    raw.to_lowercase()
        .trim()
        .chars()
        .filter(|ch| schema::is_permitted_char(*ch))
        .collect()
}

/// Normalize every cell of the table in place, then apply country
/// alias corrections.
pub fn normalize_table(table: &mut Table, config: &CleanConfig) {
    for row in &mut table.rows {
        for cell in row.iter_mut() {
            *cell = normalize_value(cell);
        }
    }

    if let Some(country) = table.column_index(schema::COUNTRY) {
        let mut corrected = 0usize;
        for row in &mut table.rows {
            if let Some(canonical) = config.country_aliases.get(&row[country]) {
                row[country] = canonical.clone();
                corrected += 1;
            }
        }
        if corrected > 0 {
            debug!(corrected, "applied country alias corrections");
        }
    }
}

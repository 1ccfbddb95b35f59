//! Integration tests for the full reconcile → normalize → filter chain.

use opina_clean::{CleanConfig, filter_rows, normalize_table, reconcile};
use opina_model::{Table, schema};

fn source_table(headers: &[&str], rows: &[&[&str]]) -> Table {
    let mut table = Table::new(headers.iter().map(ToString::to_string).collect());
    for row in rows {
        table.push_row(row.iter().map(ToString::to_string).collect());
    }
    table
}

fn clean(table: Table, config: &CleanConfig) -> Table {
    let mut table = reconcile(table, &config.rules).unwrap();
    normalize_table(&mut table, config);
    filter_rows(&mut table);
    table
}

#[test]
fn end_to_end_scenario() {
    let config = CleanConfig::default();
    let table = source_table(
        &["usuario", "nombre", "pais", "comentario"],
        &[
            &["", "Luis", "Brazil", "¡Excelente Playa!!"],
            &["ana_t", "Ana Torres", "Colombia", "muy buena atención"],
        ],
    );

    let cleaned = clean(table, &config);

    assert_eq!(cleaned.height(), 2);
    let first = cleaned.record(0).unwrap();
    assert_eq!(first.commenter_id, "luis");
    assert_eq!(first.country, "brasil");
    assert_eq!(first.comment_text, "excelente playa");
    let second = cleaned.record(1).unwrap();
    assert_eq!(second.commenter_id, "ana_t");
    assert_eq!(second.country, "colombia");
    assert_eq!(second.comment_text, "muy buena atención");
}

#[test]
fn output_rows_satisfy_canonical_invariants() {
    let config = CleanConfig::default();
    let table = source_table(
        &["usuario", "nombre", "pais", "comentario", "ciudad"],
        &[
            &["ana_t", "Ana", "Colombia", "Muy Buena!", "CTG"],
            &["", "", "Colombia", "sin autor", "CTG"],
            &["luis", "Luis", "", "sin pais", "CTG"],
            &["ana_t", "Ana", "Colombia", "muy buena", "CTG"],
        ],
    );

    let cleaned = clean(table, &config);

    assert_eq!(
        cleaned.headers,
        schema::CANONICAL_COLUMNS
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
    );
    for index in 0..cleaned.height() {
        let record = cleaned.record(index).unwrap();
        assert!(!record.commenter_id.is_empty());
        assert!(!record.country.is_empty());
        assert!(!record.comment_text.is_empty());
        assert!(
            record
                .comment_text
                .chars()
                .all(schema::is_permitted_char)
        );
    }
}

#[test]
fn near_duplicates_collapse_after_normalization() {
    // Normalization runs before the duplicate filter, so rows that
    // differ only in case or punctuation collapse into one.
    let config = CleanConfig::default();
    let table = source_table(
        &["usuario", "nombre", "pais", "comentario"],
        &[
            &["ana_t", "Ana", "Colombia", "Muy buena atención."],
            &["ana_t", "Ana", "colombia", "muy buena atención"],
        ],
    );

    let cleaned = clean(table, &config);
    assert_eq!(cleaned.height(), 1);
}

#[test]
fn cleaning_is_deterministic() {
    let config = CleanConfig::default();
    let build = || {
        source_table(
            &["usuario", "nombre", "pais", "comentario"],
            &[
                &["ana_t", "Ana", "Colombia", "Muy Buena!"],
                &["", "Luis", "Brazil", "¡Excelente!"],
            ],
        )
    };

    let first = clean(build(), &config);
    let second = clean(build(), &config);
    assert_eq!(first, second);
}

//! End-to-end pipeline tests over real files.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use opina_cli::pipeline::clean_file;
use opina_clean::CleanConfig;

fn write_fixture(dir: &TempDir, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, bytes).unwrap();
    path
}

#[test]
fn end_to_end_scenario() {
    let dir = TempDir::new().unwrap();
    let input = write_fixture(
        &dir,
        "comments.csv",
        "usuario,nombre,pais,comentario\n\
         ,Luis,Brazil,¡Excelente Playa!!\n\
         ana_t,Ana Torres,Colombia,muy buena atención\n"
            .as_bytes(),
    );
    let output = dir.path().join("cleaned.csv");

    let outcome = clean_file(&input, Some(&output), &CleanConfig::default()).unwrap();
    assert_eq!(outcome.input_rows, 2);
    assert_eq!(outcome.output_rows, 2);

    let content = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(
        lines,
        vec![
            "commenter_id,country,comment_text,sentiment_label",
            "luis,brasil,excelente playa,unclassified",
            "ana_t,colombia,muy buena atención,unclassified",
        ]
    );
}

#[test]
fn pipeline_is_idempotent_byte_for_byte() {
    let dir = TempDir::new().unwrap();
    let input = write_fixture(
        &dir,
        "comments.csv",
        b"usuario,nombre,pais,comentario\nana_t,Ana,Colombia,Muy Buena!\nluis,Luis,Brazil,Excelente\n",
    );
    let output = dir.path().join("cleaned.csv");
    let config = CleanConfig::default();

    clean_file(&input, Some(&output), &config).unwrap();
    let first = fs::read(&output).unwrap();
    clean_file(&input, Some(&output), &config).unwrap();
    let second = fs::read(&output).unwrap();
    assert_eq!(first, second);
}

#[test]
fn semicolon_export_is_cleaned_via_fallback_candidate() {
    let dir = TempDir::new().unwrap();
    let input = write_fixture(
        &dir,
        "comments.csv",
        b"usuario;nombre;pais;comentario\nluis;Luis;brasil;todo bien\n",
    );
    let output = dir.path().join("cleaned.csv");

    let outcome = clean_file(&input, Some(&output), &CleanConfig::default()).unwrap();
    assert_eq!(outcome.delimiter, ';');
    assert_eq!(outcome.output_rows, 1);
}

#[test]
fn missing_file_fails_without_output() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("missing.csv");
    let output = dir.path().join("cleaned.csv");

    let result = clean_file(&input, Some(&output), &CleanConfig::default());
    assert!(result.is_err());
    assert!(!output.exists());
}

#[test]
fn unrecognized_schema_fails_without_output() {
    let dir = TempDir::new().unwrap();
    let input = write_fixture(
        &dir,
        "metadata.csv",
        b"usuario,pais,fecha\nana,colombia,2024-01-01\n",
    );
    let output = dir.path().join("cleaned.csv");

    let result = clean_file(&input, Some(&output), &CleanConfig::default());
    let message = format!("{:#}", result.unwrap_err());
    assert!(message.contains("no comment column recognized"));
    assert!(!output.exists());
}

#[test]
fn unparsable_file_fails_without_output() {
    let dir = TempDir::new().unwrap();
    let input = write_fixture(&dir, "notes.txt", b"free-form notes\nno table here\n");
    let output = dir.path().join("cleaned.csv");

    let result = clean_file(&input, Some(&output), &CleanConfig::default());
    assert!(result.is_err());
    assert!(!output.exists());
}

#[test]
fn dry_run_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let input = write_fixture(
        &dir,
        "comments.csv",
        b"usuario,nombre,pais,comentario\nana,Ana,colombia,bien\n",
    );

    let outcome = clean_file(&input, None, &CleanConfig::default()).unwrap();
    assert!(outcome.output.is_none());
    assert_eq!(outcome.output_rows, 1);
    let entries: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name())
        .collect();
    assert_eq!(entries, vec!["comments.csv"]);
}

#[test]
fn latin1_export_round_trips_to_utf8() {
    let dir = TempDir::new().unwrap();
    let input = write_fixture(
        &dir,
        "comments.csv",
        b"usuario,nombre,pais,comentario\nana,Ana,Colombia,atenci\xF3n excelente\n",
    );
    let output = dir.path().join("cleaned.csv");

    let outcome = clean_file(&input, Some(&output), &CleanConfig::default()).unwrap();
    assert_eq!(outcome.encoding, "windows-1252");

    let content = fs::read_to_string(&output).unwrap();
    assert!(content.contains("atención excelente"));
}

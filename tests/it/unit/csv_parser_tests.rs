//! Unit tests for CSV parsing.

use hierviz::data::{parse_csv_bytes, parse_csv_content, parse_csv_file, DataError};
use hierviz::types::DataCell;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

#[test]
fn test_parse_basic_csv() {
    let table = parse_csv_content("name,age\nAlice,30\nBob,25\n").unwrap();
    assert_eq!(table.columns, vec!["name", "age"]);
    assert_eq!(table.row_count(), 2);
    // Numbers stay text until the table is processed
    assert_eq!(table.rows[0].cells[1], DataCell::Text("30".into()));
}

#[test]
fn test_quoted_fields_keep_commas_and_newlines() {
    let table = parse_csv_content("a,b\n\"x, y\",\"line1\nline2\"\n").unwrap();
    assert_eq!(table.rows[0].cells[0], DataCell::Text("x, y".into()));
    assert_eq!(table.rows[0].cells[1], DataCell::Text("line1\nline2".into()));
}

#[test]
fn test_whitespace_only_file_is_empty() {
    assert!(matches!(parse_csv_content("  \n\n"), Err(DataError::EmptyFile)));
    assert!(matches!(parse_csv_bytes(b""), Err(DataError::EmptyFile)));
}

#[test]
fn test_parse_csv_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("upload.csv");
    fs::write(&path, "a,b\n1,2\n").unwrap();

    let table = parse_csv_file(&path).unwrap();
    assert_eq!(table.row_count(), 1);
}

#[test]
fn test_missing_file_is_io_error() {
    let result = parse_csv_file(Path::new("/definitely/not/here.csv"));
    assert!(matches!(result, Err(DataError::Io(_))));
}

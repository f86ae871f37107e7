//! Unit tests for table validation and cleaning.

use crate::helpers::{assert_no_blank_rows_or_columns, num, text, TestTableBuilder};
use hierviz::data::{check, coerce_numeric, process, validate, ValidationError};
use hierviz::types::{DataCell, DataRow, DataType, Table};
use proptest::prelude::*;

#[test]
fn test_validation_messages() {
    let one_column = TestTableBuilder::new(&["a"]).row(&["x"]).build();
    let duplicated = TestTableBuilder::new(&["a", "a"]).row(&["x", "y"]).build();
    let header_only = TestTableBuilder::new(&["a", "b"]).build();

    assert_eq!(validate(&header_only).message, "The uploaded file is empty");
    assert_eq!(
        validate(&one_column).message,
        "File must contain at least two columns"
    );
    assert_eq!(
        validate(&duplicated).message,
        "File contains duplicate column names"
    );
}

#[test]
fn test_empty_check_comes_first() {
    // A single column with no rows is reported as empty, not as too narrow
    let t = TestTableBuilder::new(&["a"]).build();
    assert_eq!(check(&t), Err(ValidationError::EmptyInput));
}

#[test]
fn test_process_cleans_the_sales_upload() {
    let t = TestTableBuilder::new(&["Region", "Notes", "Sales"])
        .row(&["EU", "", "10"])
        .row(&["", "", ""])
        .row(&["Asia", "", "4.5"])
        .build();

    let outcome = process(t);
    assert!(outcome.diagnostic.is_none());
    assert_eq!(outcome.table.columns, vec!["Region", "Sales"]);
    assert_eq!(outcome.table.row_count(), 2);
    assert_eq!(outcome.table.column_type(1), DataType::Number);
    assert_eq!(outcome.table.rows[1].cells[1], num(4.5));
}

#[test]
fn test_process_keeps_column_with_one_bad_cell_as_text() {
    let t = TestTableBuilder::new(&["id", "code"])
        .row(&["a", "1"])
        .row(&["b", "2"])
        .row(&["c", "N/A"])
        .build();

    let out = process(t).table;
    assert_eq!(out.column_type(1), DataType::Text);
    assert_eq!(out.numeric_columns(), Vec::<String>::new());
}

#[test]
fn test_process_reports_ragged_rows() {
    let t = Table::new(
        vec!["a".into(), "b".into()],
        vec![
            DataRow::new(vec![text("x"), text("y")]),
            DataRow::new(vec![text("z")]),
        ],
    );
    let outcome = process(t.clone());
    assert_eq!(outcome.table, t);
    assert_eq!(
        outcome.diagnostic.as_deref(),
        Some("Error processing data: row 2 has 1 cells, expected 2")
    );
}

#[test]
fn test_coerce_numeric_keeps_missing_cells() {
    assert_eq!(
        coerce_numeric(&[DataCell::Empty, text("-3")]),
        Some(vec![DataCell::Empty, num(-3.0)])
    );
    assert_eq!(coerce_numeric(&[text("1,000")]), None);
}

// ============================================================================
// Properties
// ============================================================================

fn cell() -> impl Strategy<Value = DataCell> {
    prop_oneof![
        Just(DataCell::Empty),
        Just(DataCell::Empty),
        Just(text("a")),
        Just(text("b")),
        Just(text("1")),
        Just(text("2.5")),
        Just(text("inf")),
        Just(num(3.0)),
        Just(num(-1.0)),
        Just(num(f64::INFINITY)),
    ]
}

fn rectangular_table() -> impl Strategy<Value = Table> {
    (2usize..5)
        .prop_flat_map(|width| {
            (
                Just(width),
                prop::collection::vec(prop::collection::vec(cell(), width), 0..8),
            )
        })
        .prop_map(|(width, rows)| {
            Table::new(
                (0..width).map(|i| format!("c{}", i)).collect(),
                rows.into_iter().map(DataRow::new).collect(),
            )
        })
}

proptest! {
    #[test]
    fn prop_process_leaves_no_blank_rows_or_columns(table in rectangular_table()) {
        let outcome = process(table);
        prop_assert!(outcome.diagnostic.is_none());
        assert_no_blank_rows_or_columns(&outcome.table);
    }

    #[test]
    fn prop_process_is_idempotent(table in rectangular_table()) {
        let once = process(table).table;
        let twice = process(once.clone()).table;
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn prop_process_never_adds_rows_or_columns(table in rectangular_table()) {
        let (rows, columns) = (table.row_count(), table.column_count());
        let out = process(table.clone()).table;
        prop_assert!(out.row_count() <= rows);
        prop_assert!(out.column_count() <= columns);
        // Surviving columns keep their relative order
        let mut remaining = table.columns.iter();
        for name in &out.columns {
            prop_assert!(remaining.any(|c| c == name));
        }
    }

    #[test]
    fn prop_process_leaves_no_infinite_numbers(table in rectangular_table()) {
        let out = process(table).table;
        for row in &out.rows {
            for c in &row.cells {
                prop_assert!(!matches!(c, DataCell::Number(n) if !n.is_finite()));
            }
        }
    }

    #[test]
    fn prop_single_column_uploads_are_rejected(
        cells in prop::collection::vec(cell(), 1..6)
    ) {
        let table = Table::new(
            vec!["only".into()],
            cells.into_iter().map(|c| DataRow::new(vec![c])).collect(),
        );
        prop_assert_eq!(check(&table), Err(ValidationError::InsufficientColumns));
        prop_assert!(!validate(&table).valid);
    }
}

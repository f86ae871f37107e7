//! Table validation and cleaning
//!
//! [`validate`] decides whether an uploaded table can be used at all;
//! [`process`] cleans an accepted table:
//! 1. Non-finite numbers become missing
//! 2. Numeric coercion of text columns (all-or-nothing per column)
//! 3. Non-finite numbers produced by coercion become missing
//! 4. Rows with every cell missing are dropped
//! 5. Columns with every cell missing are dropped
//!
//! Blanking before coercion lets a column that only held text next to an
//! infinity coerce in the same pass; blanking after it catches text such
//! as `"inf"`. Either way a second `process` changes nothing.

use crate::data::error::ValidationError;
use crate::types::{DataCell, DataType, Table};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Outcome of [`validate`]. The message is empty exactly when valid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub message: String,
    #[serde(skip)]
    pub error: Option<ValidationError>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            valid: true,
            message: String::new(),
            error: None,
        }
    }

    pub fn failed(error: ValidationError) -> Self {
        Self {
            valid: false,
            message: error.to_string(),
            error: Some(error),
        }
    }

    pub fn into_result(self) -> Result<(), ValidationError> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

/// Validate an uploaded table before any processing
pub fn validate(table: &Table) -> ValidationResult {
    match check(table) {
        Ok(()) => ValidationResult::ok(),
        Err(e) => ValidationResult::failed(e),
    }
}

/// [`validate`] as a `Result`, first failing check wins
pub fn check(table: &Table) -> Result<(), ValidationError> {
    if table.is_empty() {
        return Err(ValidationError::EmptyInput);
    }
    if table.column_count() < 2 {
        return Err(ValidationError::InsufficientColumns);
    }
    let mut seen = HashSet::with_capacity(table.column_count());
    if !table.columns.iter().all(|name| seen.insert(name.as_str())) {
        return Err(ValidationError::DuplicateColumns);
    }
    Ok(())
}

/// Cleaned table plus any diagnostic for the shell
#[derive(Clone, Debug, PartialEq)]
pub struct ProcessOutcome {
    pub table: Table,
    /// Set when cleaning had to be abandoned
    pub diagnostic: Option<String>,
}

/// Clean a table. Never fails: if the table is malformed it is returned
/// unchanged together with a diagnostic.
pub fn process(table: Table) -> ProcessOutcome {
    if let Some((row, len)) = table.ragged_row() {
        let diagnostic = format!(
            "Error processing data: row {} has {} cells, expected {}",
            row + 1,
            len,
            table.column_count()
        );
        tracing::warn!("{}", diagnostic);
        return ProcessOutcome {
            table,
            diagnostic: Some(diagnostic),
        };
    }

    let mut table = table;
    let before = (table.row_count(), table.column_count());

    replace_non_finite(&mut table);
    coerce_numeric_columns(&mut table);
    replace_non_finite(&mut table);
    drop_blank_rows(&mut table);
    drop_blank_columns(&mut table);

    tracing::debug!(
        rows_before = before.0,
        columns_before = before.1,
        rows = table.row_count(),
        columns = table.column_count(),
        "Processed table"
    );

    ProcessOutcome {
        table,
        diagnostic: None,
    }
}

/// Reinterpret every cell as a number.
///
/// Returns `None` when any text cell does not parse, leaving the caller's
/// column untouched. Missing cells stay missing.
pub fn coerce_numeric(cells: &[DataCell]) -> Option<Vec<DataCell>> {
    cells
        .iter()
        .map(|cell| match cell {
            DataCell::Text(s) => s.trim().parse::<f64>().ok().map(DataCell::Number),
            other => Some(other.clone()),
        })
        .collect()
}

fn coerce_numeric_columns(table: &mut Table) {
    for idx in 0..table.column_count() {
        if table.column_type(idx) != DataType::Text {
            continue;
        }
        let cells: Vec<DataCell> = table.column_cells(idx).cloned().collect();
        if let Some(numbers) = coerce_numeric(&cells) {
            for (row, cell) in table.rows.iter_mut().zip(numbers) {
                row.cells[idx] = cell;
            }
        }
    }
}

fn replace_non_finite(table: &mut Table) {
    for cell in table.rows.iter_mut().flat_map(|row| row.cells.iter_mut()) {
        if matches!(cell, DataCell::Number(n) if !n.is_finite()) {
            *cell = DataCell::Empty;
        }
    }
}

fn drop_blank_rows(table: &mut Table) {
    table.rows.retain(|row| !row.is_blank());
}

fn drop_blank_columns(table: &mut Table) {
    let keep: Vec<bool> = (0..table.column_count())
        .map(|idx| table.column_cells(idx).any(|cell| !cell.is_empty()))
        .collect();
    if keep.iter().all(|&k| k) {
        return;
    }

    let mut flags = keep.iter();
    table.columns.retain(|_| *flags.next().unwrap_or(&true));
    for row in &mut table.rows {
        let mut flags = keep.iter();
        row.cells.retain(|_| *flags.next().unwrap_or(&true));
    }
}

//! CSV file parsing
//!
//! Parses comma-delimited CSV (header row required) into a [`Table`]. Cells
//! come out as text or missing; numeric coercion is left to
//! [`process`](crate::data::process) so it stays all-or-nothing per column.
//!
//! ## Memory Limits
//!
//! To prevent unbounded memory growth:
//! - Files larger than 100MB are rejected (see [`MAX_CSV_SIZE_MB`])
//! - Files with more than 100,000 rows are rejected (see [`MAX_CSV_ROWS`])

use crate::constants::{MAX_CSV_ROWS, MAX_CSV_SIZE_MB};
use crate::data::error::{DataError, DataResult};
use crate::types::{DataCell, DataRow, Table};
use std::path::Path;

/// Parse a CSV file into a Table
///
/// # Memory Limits
/// - Files larger than [`MAX_CSV_SIZE_MB`]MB will return [`DataError::TooLarge`]
/// - Files with more than [`MAX_CSV_ROWS`] rows will return [`DataError::TooManyRows`]
pub fn parse_csv_file(path: &Path) -> DataResult<Table> {
    // Check file size before reading
    let metadata = std::fs::metadata(path)?;
    let size_mb = metadata.len() / (1024 * 1024);
    if size_mb > MAX_CSV_SIZE_MB as u64 {
        return Err(DataError::TooLarge {
            size_mb,
            max_mb: MAX_CSV_SIZE_MB,
        });
    }

    let bytes = std::fs::read(path)?;
    parse_csv_bytes(&bytes)
}

/// Parse CSV content from raw bytes, as handed over by an upload
pub fn parse_csv_bytes(bytes: &[u8]) -> DataResult<Table> {
    let size_mb = bytes.len() as u64 / (1024 * 1024);
    if size_mb > MAX_CSV_SIZE_MB as u64 {
        return Err(DataError::TooLarge {
            size_mb,
            max_mb: MAX_CSV_SIZE_MB,
        });
    }

    // Strip a UTF-8 byte order mark so it doesn't end up in the first header
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(DataError::EmptyFile);
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes);

    let columns: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    if columns.is_empty() || columns.iter().all(String::is_empty) {
        return Err(DataError::NoColumns);
    }

    // Parse data rows with limit
    let mut rows: Vec<DataRow> = Vec::new();
    for record in reader.records() {
        let record = record?;
        if record.iter().all(|field| field.trim().is_empty()) && record.len() <= 1 {
            // A bare line break, not a row of empty fields
            continue;
        }
        if rows.len() >= MAX_CSV_ROWS {
            return Err(DataError::TooManyRows {
                rows: rows.len() + 1, // +1 for the current row that exceeded limit
                max_rows: MAX_CSV_ROWS,
            });
        }

        // Pad or truncate ragged records to the header width
        let cells: Vec<DataCell> = (0..columns.len())
            .map(|i| record.get(i).map(DataCell::from_raw).unwrap_or(DataCell::Empty))
            .collect();
        rows.push(DataRow::new(cells));
    }

    tracing::debug!(
        rows = rows.len(),
        columns = columns.len(),
        "Parsed CSV content"
    );

    Ok(Table::new(columns, rows))
}

/// Parse CSV content from a string
pub fn parse_csv_content(content: &str) -> DataResult<Table> {
    parse_csv_bytes(content.as_bytes())
}

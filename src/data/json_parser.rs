//! JSON record arrays
//!
//! Reads arrays of objects into a [`Table`] and writes a table back out as
//! one object per row, which is the shape of the `data.json` download.

use crate::data::error::{DataError, DataResult};
use crate::types::{DataCell, DataRow, Table};
use serde_json::{Map, Value};
use std::path::Path;

/// Parse a JSON file into a Table
pub fn parse_json_file(path: &Path) -> DataResult<Table> {
    let content = std::fs::read_to_string(path)?;
    parse_json_content(&content)
}

/// Parse JSON content from a string
pub fn parse_json_content(json: &str) -> DataResult<Table> {
    let value: Value = serde_json::from_str(json)?;
    let array = extract_array(&value)?;

    // Columns in order of first appearance across all records
    let mut columns: Vec<String> = Vec::new();
    for item in array {
        let obj = item
            .as_object()
            .ok_or_else(|| DataError::InvalidData("Array elements must be objects".to_string()))?;
        for key in obj.keys() {
            if !columns.contains(key) {
                columns.push(key.clone());
            }
        }
    }

    let rows: Vec<DataRow> = array
        .iter()
        .filter_map(Value::as_object)
        .map(|obj| {
            DataRow::new(
                columns
                    .iter()
                    .map(|col| obj.get(col).map(json_value_to_cell).unwrap_or(DataCell::Empty))
                    .collect(),
            )
        })
        .collect();

    Ok(Table::new(columns, rows))
}

/// Extract the array from JSON value, handling common wrapper patterns
fn extract_array(value: &Value) -> DataResult<&Vec<Value>> {
    match value {
        Value::Array(arr) => Ok(arr),
        Value::Object(obj) => {
            // Try common wrapper patterns: data, rows, items, records, results
            let wrapper_keys = ["data", "rows", "items", "records", "results"];
            for key in wrapper_keys {
                if let Some(Value::Array(arr)) = obj.get(key) {
                    return Ok(arr);
                }
            }
            Err(DataError::InvalidData(
                "JSON must be an array or have a data/rows/items/records/results array"
                    .to_string(),
            ))
        }
        _ => Err(DataError::InvalidData(
            "JSON must be an array of objects".to_string(),
        )),
    }
}

/// Convert a JSON value to a DataCell
fn json_value_to_cell(value: &Value) -> DataCell {
    match value {
        Value::Null => DataCell::Empty,
        Value::Number(n) => n.as_f64().map(DataCell::Number).unwrap_or(DataCell::Empty),
        Value::String(s) => DataCell::from_raw(s),
        Value::Bool(b) => DataCell::Text(b.to_string()),
        Value::Array(arr) => {
            // Convert arrays to string representation
            DataCell::Text(
                arr.iter()
                    .map(|v| format!("{}", v))
                    .collect::<Vec<_>>()
                    .join(", "),
            )
        }
        // Convert objects to JSON string
        Value::Object(_) => DataCell::Text(value.to_string()),
    }
}

/// Convert a Table to row-oriented JSON values (one object per row)
pub fn table_to_records(table: &Table) -> Vec<Map<String, Value>> {
    table
        .rows
        .iter()
        .map(|row| {
            let mut obj = Map::new();
            for (col_idx, cell) in row.cells.iter().enumerate() {
                if let Some(name) = table.columns.get(col_idx) {
                    obj.insert(name.clone(), cell_to_json_value(cell));
                }
            }
            obj
        })
        .collect()
}

/// Convert a Table to compact JSON string content (array of objects)
pub fn write_json_content(table: &Table) -> DataResult<String> {
    Ok(serde_json::to_string(&table_to_records(table))?)
}

/// Convert a DataCell to a JSON Value
pub fn cell_to_json_value(cell: &DataCell) -> Value {
    match cell {
        DataCell::Text(s) => Value::String(s.clone()),
        DataCell::Number(n) => {
            // Use integer if it's a whole number
            if n.fract() == 0.0 && *n >= i64::MIN as f64 && *n <= i64::MAX as f64 {
                Value::Number(serde_json::Number::from(*n as i64))
            } else {
                serde_json::Number::from_f64(*n)
                    .map(Value::Number)
                    .unwrap_or(Value::Null)
            }
        }
        DataCell::Empty => Value::Null,
    }
}

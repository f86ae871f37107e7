//! Core types for hierviz.
//!
//! This module defines the table model shared by the reader, the preparer
//! and the chart builder, plus the chart selections the shell hands in.

use crate::constants::{DEFAULT_CHART_HEIGHT, DEFAULT_CHART_WIDTH, DEFAULT_SCHEME_SENTINEL};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Table Types
// ============================================================================

/// A table of named columns and rows of cells.
///
/// Every row is expected to hold exactly one cell per column. Column names
/// are not forced to be unique here: input may repeat them, and
/// [`validate`](crate::data::validate) is what rejects that.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// Column names, in order
    pub columns: Vec<String>,
    /// Data rows
    pub rows: Vec<DataRow>,
}

impl Table {
    pub fn new(columns: Vec<String>, rows: Vec<DataRow>) -> Self {
        Self { columns, rows }
    }

    /// Get the number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get the number of columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Whether the table holds no data at all
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() || self.columns.is_empty()
    }

    /// Index of the first column with this name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Iterate over the cells of one column, top to bottom
    pub fn column_cells(&self, idx: usize) -> impl Iterator<Item = &DataCell> + '_ {
        self.rows.iter().filter_map(move |row| row.cells.get(idx))
    }

    /// Derive the type of a column from its non-missing cells
    pub fn column_type(&self, idx: usize) -> DataType {
        DataType::infer(self.column_cells(idx))
    }

    /// Names of the columns whose non-missing cells are all numbers
    pub fn numeric_columns(&self) -> Vec<String> {
        self.columns
            .iter()
            .enumerate()
            .filter(|(i, _)| self.column_type(*i) == DataType::Number)
            .map(|(_, name)| name.clone())
            .collect()
    }

    /// First `n` rows, for previews
    pub fn head(&self, n: usize) -> Table {
        Table {
            columns: self.columns.clone(),
            rows: self.rows.iter().take(n).cloned().collect(),
        }
    }

    /// First row whose cell count differs from the column count, if any
    pub fn ragged_row(&self) -> Option<(usize, usize)> {
        self.rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.cells.len() != self.columns.len())
            .map(|(i, row)| (i, row.cells.len()))
    }
}

/// A row of data cells
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DataRow {
    pub cells: Vec<DataCell>,
}

impl DataRow {
    pub fn new(cells: Vec<DataCell>) -> Self {
        Self { cells }
    }

    /// Whether every cell in the row is missing
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(DataCell::is_empty)
    }
}

/// A single cell value
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum DataCell {
    Text(String),
    Number(f64),
    Empty,
}

impl DataCell {
    /// Build a cell from raw text: blank text is missing
    pub fn from_raw(value: &str) -> Self {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            DataCell::Empty
        } else {
            DataCell::Text(trimmed.to_string())
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, DataCell::Empty)
    }

    /// The number held by this cell, if any
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            DataCell::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl fmt::Display for DataCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataCell::Text(s) => f.write_str(s),
            DataCell::Number(n) => {
                // Format nicely: no trailing zeros for whole numbers
                if n.fract() == 0.0 && n.abs() < i64::MAX as f64 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{}", n)
                }
            }
            DataCell::Empty => Ok(()),
        }
    }
}

/// Column type, derived from the cells present
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataType {
    /// Every non-missing cell is text
    Text,
    /// Every non-missing cell is a number
    Number,
    /// Both text and numbers
    Mixed,
    /// No non-missing cells
    Empty,
}

impl DataType {
    pub fn infer<'a>(cells: impl IntoIterator<Item = &'a DataCell>) -> Self {
        let mut seen_text = false;
        let mut seen_number = false;
        for cell in cells {
            match cell {
                DataCell::Text(_) => seen_text = true,
                DataCell::Number(_) => seen_number = true,
                DataCell::Empty => {}
            }
        }
        match (seen_text, seen_number) {
            (true, true) => DataType::Mixed,
            (true, false) => DataType::Text,
            (false, true) => DataType::Number,
            (false, false) => DataType::Empty,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DataType::Text => "text",
            DataType::Number => "number",
            DataType::Mixed => "mixed",
            DataType::Empty => "empty",
        }
    }
}

// ============================================================================
// Chart Types
// ============================================================================

/// Types of hierarchical charts available
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartKind {
    #[default]
    Sunburst,
    Treemap,
    Icicle,
}

impl ChartKind {
    pub fn label(&self) -> &'static str {
        match self {
            ChartKind::Sunburst => "Sunburst",
            ChartKind::Treemap => "Treemap",
            ChartKind::Icicle => "Icicle",
        }
    }

    pub fn all() -> &'static [ChartKind] {
        &[ChartKind::Sunburst, ChartKind::Treemap, ChartKind::Icicle]
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ChartKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ChartKind::all()
            .iter()
            .copied()
            .find(|kind| kind.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| wanted.to_string())
    }
}

/// Named color palettes offered by the shell
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorScheme {
    /// No override: the continuous default applies
    #[default]
    Default,
    Viridis,
    Plasma,
    Blues,
    Reds,
}

impl ColorScheme {
    pub fn label(&self) -> &'static str {
        match self {
            ColorScheme::Default => DEFAULT_SCHEME_SENTINEL,
            ColorScheme::Viridis => "Viridis",
            ColorScheme::Plasma => "Plasma",
            ColorScheme::Blues => "Blues",
            ColorScheme::Reds => "Reds",
        }
    }

    pub fn all() -> &'static [ColorScheme] {
        &[
            ColorScheme::Default,
            ColorScheme::Viridis,
            ColorScheme::Plasma,
            ColorScheme::Blues,
            ColorScheme::Reds,
        ]
    }

    /// The palette to attach as an override, if this is not the default
    pub fn as_override(self) -> Option<ColorScheme> {
        match self {
            ColorScheme::Default => None,
            other => Some(other),
        }
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ColorScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ColorScheme::all()
            .iter()
            .copied()
            .find(|scheme| scheme.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| wanted.to_string())
    }
}

/// Chart selections collected by the shell.
///
/// Kind and palette are kept as the names the user picked; the builder
/// resolves them while validating, so a bad name surfaces as a
/// configuration error in its proper place in the check order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSettings {
    /// Chart kind name ("Sunburst", "Treemap" or "Icicle")
    pub chart_kind: String,
    /// Hierarchy columns, root to leaf
    pub path_columns: Vec<String>,
    /// Sizing column, or "None"
    pub values_column: Option<String>,
    /// Coloring column, or "None"
    pub color_column: Option<String>,
    /// Palette name, or "Default"
    pub color_scheme: Option<String>,
    pub width: u32,
    pub height: u32,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            chart_kind: ChartKind::default().label().to_string(),
            path_columns: Vec::new(),
            values_column: None,
            color_column: None,
            color_scheme: None,
            width: DEFAULT_CHART_WIDTH,
            height: DEFAULT_CHART_HEIGHT,
        }
    }
}

impl ChartSettings {
    pub fn new(chart_kind: ChartKind, path_columns: Vec<String>) -> Self {
        Self {
            chart_kind: chart_kind.label().to_string(),
            path_columns,
            ..Default::default()
        }
    }

    pub fn with_values(mut self, column: impl Into<String>) -> Self {
        self.values_column = Some(column.into());
        self
    }

    pub fn with_color(mut self, column: impl Into<String>) -> Self {
        self.color_column = Some(column.into());
        self
    }

    pub fn with_color_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.color_scheme = Some(scheme.into());
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

//! Per-user session context.
//!
//! A `Session` holds what persists between interactions for one user: the
//! chart kind, palette and size selections, the last loaded table and the
//! last error. It is created at session start from [`AppSettings`] and
//! passed by reference into each operation; sessions share nothing.

use crate::chart::{create_chart, ChartSpec};
use crate::constants::{NONE_SENTINEL, SLOW_OPERATION_MS};
use crate::data::{check, parse_csv_bytes, process, DataError};
use crate::error::VizError;
use crate::perf::measure_and_log;
use crate::settings::{clamp_dimension, AppSettings};
use crate::types::{ChartKind, ChartSettings, ColorScheme, Table};

/// Choices offered by the column pickers
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColumnOptions {
    /// Every column, for the hierarchy multi-select
    pub hierarchy: Vec<String>,
    /// "None" plus the numeric columns
    pub values: Vec<String>,
    /// "None" plus every column
    pub color: Vec<String>,
}

pub struct Session {
    chart_kind: ChartKind,
    color_scheme: ColorScheme,
    width: u32,
    height: u32,
    preview_rows: usize,
    data: Option<Table>,
    last_error: Option<String>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(&AppSettings::default())
    }
}

impl Session {
    /// Start a session from the user's settings
    pub fn new(settings: &AppSettings) -> Self {
        Self {
            chart_kind: settings.chart_kind,
            color_scheme: settings.color_scheme,
            width: clamp_dimension(settings.width),
            height: clamp_dimension(settings.height),
            preview_rows: settings.preview_rows,
            data: None,
            last_error: None,
        }
    }

    pub fn chart_kind(&self) -> ChartKind {
        self.chart_kind
    }

    pub fn set_chart_kind(&mut self, kind: ChartKind) {
        self.chart_kind = kind;
    }

    pub fn color_scheme(&self) -> ColorScheme {
        self.color_scheme
    }

    pub fn set_color_scheme(&mut self, scheme: ColorScheme) {
        self.color_scheme = scheme;
    }

    /// Current (width, height)
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Set the width, clamped to the offered range
    pub fn set_width(&mut self, width: u32) {
        self.width = clamp_dimension(width);
    }

    /// Set the height, clamped to the offered range
    pub fn set_height(&mut self, height: u32) {
        self.height = clamp_dimension(height);
    }

    /// The cleaned table, if one is loaded
    pub fn data(&self) -> Option<&Table> {
        self.data.as_ref()
    }

    /// Message of the most recent failure or cleaning diagnostic
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Parse, validate and clean an uploaded CSV file
    pub fn load_csv(&mut self, bytes: &[u8]) -> Result<&Table, VizError> {
        match parse_csv_bytes(bytes) {
            Ok(table) => self.load_table(table),
            // Nothing to read is reported by validation, like a header-only file
            Err(DataError::EmptyFile | DataError::NoColumns) => self.load_table(Table::default()),
            Err(e) => {
                self.data = None;
                Err(self.record(e.into()))
            }
        }
    }

    /// Validate and clean a table. A rejected table replaces any earlier
    /// one, since it stands for a new upload.
    pub fn load_table(&mut self, table: Table) -> Result<&Table, VizError> {
        self.last_error = None;
        if let Err(e) = check(&table) {
            self.data = None;
            return Err(self.record(e.into()));
        }

        let outcome = measure_and_log("process", SLOW_OPERATION_MS, || process(table));
        if let Some(diagnostic) = &outcome.diagnostic {
            tracing::warn!("{}", diagnostic);
        }
        self.last_error = outcome.diagnostic;
        Ok(self.data.insert(outcome.table))
    }

    /// Settings for a chart from the session's selections
    pub fn chart_settings(
        &self,
        path_columns: Vec<String>,
        values_column: Option<String>,
        color_column: Option<String>,
    ) -> ChartSettings {
        ChartSettings {
            chart_kind: self.chart_kind.label().to_string(),
            path_columns,
            values_column,
            color_column,
            color_scheme: Some(self.color_scheme.label().to_string()),
            width: self.width,
            height: self.height,
        }
    }

    /// Build a chart from the loaded table. On failure the table stays
    /// loaded and the error is remembered.
    pub fn generate(
        &mut self,
        path_columns: Vec<String>,
        values_column: Option<String>,
        color_column: Option<String>,
    ) -> Result<ChartSpec, VizError> {
        let settings = self.chart_settings(path_columns, values_column, color_column);
        let result = match &self.data {
            Some(table) => create_chart(table, &settings).map_err(VizError::from),
            None => Err(VizError::NoData),
        };
        match result {
            Ok(spec) => {
                self.last_error = None;
                Ok(spec)
            }
            Err(e) => Err(self.record(e)),
        }
    }

    /// Picker choices for the loaded table
    pub fn column_options(&self) -> ColumnOptions {
        let Some(table) = &self.data else {
            return ColumnOptions::default();
        };
        let with_none = |names: Vec<String>| {
            std::iter::once(NONE_SENTINEL.to_string())
                .chain(names)
                .collect::<Vec<_>>()
        };
        ColumnOptions {
            hierarchy: table.columns.clone(),
            values: with_none(table.numeric_columns()),
            color: with_none(table.columns.clone()),
        }
    }

    /// Rows shown by a preview unless asked otherwise
    pub fn preview_rows(&self) -> usize {
        self.preview_rows
    }

    /// First `n` rows of the loaded table
    pub fn preview(&self, n: usize) -> Option<Table> {
        self.data.as_ref().map(|t| t.head(n))
    }

    fn record(&mut self, error: VizError) -> VizError {
        tracing::warn!("{}", error);
        self.last_error = Some(error.user_message());
        error
    }
}

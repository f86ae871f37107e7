//! Boundary errors.
//!
//! Library operations return these instead of panicking. The shell shows
//! `user_message()` and, on request, `technical_details()`.

use crate::data::{DataError, ValidationError};
use std::fmt;
use thiserror::Error;

/// Which selection a missing column was picked for
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnRole {
    Hierarchy,
    Values,
    Color,
}

impl fmt::Display for ColumnRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ColumnRole::Hierarchy => "Hierarchy",
            ColumnRole::Values => "Values",
            ColumnRole::Color => "Color",
        })
    }
}

/// Problems with the chart selections themselves
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("No hierarchy columns selected")]
    MissingHierarchy,

    #[error("Invalid chart type: {0}")]
    UnknownChartKind(String),

    #[error("{}", column_not_found_message(.role, .columns))]
    ColumnNotFound { role: ColumnRole, columns: Vec<String> },

    #[error("Invalid color scheme: {0}")]
    UnknownColorScheme(String),
}

fn column_not_found_message(role: &ColumnRole, columns: &[String]) -> String {
    match role {
        ColumnRole::Hierarchy => format!("Columns not found in data: {}", columns.join(", ")),
        ColumnRole::Values | ColumnRole::Color => format!(
            "{} column '{}' not found in data",
            role,
            columns.join(", ")
        ),
    }
}

/// Errors from [`create_chart`](crate::chart::create_chart)
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The selections were valid but the data could not be charted
    #[error("{0}")]
    Construction(String),
}

/// Every failure the shell can be handed
#[derive(Error, Debug)]
pub enum VizError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Configuration(#[from] ConfigError),

    /// A chart was requested before any table was loaded
    #[error("Upload a CSV file first")]
    NoData,

    #[error("{context}: {detail}")]
    Unexpected { context: String, detail: String },
}

impl VizError {
    pub fn unexpected(context: impl Into<String>, detail: impl fmt::Display) -> Self {
        VizError::Unexpected {
            context: context.into(),
            detail: detail.to_string(),
        }
    }

    /// Message for the user. Unexpected failures get the context only.
    pub fn user_message(&self) -> String {
        match self {
            VizError::Validation(e) => e.to_string(),
            VizError::Configuration(e) => e.to_string(),
            VizError::NoData => self.to_string(),
            VizError::Unexpected { context, .. } => context.clone(),
        }
    }

    /// Expandable technical detail, present for unexpected failures
    pub fn technical_details(&self) -> Option<&str> {
        match self {
            VizError::Unexpected { detail, .. } => Some(detail),
            _ => None,
        }
    }
}

impl From<ChartError> for VizError {
    fn from(e: ChartError) -> Self {
        match e {
            ChartError::Config(c) => VizError::Configuration(c),
            ChartError::Construction(detail) => VizError::Unexpected {
                context: "Error creating visualization".to_string(),
                detail,
            },
        }
    }
}

impl From<DataError> for VizError {
    fn from(e: DataError) -> Self {
        VizError::unexpected("Error processing file", e)
    }
}

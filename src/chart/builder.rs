//! Chart construction
//!
//! [`create_chart`] validates chart selections against a table, fail fast
//! in a fixed order:
//! 1. At least one hierarchy column
//! 2. A known chart kind
//! 3. Every hierarchy column present (all missing ones are named)
//! 4. Values column present, unless "None"
//! 5. Color column present, unless "None"
//!
//! and only then builds the hierarchy. Nothing is built on failure.
//!
//! The palette arrives as a free-form name from the shell, so after those
//! checks it is also resolved, and an unknown name fails with
//! [`ConfigError::UnknownColorScheme`]. "Default" means no override.

use crate::chart::hierarchy::{build_hierarchy, ColorField};
use crate::chart::spec::{ChartLayout, ChartSpec, ColorBinding, ColorMode};
use crate::constants::{DEFAULT_SCHEME_SENTINEL, NONE_SENTINEL, SLOW_OPERATION_MS};
use crate::error::{ChartError, ColumnRole, ConfigError};
use crate::perf::ScopedTimer;
use crate::types::{ChartKind, ChartSettings, ColorScheme, DataType, Table};

/// Build a chart from a cleaned table and the user's selections
pub fn create_chart(table: &Table, settings: &ChartSettings) -> Result<ChartSpec, ChartError> {
    let _timer = ScopedTimer::new("create_chart", SLOW_OPERATION_MS);

    if settings.path_columns.is_empty() {
        return Err(ConfigError::MissingHierarchy.into());
    }

    let kind = settings
        .chart_kind
        .parse::<ChartKind>()
        .map_err(ConfigError::UnknownChartKind)?;

    let missing: Vec<String> = settings
        .path_columns
        .iter()
        .filter(|col| !table.has_column(col))
        .cloned()
        .collect();
    if !missing.is_empty() {
        return Err(ConfigError::ColumnNotFound {
            role: ColumnRole::Hierarchy,
            columns: missing,
        }
        .into());
    }

    let values = optional_column(table, settings.values_column.as_deref(), ColumnRole::Values)?;
    let color = optional_column(table, settings.color_column.as_deref(), ColumnRole::Color)?;
    let color_scheme = resolve_color_scheme(settings.color_scheme.as_deref())?;

    let path: Vec<usize> = settings
        .path_columns
        .iter()
        .filter_map(|col| table.column_index(col))
        .collect();

    let color_field = color.map(|idx| match table.column_type(idx) {
        DataType::Number => ColorField::Continuous(idx),
        _ => ColorField::Categorical(idx),
    });

    let hierarchy = build_hierarchy(table, &path, values, color_field)
        .map_err(ChartError::Construction)?;

    let color = color_field.map(|field| match field {
        ColorField::Continuous(idx) => ColorBinding {
            column: table.columns[idx].clone(),
            mode: ColorMode::Continuous,
        },
        ColorField::Categorical(idx) => ColorBinding {
            column: table.columns[idx].clone(),
            mode: ColorMode::Categorical,
        },
    });

    if color_scheme.is_some() && matches!(color_field, Some(ColorField::Categorical(_))) {
        tracing::debug!("Color scheme override has no effect on a categorical color column");
    }

    tracing::debug!(
        kind = kind.label(),
        levels = path.len(),
        nodes = hierarchy.nodes.len(),
        "Built chart"
    );

    Ok(ChartSpec {
        kind,
        path: settings.path_columns.clone(),
        values: values.map(|idx| table.columns[idx].clone()),
        color,
        color_scheme,
        hierarchy,
        layout: ChartLayout::new(settings.width, settings.height),
    })
}

/// Whether a selection means "no column"
pub fn is_unset(selection: Option<&str>) -> bool {
    match selection {
        None => true,
        Some(s) => s.trim().is_empty() || s.trim().eq_ignore_ascii_case(NONE_SENTINEL),
    }
}

fn optional_column(
    table: &Table,
    selection: Option<&str>,
    role: ColumnRole,
) -> Result<Option<usize>, ConfigError> {
    if is_unset(selection) {
        return Ok(None);
    }
    let name = selection.unwrap_or_default();
    table
        .column_index(name)
        .map(Some)
        .ok_or_else(|| ConfigError::ColumnNotFound {
            role,
            columns: vec![name.to_string()],
        })
}

fn resolve_color_scheme(selection: Option<&str>) -> Result<Option<ColorScheme>, ConfigError> {
    match selection.map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) if s.eq_ignore_ascii_case(DEFAULT_SCHEME_SENTINEL) => Ok(None),
        Some(s) => s
            .parse::<ColorScheme>()
            .map(ColorScheme::as_override)
            .map_err(ConfigError::UnknownColorScheme),
    }
}

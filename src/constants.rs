//! Application-wide constants.
//!
//! Centralizes limits, defaults and layout values so the reader, builder
//! and shell agree on them.

// ============================================================================
// Input Limits
// ============================================================================

/// Largest CSV file (in MB) accepted by the reader
pub const MAX_CSV_SIZE_MB: usize = 100;

/// Largest number of data rows accepted by the reader
pub const MAX_CSV_ROWS: usize = 100_000;

// ============================================================================
// Chart Dimensions
// ============================================================================

/// Smallest width/height the shell may request, in pixels
pub const MIN_CHART_DIMENSION: u32 = 400;

/// Largest width/height the shell may request, in pixels
pub const MAX_CHART_DIMENSION: u32 = 1200;

/// Default chart width in pixels
pub const DEFAULT_CHART_WIDTH: u32 = 800;

/// Default chart height in pixels
pub const DEFAULT_CHART_HEIGHT: u32 = 800;

/// Rows shown in a data preview
pub const DEFAULT_PREVIEW_ROWS: usize = 5;

// ============================================================================
// Layout (fixed, independent of settings)
// ============================================================================

pub const MARGIN_TOP: u32 = 30;
pub const MARGIN_LEFT: u32 = 10;
pub const MARGIN_RIGHT: u32 = 10;
pub const MARGIN_BOTTOM: u32 = 10;

/// Horizontal title anchor (centered)
pub const TITLE_X: f64 = 0.5;

/// Vertical title anchor
pub const TITLE_Y: f64 = 0.95;

// ============================================================================
// Selection Sentinels
// ============================================================================

/// Column selection meaning "no column"
pub const NONE_SENTINEL: &str = "None";

/// Palette selection meaning "no override"
pub const DEFAULT_SCHEME_SENTINEL: &str = "Default";

/// Separator joining path levels into node ids
pub const NODE_ID_SEPARATOR: char = '/';

/// Escapes the separator (and itself) inside labels that make up node ids
pub const NODE_ID_ESCAPE: char = '\\';

/// Category shown for nodes whose rows disagree on a categorical color
pub const MIXED_CATEGORY: &str = "(?)";

// ============================================================================
// Exports
// ============================================================================

pub const HTML_FILE_NAME: &str = "visualization.html";
pub const HTML_MIME: &str = "text/html";
pub const JSON_FILE_NAME: &str = "data.json";
pub const JSON_MIME: &str = "application/json";

/// Plotly.js bundle loaded by the standalone document
pub const PLOTLY_CDN_URL: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

/// Threshold above which chart builds are logged as slow
pub const SLOW_OPERATION_MS: f64 = 250.0;

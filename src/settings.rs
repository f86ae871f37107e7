//! User settings.
//!
//! A JSON settings file supplies the defaults a new session starts with.
//! Every field in the file is optional; anything left out falls back to
//! [`AppSettings::default`].
//!
//! ```json
//! { "chart_kind": "Treemap", "color_scheme": "Viridis", "width": 1000 }
//! ```

use crate::constants::{
    DEFAULT_CHART_HEIGHT, DEFAULT_CHART_WIDTH, DEFAULT_PREVIEW_ROWS, MAX_CHART_DIMENSION,
    MIN_CHART_DIMENSION,
};
use crate::data::DataResult;
use crate::types::{ChartKind, ColorScheme};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Resolved settings with every field filled in
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSettings {
    pub chart_kind: ChartKind,
    pub color_scheme: ColorScheme,
    pub width: u32,
    pub height: u32,
    /// Rows shown by previews
    pub preview_rows: usize,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            chart_kind: ChartKind::Sunburst,
            color_scheme: ColorScheme::Default,
            width: DEFAULT_CHART_WIDTH,
            height: DEFAULT_CHART_HEIGHT,
            preview_rows: DEFAULT_PREVIEW_ROWS,
        }
    }
}

/// Settings as stored on disk, every field optional
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chart_kind: Option<ChartKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_scheme: Option<ColorScheme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview_rows: Option<usize>,
}

impl AppSettings {
    /// Overlay stored content on the defaults
    pub fn from_content(content: SettingsContent) -> Self {
        let defaults = Self::default();
        Self {
            chart_kind: content.chart_kind.unwrap_or(defaults.chart_kind),
            color_scheme: content.color_scheme.unwrap_or(defaults.color_scheme),
            width: clamp_dimension(content.width.unwrap_or(defaults.width)),
            height: clamp_dimension(content.height.unwrap_or(defaults.height)),
            preview_rows: content.preview_rows.unwrap_or(defaults.preview_rows),
        }
    }

    /// Load settings from `path`. A missing file means defaults.
    pub fn load(path: &Path) -> DataResult<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No settings file, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let content: SettingsContent = serde_json::from_str(&content)?;
        Ok(Self::from_content(content))
    }

    /// Load from the default location, falling back to defaults on any error
    pub fn load_or_default() -> Self {
        let Some(path) = default_settings_path() else {
            return Self::default();
        };
        match Self::load(&path) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("Failed to load settings from {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save as a full settings file
    pub fn save(&self, path: &Path) -> DataResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = SettingsContent {
            chart_kind: Some(self.chart_kind),
            color_scheme: Some(self.color_scheme),
            width: Some(self.width),
            height: Some(self.height),
            preview_rows: Some(self.preview_rows),
        };
        std::fs::write(path, serde_json::to_string_pretty(&content)?)?;
        Ok(())
    }
}

/// Keep a width or height inside the range the shell offers
pub fn clamp_dimension(value: u32) -> u32 {
    value.clamp(MIN_CHART_DIMENSION, MAX_CHART_DIMENSION)
}

/// `<config dir>/hierviz/settings.json`
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("hierviz").join("settings.json"))
}

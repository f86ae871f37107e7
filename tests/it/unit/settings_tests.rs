//! Unit tests for settings loading.

use hierviz::data::DataError;
use hierviz::settings::{clamp_dimension, default_settings_path, AppSettings};
use hierviz::types::{ChartKind, ColorScheme};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_missing_file_gives_defaults() {
    let dir = tempdir().unwrap();
    let settings = AppSettings::load(&dir.path().join("settings.json")).unwrap();
    assert_eq!(settings, AppSettings::default());
}

#[test]
fn test_load_partial_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, r#"{"color_scheme": "Reds", "height": 2000}"#).unwrap();

    let settings = AppSettings::load(&path).unwrap();
    assert_eq!(settings.color_scheme, ColorScheme::Reds);
    assert_eq!(settings.height, 1200);
    assert_eq!(settings.chart_kind, ChartKind::Sunburst);
}

#[test]
fn test_invalid_file_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, "{ not json").unwrap();

    assert!(matches!(AppSettings::load(&path), Err(DataError::Json(_))));
}

#[test]
fn test_save_then_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("settings.json");
    let settings = AppSettings {
        chart_kind: ChartKind::Icicle,
        color_scheme: ColorScheme::Blues,
        width: 640,
        height: 480,
        preview_rows: 10,
    };

    settings.save(&path).unwrap();
    assert_eq!(AppSettings::load(&path).unwrap(), settings);
}

#[test]
fn test_clamp_dimension() {
    assert_eq!(clamp_dimension(0), 400);
    assert_eq!(clamp_dimension(800), 800);
    assert_eq!(clamp_dimension(u32::MAX), 1200);
}

#[test]
fn test_default_path() {
    // None only where the platform has no config directory
    if let Some(path) = default_settings_path() {
        assert!(path.ends_with("hierviz/settings.json"));
    }
}

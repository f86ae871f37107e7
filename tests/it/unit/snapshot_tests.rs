//! Snapshot tests using the insta crate.
//!
//! Serialized shapes that other tools read (settings files, validation
//! results, figure layout) are pinned inline.
//!
//! To update snapshots after intentional changes:
//! ```sh
//! cargo insta test --accept
//! ```

use hierviz::chart::ChartLayout;
use hierviz::data::{validate, ValidationError, ValidationResult};
use hierviz::settings::{AppSettings, SettingsContent};
use hierviz::types::{ChartKind, ColorScheme};

#[test]
fn snapshot_default_settings() {
    insta::assert_json_snapshot!(AppSettings::default(), @r###"
    {
      "chart_kind": "Sunburst",
      "color_scheme": "Default",
      "width": 800,
      "height": 800,
      "preview_rows": 5
    }
    "###);
}

#[test]
fn snapshot_partial_settings_content() {
    let content = SettingsContent {
        chart_kind: Some(ChartKind::Icicle),
        color_scheme: Some(ColorScheme::Viridis),
        width: Some(1000),
        ..Default::default()
    };
    insta::assert_json_snapshot!(content, @r###"
    {
      "chart_kind": "Icicle",
      "color_scheme": "Viridis",
      "width": 1000
    }
    "###);
}

#[test]
fn snapshot_failed_validation() {
    let result = ValidationResult::failed(ValidationError::DuplicateColumns);
    insta::assert_json_snapshot!(result, @r###"
    {
      "valid": false,
      "message": "File contains duplicate column names"
    }
    "###);
}

#[test]
fn snapshot_passed_validation() {
    let table = crate::helpers::sales_table();
    insta::assert_json_snapshot!(validate(&table), @r###"
    {
      "valid": true,
      "message": ""
    }
    "###);
}

#[test]
fn snapshot_layout() {
    insta::assert_json_snapshot!(ChartLayout::new(800, 600), @r###"
    {
      "width": 800,
      "height": 600,
      "margin": {
        "t": 30,
        "l": 10,
        "r": 10,
        "b": 10
      },
      "title": {
        "x": 0.5,
        "y": 0.95
      }
    }
    "###);
}

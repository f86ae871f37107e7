//! Unit tests for chart construction.

use crate::helpers::{num, sales_table, text, TestTableBuilder};
use hierviz::chart::{create_chart, ColorMode, NodeColor};
use hierviz::data::process;
use hierviz::error::{ChartError, ColumnRole, ConfigError};
use hierviz::types::{ChartKind, ChartSettings, ColorScheme, DataCell, Table};
use proptest::prelude::*;

fn processed_sales() -> Table {
    process(sales_table()).table
}

fn settings(path: &[&str]) -> ChartSettings {
    ChartSettings::new(
        ChartKind::Sunburst,
        path.iter().map(|p| p.to_string()).collect(),
    )
}

#[test]
fn test_two_level_chart_with_values() {
    let spec = create_chart(&processed_sales(), &settings(&["Region", "Country"]).with_values("Sales"))
        .unwrap();

    assert_eq!(spec.kind, ChartKind::Sunburst);
    assert_eq!(spec.depth(), 2);
    assert_eq!(spec.values.as_deref(), Some("Sales"));
    assert!(spec.color.is_none());

    let h = &spec.hierarchy;
    let ids: Vec<&str> = h.nodes.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(
        ids,
        vec![
            "Europe",
            "Europe/France",
            "Europe/Germany",
            "Asia",
            "Asia/Japan",
            "Asia/China"
        ]
    );
    assert_eq!(h.node("Europe").unwrap().value, 350.0);
    assert_eq!(h.node("Europe/France").unwrap().value, 150.0);
    assert_eq!(h.node("Asia").unwrap().value, 400.0);
}

#[test]
fn test_parent_value_is_total_of_children() {
    let spec = create_chart(&processed_sales(), &settings(&["Region", "Country"]).with_values("Sales"))
        .unwrap();
    let h = &spec.hierarchy;
    for root in h.roots() {
        let children: f64 = h.children(&root.id).map(|c| c.value).sum();
        assert_eq!(root.value, children);
    }
}

#[test]
fn test_none_values_sizes_by_row_count() {
    let spec = create_chart(&processed_sales(), &settings(&["Region"]).with_values("None")).unwrap();
    assert_eq!(spec.values, None);
    assert_eq!(spec.hierarchy.node("Europe").unwrap().value, 3.0);
    assert_eq!(spec.hierarchy.node("Asia").unwrap().value, 2.0);
}

#[test]
fn test_each_kind_is_accepted() {
    for kind in ChartKind::all() {
        let spec = create_chart(
            &processed_sales(),
            &ChartSettings::new(*kind, vec!["Region".into()]),
        )
        .unwrap();
        assert_eq!(spec.kind, *kind);
    }
}

#[test]
fn test_kind_names_are_case_insensitive() {
    let mut s = settings(&["Region"]);
    s.chart_kind = "treemap".into();
    assert_eq!(create_chart(&processed_sales(), &s).unwrap().kind, ChartKind::Treemap);
}

#[test]
fn test_empty_path_is_missing_hierarchy() {
    let err = create_chart(&processed_sales(), &settings(&[])).unwrap_err();
    assert_eq!(err, ChartError::Config(ConfigError::MissingHierarchy));
    assert_eq!(err.to_string(), "No hierarchy columns selected");
}

#[test]
fn test_unknown_kind_message() {
    let mut s = settings(&["Region"]);
    s.chart_kind = "Pie".into();
    let err = create_chart(&processed_sales(), &s).unwrap_err();
    assert_eq!(err.to_string(), "Invalid chart type: Pie");
}

#[test]
fn test_missing_values_column() {
    let err = create_chart(
        &processed_sales(),
        &settings(&["Region", "Country"]).with_values("Nonexistent"),
    )
    .unwrap_err();
    assert_eq!(
        err,
        ChartError::Config(ConfigError::ColumnNotFound {
            role: ColumnRole::Values,
            columns: vec!["Nonexistent".into()],
        })
    );
    assert_eq!(err.to_string(), "Values column 'Nonexistent' not found in data");
}

#[test]
fn test_missing_color_column() {
    let err = create_chart(&processed_sales(), &settings(&["Region"]).with_color("Profit"))
        .unwrap_err();
    assert_eq!(err.to_string(), "Color column 'Profit' not found in data");
}

#[test]
fn test_path_columns_checked_before_values() {
    let err = create_chart(
        &processed_sales(),
        &settings(&["Region", "City"]).with_values("Nonexistent"),
    )
    .unwrap_err();
    assert_eq!(err.to_string(), "Columns not found in data: City");
}

#[test]
fn test_text_color_column_is_categorical() {
    let spec = create_chart(&processed_sales(), &settings(&["Region", "Country"]).with_color("Region"))
        .unwrap();
    let binding = spec.color.unwrap();
    assert_eq!(binding.column, "Region");
    assert_eq!(binding.mode, ColorMode::Categorical);
    assert_eq!(
        spec.hierarchy.node("Asia/Japan").unwrap().color,
        Some(NodeColor::Category("Asia".into()))
    );
}

#[test]
fn test_scheme_is_carried_with_categorical_color() {
    let spec = create_chart(
        &processed_sales(),
        &settings(&["Region"]).with_color("Country").with_color_scheme("Blues"),
    )
    .unwrap();
    assert_eq!(spec.color_scheme, Some(ColorScheme::Blues));
    assert_eq!(
        spec.hierarchy.node("Europe").unwrap().color,
        Some(NodeColor::Category("(?)".into()))
    );
}

#[test]
fn test_size_is_copied_to_layout() {
    let spec = create_chart(&processed_sales(), &settings(&["Region"]).with_size(1000, 600)).unwrap();
    assert_eq!((spec.layout.width, spec.layout.height), (1000, 600));
}

#[test]
fn test_missing_root_rows_are_skipped() {
    let table = TestTableBuilder::new(&["Region", "Sales"])
        .cells(vec![text("EU"), num(3.0)])
        .cells(vec![DataCell::Empty, num(9.0)])
        .build();
    let spec = create_chart(&table, &settings(&["Region"]).with_values("Sales")).unwrap();
    assert_eq!(spec.hierarchy.nodes.len(), 1);
    assert_eq!(spec.hierarchy.nodes[0].value, 3.0);
}

#[test]
fn test_gap_in_path_is_a_construction_error() {
    let table = TestTableBuilder::new(&["Region", "Country"])
        .cells(vec![DataCell::Empty, text("Peru")])
        .build();
    let err = create_chart(&table, &settings(&["Region", "Country"])).unwrap_err();
    assert!(matches!(err, ChartError::Construction(_)));
}

proptest! {
    #[test]
    fn prop_empty_path_is_always_missing_hierarchy(
        kind in "[A-Za-z]{0,8}",
        values in proptest::option::of("[A-Za-z]{0,8}"),
        color in proptest::option::of("[A-Za-z]{0,8}"),
        scheme in proptest::option::of("[A-Za-z]{0,8}"),
    ) {
        let settings = ChartSettings {
            chart_kind: kind,
            values_column: values,
            color_column: color,
            color_scheme: scheme,
            ..Default::default()
        };
        prop_assert_eq!(
            create_chart(&processed_sales(), &settings).unwrap_err(),
            ChartError::Config(ConfigError::MissingHierarchy)
        );
    }
}

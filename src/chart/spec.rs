//! Renderable chart description
//!
//! A [`ChartSpec`] is built once by the builder and then only read: it
//! serialises to a Plotly figure (`{"data": [trace], "layout": {...}}`)
//! that the standalone document hands to Plotly.js.

use crate::chart::hierarchy::{Hierarchy, NodeColor};
use crate::chart::palette::{color_scale, discrete_color};
use crate::constants::{
    MARGIN_BOTTOM, MARGIN_LEFT, MARGIN_RIGHT, MARGIN_TOP, TITLE_X, TITLE_Y,
};
use crate::types::{ChartKind, ColorScheme};
use serde::Serialize;

/// How the color column was interpreted
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum ColorMode {
    /// Numeric column mapped through a continuous scale
    Continuous,
    /// Anything else, mapped through the discrete sequence
    Categorical,
}

/// The coloring field attached to a chart
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ColorBinding {
    pub column: String,
    pub mode: ColorMode,
}

/// A fully resolved chart, ready to render
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    /// Hierarchy columns, root to leaf
    pub path: Vec<String>,
    /// Sizing field
    pub values: Option<String>,
    /// Coloring field
    pub color: Option<ColorBinding>,
    /// Continuous palette override. Carried even when the coloring field is
    /// categorical, where it has no effect.
    pub color_scheme: Option<ColorScheme>,
    pub hierarchy: Hierarchy,
    pub layout: ChartLayout,
}

impl ChartSpec {
    /// Number of hierarchy levels present in the data
    pub fn depth(&self) -> usize {
        self.hierarchy.depth()
    }

    /// Build the Plotly figure for this chart
    pub fn figure(&self) -> Figure {
        let base = self.trace_base();
        let trace = match self.kind {
            ChartKind::Sunburst => Trace::Sunburst { base },
            ChartKind::Treemap => Trace::Treemap {
                base,
                pathbar: PathBar { visible: true },
            },
            ChartKind::Icicle => Trace::Icicle {
                base,
                tiling: IcicleTiling { orientation: "h" },
            },
        };
        Figure {
            data: vec![trace],
            layout: self.layout.clone(),
        }
    }

    /// The figure as a JSON string
    pub fn to_figure_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.figure())
    }

    fn trace_base(&self) -> TraceBase {
        let nodes = &self.hierarchy.nodes;
        TraceBase {
            ids: nodes.iter().map(|n| n.id.clone()).collect(),
            labels: nodes.iter().map(|n| n.label.clone()).collect(),
            parents: nodes.iter().map(|n| n.parent.clone()).collect(),
            values: nodes.iter().map(|n| n.value).collect(),
            branchvalues: "total",
            marker: self.marker(),
        }
    }

    fn marker(&self) -> Option<Marker> {
        let binding = self.color.as_ref()?;
        let nodes = &self.hierarchy.nodes;
        let marker = match binding.mode {
            ColorMode::Continuous => Marker {
                colors: MarkerColors::Scalar(
                    nodes
                        .iter()
                        .map(|n| match n.color {
                            Some(NodeColor::Continuous(v)) => Some(v),
                            _ => None,
                        })
                        .collect(),
                ),
                colorscale: Some(color_scale(self.color_scheme.unwrap_or_default())),
                showscale: Some(true),
                colorbar: Some(ColorBar {
                    title: AxisTitle {
                        text: binding.column.clone(),
                    },
                }),
            },
            ColorMode::Categorical => {
                let categories = self.hierarchy.categories();
                Marker {
                    colors: MarkerColors::Named(
                        nodes
                            .iter()
                            .map(|n| match &n.color {
                                Some(NodeColor::Category(c)) => categories
                                    .iter()
                                    .position(|known| *known == c.as_str())
                                    .map(|i| discrete_color(i).to_string()),
                                _ => None,
                            })
                            .collect(),
                    ),
                    colorscale: None,
                    showscale: None,
                    colorbar: None,
                }
            }
        };
        Some(marker)
    }
}

// ============================================================================
// Figure Types
// ============================================================================

/// Plotly figure: traces plus layout
#[derive(Clone, Debug, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: ChartLayout,
}

/// One trace per chart kind, tagged with Plotly's trace type
#[derive(Clone, Debug, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Sunburst {
        #[serde(flatten)]
        base: TraceBase,
    },
    Treemap {
        #[serde(flatten)]
        base: TraceBase,
        pathbar: PathBar,
    },
    Icicle {
        #[serde(flatten)]
        base: TraceBase,
        tiling: IcicleTiling,
    },
}

/// Node arrays shared by every hierarchical trace
#[derive(Clone, Debug, Serialize)]
pub struct TraceBase {
    pub ids: Vec<String>,
    pub labels: Vec<String>,
    pub parents: Vec<String>,
    pub values: Vec<f64>,
    /// Parent values are totals of their children
    pub branchvalues: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
}

#[derive(Clone, Debug, Serialize)]
pub struct PathBar {
    pub visible: bool,
}

#[derive(Clone, Debug, Serialize)]
pub struct IcicleTiling {
    pub orientation: &'static str,
}

#[derive(Clone, Debug, Serialize)]
pub struct Marker {
    pub colors: MarkerColors,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colorscale: Option<Vec<(f64, String)>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showscale: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colorbar: Option<ColorBar>,
}

/// Per-node colors: numbers on a scale, or explicit color strings
#[derive(Clone, Debug, Serialize)]
#[serde(untagged)]
pub enum MarkerColors {
    Scalar(Vec<Option<f64>>),
    Named(Vec<Option<String>>),
}

#[derive(Clone, Debug, Serialize)]
pub struct ColorBar {
    pub title: AxisTitle,
}

#[derive(Clone, Debug, Serialize)]
pub struct AxisTitle {
    pub text: String,
}

// ============================================================================
// Layout
// ============================================================================

/// Figure layout: requested size plus fixed cosmetics
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartLayout {
    pub width: u32,
    pub height: u32,
    pub margin: Margin,
    pub title: TitlePosition,
}

impl ChartLayout {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            margin: Margin {
                t: MARGIN_TOP,
                l: MARGIN_LEFT,
                r: MARGIN_RIGHT,
                b: MARGIN_BOTTOM,
            },
            title: TitlePosition {
                x: TITLE_X,
                y: TITLE_Y,
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Margin {
    pub t: u32,
    pub l: u32,
    pub r: u32,
    pub b: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TitlePosition {
    pub x: f64,
    pub y: f64,
}

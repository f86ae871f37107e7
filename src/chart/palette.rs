//! Chart color palettes
//!
//! Continuous scales for numeric coloring and the discrete sequence used
//! for categorical coloring.

use crate::types::ColorScheme;

/// Discrete colors, assigned to categories in order of first appearance
pub const DISCRETE_COLORS: [&str; 10] = [
    "#636efa", // Blue
    "#EF553B", // Red
    "#00cc96", // Green
    "#ab63fa", // Purple
    "#FFA15A", // Orange
    "#19d3f3", // Cyan
    "#FF6692", // Pink
    "#B6E880", // Lime
    "#FF97FF", // Magenta
    "#FECB52", // Yellow
];

const VIRIDIS: [&str; 10] = [
    "#440154", "#482878", "#3e4989", "#31688e", "#26828e", "#1f9e89", "#35b779", "#6ece58",
    "#b5de2b", "#fde725",
];

const PLASMA: [&str; 10] = [
    "#0d0887", "#46039f", "#7201a8", "#9c179e", "#bd3786", "#d8576b", "#ed7953", "#fb9f3a",
    "#fdca26", "#f0f921",
];

const BLUES: [&str; 9] = [
    "rgb(247,251,255)",
    "rgb(222,235,247)",
    "rgb(198,219,239)",
    "rgb(158,202,225)",
    "rgb(107,174,214)",
    "rgb(66,146,198)",
    "rgb(33,113,181)",
    "rgb(8,81,156)",
    "rgb(8,48,107)",
];

const REDS: [&str; 9] = [
    "rgb(255,245,240)",
    "rgb(254,224,210)",
    "rgb(252,187,161)",
    "rgb(252,146,114)",
    "rgb(251,106,74)",
    "rgb(239,59,44)",
    "rgb(203,24,29)",
    "rgb(165,15,21)",
    "rgb(103,0,13)",
];

/// Color stops for a scheme. `Default` maps to Plasma, the scale used when
/// no override is given.
pub fn scale_colors(scheme: ColorScheme) -> &'static [&'static str] {
    match scheme {
        ColorScheme::Default | ColorScheme::Plasma => &PLASMA,
        ColorScheme::Viridis => &VIRIDIS,
        ColorScheme::Blues => &BLUES,
        ColorScheme::Reds => &REDS,
    }
}

/// Evenly spaced `(position, color)` stops from 0.0 to 1.0
pub fn color_scale(scheme: ColorScheme) -> Vec<(f64, String)> {
    let colors = scale_colors(scheme);
    let last = (colors.len() - 1) as f64;
    colors
        .iter()
        .enumerate()
        .map(|(i, color)| (i as f64 / last, color.to_string()))
        .collect()
}

/// Color for the n-th distinct category, cycling through the sequence
pub fn discrete_color(index: usize) -> &'static str {
    DISCRETE_COLORS[index % DISCRETE_COLORS.len()]
}

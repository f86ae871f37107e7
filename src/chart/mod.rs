//! Hierarchical chart building
//!
//! Selections are checked and resolved by [`create_chart`], rows are rolled
//! up into nodes by [`build_hierarchy`], and the resulting [`ChartSpec`] is
//! rendered as a Plotly figure or a standalone document.

mod builder;
pub mod document;
mod hierarchy;
mod palette;
mod spec;

pub use builder::*;
pub use hierarchy::*;
pub use palette::*;
pub use spec::*;

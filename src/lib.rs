//! Hierarchical data visualization.
//!
//! Upload a table, clean it, pick the columns that form a hierarchy and
//! render it as a sunburst, treemap or icicle chart.
//!
//! ```ignore
//! let mut session = Session::new(&AppSettings::load_or_default());
//! session.load_csv(&bytes)?;
//! let chart = session.generate(vec!["Region".into(), "Country".into()], Some("Sales".into()), None)?;
//! let page = export::html_download(&chart)?;
//! ```

pub mod chart;
pub mod constants;
pub mod data;
pub mod error;
pub mod export;
pub mod perf;
pub mod session;
pub mod settings;
pub mod types;

pub use chart::{create_chart, ChartSpec};
pub use error::{ChartError, ConfigError, VizError};
pub use session::Session;
pub use settings::AppSettings;
pub use types::{ChartKind, ChartSettings, ColorScheme, DataCell, DataRow, Table};

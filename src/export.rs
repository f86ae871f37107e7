//! Downloadable artifacts
//!
//! Produced on demand and never kept: the chart document
//! (`visualization.html`) and the cleaned table as JSON records
//! (`data.json`).

use crate::chart::{document, ChartSpec};
use crate::constants::{HTML_FILE_NAME, HTML_MIME, JSON_FILE_NAME, JSON_MIME};
use crate::data::{write_json_content, DataResult};
use crate::types::Table;
use std::path::{Path, PathBuf};

/// A file offered to the user
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Download {
    pub file_name: &'static str,
    pub mime: &'static str,
    pub contents: String,
}

impl Download {
    /// Write the file into `dir`, returning the path written to
    pub fn write_to(&self, dir: &Path) -> DataResult<PathBuf> {
        std::fs::create_dir_all(dir)?;
        let path = dir.join(self.file_name);
        std::fs::write(&path, &self.contents)?;
        tracing::debug!(path = %path.display(), bytes = self.contents.len(), "Wrote download");
        Ok(path)
    }
}

/// The standalone chart document
pub fn html_download(spec: &ChartSpec) -> DataResult<Download> {
    Ok(Download {
        file_name: HTML_FILE_NAME,
        mime: HTML_MIME,
        contents: document::to_html(spec)?,
    })
}

/// The cleaned table, one JSON object per row
pub fn json_download(table: &Table) -> DataResult<Download> {
    Ok(Download {
        file_name: JSON_FILE_NAME,
        mime: JSON_MIME,
        contents: write_json_content(table)?,
    })
}

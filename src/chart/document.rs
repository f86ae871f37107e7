//! Standalone HTML document for a chart
//!
//! The page embeds the figure JSON and loads Plotly.js from its CDN, so the
//! file can be opened directly in a browser or offered as a download.

use crate::chart::spec::ChartSpec;
use crate::constants::PLOTLY_CDN_URL;
use std::io::{self, Write};

/// Write the full HTML document for `spec`
pub fn write<W: Write>(writer: &mut W, spec: &ChartSpec) -> io::Result<()> {
    let figure = spec.to_figure_json().map_err(io::Error::other)?;
    let title = escape_html(&document_title(spec));

    write!(
        writer,
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <script src="{cdn}" charset="utf-8"></script>
    <style>
        body {{ margin: 0; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Helvetica, Arial, sans-serif; }}
        #chart {{ margin: 0 auto; width: {width}px; }}
    </style>
</head>
<body>
    <div id="chart"></div>
    <script type="application/json" id="figure">{figure}</script>
    <script>
        const figure = JSON.parse(document.getElementById("figure").textContent);
        Plotly.newPlot("chart", figure.data, figure.layout, {{ responsive: true }});
    </script>
</body>
</html>
"#,
        title = title,
        cdn = PLOTLY_CDN_URL,
        width = spec.layout.width,
        figure = escape_script(&figure),
    )
}

/// Render the document into a string
pub fn to_html(spec: &ChartSpec) -> io::Result<String> {
    let mut buffer = Vec::new();
    write(&mut buffer, spec)?;
    String::from_utf8(buffer).map_err(io::Error::other)
}

/// "Sunburst: Region / Country"
pub fn document_title(spec: &ChartSpec) -> String {
    format!("{}: {}", spec.kind.label(), spec.path.join(" / "))
}

/// Keep embedded JSON from closing the script element early. `<` only
/// occurs inside JSON strings, where `\u003c` decodes back to it.
fn escape_script(json: &str) -> String {
    json.replace('<', "\\u003c")
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

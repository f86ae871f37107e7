use anyhow::Context;
use clap::{Parser, Subcommand};
use hierviz::constants::{MAX_CHART_DIMENSION, MIN_CHART_DIMENSION};
use hierviz::data::{parse_json_file, DataError};
use hierviz::error::{ConfigError, VizError};
use hierviz::export::{html_download, json_download};
use hierviz::settings::AppSettings;
use hierviz::types::{ChartKind, ColorScheme, DataType};
use hierviz::Session;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "hierviz", version, about = "Render CSV hierarchies as sunburst, treemap or icicle charts")]
struct Cli {
    /// Settings file (defaults to the user config directory)
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Clean a table and write the chart document and cleaned data
    Render {
        /// CSV file, or JSON records with a .json extension
        input: PathBuf,

        /// Hierarchy columns, outermost first
        #[arg(long = "path", required = true)]
        path: Vec<String>,

        /// Numeric column that sizes the nodes
        #[arg(long)]
        values: Option<String>,

        /// Column that colors the nodes
        #[arg(long)]
        color: Option<String>,

        /// Sunburst, Treemap or Icicle
        #[arg(long)]
        chart: Option<String>,

        /// Default, Viridis, Plasma, Blues or Reds
        #[arg(long)]
        scheme: Option<String>,

        #[arg(long)]
        width: Option<u32>,

        #[arg(long)]
        height: Option<u32>,

        /// Directory for visualization.html and data.json
        #[arg(long, default_value = ".")]
        out: PathBuf,

        /// Open the chart in the browser afterwards
        #[arg(long)]
        open: bool,

        /// Print technical details for unexpected failures
        #[arg(long)]
        details: bool,
    },
    /// Show the cleaned columns and the first rows
    Inspect {
        input: PathBuf,

        /// Rows to preview
        #[arg(long)]
        rows: Option<usize>,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let settings = match &cli.settings {
        Some(path) => AppSettings::load(path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => AppSettings::load_or_default(),
    };

    match cli.command {
        Command::Render {
            input,
            path,
            values,
            color,
            chart,
            scheme,
            width,
            height,
            out,
            open,
            details,
        } => {
            let mut session = Session::new(&settings);
            let result = render(
                &mut session,
                &input,
                RenderArgs {
                    path,
                    values,
                    color,
                    chart,
                    scheme,
                    width,
                    height,
                    out: &out,
                },
            );
            match result {
                Ok(html_path) => {
                    println!("Wrote {}", html_path.display());
                    if open {
                        open::that(&html_path)
                            .with_context(|| format!("Failed to open {}", html_path.display()))?;
                    }
                    Ok(())
                }
                Err(e) => {
                    eprintln!("{}", e.user_message());
                    if details {
                        if let Some(detail) = e.technical_details() {
                            eprintln!("{}", detail);
                        }
                    }
                    Err(e.into())
                }
            }
        }
        Command::Inspect { input, rows } => {
            let mut session = Session::new(&settings);
            load_input(&mut session, &input).map_err(|e| anyhow::anyhow!(e.user_message()))?;
            inspect(&session, rows.unwrap_or(session.preview_rows()));
            Ok(())
        }
    }
}

struct RenderArgs<'a> {
    path: Vec<String>,
    values: Option<String>,
    color: Option<String>,
    chart: Option<String>,
    scheme: Option<String>,
    width: Option<u32>,
    height: Option<u32>,
    out: &'a Path,
}

fn render(session: &mut Session, input: &Path, args: RenderArgs<'_>) -> Result<PathBuf, VizError> {
    if let Some(chart) = &args.chart {
        let kind = chart
            .parse::<ChartKind>()
            .map_err(ConfigError::UnknownChartKind)?;
        session.set_chart_kind(kind);
    }
    if let Some(scheme) = &args.scheme {
        let scheme = scheme
            .parse::<ColorScheme>()
            .map_err(ConfigError::UnknownColorScheme)?;
        session.set_color_scheme(scheme);
    }
    if let Some(width) = args.width {
        warn_if_clamped("width", width);
        session.set_width(width);
    }
    if let Some(height) = args.height {
        warn_if_clamped("height", height);
        session.set_height(height);
    }

    load_input(session, input)?;
    let spec = session.generate(args.path, args.values, args.color)?;

    let html_path = html_download(&spec)?.write_to(args.out)?;
    if let Some(table) = session.data() {
        json_download(table)?.write_to(args.out)?;
    }
    Ok(html_path)
}

fn load_input(session: &mut Session, input: &Path) -> Result<(), VizError> {
    let is_json = input
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let loaded = if is_json {
        session.load_table(parse_json_file(input)?)
    } else {
        let bytes = std::fs::read(input).map_err(DataError::from)?;
        session.load_csv(&bytes)
    };
    let table = loaded?;
    tracing::info!(
        rows = table.row_count(),
        columns = table.column_count(),
        "Loaded {}",
        input.display()
    );
    if let Some(diagnostic) = session.last_error() {
        eprintln!("{}", diagnostic);
    }
    Ok(())
}

fn inspect(session: &Session, rows: usize) {
    let Some(table) = session.data() else {
        return;
    };
    println!("{} rows, {} columns", table.row_count(), table.column_count());
    for (idx, name) in table.columns.iter().enumerate() {
        let kind = table.column_type(idx);
        let marker = if kind == DataType::Number { " (values)" } else { "" };
        println!("  {:<24} {}{}", name, kind.label(), marker);
    }

    if let Some(preview) = session.preview(rows) {
        println!();
        println!("{}", preview.columns.join("\t"));
        for row in &preview.rows {
            let cells: Vec<String> = row.cells.iter().map(|c| c.to_string()).collect();
            println!("{}", cells.join("\t"));
        }
    }
}

fn warn_if_clamped(name: &str, value: u32) {
    if !(MIN_CHART_DIMENSION..=MAX_CHART_DIMENSION).contains(&value) {
        tracing::warn!(
            "{} {} is outside {}..={}, clamping",
            name,
            value,
            MIN_CHART_DIMENSION,
            MAX_CHART_DIMENSION
        );
    }
}

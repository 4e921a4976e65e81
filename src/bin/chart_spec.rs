//! Headless chart builder: load a price table, apply one selection and print the resulting ChartSpec.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tabled::{Table, Tabled, settings::Style};

use metal_prices::config::DATASET;
use metal_prices::utils::TimeUtils;
use metal_prices::{ChartSpec, ReactiveController, SelectionEvent, load_store, sources_for};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Table,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Print the chart spec for a metal and date range", long_about = None)]
struct Args {
    /// CSV price table (defaults to metals.csv, then the bundled sample)
    #[arg(long)]
    data: Option<PathBuf>,

    /// Metal to focus on (defaults to the session's current metal)
    #[arg(long)]
    metal: Option<String>,

    /// Range start, YYYY-MM-DD (defaults to the first observation)
    #[arg(long, value_parser = parse_date)]
    start: Option<NaiveDate>,

    /// Range end, YYYY-MM-DD (defaults to the last observation)
    #[arg(long, value_parser = parse_date)]
    end: Option<NaiveDate>,

    /// Print the initial overview chart and ignore metal/start/end
    #[arg(long, default_value_t = false)]
    overview: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,
}

#[derive(Tabled)]
struct SeriesRow {
    #[tabled(rename = "Series")]
    name: String,
    #[tabled(rename = "Colour")]
    color: &'static str,
    #[tabled(rename = "Points")]
    points: usize,
    #[tabled(rename = "Segments")]
    segments: usize,
    #[tabled(rename = "First")]
    first: String,
    #[tabled(rename = "Last")]
    last: String,
    #[tabled(rename = "Min")]
    min: String,
    #[tabled(rename = "Max")]
    max: String,
}

fn parse_date(text: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(text, TimeUtils::STANDARD_DATE_FORMAT)
        .map_err(|e| format!("'{}' is not a YYYY-MM-DD date: {}", text, e))
}

fn render_table(spec: &ChartSpec) -> String {
    let rows: Vec<SeriesRow> = spec
        .series
        .iter()
        .map(|series| {
            let date_at = |idx: Option<usize>| {
                idx.and_then(|i| series.points.get(i))
                    .map(|p| p.date.to_string())
                    .unwrap_or_else(|| "-".to_string())
            };
            let (min, max) = series
                .price_bounds()
                .map(|(lo, hi)| (format!("{:.2}", lo), format!("{:.2}", hi)))
                .unwrap_or_else(|| ("-".to_string(), "-".to_string()));
            SeriesRow {
                name: series.name.clone(),
                color: series.color.css(),
                points: series.points.len(),
                segments: series.segments().len(),
                first: date_at(Some(0)),
                last: date_at(series.points.len().checked_sub(1)),
                min,
                max,
            }
        })
        .collect();

    format!(
        "{} [{} / {}]\n{}",
        spec.title,
        spec.mode,
        spec.theme,
        Table::new(rows).with(Style::rounded())
    )
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let (store, source) = load_store(&sources_for(args.data.clone()))?;
    log::info!(
        "Loaded {} observations from {} ({})",
        store.len(),
        source,
        store.year_bounds()
    );

    let mut controller = ReactiveController::new(store, DATASET.default_metal)
        .context("Failed to start a chart session")?;

    let wants_selection = args.metal.is_some() || args.start.is_some() || args.end.is_some();
    let spec = if args.overview || !wants_selection {
        controller.published()
    } else {
        let current = controller.selection().clone();
        let event = SelectionEvent::SelectionChanged {
            metal: args.metal.unwrap_or(current.metal),
            start: args.start.unwrap_or(current.start),
            end: args.end.unwrap_or(current.end),
        };
        controller
            .handle_event(event)
            .context("Selection rejected")?
    };

    match args.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(spec.as_ref())?);
        }
        OutputFormat::Table => println!("{}", render_table(&spec)),
    }

    Ok(())
}

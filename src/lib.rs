#![allow(clippy::collapsible_if)]
#![allow(clippy::type_complexity)]

// Core modules
pub mod app;
pub mod chart;
pub mod config;
pub mod data;
pub mod domain;
pub mod engine;
pub mod error;
pub mod ui;
pub mod utils;

// Re-export the pipeline for the binaries and integration tests
pub use app::App;
pub use chart::{ChartSpec, DisplayMode, MetalSelection, Series, SeriesColor, SeriesPoint, Theme};
pub use data::{DateWindow, RawTable, TableSource, TimeSeriesStore, filter, load_store, sources_for};
pub use engine::{ReactiveController, SelectionEvent, SelectionState};
pub use error::{ChartError, StoreError, ValidationError};

// CLI argument parsing
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// CSV price table to load instead of the default metals.csv / bundled sample
    #[arg(long)]
    pub data: Option<PathBuf>,
}

/// Main application entry point - creates the GUI app
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> App {
    App::new(cc, args)
}

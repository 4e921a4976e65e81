//! Configuration module for the metal prices dashboard.

// Can all be private now because we have a public re-export.
mod chart;
mod dataset;
mod debug;

// Can't be private because we don't re-export it
pub mod plot;

// Re-export commonly used items
pub use chart::{CHART, ChartConfig, FontConfig, Palette, palette_lookup};
pub use dataset::{DATASET, DatasetConfig, DatasetLayout};
pub use debug::{DF, LOG_PERFORMANCE};
pub use plot::PLOT_CONFIG;

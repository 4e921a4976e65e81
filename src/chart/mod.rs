mod builder;
mod spec;

pub use builder::{build, palette_for, series_color};
pub use spec::{
    AxisLabels, ChartSpec, DisplayMode, MetalSelection, Series, SeriesColor, SeriesPoint, Theme,
};

//! Rendering-agnostic chart description. Rebuilt from scratch on every recompute, never edited.

use chrono::NaiveDate;
use serde::Serialize;
use strum_macros::Display;

use crate::config::FontConfig;

/// Overview plots the lineup together; Focused plots the single selected metal.
/// The only transition is Overview → Focused, on the first user interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, Default)]
pub enum DisplayMode {
    #[default]
    Overview,
    Focused,
}

impl DisplayMode {
    /// Mode after an accepted user event. Focused is absorbing.
    pub fn after_interaction(self) -> Self {
        DisplayMode::Focused
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
pub enum Theme {
    #[serde(rename = "plotly")]
    #[strum(serialize = "plotly")]
    Plotly,
    #[serde(rename = "plotly_dark")]
    #[strum(serialize = "plotly_dark")]
    PlotlyDark,
}

impl Theme {
    pub fn is_dark(self) -> bool {
        matches!(self, Theme::PlotlyDark)
    }
}

/// CSS colour identifier straight from a palette table ("gold", "#E5E4E2", ...)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SeriesColor(pub &'static str);

impl SeriesColor {
    pub fn css(&self) -> &'static str {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub date: NaiveDate,
    pub price: f64,
    /// One or more absent prices were skipped right before this point.
    /// Renderers must break the line here instead of bridging it.
    pub gap_before: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub name: String,
    pub color: SeriesColor,
    pub points: Vec<SeriesPoint>,
}

impl Series {
    /// Runs of points that can be drawn as one unbroken line
    pub fn segments(&self) -> Vec<&[SeriesPoint]> {
        let mut segments = Vec::new();
        let mut start = 0;
        for (i, point) in self.points.iter().enumerate() {
            if point.gap_before && i > start {
                segments.push(&self.points[start..i]);
                start = i;
            }
        }
        if start < self.points.len() {
            segments.push(&self.points[start..]);
        }
        segments
    }

    /// Min and max price across the series. `None` for a series with no points.
    pub fn price_bounds(&self) -> Option<(f64, f64)> {
        self.points.iter().fold(None, |acc, p| match acc {
            None => Some((p.price, p.price)),
            Some((lo, hi)) => Some((lo.min(p.price), hi.max(p.price))),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AxisLabels {
    pub x: &'static str,
    pub y: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub mode: DisplayMode,
    pub title: String,
    pub series: Vec<Series>,
    pub axis: AxisLabels,
    pub theme: Theme,
    pub font: Option<FontConfig>,
}

impl ChartSpec {
    pub fn series_named(&self, name: &str) -> Option<&Series> {
        self.series.iter().find(|s| s.name == name)
    }

    pub fn point_count(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }

    /// Price bounds across every series
    pub fn price_bounds(&self) -> Option<(f64, f64)> {
        self.series
            .iter()
            .filter_map(Series::price_bounds)
            .reduce(|(lo_a, hi_a), (lo_b, hi_b)| (lo_a.min(lo_b), hi_a.max(hi_b)))
    }
}

/// Which metals a build should plot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetalSelection {
    /// Ordered set for Overview mode
    Lineup(Vec<String>),
    /// The metal chosen in the selector
    Single(String),
}

impl MetalSelection {
    pub fn lineup<S: AsRef<str>>(metals: &[S]) -> Self {
        MetalSelection::Lineup(metals.iter().map(|m| m.as_ref().to_string()).collect())
    }

    pub fn metals(&self) -> &[String] {
        match self {
            MetalSelection::Lineup(metals) => metals,
            MetalSelection::Single(metal) => std::slice::from_ref(metal),
        }
    }
}

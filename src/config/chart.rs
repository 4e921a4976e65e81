//! Chart synthesis configuration: palettes, labels, titles, themes.
//!
//! Overview and Focused palettes are separate literal tables. Platinum only exists
//! in the focused one.

use serde::Serialize;

use crate::chart::Theme;

pub type Palette = &'static [(&'static str, &'static str)];

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FontConfig {
    pub family: &'static str,
    pub size: f32,
    pub color: &'static str,
}

pub struct ChartConfig {
    pub x_axis_label: &'static str,
    pub y_axis_label: &'static str,

    /// Metals plotted together in the initial, unfiltered view
    pub overview_lineup: &'static [&'static str],
    pub overview_palette: Palette,
    pub focused_palette: Palette,

    /// Overview title prefix, rendered as "<prefix> Prices <minYear> to <maxYear>"
    pub overview_title_subject: &'static str,

    pub overview_theme: Theme,
    pub focused_theme: Theme,
    pub focused_font: FontConfig,
}

pub const CHART: ChartConfig = ChartConfig {
    x_axis_label: "Date",
    y_axis_label: "Price (USD) / oz",

    overview_lineup: &["Gold", "Silver", "Palladium", "Rhodium", "Iridium", "Ruthenium"],

    overview_palette: &[
        ("Gold", "gold"),
        ("Silver", "silver"),
        ("Palladium", "lightblue"),
        ("Rhodium", "darkblue"),
        ("Iridium", "purple"),
        ("Ruthenium", "orange"),
    ],

    focused_palette: &[
        ("Platinum", "#E5E4E2"),
        ("Gold", "gold"),
        ("Silver", "silver"),
        ("Palladium", "#ced0dd"),
        ("Rhodium", "#e2e7e1"),
        ("Iridium", "#3d3c3a"),
        ("Ruthenium", "#c9cbc8"),
    ],

    overview_title_subject: "Metal",

    overview_theme: Theme::Plotly,
    focused_theme: Theme::PlotlyDark,
    focused_font: FontConfig {
        family: "Verdana",
        size: 18.0,
        color: "white",
    },
};

/// Literal lookup, no fallback colour.
pub fn palette_lookup(palette: Palette, metal: &str) -> Option<&'static str> {
    palette
        .iter()
        .find(|(name, _)| *name == metal)
        .map(|(_, color)| *color)
}

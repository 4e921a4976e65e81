mod chart_view;
mod screens;
mod styles;
mod ui_config;
mod ui_render;
mod ui_text;

pub use chart_view::{ChartView, LineSegment, PlotCache};
pub use styles::{SeriesColorExt, css_color};

pub(crate) use screens::{render_failed, render_loading};
pub(crate) use ui_config::{UI_CONFIG, UI_TEXT};

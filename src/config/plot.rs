//! Plot visualization configuration

use eframe::egui::Color32;

pub struct PlotConfig {
    /// Width of each price series line
    pub series_line_width: f32,
    /// Y-Axis Padding factor (e.g. 0.05 = 5% padding top and bottom)
    pub plot_y_padding_pct: f64,
    /// Number of x-axis labels to aim for
    pub target_date_marks: f64,
    /// strftime pattern for x-axis labels ("MMM YY")
    pub date_axis_format: &'static str,

    /// Only used if a palette entry cannot be parsed as a CSS colour
    pub unparsable_series_color: Color32,

    // --- THEMES ---
    pub dark_plot_background: Color32,
    pub light_plot_background: Color32,
    pub dark_grid_text: Color32,
    pub light_grid_text: Color32,

    // --- SEMANTIC COLORS ---
    pub color_info: Color32,
    pub color_warning: Color32,
    pub color_error: Color32,

    pub color_text_primary: Color32,
    pub color_text_neutral: Color32,
    pub color_text_subdued: Color32,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    series_line_width: 2.0,
    plot_y_padding_pct: 0.05,
    target_date_marks: 8.0,
    date_axis_format: "%b %y",

    unparsable_series_color: Color32::from_rgb(255, 0, 255), // Magenta stands out as "wrong"

    dark_plot_background: Color32::from_rgb(17, 17, 17), // plotly_dark paper colour
    light_plot_background: Color32::from_rgb(229, 236, 246), // plotly default plot area
    dark_grid_text: Color32::WHITE,
    light_grid_text: Color32::from_rgb(42, 63, 95),

    color_info: Color32::from_rgb(173, 216, 230), // Light Blue
    color_warning: Color32::from_rgb(255, 215, 0), // Gold/Yellow
    color_error: Color32::from_rgb(255, 80, 80),

    color_text_primary: Color32::WHITE,
    color_text_neutral: Color32::LIGHT_GRAY,
    color_text_subdued: Color32::GRAY,
};

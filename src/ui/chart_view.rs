use std::sync::Arc;

use eframe::egui::{Color32, Frame, Margin, RichText, Ui};
use egui_plot::{AxisHints, GridMark, HPlacement, Legend, Line, Plot, PlotPoints, VPlacement};

use crate::chart::{ChartSpec, Theme};
use crate::config::PLOT_CONFIG;
use crate::ui::UI_TEXT;
use crate::ui::styles::SeriesColorExt;
use crate::utils::TimeUtils;

/// One drawable polyline. A series with gaps becomes several of these.
#[derive(Clone)]
pub struct LineSegment {
    pub name: String,
    pub color: Color32,
    pub points: Vec<[f64; 2]>,
}

/// Plot-space geometry derived from one published spec
#[derive(Clone)]
pub struct PlotCache {
    /// The spec this cache was built from. Pointer identity, specs are never edited.
    pub source: Arc<ChartSpec>,
    pub segments: Vec<LineSegment>,
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl PlotCache {
    fn from_spec(spec: &Arc<ChartSpec>) -> Self {
        let mut segments = Vec::new();
        let (mut x_min, mut x_max) = (f64::MAX, f64::MIN);

        for series in &spec.series {
            let color = series.color.to_color32();
            for run in series.segments() {
                let points: Vec<[f64; 2]> = run
                    .iter()
                    .map(|p| [TimeUtils::date_to_plot_x(p.date), p.price])
                    .collect();
                if let (Some(first), Some(last)) = (points.first(), points.last()) {
                    x_min = x_min.min(first[0]);
                    x_max = x_max.max(last[0]);
                }
                segments.push(LineSegment {
                    name: series.name.clone(),
                    color,
                    points,
                });
            }
        }

        let (y_min, y_max) = spec.price_bounds().unwrap_or((0.0, 1.0));
        let pad = ((y_max - y_min) * PLOT_CONFIG.plot_y_padding_pct).max(1.0);

        Self {
            source: Arc::clone(spec),
            segments,
            x_min,
            x_max,
            y_min: y_min - pad,
            y_max: y_max + pad,
        }
    }

    fn has_points(&self) -> bool {
        self.x_min <= self.x_max
    }
}

#[derive(Default)]
pub struct ChartView {
    cache: Option<PlotCache>,
}

// Helper: Calculate a human-friendly step size (1, 2, 5, 10, 20, 50...)
fn calculate_adaptive_step(range: f64, target_count: f64) -> f64 {
    let raw_step = range / target_count.max(1.0);
    if raw_step <= 0.0 || !raw_step.is_finite() {
        return 1.0;
    }
    let mag = 10.0_f64.powi(raw_step.log10().floor() as i32);
    let normalized = raw_step / mag;

    let nice_step = if normalized < 1.5 {
        1.0
    } else if normalized < 3.0 {
        2.0
    } else if normalized < 7.0 {
        5.0
    } else {
        10.0
    };

    // Never finer than one day
    (nice_step * mag).max(1.0)
}

fn create_date_axis(label: &'static str) -> AxisHints<'static> {
    AxisHints::new_x()
        .label(label)
        .formatter(|mark, _range| {
            TimeUtils::plot_x_to_date(mark.value)
                .map(|date| TimeUtils::format_date(date, PLOT_CONFIG.date_axis_format))
                .unwrap_or_default()
        })
        .placement(VPlacement::Bottom)
}

fn create_price_axis(label: &'static str) -> AxisHints<'static> {
    AxisHints::new_y()
        .label(label)
        .formatter(|mark, _range| format!("{:.0}", mark.value))
        .placement(HPlacement::Left)
}

impl ChartView {
    pub fn new() -> Self {
        Self { cache: None }
    }

    pub fn clear_cache(&mut self) {
        self.cache = None;
    }

    fn cache_for(&mut self, spec: &Arc<ChartSpec>) -> &PlotCache {
        let stale = !matches!(&self.cache, Some(c) if Arc::ptr_eq(&c.source, spec));
        if stale {
            self.cache = None;
        }
        self.cache.get_or_insert_with(|| PlotCache::from_spec(spec))
    }

    pub fn show(&mut self, ui: &mut Ui, spec: &Arc<ChartSpec>) {
        let (background, text_color) = match spec.theme {
            Theme::PlotlyDark => (PLOT_CONFIG.dark_plot_background, PLOT_CONFIG.dark_grid_text),
            Theme::Plotly => (PLOT_CONFIG.light_plot_background, PLOT_CONFIG.light_grid_text),
        };
        let cache = self.cache_for(spec);

        Frame::new().fill(background).inner_margin(Margin::same(8)).show(ui, |ui| {
            let (title_size, title_color) = match spec.font {
                Some(font) => (font.size, crate::ui::styles::css_color(font.color)),
                None => (18.0, text_color),
            };
            ui.label(RichText::new(&spec.title).size(title_size).color(title_color));

            if !cache.has_points() {
                ui.label(RichText::new(&UI_TEXT.chart_no_data).color(PLOT_CONFIG.color_warning));
            }

            ui.scope(|ui| {
                let visuals = ui.visuals_mut();
                visuals.extreme_bg_color = background;
                visuals.override_text_color = Some(text_color);
                visuals.dark_mode = spec.theme.is_dark();

                let mut plot = Plot::new("metal_price_chart")
                    .legend(Legend::default())
                    .custom_x_axes(vec![create_date_axis(spec.axis.x)])
                    .custom_y_axes(vec![create_price_axis(spec.axis.y)])
                    .x_grid_spacer(|input| {
                        let (min, max) = input.bounds;
                        let step = calculate_adaptive_step(max - min, PLOT_CONFIG.target_date_marks);
                        let start = (min / step).ceil() as i64;
                        let end = (max / step).floor() as i64;
                        (start..=end)
                            .map(|i| GridMark {
                                value: i as f64 * step,
                                step_size: step,
                            })
                            .collect()
                    })
                    .label_formatter(|name, value| {
                        let date = TimeUtils::plot_x_to_date(value.x)
                            .map(|d| d.format(TimeUtils::STANDARD_DATE_FORMAT).to_string())
                            .unwrap_or_default();
                        if name.is_empty() {
                            format!("{}\n{:.2}", date, value.y)
                        } else {
                            format!("{}\n{}\n{:.2}", name, date, value.y)
                        }
                    })
                    .include_y(cache.y_min)
                    .include_y(cache.y_max);

                if cache.has_points() {
                    plot = plot.include_x(cache.x_min).include_x(cache.x_max);
                }

                plot.show(ui, |plot_ui| {
                    for segment in &cache.segments {
                        plot_ui.line(
                            Line::new(segment.name.clone(), PlotPoints::new(segment.points.clone()))
                                .color(segment.color)
                                .width(PLOT_CONFIG.series_line_width),
                        );
                    }
                });
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{AxisLabels, DisplayMode, Series, SeriesColor, SeriesPoint};
    use chrono::NaiveDate;

    fn point(y: i32, m: u32, d: u32, price: f64, gap_before: bool) -> SeriesPoint {
        SeriesPoint {
            date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            price,
            gap_before,
        }
    }

    fn spec(points: Vec<SeriesPoint>) -> Arc<ChartSpec> {
        Arc::new(ChartSpec {
            mode: DisplayMode::Focused,
            title: "Ruthenium Prices 2018 to 2020".into(),
            series: vec![Series {
                name: "Ruthenium".into(),
                color: SeriesColor("#c9cbc8"),
                points,
            }],
            axis: AxisLabels { x: "Date", y: "Price (USD) / oz" },
            theme: Theme::PlotlyDark,
            font: None,
        })
    }

    #[test]
    fn gaps_split_a_series_into_separate_lines() {
        let spec = spec(vec![
            point(2018, 1, 1, 220.0, false),
            point(2019, 1, 1, 240.0, false),
            point(2020, 6, 15, 250.0, true),
        ]);
        let cache = PlotCache::from_spec(&spec);
        assert_eq!(cache.segments.len(), 2);
        assert_eq!(cache.segments[0].points.len(), 2);
        assert_eq!(cache.segments[1].points.len(), 1);
        assert_eq!(cache.segments[0].color, Color32::from_rgb(0xc9, 0xcb, 0xc8));
        assert!(cache.y_min < 220.0 && cache.y_max > 250.0);
    }

    #[test]
    fn empty_series_has_no_x_extent() {
        let cache = PlotCache::from_spec(&spec(Vec::new()));
        assert!(!cache.has_points());
    }

    #[test]
    fn cache_is_reused_for_the_same_spec() {
        let spec = spec(vec![point(2018, 1, 1, 220.0, false)]);
        let mut view = ChartView::new();
        view.cache_for(&spec);
        assert!(Arc::ptr_eq(&view.cache_for(&spec).source, &spec));
        view.clear_cache();
        assert!(view.cache.is_none());
    }

    #[test]
    fn adaptive_step_snaps_to_nice_values() {
        assert_eq!(calculate_adaptive_step(1400.0, 8.0), 200.0);
        assert_eq!(calculate_adaptive_step(3.0, 8.0), 1.0);
        assert_eq!(calculate_adaptive_step(0.0, 8.0), 1.0);
    }
}

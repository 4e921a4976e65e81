use crate::chart::{
    AxisLabels, ChartSpec, DisplayMode, MetalSelection, Series, SeriesColor, SeriesPoint,
};
use crate::config::{CHART, Palette, palette_lookup};
use crate::data::DateWindow;
use crate::error::ChartError;

// ============================================================================
// ChartSpecBuilder: filtered window + selection → ChartSpec
// ============================================================================

/// Build the chart for a filtered window.
///
/// Pure: identical inputs always give a structurally identical spec.
/// Overview plots every metal in the selection with the overview palette. Focused
/// plots only the first metal with the focused palette. A metal missing from the
/// relevant palette is an error, never a default colour.
pub fn build(
    window: &DateWindow<'_>,
    selection: &MetalSelection,
    mode: DisplayMode,
) -> Result<ChartSpec, ChartError> {
    let metals = match mode {
        DisplayMode::Overview => selection.metals(),
        DisplayMode::Focused => {
            let first = selection
                .metals()
                .first()
                .ok_or_else(|| ChartError::UnknownMetal("<no metal selected>".to_string()))?;
            std::slice::from_ref(first)
        }
    };

    let palette = palette_for(mode);
    let series = metals
        .iter()
        .map(|metal| build_series(window, metal, mode, palette))
        .collect::<Result<Vec<_>, _>>()?;

    let subject = match mode {
        DisplayMode::Overview => CHART.overview_title_subject,
        DisplayMode::Focused => metals[0].as_str(),
    };
    let title = format!("{} Prices {}", subject, window.year_bounds());

    let (theme, font) = match mode {
        DisplayMode::Overview => (CHART.overview_theme, None),
        DisplayMode::Focused => (CHART.focused_theme, Some(CHART.focused_font)),
    };

    Ok(ChartSpec {
        mode,
        title,
        series,
        axis: AxisLabels {
            x: CHART.x_axis_label,
            y: CHART.y_axis_label,
        },
        theme,
        font,
    })
}

pub fn palette_for(mode: DisplayMode) -> Palette {
    match mode {
        DisplayMode::Overview => CHART.overview_palette,
        DisplayMode::Focused => CHART.focused_palette,
    }
}

/// Colour a metal would get in `mode`, or the error `build` would raise
pub fn series_color(metal: &str, mode: DisplayMode) -> Result<SeriesColor, ChartError> {
    palette_lookup(palette_for(mode), metal)
        .map(SeriesColor)
        .ok_or_else(|| ChartError::UnmappedSeries {
            metal: metal.to_string(),
            mode,
        })
}

fn build_series(
    window: &DateWindow<'_>,
    metal: &str,
    mode: DisplayMode,
    palette: Palette,
) -> Result<Series, ChartError> {
    let metal_idx = window
        .store
        .metal_index(metal)
        .ok_or_else(|| ChartError::UnknownMetal(metal.to_string()))?;

    let color = palette_lookup(palette, metal)
        .map(SeriesColor)
        .ok_or_else(|| ChartError::UnmappedSeries {
            metal: metal.to_string(),
            mode,
        })?;

    // Absent prices are skipped, never interpolated. The next real point is flagged so
    // the renderer breaks the line there.
    let mut points = Vec::with_capacity(window.len());
    let mut skipped = false;
    for row in window.rows {
        match row.price(metal_idx) {
            Some(price) => {
                points.push(SeriesPoint {
                    date: row.date,
                    price,
                    gap_before: skipped && !points.is_empty(),
                });
                skipped = false;
            }
            None => skipped = true,
        }
    }

    Ok(Series {
        name: metal.to_string(),
        color,
        points,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::Theme;
    use crate::config::DatasetLayout;
    use crate::data::{RawTable, TimeSeriesStore, filter};
    use chrono::NaiveDate;

    const LAYOUT: DatasetLayout = DatasetLayout {
        date_column: "DateTime",
        tracked_metals: &["Platinum", "Gold", "Silver", "Ruthenium"],
        date_formats: &["%Y-%m-%d"],
        absent_tokens: &[""],
    };

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn store() -> TimeSeriesStore {
        let csv = "DateTime,Platinum,Gold,Silver,Ruthenium\n\
                   2018-01-01,937,1300,17.1,220\n\
                   2019-01-01,795,1287,15.6,\n\
                   2019-07-01,838,1395,15.3,\n\
                   2020-06-15,819,1700,17.9,250\n";
        TimeSeriesStore::load(&RawTable::from_csv_str(csv).unwrap(), &LAYOUT).unwrap()
    }

    #[test]
    fn overview_plots_the_lineup_with_overview_colours() {
        let store = store();
        let window = DateWindow::full(&store);
        let selection = MetalSelection::lineup(&["Gold", "Silver", "Ruthenium"]);
        let spec = build(&window, &selection, DisplayMode::Overview).unwrap();

        let names: Vec<_> = spec.series.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Gold", "Silver", "Ruthenium"]);
        assert_eq!(spec.series_named("Gold").unwrap().color, SeriesColor("gold"));
        assert_eq!(spec.series_named("Ruthenium").unwrap().color, SeriesColor("orange"));
        assert_eq!(spec.title, "Metal Prices 2018 to 2020");
        assert_eq!(spec.theme, Theme::Plotly);
        assert!(spec.font.is_none());
        assert_eq!(spec.axis.x, "Date");
        assert_eq!(spec.axis.y, "Price (USD) / oz");
    }

    #[test]
    fn overview_rejects_metals_without_an_overview_colour() {
        let store = store();
        let window = DateWindow::full(&store);
        let selection = MetalSelection::lineup(&["Gold", "Platinum"]);
        let err = build(&window, &selection, DisplayMode::Overview).unwrap_err();
        assert_eq!(
            err,
            ChartError::UnmappedSeries {
                metal: "Platinum".into(),
                mode: DisplayMode::Overview
            }
        );
    }

    #[test]
    fn focused_uses_the_alternate_palette() {
        let store = store();
        let window = DateWindow::full(&store);

        let spec = build(&window, &MetalSelection::Single("Platinum".into()), DisplayMode::Focused)
            .unwrap();
        assert_eq!(spec.series.len(), 1);
        assert_eq!(spec.series[0].color, SeriesColor("#E5E4E2"));
        assert_eq!(spec.title, "Platinum Prices 2018 to 2020");
        assert_eq!(spec.theme, Theme::PlotlyDark);
        assert_eq!(spec.font.map(|f| f.family), Some("Verdana"));

        let spec = build(&window, &MetalSelection::Single("Ruthenium".into()), DisplayMode::Focused)
            .unwrap();
        assert_eq!(spec.series[0].color, SeriesColor("#c9cbc8"));
    }

    #[test]
    fn focused_plots_only_the_first_metal_of_a_lineup() {
        let store = store();
        let window = DateWindow::full(&store);
        let selection = MetalSelection::lineup(&["Silver", "Gold"]);
        let spec = build(&window, &selection, DisplayMode::Focused).unwrap();
        assert_eq!(spec.series.len(), 1);
        assert_eq!(spec.series[0].name, "Silver");
    }

    #[test]
    fn absent_values_are_skipped_and_flag_a_gap() {
        let store = store();
        let window = DateWindow::full(&store);
        let spec = build(&window, &MetalSelection::Single("Ruthenium".into()), DisplayMode::Focused)
            .unwrap();
        let points = &spec.series[0].points;
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].price, 220.0);
        assert!(!points[0].gap_before);
        assert_eq!(points[1].date, date(2020, 6, 15));
        assert!(points[1].gap_before);
        assert_eq!(spec.series[0].segments().len(), 2);
    }

    #[test]
    fn title_years_come_from_the_filtered_rows() {
        let store = store();
        let window = filter(&store, date(2019, 1, 1), date(2019, 12, 31)).unwrap();
        let spec = build(&window, &MetalSelection::Single("Gold".into()), DisplayMode::Focused)
            .unwrap();
        assert_eq!(spec.title, "Gold Prices 2019 to 2019");
        assert_eq!(spec.series[0].points.len(), 2);
    }

    #[test]
    fn empty_window_falls_back_to_store_years() {
        let store = store();
        let window = filter(&store, date(2025, 1, 1), date(2026, 1, 1)).unwrap();
        let spec = build(&window, &MetalSelection::Single("Gold".into()), DisplayMode::Focused)
            .unwrap();
        assert_eq!(spec.title, "Gold Prices 2018 to 2020");
        assert_eq!(spec.series.len(), 1);
        assert!(spec.series[0].points.is_empty());
    }

    #[test]
    fn unknown_metal_is_rejected() {
        let store = store();
        let window = DateWindow::full(&store);
        let err = build(&window, &MetalSelection::Single("Unobtainium".into()), DisplayMode::Focused)
            .unwrap_err();
        assert_eq!(err, ChartError::UnknownMetal("Unobtainium".into()));
    }

    #[test]
    fn build_is_idempotent() {
        let store = store();
        let window = filter(&store, date(2018, 1, 1), date(2019, 12, 31)).unwrap();
        let selection = MetalSelection::Single("Silver".into());
        let first = build(&window, &selection, DisplayMode::Focused).unwrap();
        let second = build(&window, &selection, DisplayMode::Focused).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn series_color_reports_unmapped_metals() {
        assert_eq!(series_color("Gold", DisplayMode::Overview), Ok(SeriesColor("gold")));
        assert!(series_color("Platinum", DisplayMode::Overview).is_err());
        assert!(series_color("Platinum", DisplayMode::Focused).is_ok());
    }
}

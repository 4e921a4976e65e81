use chrono::{Datelike, NaiveDate};

/// Monotonic clock that also works in the browser
pub type AppInstant = web_time::Instant;

pub struct TimeUtils;

impl TimeUtils {
    pub const STANDARD_DATE_FORMAT: &str = "%Y-%m-%d";

    /// Plot x coordinate for a calendar date (days since 0001-01-01)
    pub fn date_to_plot_x(date: NaiveDate) -> f64 {
        date.num_days_from_ce() as f64
    }

    /// Inverse of `date_to_plot_x`. Fractional days round down.
    pub fn plot_x_to_date(x: f64) -> Option<NaiveDate> {
        if !x.is_finite() || x < i32::MIN as f64 || x > i32::MAX as f64 {
            return None;
        }
        NaiveDate::from_num_days_from_ce_opt(x.floor() as i32)
    }

    /// Used for display purposes (axis labels, status lines)
    pub fn format_date(date: NaiveDate, pattern: &str) -> String {
        date.format(pattern).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plot_x_round_trips_a_date() {
        let date = NaiveDate::from_ymd_opt(2020, 6, 15).unwrap();
        let x = TimeUtils::date_to_plot_x(date);
        assert_eq!(TimeUtils::plot_x_to_date(x), Some(date));
        assert_eq!(TimeUtils::plot_x_to_date(x + 0.75), Some(date));
        assert_eq!(TimeUtils::plot_x_to_date(f64::NAN), None);
    }

    #[test]
    fn formats_month_year_labels() {
        let date = NaiveDate::from_ymd_opt(2018, 1, 2).unwrap();
        assert_eq!(TimeUtils::format_date(date, "%b %y"), "Jan 18");
    }
}

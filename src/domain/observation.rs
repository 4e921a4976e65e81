use chrono::{Datelike, NaiveDate};

// One row of the store: a calendar date with one price slot per tracked metal.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub date: NaiveDate,

    // Aligned with TimeSeriesStore::metals(). `None` means no price was recorded,
    // which is not the same thing as a price of zero.
    pub prices: Vec<Option<f64>>,
}

impl Observation {
    pub fn new(date: NaiveDate, prices: Vec<Option<f64>>) -> Self {
        Observation { date, prices }
    }

    // Price for the metal at `metal_idx` (index into the store's metal list)
    pub fn price(&self, metal_idx: usize) -> Option<f64> {
        self.prices.get(metal_idx).copied().flatten()
    }

    pub fn absent_count(&self) -> usize {
        self.prices.iter().filter(|p| p.is_none()).count()
    }
}

/// Inclusive span of calendar years, used for chart and window titles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearSpan {
    pub first: i32,
    pub last: i32,
}

impl YearSpan {
    pub fn from_dates(first: NaiveDate, last: NaiveDate) -> Self {
        YearSpan {
            first: first.year(),
            last: last.year(),
        }
    }

    /// Year bounds of a date-sorted run of observations. `None` when the run is empty.
    pub fn of_rows(rows: &[Observation]) -> Option<Self> {
        let first = rows.first()?;
        let last = rows.last()?;
        Some(Self::from_dates(first.date, last.date))
    }
}

impl std::fmt::Display for YearSpan {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} to {}", self.first, self.last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn absent_price_is_not_zero() {
        let obs = Observation::new(date(2019, 7, 1), vec![Some(0.0), None]);
        assert_eq!(obs.price(0), Some(0.0));
        assert_eq!(obs.price(1), None);
        assert_eq!(obs.price(7), None);
        assert_eq!(obs.absent_count(), 1);
    }

    #[test]
    fn year_span_of_rows_uses_first_and_last() {
        let rows = vec![
            Observation::new(date(2018, 1, 1), vec![Some(1.0)]),
            Observation::new(date(2019, 5, 1), vec![Some(2.0)]),
            Observation::new(date(2020, 6, 15), vec![Some(3.0)]),
        ];
        let span = YearSpan::of_rows(&rows).unwrap();
        assert_eq!(span, YearSpan { first: 2018, last: 2020 });
        assert_eq!(span.to_string(), "2018 to 2020");
        assert!(YearSpan::of_rows(&[]).is_none());
    }
}

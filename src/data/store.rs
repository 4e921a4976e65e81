use chrono::NaiveDate;

use crate::config::{DF, DatasetLayout};
use crate::data::RawTable;
use crate::domain::{Observation, YearSpan};
use crate::error::StoreError;

// ============================================================================
// TimeSeriesStore: immutable, date-sorted price table
// ============================================================================

/// One row per date, one price slot per tracked metal. Built once, never edited.
/// Every derived view (filter windows, chart specs) borrows from it.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeriesStore {
    metals: Vec<String>,
    rows: Vec<Observation>,
}

impl TimeSeriesStore {
    /// Validate a raw table and build the store.
    ///
    /// Rows are sorted by date, so source order does not matter. Columns that are not
    /// tracked are ignored. Fails on a missing column, an unparsable date or price,
    /// a negative price, an empty table, or two rows with the same date.
    pub fn load(raw: &RawTable, layout: &DatasetLayout) -> Result<Self, StoreError> {
        let date_col = raw.column_index(layout.date_column).ok_or_else(|| {
            StoreError::MalformedInput(format!(
                "required date column '{}' is missing",
                layout.date_column
            ))
        })?;

        // Resolve metal columns in declaration order, not source order
        let metal_cols = layout
            .tracked_metals
            .iter()
            .map(|&metal| {
                raw.column_index(metal).ok_or_else(|| {
                    StoreError::MalformedInput(format!("required metal column '{}' is missing", metal))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if raw.records.is_empty() {
            return Err(StoreError::MalformedInput(
                "source table contains no observations".to_string(),
            ));
        }

        let width = raw.headers.len();
        let mut rows = Vec::with_capacity(raw.records.len());

        for (i, record) in raw.records.iter().enumerate() {
            // Row numbers are 1-based and count the header line, to match a text editor
            let line = i + 2;
            if record.len() != width {
                return Err(StoreError::MalformedInput(format!(
                    "line {}: expected {} fields, found {}",
                    line,
                    width,
                    record.len()
                )));
            }

            let date = parse_date(&record[date_col], layout.date_formats).ok_or_else(|| {
                StoreError::MalformedInput(format!(
                    "line {}: unparsable date '{}'",
                    line, record[date_col]
                ))
            })?;

            let prices = metal_cols
                .iter()
                .zip(layout.tracked_metals)
                .map(|(&col, metal)| parse_price(&record[col], layout.absent_tokens, line, metal))
                .collect::<Result<Vec<_>, _>>()?;

            rows.push(Observation::new(date, prices));
        }

        rows.sort_by_key(|row| row.date);

        if let Some(pair) = rows.windows(2).find(|pair| pair[0].date == pair[1].date) {
            return Err(StoreError::DuplicateDate(pair[0].date));
        }

        let store = Self {
            metals: layout.tracked_metals.iter().map(|m| m.to_string()).collect(),
            rows,
        };

        if DF.log_load {
            let absent: usize = store.rows.iter().map(Observation::absent_count).sum();
            log::info!(
                "Loaded {} observations for {} metals ({} to {}), {} absent prices",
                store.len(),
                store.metals.len(),
                store.min_date(),
                store.max_date(),
                absent
            );
        }

        Ok(store)
    }

    /// Tracked metal names in declaration order. Stable for the store's lifetime.
    pub fn metals(&self) -> &[String] {
        &self.metals
    }

    pub fn metal_index(&self, metal: &str) -> Option<usize> {
        self.metals.iter().position(|m| m == metal)
    }

    pub fn contains_metal(&self, metal: &str) -> bool {
        self.metal_index(metal).is_some()
    }

    pub fn rows(&self) -> &[Observation] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn min_date(&self) -> NaiveDate {
        // `load` rejects empty tables, so rows[0] always exists
        self.rows[0].date
    }

    pub fn max_date(&self) -> NaiveDate {
        self.rows[self.rows.len() - 1].date
    }

    pub fn year_bounds(&self) -> YearSpan {
        YearSpan::from_dates(self.min_date(), self.max_date())
    }
}

fn parse_date(text: &str, formats: &[&str]) -> Option<NaiveDate> {
    formats.iter().find_map(|fmt| {
        NaiveDate::parse_from_str(text, fmt)
            .ok()
            .or_else(|| chrono::NaiveDateTime::parse_from_str(text, fmt).ok().map(|dt| dt.date()))
    })
}

fn parse_price(
    text: &str,
    absent_tokens: &[&str],
    line: usize,
    metal: &str,
) -> Result<Option<f64>, StoreError> {
    if absent_tokens.contains(&text) {
        return Ok(None);
    }
    let value: f64 = text.parse().map_err(|_| {
        StoreError::MalformedInput(format!(
            "line {}: price '{}' for {} is not a number",
            line, text, metal
        ))
    })?;
    if !value.is_finite() || value < 0.0 {
        return Err(StoreError::MalformedInput(format!(
            "line {}: price {} for {} must be a non-negative number",
            line, value, metal
        )));
    }
    Ok(Some(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    const LAYOUT: DatasetLayout = DatasetLayout {
        date_column: "DateTime",
        tracked_metals: &["Gold", "Ruthenium"],
        date_formats: &["%Y-%m-%d", "%Y-%m-%d %H:%M:%S"],
        absent_tokens: &["", "NaN"],
    };

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn load(csv: &str) -> Result<TimeSeriesStore, StoreError> {
        TimeSeriesStore::load(&RawTable::from_csv_str(csv).unwrap(), &LAYOUT)
    }

    #[test]
    fn sorts_rows_and_uses_declaration_order() {
        let store = load(
            "Ruthenium,DateTime,Gold,Copper\n\
             250,2020-06-15,1700,3\n\
             220,2018-01-01,1300,2\n",
        )
        .unwrap();

        assert_eq!(store.metals(), ["Gold", "Ruthenium"]);
        assert_eq!(store.min_date(), date(2018, 1, 1));
        assert_eq!(store.max_date(), date(2020, 6, 15));
        assert_eq!(store.rows()[0].prices, vec![Some(1300.0), Some(220.0)]);
        assert_eq!(store.year_bounds(), YearSpan { first: 2018, last: 2020 });
        assert!(!store.contains_metal("Copper"));
    }

    #[test]
    fn absent_cells_stay_absent() {
        let store = load("DateTime,Gold,Ruthenium\n2019-07-01,1395.25,\n2019-10-01,NaN,257\n").unwrap();
        assert_eq!(store.rows()[0].prices, vec![Some(1395.25), None]);
        assert_eq!(store.rows()[1].prices, vec![None, Some(257.0)]);
    }

    #[test]
    fn time_of_day_is_discarded() {
        let store = load("DateTime,Gold,Ruthenium\n2018-01-02 00:00:00,1316.1,220\n").unwrap();
        assert_eq!(store.min_date(), date(2018, 1, 2));
    }

    #[test]
    fn missing_metal_column_is_malformed() {
        let err = load("DateTime,Gold\n2018-01-01,1300\n").unwrap_err();
        assert!(matches!(err, StoreError::MalformedInput(msg) if msg.contains("Ruthenium")));
    }

    #[test]
    fn missing_date_column_is_malformed() {
        let err = load("Date,Gold,Ruthenium\n2018-01-01,1300,220\n").unwrap_err();
        assert!(matches!(err, StoreError::MalformedInput(msg) if msg.contains("DateTime")));
    }

    #[test]
    fn unparsable_date_is_malformed() {
        let err = load("DateTime,Gold,Ruthenium\nJan 2018,1300,220\n").unwrap_err();
        assert!(matches!(err, StoreError::MalformedInput(msg) if msg.contains("line 2")));
    }

    #[test]
    fn bad_prices_are_malformed() {
        assert!(matches!(
            load("DateTime,Gold,Ruthenium\n2018-01-01,lots,220\n"),
            Err(StoreError::MalformedInput(_))
        ));
        assert!(matches!(
            load("DateTime,Gold,Ruthenium\n2018-01-01,-5,220\n"),
            Err(StoreError::MalformedInput(_))
        ));
    }

    #[test]
    fn ragged_record_is_malformed() {
        let err = load("DateTime,Gold,Ruthenium\n2018-01-01,1300\n").unwrap_err();
        assert!(matches!(err, StoreError::MalformedInput(msg) if msg.contains("expected 3 fields")));
    }

    #[test]
    fn empty_table_is_malformed() {
        assert!(matches!(
            load("DateTime,Gold,Ruthenium\n"),
            Err(StoreError::MalformedInput(_))
        ));
    }

    fn load_default(csv: &str) -> Result<TimeSeriesStore, StoreError> {
        TimeSeriesStore::load(&RawTable::from_csv_str(csv).unwrap(), &crate::config::DATASET.layout)
    }

    const FULL_HEADER: &str = "DateTime,Gold,Silver,Platinum,Palladium,Rhodium,Iridium,Ruthenium";

    #[test]
    fn default_layout_accepts_every_date_format_and_absent_token() {
        let csv = format!(
            "{}\n\
             2018/01/02,1316.1,17.13,937,1092,1750,985,nan\n\
             01/03/2018,NA,17.20,938,1093,1751,986,null\n\
             2018-01-04 12:30:00,1320,NaN,939,1094,1752,987,221\n\
             2018-01-05,1321,17.3,940,1095,1753,988,\n",
            FULL_HEADER
        );
        let store = load_default(&csv).unwrap();

        let dates: Vec<_> = store.rows().iter().map(|r| r.date).collect();
        assert_eq!(
            dates,
            vec![date(2018, 1, 2), date(2018, 1, 3), date(2018, 1, 4), date(2018, 1, 5)]
        );
        let gold = store.metal_index("Gold").unwrap();
        let silver = store.metal_index("Silver").unwrap();
        let ruthenium = store.metal_index("Ruthenium").unwrap();
        assert_eq!(store.rows()[0].price(ruthenium), None);
        assert_eq!(store.rows()[1].price(gold), None);
        assert_eq!(store.rows()[1].price(ruthenium), None);
        assert_eq!(store.rows()[2].price(silver), None);
        assert_eq!(store.rows()[2].price(ruthenium), Some(221.0));
        assert_eq!(store.rows()[3].price(ruthenium), None);
        let absent: usize = store.rows().iter().map(Observation::absent_count).sum();
        assert_eq!(absent, 5);
    }

    #[test]
    fn non_finite_prices_are_malformed() {
        for token in ["inf", "-inf", "infinity"] {
            let csv = format!("{}\n2018-01-02,1316.1,17.13,937,1092,1750,985,{}\n", FULL_HEADER, token);
            let err = load_default(&csv).unwrap_err();
            assert!(
                matches!(&err, StoreError::MalformedInput(msg) if msg.contains("Ruthenium")),
                "{} gave {:?}",
                token,
                err
            );
        }
    }

    #[test]
    fn same_day_in_two_formats_is_a_duplicate() {
        let csv = format!(
            "{}\n\
             2018/01/02,1,1,1,1,1,1,1\n\
             01/02/2018,2,2,2,2,2,2,2\n",
            FULL_HEADER
        );
        let err = load_default(&csv).unwrap_err();
        assert!(matches!(err, StoreError::DuplicateDate(d) if d == date(2018, 1, 2)));
    }

    #[test]
    fn duplicate_dates_are_rejected_even_when_unsorted() {
        let err = load(
            "DateTime,Gold,Ruthenium\n\
             2019-01-01,1,1\n\
             2018-01-01,1,1\n\
             2019-01-01,2,2\n",
        )
        .unwrap_err();
        assert!(matches!(err, StoreError::DuplicateDate(d) if d == date(2019, 1, 1)));
    }
}

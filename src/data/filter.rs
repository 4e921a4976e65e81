use chrono::NaiveDate;

use crate::data::TimeSeriesStore;
use crate::domain::{Observation, YearSpan};
use crate::error::ChartError;

// ============================================================================
// DateWindow: contiguous view into a TimeSeriesStore
// ============================================================================

/// Rows whose date lies in an inclusive interval. Always a sub-slice of the store,
/// so store order is preserved. May be empty.
#[derive(Debug, Clone, Copy)]
pub struct DateWindow<'a> {
    pub store: &'a TimeSeriesStore,
    pub rows: &'a [Observation],
}

impl<'a> DateWindow<'a> {
    /// The whole store as a window
    pub fn full(store: &'a TimeSeriesStore) -> Self {
        Self {
            store,
            rows: store.rows(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Year bounds of the filtered rows, falling back to the full store when the window is empty.
    pub fn year_bounds(&self) -> YearSpan {
        YearSpan::of_rows(self.rows).unwrap_or_else(|| self.store.year_bounds())
    }
}

/// Select rows with `start <= date <= end`.
///
/// The store is sorted, so both bounds come from a binary search.
/// A range that misses the store entirely yields an empty window, not an error.
pub fn filter(
    store: &TimeSeriesStore,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<DateWindow<'_>, ChartError> {
    if start > end {
        return Err(ChartError::InvalidRange { start, end });
    }

    let rows = store.rows();
    let lo = rows.partition_point(|row| row.date < start);
    let hi = rows.partition_point(|row| row.date <= end);

    Ok(DateWindow {
        store,
        rows: &rows[lo..hi],
    })
}

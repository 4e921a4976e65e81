use chrono::NaiveDate;

use crate::data::TimeSeriesStore;
use crate::engine::SelectionEvent;
use crate::error::ValidationError;

/// The user's current metal + date-range choice.
/// Invariant: `start <= end` and both lie within the store's date bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    pub metal: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl SelectionState {
    /// Full date range of the store with the given metal
    pub fn initial(store: &TimeSeriesStore, metal: &str) -> Result<Self, ValidationError> {
        let state = Self {
            metal: metal.to_string(),
            start: store.min_date(),
            end: store.max_date(),
        };
        state.validate(store)?;
        Ok(state)
    }

    /// The state `event` would produce. Nothing is mutated; the caller commits the result.
    pub fn apply(&self, event: &SelectionEvent, store: &TimeSeriesStore) -> Result<Self, ValidationError> {
        let next = match event {
            SelectionEvent::MetalChanged(metal) => Self {
                metal: metal.clone(),
                ..self.clone()
            },
            SelectionEvent::DateRangeChanged { start, end } => Self {
                start: *start,
                end: *end,
                ..self.clone()
            },
            SelectionEvent::SelectionChanged { metal, start, end } => Self {
                metal: metal.clone(),
                start: *start,
                end: *end,
            },
        };
        next.validate(store)?;
        Ok(next)
    }

    pub fn validate(&self, store: &TimeSeriesStore) -> Result<(), ValidationError> {
        if !store.contains_metal(&self.metal) {
            return Err(ValidationError::UnknownMetal(self.metal.clone()));
        }
        if self.start > self.end {
            return Err(ValidationError::InvertedRange {
                start: self.start,
                end: self.end,
            });
        }
        let (min, max) = (store.min_date(), store.max_date());
        for date in [self.start, self.end] {
            if date < min || date > max {
                return Err(ValidationError::OutOfBounds { date, min, max });
            }
        }
        Ok(())
    }
}

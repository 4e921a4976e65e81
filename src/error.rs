//! Error taxonomy for the load → filter → build → publish pipeline.

use chrono::NaiveDate;
use thiserror::Error;

use crate::chart::DisplayMode;

/// Fatal at load time. The session cannot start without a valid store.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("Duplicate date in source table: {0}")]
    DuplicateDate(NaiveDate),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Contract violations inside the pipeline. Reaching one of these means the caller
/// skipped validation or a palette table is incomplete.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChartError {
    #[error("Invalid range: start {start} is after end {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    #[error("No {mode} colour mapping for series '{metal}'")]
    UnmappedSeries { metal: String, mode: DisplayMode },

    #[error("Metal '{0}' is not tracked by the store")]
    UnknownMetal(String),
}

/// Recoverable rejection of a user event. Prior state is always retained.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Unknown metal '{0}'")]
    UnknownMetal(String),

    #[error("Start date {start} is after end date {end}")]
    InvertedRange { start: NaiveDate, end: NaiveDate },

    #[error("Date {date} lies outside the available data ({min} to {max})")]
    OutOfBounds {
        date: NaiveDate,
        min: NaiveDate,
        max: NaiveDate,
    },

    #[error(transparent)]
    Chart(#[from] ChartError),
}

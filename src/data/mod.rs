mod filter;
mod raw_table;
mod source;
mod store;

pub use {
    filter::{DateWindow, filter},
    raw_table::RawTable,
    source::{CsvFileSource, EmbeddedSource, TableSource, load_store, sources_for},
    store::TimeSeriesStore,
};

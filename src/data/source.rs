// Table sources the dashboard and CLI can load the store from, tried in order.

use std::{io::ErrorKind, path::PathBuf, sync::Arc};

use anyhow::{Context, Result, anyhow};

use crate::config::{DATASET, DF};
use crate::data::{RawTable, TimeSeriesStore};
use crate::error::StoreError;

/// Abstract interface for fetching the raw price table.
pub trait TableSource: Send + Sync {
    fn read_table(&self) -> Result<RawTable, StoreError>;

    /// Short human readable name for logs and the loading screen
    fn describe(&self) -> String;
}

/// CSV file on local disk (native only in practice; wasm has no filesystem)
pub struct CsvFileSource {
    pub path: PathBuf,
}

impl TableSource for CsvFileSource {
    fn read_table(&self) -> Result<RawTable, StoreError> {
        RawTable::from_csv_path(&self.path)
    }

    fn describe(&self) -> String {
        format!("CSV file {}", self.path.display())
    }
}

/// Sample table compiled into the binary
pub struct EmbeddedSource;

impl TableSource for EmbeddedSource {
    fn read_table(&self) -> Result<RawTable, StoreError> {
        RawTable::from_csv_str(DATASET.embedded_csv)
    }

    fn describe(&self) -> String {
        "bundled sample data".to_string()
    }
}

/// Pick the sources for this run.
/// An explicit path is authoritative. The default path falls back to the bundled sample
/// when the file simply does not exist.
#[cfg(not(target_arch = "wasm32"))]
pub fn sources_for(explicit_path: Option<PathBuf>) -> Vec<Box<dyn TableSource>> {
    match explicit_path {
        Some(path) => vec![Box::new(CsvFileSource { path })],
        None => vec![
            Box::new(CsvFileSource {
                path: PathBuf::from(DATASET.csv_path),
            }),
            Box::new(EmbeddedSource),
        ],
    }
}

#[cfg(target_arch = "wasm32")]
pub fn sources_for(_explicit_path: Option<PathBuf>) -> Vec<Box<dyn TableSource>> {
    vec![Box::new(EmbeddedSource)]
}

/// Load the store from the first source that exists.
/// Any other failure (malformed table, duplicate dates) is fatal and not masked by a fallback.
pub fn load_store(sources: &[Box<dyn TableSource>]) -> Result<(Arc<TimeSeriesStore>, String)> {
    for source in sources {
        let name = source.describe();
        match source.read_table() {
            Ok(raw) => {
                let store = TimeSeriesStore::load(&raw, &DATASET.layout)
                    .with_context(|| format!("Failed to build price store from {}", name))?;
                if DF.log_loader {
                    log::info!("Price store loaded from {}", name);
                }
                return Ok((Arc::new(store), name));
            }
            Err(StoreError::Io(e)) if e.kind() == ErrorKind::NotFound => {
                log::warn!("{} not found, trying next source", name);
            }
            Err(e) => return Err(e).with_context(|| format!("Failed to read {}", name)),
        }
    }
    Err(anyhow!("No price table source available"))
}

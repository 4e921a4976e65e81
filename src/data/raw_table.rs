//! Raw tabular input as handed over by ingestion: a header row plus string cells.
//! No typing happens here; `TimeSeriesStore::load` owns all validation.

use std::{fs::File, io::Read, path::Path};

use crate::error::StoreError;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub records: Vec<Vec<String>>,
}

impl RawTable {
    /// Read a headed CSV table. Ragged records are accepted here and rejected by the store,
    /// so the error can name the offending row.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, StoreError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = csv_reader
            .headers()?
            .iter()
            .map(str::to_string)
            .collect::<Vec<_>>();

        let mut records = Vec::new();
        for record in csv_reader.records() {
            let record = record?;
            records.push(record.iter().map(str::to_string).collect());
        }

        Ok(Self { headers, records })
    }

    pub fn from_csv_str(text: &str) -> Result<Self, StoreError> {
        Self::from_csv_reader(text.as_bytes())
    }

    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let file = File::open(path.as_ref())?;
        Self::from_csv_reader(file)
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn row_count(&self) -> usize {
        self.records.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_headers_and_trims_cells() {
        let table = RawTable::from_csv_str("DateTime, Gold ,Silver\n2018-01-01, 1300 ,\n").unwrap();
        assert_eq!(table.headers, vec!["DateTime", "Gold", "Silver"]);
        assert_eq!(table.records, vec![vec!["2018-01-01", "1300", ""]]);
        assert_eq!(table.column_index("Gold"), Some(1));
        assert_eq!(table.column_index("Platinum"), None);
    }

    #[test]
    fn keeps_ragged_records_for_the_store_to_reject() {
        let table = RawTable::from_csv_str("DateTime,Gold\n2018-01-01\n").unwrap();
        assert_eq!(table.row_count(), 1);
        assert_eq!(table.records[0].len(), 1);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = RawTable::from_csv_path("definitely/not/here/metals.csv").unwrap_err();
        assert!(matches!(err, StoreError::Io(_)));
    }
}

//! CSV row adapter backed by the `csv` crate.

use crate::domain::error::TradeCsvError;
use crate::ports::row_port::RowPort;
use csv::StringRecord;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

/// All records of a CSV source with a header line.
#[derive(Debug, Clone)]
pub struct CsvTable {
    headers: Vec<String>,
    rows: Vec<CsvRecordRow>,
}

/// One record, looked up through the header index shared by its table.
#[derive(Debug, Clone)]
pub struct CsvRecordRow {
    index: Arc<HashMap<String, usize>>,
    record: StringRecord,
    line: u64,
}

impl CsvTable {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, TradeCsvError> {
        let file = File::open(path.as_ref())?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, TradeCsvError> {
        let mut rdr = csv::Reader::from_reader(reader);
        let headers: Vec<String> = rdr
            .headers()
            .map_err(csv_error)?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        let mut index = HashMap::new();
        for (i, header) in headers.iter().enumerate() {
            index.entry(header.clone()).or_insert(i);
        }
        let index = Arc::new(index);

        let mut rows = Vec::new();
        for result in rdr.records() {
            let record = result.map_err(csv_error)?;
            let line = record.position().map(|p| p.line()).unwrap_or(0);
            rows.push(CsvRecordRow {
                index: Arc::clone(&index),
                record,
                line,
            });
        }
        tracing::debug!(columns = headers.len(), rows = rows.len(), "read CSV table");

        Ok(Self { headers, rows })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[CsvRecordRow] {
        &self.rows
    }
}

impl RowPort for CsvRecordRow {
    fn has_column(&self, column: &str) -> bool {
        self.index.contains_key(column)
    }

    fn find(&self, column: &str) -> Option<&str> {
        let i = *self.index.get(column)?;
        self.record
            .get(i)
            .map(str::trim)
            .filter(|v| !v.is_empty())
    }

    fn line_number(&self) -> Option<u64> {
        Some(self.line)
    }
}

fn csv_error(e: csv::Error) -> TradeCsvError {
    TradeCsvError::Csv {
        reason: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const POSITIONS: &str = "Quantity,Expiry, Expiry Day ,Settlement Type\n\
        -5,2024-06,,\n\
        3,2024-09,15,C\n";

    #[test]
    fn reads_headers_and_rows() {
        let table = CsvTable::from_reader(POSITIONS.as_bytes()).unwrap();
        assert_eq!(
            table.headers(),
            &["Quantity", "Expiry", "Expiry Day", "Settlement Type"]
        );
        assert_eq!(table.rows().len(), 2);
    }

    #[test]
    fn rows_resolve_by_column_name() {
        let table = CsvTable::from_reader(POSITIONS.as_bytes()).unwrap();
        let first = &table.rows()[0];
        assert_eq!(first.find("Quantity"), Some("-5"));
        assert_eq!(first.find("Expiry Day"), None);
        assert!(first.has_column("Expiry Day"));
        assert!(!first.has_column("Price"));

        let second = &table.rows()[1];
        assert_eq!(second.find("Expiry Day"), Some("15"));
        assert_eq!(second.find("Settlement Type"), Some("C"));
    }

    #[test]
    fn rows_know_their_line() {
        let table = CsvTable::from_reader(POSITIONS.as_bytes()).unwrap();
        assert_eq!(table.rows()[0].line_number(), Some(2));
        assert_eq!(table.rows()[1].line_number(), Some(3));
    }

    #[test]
    fn ragged_records_are_an_error() {
        let result = CsvTable::from_reader("a,b\n1,2,3\n".as_bytes());
        assert!(matches!(result, Err(TradeCsvError::Csv { .. })));
    }

    #[test]
    fn from_path_reads_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("positions.csv");
        fs::write(&path, POSITIONS).unwrap();
        let table = CsvTable::from_path(&path).unwrap();
        assert_eq!(table.rows().len(), 2);
    }

    #[test]
    fn from_path_missing_file_is_io_error() {
        let result = CsvTable::from_path("/nonexistent/positions.csv");
        assert!(matches!(result, Err(TradeCsvError::Io(_))));
    }
}

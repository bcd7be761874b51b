// file: src/parser/csv_table.rs
// description: header-addressed CSV decoding into an in-memory table
// reference: https://docs.rs/csv

use crate::error::{PipelineError, Result};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::path::Path;

/// A fully decoded CSV file: one header record plus all data records.
#[derive(Debug, Clone)]
pub struct CsvTable {
    headers: StringRecord,
    records: Vec<StringRecord>,
}

impl CsvTable {
    pub fn headers(&self) -> &StringRecord {
        &self.headers
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Raw values of a named column as (1-based record number, value) pairs.
    /// Records too short to reach the column yield an empty value.
    pub fn column(&self, name: &str) -> Result<Vec<(usize, &str)>> {
        let index = self.column_index(name).ok_or_else(|| {
            PipelineError::Validation(format!("CSV header does not contain column '{name}'"))
        })?;

        Ok(self
            .records
            .iter()
            .enumerate()
            .map(|(i, record)| (i + 1, record.get(index).unwrap_or("")))
            .collect())
    }
}

pub struct CsvTableReader {
    delimiter: u8,
    trim: bool,
}

impl Default for CsvTableReader {
    fn default() -> Self {
        Self {
            delimiter: b',',
            trim: true,
        }
    }
}

impl CsvTableReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    pub fn read_file(&self, path: &Path) -> Result<CsvTable> {
        let content = super::read_utf8(path)?;
        self.read_str(&content)
    }

    pub fn read_str(&self, content: &str) -> Result<CsvTable> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .trim(if self.trim { Trim::All } else { Trim::None })
            .flexible(true)
            .from_reader(content.as_bytes());

        let headers = reader.headers()?.clone();

        let mut records = Vec::new();
        for result in reader.records() {
            records.push(result?);
        }

        Ok(CsvTable { headers, records })
    }
}

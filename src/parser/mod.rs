// file: src/parser/mod.rs
// description: input decoding module exports
// reference: internal module structure

pub mod csv_table;
pub mod json_records;
pub mod spreadsheet;

pub use csv_table::{CsvTable, CsvTableReader};
pub use json_records::JsonRecordsParser;
pub use spreadsheet::SpreadsheetReader;

use crate::error::{PipelineError, Result};
use crate::utils::Validator;
use std::fs;
use std::path::Path;

/// Reads a file as UTF-8 and strips a leading byte-order mark if present.
/// Rejects empty files up front.
pub(crate) fn read_utf8(path: &Path) -> Result<String> {
    let content = fs::read_to_string(path).map_err(|source| PipelineError::FileOperation {
        path: path.to_path_buf(),
        source,
    })?;

    Validator::validate_content_not_empty(&content)?;

    match content.strip_prefix('\u{feff}') {
        Some(stripped) => Ok(stripped.to_string()),
        None => Ok(content),
    }
}

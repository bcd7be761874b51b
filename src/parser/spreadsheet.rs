// file: src/parser/spreadsheet.rs
// description: first-sheet xlsx decoding into menu rows
// reference: https://docs.rs/calamine

use crate::error::{PipelineError, Result};
use crate::models::MenuRow;
use calamine::{Data, DataType, Range, Reader, Xlsx, open_workbook};
use std::path::Path;

pub struct SpreadsheetReader;

impl SpreadsheetReader {
    pub fn new() -> Self {
        Self
    }

    /// Opens the workbook, takes its first sheet, and extracts one `MenuRow`
    /// per data row. Fails if either required column is missing from the
    /// header row.
    pub fn read_menu(
        &self,
        path: &Path,
        company_column: &str,
        calories_column: &str,
    ) -> Result<Vec<MenuRow>> {
        let range = self.first_sheet(path)?;
        Self::rows_from_range(&range, company_column, calories_column)
    }

    fn first_sheet(&self, path: &Path) -> Result<Range<Data>> {
        let mut workbook: Xlsx<_> = open_workbook(path).map_err(|e| {
            PipelineError::Spreadsheet(format!(
                "failed to open workbook {}: {}",
                path.display(),
                e
            ))
        })?;

        workbook
            .worksheet_range_at(0)
            .ok_or_else(|| {
                PipelineError::Spreadsheet(format!("workbook {} has no sheets", path.display()))
            })?
            .map_err(|e| {
                PipelineError::Spreadsheet(format!(
                    "failed to read first sheet of {}: {}",
                    path.display(),
                    e
                ))
            })
    }

    /// Header-row lookup for the two required columns.
    pub fn resolve_columns(
        range: &Range<Data>,
        company_column: &str,
        calories_column: &str,
    ) -> Result<(usize, usize)> {
        let headers: Vec<String> = range
            .rows()
            .next()
            .map(|row| {
                row.iter()
                    .map(|cell| cell.as_string().unwrap_or_default().trim().to_string())
                    .collect()
            })
            .unwrap_or_default();

        let company = headers.iter().position(|h| h == company_column);
        let calories = headers.iter().position(|h| h == calories_column);

        match (company, calories) {
            (Some(c), Some(k)) => Ok((c, k)),
            _ => Err(PipelineError::Validation(format!(
                "the columns '{company_column}' and '{calories_column}' must exist in the sheet"
            ))),
        }
    }

    /// Cell extraction over the data rows. Calories go through `as_f64`, so
    /// numeric cells and numeric-looking strings coerce while anything else
    /// comes back `None`.
    pub fn rows_from_range(
        range: &Range<Data>,
        company_column: &str,
        calories_column: &str,
    ) -> Result<Vec<MenuRow>> {
        let (company_idx, calories_idx) =
            Self::resolve_columns(range, company_column, calories_column)?;

        let mut rows = Vec::new();
        for (i, row) in range.rows().enumerate().skip(1) {
            let company = row
                .get(company_idx)
                .and_then(|cell| cell.as_string())
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty());

            let calories = row.get(calories_idx).and_then(|cell| cell.as_f64());

            rows.push(MenuRow {
                row: i,
                company,
                calories,
            });
        }

        Ok(rows)
    }
}

impl Default for SpreadsheetReader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn menu_range() -> Range<Data> {
        let mut range = Range::new((0, 0), (3, 1));
        range.set_value((0, 0), Data::String("Company".to_string()));
        range.set_value((0, 1), Data::String("Calories".to_string()));
        range.set_value((1, 0), Data::String("A".to_string()));
        range.set_value((1, 1), Data::Float(100.0));
        range.set_value((2, 0), Data::String("B".to_string()));
        range.set_value((2, 1), Data::String("300".to_string()));
        range.set_value((3, 0), Data::String("A".to_string()));
        range.set_value((3, 1), Data::String("not a number".to_string()));
        range
    }

    #[test]
    fn test_resolve_columns() {
        let range = menu_range();
        let (company, calories) =
            SpreadsheetReader::resolve_columns(&range, "Company", "Calories").unwrap();
        assert_eq!((company, calories), (0, 1));
    }

    #[test]
    fn test_missing_column_is_validation_error() {
        let range = menu_range();
        let err = SpreadsheetReader::resolve_columns(&range, "Company", "Fat").unwrap_err();
        assert!(matches!(err, PipelineError::Validation(_)));
    }

    #[test]
    fn test_rows_from_range_coerces_calories() {
        let range = menu_range();
        let rows = SpreadsheetReader::rows_from_range(&range, "Company", "Calories").unwrap();

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].company.as_deref(), Some("A"));
        assert_eq!(rows[0].calories, Some(100.0));
        // numeric-looking string coerces
        assert_eq!(rows[1].calories, Some(300.0));
        // non-numeric string does not
        assert_eq!(rows[2].calories, None);
    }

    #[test]
    fn test_empty_company_cell_is_absent() {
        let mut range = Range::new((0, 0), (1, 1));
        range.set_value((0, 0), Data::String("Company".to_string()));
        range.set_value((0, 1), Data::String("Calories".to_string()));
        range.set_value((1, 1), Data::Float(50.0));

        let rows = SpreadsheetReader::rows_from_range(&range, "Company", "Calories").unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].company, None);
        assert_eq!(rows[0].calories, Some(50.0));
    }

    #[test]
    fn test_missing_file_is_spreadsheet_error() {
        let reader = SpreadsheetReader::new();
        let err = reader
            .read_menu(Path::new("/nonexistent/menu.xlsx"), "Company", "Calories")
            .unwrap_err();
        assert!(matches!(err, PipelineError::Spreadsheet(_)));
    }
}

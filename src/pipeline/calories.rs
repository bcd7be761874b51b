// file: src/pipeline/calories.rs
// description: spreadsheet calorie aggregation pipeline
// reference: group menu rows by company and report the highest total

use super::stats::RowStats;
use crate::config::Config;
use crate::error::{PipelineError, Result};
use crate::models::{CalorieLeader, CompanyCalorieTotals, MenuRow};
use crate::parser::SpreadsheetReader;
use crate::report::TextReporter;
use crate::utils::{OperationTimer, Validator};
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

pub struct CaloriePipeline {
    input_path: PathBuf,
    output_file: String,
    company_column: String,
    calories_column: String,
    reporter: TextReporter,
}

impl CaloriePipeline {
    pub fn new(config: &Config) -> Self {
        Self {
            input_path: config.paths.input_dir.join(&config.calories.input_file),
            output_file: config.calories.output_file.clone(),
            company_column: config.calories.company_column.clone(),
            calories_column: config.calories.calories_column.clone(),
            reporter: TextReporter::new(config.paths.output_dir.clone()),
        }
    }

    /// Runs the full pipeline. Failures are logged and swallowed; nothing is
    /// written unless a leading company was determined.
    pub fn run(&self) {
        info!(
            "Starting calorie aggregation for {}",
            self.input_path.display()
        );
        let timer = OperationTimer::new("calorie pipeline");

        let leader = match self.aggregate(&self.input_path) {
            Ok(leader) => leader,
            Err(PipelineError::Empty(reason)) => {
                error!(
                    "Could not determine the company with the highest calories: {}",
                    reason
                );
                timer.finish();
                return;
            }
            Err(err) => {
                error!(
                    "Error reading spreadsheet {}: {}",
                    self.input_path.display(),
                    err
                );
                timer.finish();
                return;
            }
        };

        match self.reporter.write(&self.output_file, &leader.render()) {
            Ok(path) => info!(
                "Calorie leader '{}' ({} calories) saved to {}",
                leader.company,
                leader.total,
                path.display()
            ),
            Err(err) => error!("Failed to write report {}: {}", self.output_file, err),
        }

        timer.finish();
    }

    /// Reads the first sheet and determines the company with the highest
    /// total calories. Missing required columns surface as a validation
    /// error; an input with no usable rows yields `Empty`.
    pub fn aggregate(&self, path: &Path) -> Result<CalorieLeader> {
        Validator::validate_file_path(path)?;

        let rows =
            SpreadsheetReader::new().read_menu(path, &self.company_column, &self.calories_column)?;
        self.accumulate(&rows)
    }

    /// Groups rows by exact company name and sums calories. Rows with an
    /// absent company or non-coercible calories are excluded entirely, never
    /// counted as zero.
    pub fn accumulate(&self, rows: &[MenuRow]) -> Result<CalorieLeader> {
        let mut row_stats = RowStats::new();
        let mut totals = CompanyCalorieTotals::new();

        for row in rows {
            match (&row.company, row.calories) {
                (Some(company), Some(calories)) => {
                    totals.add(company, calories);
                    row_stats.use_row();
                }
                (None, _) => {
                    row_stats.skip_row();
                    warn!(
                        "Skipping row {}: missing '{}' value",
                        row.row, self.company_column
                    );
                }
                (Some(company), None) => {
                    row_stats.skip_row();
                    warn!(
                        "Skipping row {} ({}): non-numeric '{}' value",
                        row.row, company, self.calories_column
                    );
                }
            }
        }

        info!(
            "Aggregated {} of {} rows across {} companies ({:.1}% usable)",
            row_stats.rows_used,
            row_stats.rows_seen,
            totals.len(),
            row_stats.success_rate()
        );

        totals
            .leader()
            .ok_or_else(|| PipelineError::Empty("no rows with usable company and calorie values".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn test_config(dir: &TempDir) -> Config {
        let mut config = Config::default_config();
        config.paths.input_dir = dir.path().join("data");
        config.paths.output_dir = dir.path().join("processed");
        config
    }

    fn row(number: usize, company: Option<&str>, calories: Option<f64>) -> MenuRow {
        MenuRow {
            row: number,
            company: company.map(str::to_string),
            calories,
        }
    }

    #[test]
    fn test_accumulate_picks_highest_total() {
        let dir = TempDir::new().unwrap();
        let pipeline = CaloriePipeline::new(&test_config(&dir));

        let rows = vec![
            row(1, Some("A"), Some(100.0)),
            row(2, Some("B"), Some(300.0)),
            row(3, Some("A"), Some(50.0)),
        ];

        let leader = pipeline.accumulate(&rows).unwrap();
        assert_eq!(leader.company, "B");
        assert_eq!(leader.total, 300.0);
    }

    #[test]
    fn test_accumulate_excludes_invalid_rows() {
        let dir = TempDir::new().unwrap();
        let pipeline = CaloriePipeline::new(&test_config(&dir));

        // B's non-numeric row is dropped, not counted as zero
        let rows = vec![
            row(1, Some("A"), Some(100.0)),
            row(2, Some("B"), Some(250.0)),
            row(3, Some("A"), Some(50.0)),
            row(4, Some("B"), None),
            row(5, None, Some(999.0)),
        ];

        let leader = pipeline.accumulate(&rows).unwrap();
        assert_eq!(leader.company, "B");
        assert_eq!(leader.total, 250.0);
    }

    #[test]
    fn test_accumulate_empty_input() {
        let dir = TempDir::new().unwrap();
        let pipeline = CaloriePipeline::new(&test_config(&dir));

        let err = pipeline.accumulate(&[]).unwrap_err();
        assert!(matches!(err, PipelineError::Empty(_)));

        let err = pipeline
            .accumulate(&[row(1, Some("A"), None)])
            .unwrap_err();
        assert!(matches!(err, PipelineError::Empty(_)));
    }

    #[test]
    fn test_run_with_missing_input_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let config = test_config(&dir);

        CaloriePipeline::new(&config).run();

        assert!(!config.paths.output_dir.exists());
    }
}

// file: src/pipeline/release_year.rs
// description: csv release year statistics pipeline
// reference: load, coerce, aggregate, and report release years

use super::stats::RowStats;
use crate::config::Config;
use crate::error::{PipelineError, Result};
use crate::models::ReleaseYearStats;
use crate::parser::CsvTableReader;
use crate::report::TextReporter;
use crate::utils::{OperationTimer, Validator};
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

pub struct ReleaseYearPipeline {
    input_path: PathBuf,
    output_file: String,
    column: String,
    reporter: TextReporter,
}

impl ReleaseYearPipeline {
    pub fn new(config: &Config) -> Self {
        Self {
            input_path: config.paths.input_dir.join(&config.release_year.input_file),
            output_file: config.release_year.output_file.clone(),
            column: config.release_year.column.clone(),
            reporter: TextReporter::new(config.paths.output_dir.clone()),
        }
    }

    /// Runs the full pipeline. Failures are logged and swallowed; nothing is
    /// written unless the analysis produced statistics.
    pub fn run(&self) {
        info!(
            "Starting release year analysis for {}",
            self.input_path.display()
        );
        let timer = OperationTimer::new("release year pipeline");

        let stats = match self.analyze(&self.input_path) {
            Ok(stats) => stats,
            Err(PipelineError::Empty(reason)) => {
                error!("No valid statistics to save: {}", reason);
                timer.finish();
                return;
            }
            Err(err) => {
                error!(
                    "Error processing CSV file {}: {}",
                    self.input_path.display(),
                    err
                );
                timer.finish();
                return;
            }
        };

        match self.reporter.write(&self.output_file, &stats.render()) {
            Ok(path) => info!(
                "Release year statistics ({}) saved to {}",
                stats.count_summary(),
                path.display()
            ),
            Err(err) => error!("Failed to write report {}: {}", self.output_file, err),
        }

        timer.finish();
    }

    /// Parses the CSV, coerces the configured column to integers record by
    /// record, and computes the statistics. Each record that fails coercion
    /// is logged and skipped; zero usable records yields `Empty`.
    pub fn analyze(&self, path: &Path) -> Result<ReleaseYearStats> {
        Validator::validate_file_path(path)?;

        let table = CsvTableReader::new().read_file(path)?;
        let column = table.column(&self.column)?;

        let mut row_stats = RowStats::new();
        let mut years = Vec::with_capacity(column.len());

        for (record, raw) in column {
            match raw.parse::<i64>() {
                Ok(year) => {
                    years.push(year);
                    row_stats.use_row();
                }
                Err(err) => {
                    row_stats.skip_row();
                    warn!(
                        "Skipping record {} with invalid '{}' value {:?}: {}",
                        record, self.column, raw, err
                    );
                }
            }
        }

        info!(
            "Coerced {} of {} records ({:.1}% usable)",
            row_stats.rows_used,
            row_stats.rows_seen,
            row_stats.success_rate()
        );

        ReleaseYearStats::from_years(&years).ok_or_else(|| {
            warn!("No valid release year data found in {}", path.display());
            PipelineError::Empty(format!(
                "no valid '{}' values in {}",
                self.column,
                path.display()
            ))
        })
    }
}

// file: src/pipeline/country_region.rs
// description: json country-region pairing pipeline
// reference: map country common names to regions and report the pairs

use super::stats::RowStats;
use crate::config::Config;
use crate::error::{PipelineError, Result};
use crate::models::CountryRegionMap;
use crate::parser::JsonRecordsParser;
use crate::report::TextReporter;
use crate::utils::{OperationTimer, Validator};
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

pub struct CountryRegionPipeline {
    input_path: PathBuf,
    output_file: String,
    reporter: TextReporter,
}

impl CountryRegionPipeline {
    pub fn new(config: &Config) -> Self {
        Self {
            input_path: config
                .paths
                .input_dir
                .join(&config.country_region.input_file),
            output_file: config.country_region.output_file.clone(),
            reporter: TextReporter::new(config.paths.output_dir.clone()),
        }
    }

    /// Runs the full pipeline. Failures are logged and swallowed; nothing is
    /// written unless at least one pair was extracted.
    pub fn run(&self) {
        info!(
            "Starting country-region pairing for {}",
            self.input_path.display()
        );
        let timer = OperationTimer::new("country region pipeline");

        let pairs = match self.pair(&self.input_path) {
            Ok(pairs) => pairs,
            Err(PipelineError::Empty(reason)) => {
                error!("Could not extract country-region pairs: {}", reason);
                timer.finish();
                return;
            }
            Err(err) => {
                error!(
                    "Error reading JSON file {}: {}",
                    self.input_path.display(),
                    err
                );
                timer.finish();
                return;
            }
        };

        match self.reporter.write(&self.output_file, &pairs.render()) {
            Ok(path) => info!(
                "{} country-region pairs saved to {}",
                pairs.len(),
                path.display()
            ),
            Err(err) => error!("Failed to write report {}: {}", self.output_file, err),
        }

        timer.finish();
    }

    /// Parses the record array and builds the name-to-region map. Records
    /// missing either field are logged and skipped; a duplicate common name
    /// silently overwrites the earlier pair. Zero pairs yields `Empty`.
    pub fn pair(&self, path: &Path) -> Result<CountryRegionMap> {
        Validator::validate_file_path(path)?;

        let records = JsonRecordsParser::new().read_file(path)?;

        let mut row_stats = RowStats::new();
        let mut map = CountryRegionMap::new();

        for (index, record) in records.iter().enumerate() {
            match (record.common_name(), record.region_name()) {
                (Some(common), Some(region)) => {
                    map.insert(common, region);
                    row_stats.use_row();
                }
                (common, _) => {
                    row_stats.skip_row();
                    warn!(
                        "Skipping record {} ({}): missing 'name.common' or 'region' field",
                        index,
                        common.unwrap_or("unnamed")
                    );
                }
            }
        }

        info!(
            "Paired {} of {} records ({:.1}% usable)",
            row_stats.rows_used,
            row_stats.rows_seen,
            row_stats.success_rate()
        );

        if map.is_empty() {
            return Err(PipelineError::Empty(format!(
                "no records with both 'name.common' and 'region' in {}",
                path.display()
            )));
        }

        Ok(map)
    }
}

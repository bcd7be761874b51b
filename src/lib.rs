// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod config;
pub mod error;
pub mod models;
pub mod parser;
pub mod pipeline;
pub mod report;
pub mod utils;

pub use config::{CaloriesConfig, Config, CountryRegionConfig, PathsConfig, ReleaseYearConfig};
pub use error::{PipelineError, Result};
pub use models::{
    CalorieLeader, CompanyCalorieTotals, CountryName, CountryRecord, CountryRegionMap, MenuRow,
    ReleaseYearStats,
};
pub use parser::{CsvTable, CsvTableReader, JsonRecordsParser, SpreadsheetReader};
pub use pipeline::{CaloriePipeline, CountryRegionPipeline, ReleaseYearPipeline, RowStats};
pub use report::TextReporter;
pub use utils::{HealthCheck, HealthReport, HealthStatus, OperationTimer, Validator};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let config = Config::default_config();
        let _pipeline = ReleaseYearPipeline::new(&config);
        let _reporter = TextReporter::new(&config.paths.output_dir);
    }
}

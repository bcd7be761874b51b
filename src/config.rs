// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{PipelineError, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub paths: PathsConfig,
    pub release_year: ReleaseYearConfig,
    pub calories: CaloriesConfig,
    pub country_region: CountryRegionConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PathsConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReleaseYearConfig {
    pub input_file: String,
    pub output_file: String,
    pub column: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CaloriesConfig {
    pub input_file: String,
    pub output_file: String,
    pub company_column: String,
    pub calories_column: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CountryRegionConfig {
    pub input_file: String,
    pub output_file: String,
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder.add_source(config::File::from(Path::new("config/default.toml")));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("DATA_DIGEST")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| PipelineError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| PipelineError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            paths: PathsConfig {
                input_dir: PathBuf::from("data"),
                output_dir: PathBuf::from("data_processed"),
            },
            release_year: ReleaseYearConfig {
                input_file: "netflix_movies.csv".to_string(),
                output_file: "netflix_movies_stats.txt".to_string(),
                column: "release_year".to_string(),
            },
            calories: CaloriesConfig {
                input_file: "fastfood_data.xlsx".to_string(),
                output_file: "excel_company_calories.txt".to_string(),
                company_column: "Company".to_string(),
                calories_column: "Calories".to_string(),
            },
            country_region: CountryRegionConfig {
                input_file: "countries.json".to_string(),
                output_file: "country_region_pairs.txt".to_string(),
            },
        }
    }

    /// Full paths of the three configured input files, for health checks.
    pub fn input_paths(&self) -> Vec<PathBuf> {
        vec![
            self.paths.input_dir.join(&self.release_year.input_file),
            self.paths.input_dir.join(&self.calories.input_file),
            self.paths.input_dir.join(&self.country_region.input_file),
        ]
    }

    fn validate(&self) -> Result<()> {
        if self.paths.input_dir.as_os_str().is_empty() {
            return Err(PipelineError::Config(
                "input_dir must not be empty".to_string(),
            ));
        }

        if self.paths.output_dir.as_os_str().is_empty() {
            return Err(PipelineError::Config(
                "output_dir must not be empty".to_string(),
            ));
        }

        let names = [
            ("release_year.input_file", &self.release_year.input_file),
            ("release_year.output_file", &self.release_year.output_file),
            ("release_year.column", &self.release_year.column),
            ("calories.input_file", &self.calories.input_file),
            ("calories.output_file", &self.calories.output_file),
            ("calories.company_column", &self.calories.company_column),
            ("calories.calories_column", &self.calories.calories_column),
            ("country_region.input_file", &self.country_region.input_file),
            (
                "country_region.output_file",
                &self.country_region.output_file,
            ),
        ];

        for (key, value) in names {
            if value.trim().is_empty() {
                return Err(PipelineError::Config(format!("{key} must not be empty")));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config_matches_fixed_paths() {
        let config = Config::default_config();

        assert_eq!(config.paths.input_dir, PathBuf::from("data"));
        assert_eq!(config.release_year.input_file, "netflix_movies.csv");
        assert_eq!(config.release_year.output_file, "netflix_movies_stats.txt");
        assert_eq!(config.release_year.column, "release_year");
        assert_eq!(config.calories.input_file, "fastfood_data.xlsx");
        assert_eq!(config.calories.output_file, "excel_company_calories.txt");
        assert_eq!(config.calories.company_column, "Company");
        assert_eq!(config.calories.calories_column, "Calories");
        assert_eq!(config.country_region.input_file, "countries.json");
        assert_eq!(
            config.country_region.output_file,
            "country_region_pairs.txt"
        );
    }

    #[test]
    fn test_default_config_validates() {
        assert!(Config::default_config().validate().is_ok());
    }

    #[test]
    fn test_blank_column_is_rejected() {
        let mut config = Config::default_config();
        config.release_year.column = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_input_paths() {
        let config = Config::default_config();
        let paths = config.input_paths();

        assert_eq!(paths.len(), 3);
        assert_eq!(paths[0], PathBuf::from("data/netflix_movies.csv"));
        assert_eq!(paths[2], PathBuf::from("data/countries.json"));
    }
}

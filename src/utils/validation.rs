// file: src/utils/validation.rs
// description: data validation utilities and helpers
// reference: input validation patterns

use crate::error::{PipelineError, Result};
use std::path::Path;

pub struct Validator;

impl Validator {
    pub fn validate_file_path(path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(PipelineError::Validation(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        if !path.is_file() {
            return Err(PipelineError::Validation(format!(
                "Path is not a file: {}",
                path.display()
            )));
        }

        Ok(())
    }

    pub fn validate_directory(path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(PipelineError::Validation(format!(
                "Directory does not exist: {}",
                path.display()
            )));
        }

        if !path.is_dir() {
            return Err(PipelineError::Validation(format!(
                "Path is not a directory: {}",
                path.display()
            )));
        }

        Ok(())
    }

    pub fn validate_extension(path: &Path, allowed: &[&str]) -> Result<()> {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if allowed.iter().any(|a| a.eq_ignore_ascii_case(ext)) => Ok(()),
            _ => Err(PipelineError::Validation(format!(
                "File {} does not have one of the expected extensions {:?}",
                path.display(),
                allowed
            ))),
        }
    }

    pub fn validate_content_not_empty(content: &str) -> Result<()> {
        if content.trim().is_empty() {
            return Err(PipelineError::Validation("Content is empty".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_validate_file_path() {
        let temp = TempDir::new().unwrap();
        let file_path = temp.path().join("movies.csv");
        fs::write(&file_path, "release_year\n2020\n").unwrap();

        assert!(Validator::validate_file_path(&file_path).is_ok());
        assert!(Validator::validate_file_path(Path::new("/nonexistent")).is_err());
        assert!(Validator::validate_file_path(temp.path()).is_err());
    }

    #[test]
    fn test_validate_directory() {
        let temp = TempDir::new().unwrap();
        assert!(Validator::validate_directory(temp.path()).is_ok());
        assert!(Validator::validate_directory(Path::new("/nonexistent")).is_err());
    }

    #[test]
    fn test_validate_extension() {
        assert!(Validator::validate_extension(Path::new("movies.csv"), &["csv"]).is_ok());
        assert!(Validator::validate_extension(Path::new("menu.XLSX"), &["xlsx"]).is_ok());
        assert!(
            Validator::validate_extension(Path::new("countries.json"), &["csv", "json"]).is_ok()
        );
        assert!(Validator::validate_extension(Path::new("notes.txt"), &["csv"]).is_err());
        assert!(Validator::validate_extension(Path::new("no_extension"), &["csv"]).is_err());
    }

    #[test]
    fn test_validate_content_not_empty() {
        assert!(Validator::validate_content_not_empty("content").is_ok());
        assert!(Validator::validate_content_not_empty("").is_err());
        assert!(Validator::validate_content_not_empty("   ").is_err());
    }
}

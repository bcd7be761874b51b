// file: src/report/text.rs
// description: plain-text report writing with on-demand directory creation
// reference: internal output handling

use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Writes report files under a fixed output directory. The directory is only
/// created once there is content to write, so a run that produces nothing
/// leaves the output folder untouched.
#[derive(Debug, Clone)]
pub struct TextReporter {
    output_dir: PathBuf,
}

impl TextReporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Writes `content` to `file_name` under the output directory, replacing
    /// any previous file in full. Returns the written path.
    pub fn write(&self, file_name: &str, content: &str) -> Result<PathBuf> {
        fs::create_dir_all(&self.output_dir)?;

        let path = self.output_dir.join(file_name);
        fs::write(&path, content)?;

        debug!("Wrote {} bytes to {}", content.len(), path.display());
        Ok(path)
    }
}

// file: src/models/release_year.rs
// description: release year statistics model and report rendering
// reference: internal data structures

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReleaseYearStats {
    pub min: i64,
    pub max: i64,
    pub mean: f64,
    pub stdev: f64,
}

impl ReleaseYearStats {
    /// Computes min, max, mean, and sample standard deviation over the given
    /// years. Returns `None` when the slice is empty. A single value has no
    /// sample variance, so its stdev is defined as 0.
    pub fn from_years(years: &[i64]) -> Option<Self> {
        if years.is_empty() {
            return None;
        }

        let min = *years.iter().min().expect("non-empty slice");
        let max = *years.iter().max().expect("non-empty slice");

        let n = years.len() as f64;
        let mean = years.iter().map(|&y| y as f64).sum::<f64>() / n;

        let stdev = if years.len() > 1 {
            let sum_sq: f64 = years
                .iter()
                .map(|&y| {
                    let d = y as f64 - mean;
                    d * d
                })
                .sum();
            (sum_sq / (n - 1.0)).sqrt()
        } else {
            0.0
        };

        Some(Self {
            min,
            max,
            mean,
            stdev,
        })
    }

    pub fn count_summary(&self) -> String {
        format!(
            "min={} max={} mean={:.2} stdev={:.2}",
            self.min, self.max, self.mean, self.stdev
        )
    }

    /// Fixed four-line report body, each value formatted to two decimals.
    pub fn render(&self) -> String {
        format!(
            "Minimum: {:.2}\nMaximum: {:.2}\nMean: {:.2}\nStandard Deviation: {:.2}\n",
            self.min as f64, self.max as f64, self.mean, self.stdev
        )
    }
}

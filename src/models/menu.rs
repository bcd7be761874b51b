// file: src/models/menu.rs
// description: menu row record and per-company calorie totals
// reference: internal data structures

use serde::Serialize;
use std::collections::BTreeMap;

/// One spreadsheet row after cell extraction. `None` means the cell was
/// absent or failed coercion; validation happens in the pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuRow {
    pub row: usize,
    pub company: Option<String>,
    pub calories: Option<f64>,
}

/// Calorie sums grouped by exact company name. Backed by a `BTreeMap` so
/// grouping order is deterministic across runs.
#[derive(Debug, Clone, Default)]
pub struct CompanyCalorieTotals {
    totals: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalorieLeader {
    pub company: String,
    pub total: f64,
}

impl CompanyCalorieTotals {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, company: &str, calories: f64) {
        *self.totals.entry(company.to_string()).or_insert(0.0) += calories;
    }

    pub fn len(&self) -> usize {
        self.totals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    pub fn total_for(&self, company: &str) -> Option<f64> {
        self.totals.get(company).copied()
    }

    /// The company with the strictly highest total. Iteration is in key
    /// order and only a strictly greater total displaces the current best,
    /// so ties resolve to the lexicographically smallest company name.
    pub fn leader(&self) -> Option<CalorieLeader> {
        let mut best: Option<CalorieLeader> = None;

        for (company, &total) in &self.totals {
            let beats = best.as_ref().is_none_or(|b| total > b.total);
            if beats {
                best = Some(CalorieLeader {
                    company: company.clone(),
                    total,
                });
            }
        }

        best
    }
}

impl CalorieLeader {
    pub fn render(&self) -> String {
        format!(
            "The Company with the highest total calorie count is '{}' with {} calories\n",
            self.company, self.total
        )
    }
}

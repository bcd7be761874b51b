// file: src/models/country.rs
// description: country record deserialization and country-region mapping
// reference: https://docs.rs/serde_json

use serde::Deserialize;
use std::collections::BTreeMap;

/// One element of the countries array. Both fields are optional at the
/// decode boundary; presence is checked by the pipeline.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CountryRecord {
    #[serde(default)]
    pub name: Option<CountryName>,
    #[serde(default)]
    pub region: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CountryName {
    #[serde(default)]
    pub common: Option<String>,
}

impl CountryRecord {
    /// The common name, with blank strings treated as absent.
    pub fn common_name(&self) -> Option<&str> {
        self.name
            .as_ref()
            .and_then(|n| n.common.as_deref())
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// The region, with blank strings treated as absent.
    pub fn region_name(&self) -> Option<&str> {
        self.region
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

/// Country name to region mapping. Inserting an existing name overwrites the
/// previous region (last write wins) and hands the displaced value back.
#[derive(Debug, Clone, Default)]
pub struct CountryRegionMap {
    pairs: BTreeMap<String, String>,
}

impl CountryRegionMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, country: &str, region: &str) -> Option<String> {
        self.pairs.insert(country.to_string(), region.to_string())
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn region_of(&self, country: &str) -> Option<&str> {
        self.pairs.get(country).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(c, r)| (c.as_str(), r.as_str()))
    }

    /// One `Country: Region` line per entry, in map iteration order.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (country, region) in &self.pairs {
            out.push_str(country);
            out.push_str(": ");
            out.push_str(region);
            out.push('\n');
        }
        out
    }
}

// file: src/parser/json_records.rs
// description: whole-document json array decoding into country records
// reference: https://docs.rs/serde_json

use crate::error::Result;
use crate::models::CountryRecord;
use std::path::Path;

pub struct JsonRecordsParser;

impl JsonRecordsParser {
    pub fn new() -> Self {
        Self
    }

    /// Parses the entire document at once. The input is expected to be a
    /// top-level array of country objects.
    pub fn read_file(&self, path: &Path) -> Result<Vec<CountryRecord>> {
        let content = super::read_utf8(path)?;
        self.read_str(&content)
    }

    pub fn read_str(&self, content: &str) -> Result<Vec<CountryRecord>> {
        let records: Vec<CountryRecord> = serde_json::from_str(content)?;
        Ok(records)
    }
}

impl Default for JsonRecordsParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PipelineError;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_country_array() {
        let parser = JsonRecordsParser::new();
        let records = parser
            .read_str(
                r#"[
                    {"name": {"common": "Aruba"}, "region": "Americas", "subregion": "Caribbean"},
                    {"name": {"common": "Afghanistan"}, "region": "Asia"}
                ]"#,
            )
            .unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].common_name(), Some("Aruba"));
        assert_eq!(records[1].region_name(), Some("Asia"));
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let parser = JsonRecordsParser::new();
        let records = parser
            .read_str(r#"[{"name": {"common": "X", "official": "The X"}, "region": "Y", "languages": {"en": "English"}}]"#)
            .unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_structural_failure_is_json_error() {
        let parser = JsonRecordsParser::new();
        let err = parser.read_str("{\"not\": \"an array\"}").unwrap_err();
        assert!(matches!(err, PipelineError::Json(_)));

        let err = parser.read_str("not json at all").unwrap_err();
        assert!(matches!(err, PipelineError::Json(_)));
    }
}

//! The JSON artifact written at the end of a run.

use serde::Serialize;

use crate::core::error::Result;

use std::fs;
use std::path::Path;

/// Final output: a single `links` field holding the ordered, unique,
/// normalized URLs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkReport {
    pub links: Vec<String>,
}

impl LinkReport {
    pub fn new(links: Vec<String>) -> Self {
        Self { links }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize fully before touching the destination, so a failed run
    /// never leaves a partial artifact behind.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;
        fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;

    type TestResult = std::result::Result<(), Box<dyn std::error::Error>>;

    #[test]
    fn test_to_json__single_top_level_field() -> TestResult {
        let report = LinkReport::new(vec![
            "https://example.com/a".to_string(),
            "https://example.com/b?x=1".to_string(),
        ]);

        assert_eq!(
            report.to_json()?,
            r#"{"links":["https://example.com/a","https://example.com/b?x=1"]}"#
        );
        Ok(())
    }

    #[test]
    fn test_to_json__empty_links() -> TestResult {
        let report = LinkReport::new(Vec::new());
        assert_eq!(report.to_json()?, r#"{"links":[]}"#);
        Ok(())
    }

    #[test]
    fn test_write_to_file__round_trip() -> TestResult {
        let temp_dir = tempfile::tempdir()?;
        let destination = temp_dir.path().join("links.json");
        let report = LinkReport::new(vec!["https://example.com".to_string()]);

        report.write_to_file(&destination)?;

        let written = std::fs::read_to_string(&destination)?;
        assert_eq!(written, r#"{"links":["https://example.com"]}"#);
        Ok(())
    }

    #[test]
    fn test_write_to_file__unwritable_destination_is_an_error() {
        let report = LinkReport::new(Vec::new());
        let result = report.write_to_file(Path::new("/definitely/missing/dir/links.json"));
        assert!(result.is_err());
    }
}

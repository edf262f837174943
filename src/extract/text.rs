//! Plain-text link extraction.

use crate::core::error::Result;
use crate::extract::scan_for_urls;

use std::fs;
use std::path::Path;

/// Read the whole file as UTF-8 and scan it for URLs.
pub fn extract(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)?;

    let mut links = Vec::new();
    scan_for_urls(&content, &mut links);
    Ok(links)
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use std::io::Write;

    #[test]
    fn test_extract__finds_urls_across_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            b"Visit https://example.com today.\n\
              Also see http://other.org/page and https://example.com.",
        )
        .unwrap();

        let links = extract(file.path()).unwrap();
        assert_eq!(
            links,
            vec![
                "https://example.com".to_string(),
                "http://other.org/page".to_string(),
                // Duplicates and trailing punctuation survive; the
                // normalizer deals with them later.
                "https://example.com.".to_string(),
            ]
        );
    }

    #[test]
    fn test_extract__no_urls() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"just some text without any links")
            .unwrap();

        assert!(extract(file.path()).unwrap().is_empty());
    }

    #[test]
    fn test_extract__non_utf8_content_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0xff, 0xfe, 0x00, 0x01]).unwrap();

        assert!(extract(file.path()).is_err());
    }
}

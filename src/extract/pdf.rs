//! PDF link extraction.
//!
//! Decodes the document's text layer with pdf-extract and scans the
//! decoded text with the shared URL pattern. Extraction quality depends
//! on the PDF having a text layer; scanned images yield nothing.

use crate::core::error::Result;
use crate::extract::scan_for_urls;

use std::path::Path;

/// Decode the text content of every page and scan it for URLs.
pub fn extract(path: &Path) -> Result<Vec<String>> {
    let text = pdf_extract::extract_text(path)?;

    let mut links = Vec::new();
    scan_for_urls(&text, &mut links);
    Ok(links)
}

//! CSV link extraction.
//!
//! Rows are read with strict field counts and headers treated as data,
//! so every cell is scanned. A malformed row fails the whole file; the
//! walker records it and moves on.

use csv::ReaderBuilder;

use crate::core::error::Result;
use crate::extract::scan_for_urls;

use std::path::Path;

/// Iterate rows, then cells, scanning each cell for URLs.
pub fn extract(path: &Path) -> Result<Vec<String>> {
    let mut reader = ReaderBuilder::new().has_headers(false).from_path(path)?;

    let mut links = Vec::new();
    for record in reader.records() {
        let record = record?;
        for cell in record.iter() {
            scan_for_urls(cell, &mut links);
        }
    }
    Ok(links)
}

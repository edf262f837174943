//! Per-format link extraction and dispatch
//!
//! Each supported document format has its own extractor module; this
//! module maps a file's extension to the right one. Unsupported
//! extensions are a silent skip, not a failure.

pub mod csv;
pub mod docx;
pub mod html;
pub mod pdf;
pub mod text;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::error::Result;

use std::path::Path;

/// Scan pattern shared by the PDF, DOCX, CSV and plain-text extractors:
/// `http://` or `https://` followed by one or more non-whitespace
/// characters. Embedded punctuation is part of the token; nothing is
/// stripped from the tail. `ftp://` and bare `www.` hosts do not match.
const URL_SCAN_PATTERN: &str = r"https?://\S+";

static URL_SCANNER: Lazy<Regex> =
    Lazy::new(|| Regex::new(URL_SCAN_PATTERN).expect("Failed to compile URL scan pattern"));

/// Collect every URL-like token in `content` into `links`.
pub(crate) fn scan_for_urls(content: &str, links: &mut Vec<String>) {
    for url in URL_SCANNER.find_iter(content) {
        links.push(url.as_str().to_string());
    }
}

/// Document format inferred from a file extension, case-insensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Pdf,
    Docx,
    Csv,
    Html,
    Text,
}

impl FileFormat {
    /// Infer the format from the path's extension. Returns `None` for
    /// unsupported or missing extensions.
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();

        match extension.as_str() {
            "pdf" => Some(FileFormat::Pdf),
            "docx" => Some(FileFormat::Docx),
            "csv" => Some(FileFormat::Csv),
            "html" | "htm" => Some(FileFormat::Html),
            "txt" => Some(FileFormat::Text),
            _ => None,
        }
    }
}

/// Route a file to the extractor for its format and return the raw
/// URL-like tokens found in its content.
///
/// Files with an unsupported extension yield `Ok` with no links; an
/// error means the file's format was recognized but its content could
/// not be parsed.
pub fn extract_links(path: &Path) -> Result<Vec<String>> {
    match FileFormat::from_path(path) {
        Some(FileFormat::Pdf) => pdf::extract(path),
        Some(FileFormat::Docx) => docx::extract(path),
        Some(FileFormat::Csv) => csv::extract(path),
        Some(FileFormat::Html) => html::extract(path),
        Some(FileFormat::Text) => text::extract(path),
        None => Ok(Vec::new()),
    }
}

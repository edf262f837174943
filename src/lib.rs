//! linkscan — extract and normalize URLs from document trees.
//!
//! The pipeline walks a directory recursively, routes every regular
//! file through a per-format extractor (PDF, DOCX, CSV, HTML, plain
//! text), then trims, form-decodes, validates and deduplicates the
//! collected tokens. The result is a JSON artifact with a single
//! `links` field. One bad file never aborts a run: its failure is
//! recorded and reported while the rest of the tree is processed.

pub mod core;
pub mod discovery;
pub mod extract;
pub mod logging;
pub mod normalize;
pub mod report;

// Re-export the pipeline surface
pub use crate::core::error::{LinkScanError, Result};
pub use crate::discovery::{ExtractionFailure, ScanOutcome, scan_tree};
pub use crate::extract::{FileFormat, extract_links};
pub use crate::normalize::normalize_links;
pub use crate::report::LinkReport;

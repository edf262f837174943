//! Directory traversal and per-file failure isolation
//!
//! This module walks a directory tree, routes each regular file through
//! the format dispatcher and aggregates links and failures.

pub mod walker;

// Re-export commonly used items
pub use walker::{ExtractionFailure, ScanOutcome, scan_tree};

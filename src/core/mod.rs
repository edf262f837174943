//! Core error handling and result types
//!
//! This module contains the error taxonomy shared by the extraction
//! pipeline and the CLI.

pub mod error;

// Re-export commonly used items for convenience
pub use error::{LinkScanError, Result};

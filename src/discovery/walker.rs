use ignore::WalkBuilder;
use log::{debug, warn};

use crate::core::error::{LinkScanError, Result};
use crate::extract;

use std::path::{Path, PathBuf};

/// A file whose format was recognized but whose content could not be
/// parsed. The run continues regardless.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionFailure {
    pub path: PathBuf,
    pub reason: String,
}

/// Aggregate outcome of one directory scan: every raw URL-like token in
/// traversal order, plus the files that failed extraction.
#[derive(Debug, Default)]
pub struct ScanOutcome {
    pub raw_links: Vec<String>,
    pub failures: Vec<ExtractionFailure>,
}

/// Recursively visit every regular file under `root` and run it through
/// the format dispatcher.
///
/// Traversal is deterministic: entries are sorted by file name, so the
/// aggregate link order is lexicographic directory-then-file order. A
/// file that fails to parse is recorded in `failures` and does not
/// abort the run; only a root that is not a directory is fatal.
pub fn scan_tree(root: &Path) -> Result<ScanOutcome> {
    if !root.is_dir() {
        return Err(LinkScanError::InvalidArgument(format!(
            "'{}' is not a directory",
            root.display()
        )));
    }

    let mut builder = WalkBuilder::new(root);
    // Visit everything: no gitignore semantics, no hidden-file filter.
    builder.standard_filters(false);
    builder.sort_by_file_name(|a, b| a.cmp(b));

    let mut outcome = ScanOutcome::default();
    for entry in builder.build() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                // Unreadable directory entries are skipped, not fatal.
                warn!("skipping unreadable entry: {err}");
                continue;
            }
        };

        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        scan_file(path, &mut outcome);
    }

    Ok(outcome)
}

fn scan_file(path: &Path, outcome: &mut ScanOutcome) {
    match extract::extract_links(path) {
        Ok(links) => {
            debug!("{}: {} link(s)", path.display(), links.len());
            outcome.raw_links.extend(links);
        }
        Err(err) => {
            debug!("{}: extraction failed: {err}", path.display());
            outcome.failures.push(ExtractionFailure {
                path: path.to_path_buf(),
                reason: err.to_string(),
            });
        }
    }
}

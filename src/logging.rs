use log::{debug, info};

use std::path::Path;

/// Initialize the logger with appropriate level based on verbosity
pub fn init_logger(verbose: bool, quiet: bool) {
    let level = if quiet {
        log::LevelFilter::Off
    } else if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Off // Only show structured logs in verbose mode
    };

    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    debug!("Logger initialized with level: {level:?}");
}

/// Log the start of a directory scan
pub fn log_scan_start(root: &Path) {
    info!("Scanning directory tree at {}", root.display());
}

/// Log aggregate extraction results
pub fn log_scan_summary(raw_links: usize, failed_files: usize) {
    info!("Extracted {raw_links} raw link(s), {failed_files} file(s) failed");
}

/// Log normalization results
pub fn log_link_summary(unique_links: usize, total_found: usize) {
    info!("Kept {unique_links} unique URL(s) (from {total_found} raw)");
}

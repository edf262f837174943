use clap::Parser;
use linkscan::report::LinkReport;
use linkscan::{logging, normalize_links, scan_tree};

use std::path::PathBuf;
use std::process::ExitCode;

/// Extract every URL mentioned in a directory of documents into a JSON file
#[derive(Debug, Parser)]
#[command(name = "linkscan", version, about)]
struct Cli {
    /// Directory to scan recursively
    directory: PathBuf,

    /// Destination file for the JSON artifact
    output: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Suppress diagnostics about failed files
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logger(cli.verbose, cli.quiet);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> linkscan::Result<()> {
    logging::log_scan_start(&cli.directory);
    let outcome = scan_tree(&cli.directory)?;
    logging::log_scan_summary(outcome.raw_links.len(), outcome.failures.len());

    // Failed files go to the diagnostic stream, never into the JSON
    // artifact, and do not affect the exit code.
    if !cli.quiet {
        for failure in &outcome.failures {
            eprintln!(
                "Failed to extract links from {}: {}",
                failure.path.display(),
                failure.reason
            );
        }
    }

    let total_found = outcome.raw_links.len();
    let links = normalize_links(outcome.raw_links);
    logging::log_link_summary(links.len(), total_found);

    LinkReport::new(links).write_to_file(&cli.output)
}

//! extscan - Parallel Directory Scanner
//!
//! Entry point for the CLI application.

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use extscan::config::{CliArgs, ScanConfig};
use extscan::progress::ProgressReporter;
use extscan::store::ScanStore;
use extscan::walker::ScanCoordinator;
use extscan::{interrupt, report};
use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let args = parse_args();

    setup_logging()?;

    // Validate and create config
    let config = ScanConfig::from_args(args).context("Invalid configuration")?;

    let store = Arc::new(ScanStore::new(config.output_path.clone()));

    // Early termination must still close the output file
    interrupt::install(Arc::clone(&store)).context("Failed to set signal handler")?;

    ProgressReporter::spawn(Arc::clone(&store)).context("Failed to start progress reporter")?;

    // Run the scan
    let result = ScanCoordinator::new(config, Arc::clone(&store)).run()?;

    // Final report on stdout, once, after all workers have joined
    let paths = store.snapshot();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    report::write_report(&mut out, &paths).context("Failed to write report")?;
    out.flush().context("Failed to flush report")?;

    info!(
        files = result.files_found,
        dirs = result.dirs_scanned,
        "Report written"
    );

    Ok(())
}

/// Parse CLI arguments, mapping usage problems to exit status 1.
///
/// clap's own error exit code differs from this program's contract, so
/// errors are printed and the exit handled here (help and version still
/// exit 0).
fn parse_args() -> CliArgs {
    CliArgs::try_parse().unwrap_or_else(|err| {
        let _ = err.print();
        let code = match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
            _ => 1,
        };
        std::process::exit(code);
    })
}

/// Diagnostics go to stderr; stdout carries only the report.
fn setup_logging() -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("extscan=info,warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    Ok(())
}

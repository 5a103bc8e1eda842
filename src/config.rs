//! Configuration types for extscan
//!
//! This module defines:
//! - CLI argument parsing using clap derive macros
//! - Runtime configuration with validation

use crate::error::ConfigError;
use clap::Parser;
use std::path::PathBuf;

/// Maximum worker count accepted by `-t`
pub const MAX_WORKERS: usize = 64;

/// Parallel directory scanner with extension-grouped output
#[derive(Parser, Debug, Clone)]
#[command(
    name = "extscan",
    version,
    about = "Parallel directory scanner with extension-grouped output",
    long_about = "Scans a directory tree with one or more worker threads, collecting every\n\
                  file path found. Each worker walks the full tree independently. The final\n\
                  collection is printed to stdout as bracketed groups, a new group starting\n\
                  whenever the file extension changes from the previous entry's.\n\n\
                  With -o, discovered paths are also streamed to a file, one per line, as\n\
                  the scan runs.",
    after_help = "EXAMPLES:\n    \
        extscan /srv/data\n    \
        extscan -t=8 /srv/data\n    \
        extscan -t=4 -o=found.txt /srv/data\n    \
        extscan -m=256 /srv/data  # cap constructed paths at 256 bytes"
)]
pub struct CliArgs {
    /// Number of scan threads (each walks the full tree)
    #[arg(short = 't', long = "threads", default_value_t = 1, value_name = "NUM")]
    pub threads: usize,

    /// Maximum path buffer size in bytes (longer paths are truncated)
    #[arg(short = 'm', long = "max-path", default_value_t = 1024, value_name = "BYTES")]
    pub max_path: usize,

    /// Stream discovered paths to FILE as they are found
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Directory to scan
    #[arg(value_name = "DIR")]
    pub root: String,
}

/// Validated runtime configuration
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Root directory to scan
    pub root: String,

    /// Number of worker threads
    pub threads: usize,

    /// Path buffer size in bytes; constructed paths are truncated to fit
    pub max_path: usize,

    /// Live-stream output file, if any
    pub output_path: Option<PathBuf>,
}

impl ScanConfig {
    /// Create and validate configuration from CLI arguments
    pub fn from_args(args: CliArgs) -> Result<Self, ConfigError> {
        if args.threads == 0 || args.threads > MAX_WORKERS {
            return Err(ConfigError::InvalidThreadCount {
                count: args.threads,
                max: MAX_WORKERS,
            });
        }

        if args.max_path == 0 {
            return Err(ConfigError::InvalidPathBufferSize {
                size: args.max_path,
            });
        }

        // The root is deliberately not checked here: an unopenable root is
        // a traversal error at scan time, like any other directory. The
        // output path is not checked either - a sink that cannot be opened
        // must not stop the scan.
        Ok(Self {
            root: args.root,
            threads: args.threads,
            max_path: args.max_path,
            output_path: args.output,
        })
    }
}

//! extscan - Parallel Directory Scanner
//!
//! A tool for scanning a directory tree with multiple worker threads and
//! printing every file found, grouped by extension, as a bracketed
//! report on stdout.
//!
//! # Features
//!
//! - **Parallel Scanning**: N worker threads, each performing an
//!   independent full walk of the tree. Discoveries funnel into one
//!   shared, mutex-guarded collection.
//!
//! - **Live Streaming**: With `-o FILE`, every discovered path is
//!   written to the file as it is found, one per line, giving an
//!   ungrouped live feed next to the final report.
//!
//! - **Progress Reporting**: A five-second ticker prints running
//!   counters to stderr without touching the report on stdout.
//!
//! - **Safe Interruption**: Ctrl-c closes the output file mid-scan and
//!   exits cleanly; a partial live stream is never left unflushed.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                     Worker Threads                       │
//! │  ┌─────────┐  ┌─────────┐  ┌─────────┐    ┌─────────┐    │
//! │  │Worker 0 │  │Worker 1 │  │Worker 2 │ .. │Worker N │    │
//! │  │full walk│  │full walk│  │full walk│    │full walk│    │
//! │  └────┬────┘  └────┬────┘  └────┬────┘    └────┬────┘    │
//! │       └────────────┴──────┬─────┴──────────────┘         │
//! │                           ▼                              │
//! │              ┌──────────────────────────┐                │
//! │              │        ScanStore         │  ◄── progress  │
//! │              │  paths, counters, sink   │      ticker    │
//! │              │      (single mutex)      │  ◄── ctrl-c    │
//! │              └────────────┬─────────────┘      handler   │
//! └───────────────────────────┼──────────────────────────────┘
//!                             ▼
//!                ┌────────────────────────┐
//!                │    write_report        │
//!                │  adjacency-grouped     │
//!                │  brackets on stdout    │
//!                └────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```bash
//! # Basic scan
//! extscan /srv/data
//!
//! # Four workers, live stream to a file
//! extscan -t=4 -o=found.txt /srv/data
//! ```

pub mod config;
pub mod error;
pub mod interrupt;
pub mod progress;
pub mod report;
pub mod sink;
pub mod store;
pub mod walker;

pub use config::{CliArgs, ScanConfig};
pub use error::{Result, ScanError};
pub use store::{ScanCounters, ScanStore};
pub use walker::{ScanCoordinator, ScanResult, ScanWorker};

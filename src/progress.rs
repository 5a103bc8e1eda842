//! Periodic progress reporting
//!
//! A dedicated thread wakes on a fixed five-second tick, reads the
//! shared counters, and prints them to stderr:
//!
//! ```text
//! Files found: 1042
//! Directories scanned: 87
//! ```
//!
//! The reporter is never cancelled; the thread ends with the process, so
//! a final tick can land on stderr while the report is being written to
//! stdout.

use crate::store::{ScanCounters, ScanStore};
use crossbeam_channel::tick;
use std::io::{self, Write};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Interval between progress lines.
pub const PROGRESS_INTERVAL: Duration = Duration::from_secs(5);

/// Periodic counter dump to the diagnostic stream
pub struct ProgressReporter;

impl ProgressReporter {
    /// Spawn the reporter thread. The first line appears one full
    /// interval after launch.
    pub fn spawn(store: Arc<ScanStore>) -> io::Result<()> {
        thread::Builder::new()
            .name("progress".into())
            .spawn(move || {
                let ticker = tick(PROGRESS_INTERVAL);
                for _ in ticker.iter() {
                    let counters = store.counters();
                    let stderr = io::stderr();
                    let _ = write_progress(&mut stderr.lock(), counters);
                }
            })?;
        Ok(())
    }
}

/// Format one progress report onto `out`.
fn write_progress<W: Write>(out: &mut W, counters: ScanCounters) -> io::Result<()> {
    writeln!(out, "Files found: {}", counters.files_found)?;
    writeln!(out, "Directories scanned: {}", counters.dirs_scanned)
}

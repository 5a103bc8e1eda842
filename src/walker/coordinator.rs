//! Scan coordinator - orchestrates the parallel walk
//!
//! The coordinator is responsible for:
//! - Spawning the worker threads, all against the same root
//! - Waiting for every worker to finish
//! - Closing the live output sink once the scan is done
//! - Producing the final tallies

use crate::config::ScanConfig;
use crate::error::Result;
use crate::store::ScanStore;
use crate::walker::worker::ScanWorker;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Result of a completed scan
#[derive(Debug)]
pub struct ScanResult {
    /// Files discovered across all workers, duplicates included
    pub files_found: u64,

    /// Directories enumerated across all workers
    pub dirs_scanned: u64,

    /// Wall-clock time for the scan
    pub duration: Duration,
}

/// Coordinates the parallel scan
pub struct ScanCoordinator {
    /// Configuration
    config: Arc<ScanConfig>,

    /// Shared scan state
    store: Arc<ScanStore>,

    /// Worker threads
    workers: Vec<ScanWorker>,
}

impl ScanCoordinator {
    /// Create a new scan coordinator
    pub fn new(config: ScanConfig, store: Arc<ScanStore>) -> Self {
        Self {
            config: Arc::new(config),
            store,
            workers: Vec::new(),
        }
    }

    /// Run the scan: spawn every worker against the same root, wait for
    /// all of them to finish, then close the sink.
    pub fn run(mut self) -> Result<ScanResult> {
        let start = Instant::now();

        info!(
            root = %self.config.root,
            workers = self.config.threads,
            "Starting scan"
        );

        self.spawn_workers()?;
        self.join_workers();

        // The sink outlives the workers by contract; close it only after
        // the last append has serialized.
        self.store.close_sink();

        let counters = self.store.counters();
        let duration = start.elapsed();

        info!(
            files = counters.files_found,
            dirs = counters.dirs_scanned,
            duration_secs = duration.as_secs(),
            "Scan completed"
        );

        Ok(ScanResult {
            files_found: counters.files_found,
            dirs_scanned: counters.dirs_scanned,
            duration,
        })
    }

    /// Spawn worker threads
    fn spawn_workers(&mut self) -> Result<()> {
        for id in 0..self.config.threads {
            let worker = ScanWorker::spawn(id, Arc::clone(&self.config), Arc::clone(&self.store))?;
            self.workers.push(worker);
        }

        info!(count = self.workers.len(), "Workers spawned");
        Ok(())
    }

    /// Join all worker threads
    fn join_workers(&mut self) {
        for worker in std::mem::take(&mut self.workers) {
            if let Err(e) = worker.join() {
                warn!(error = %e, "Worker failed to join cleanly");
            }
        }
    }
}

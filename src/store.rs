//! Shared scan state - the single exclusive-access domain
//!
//! Every piece of state the threads share lives behind one mutex: the
//! growable path collection, the counters the progress reporter prints,
//! the output sink, and the shutdown flag. Keeping them under one lock
//! means the locking discipline is enforced here, not by caller
//! convention, and the interrupt handler cannot race a worker that is
//! mid-append.
//!
//! Insertion order of the collection is the serialization order of
//! `record` calls; that is the only ordering the report relies on.

use crate::error::Result;
use crate::sink::OutputSink;
use parking_lot::Mutex;
use std::path::PathBuf;

/// Initial capacity of the path collection.
const INITIAL_CAPACITY: usize = 1024;

/// Counters read by the progress reporter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanCounters {
    /// Files discovered so far; mirrors the collection length.
    pub files_found: u64,

    /// Directories enumerated so far, across all workers.
    pub dirs_scanned: u64,
}

struct StoreInner {
    paths: Vec<String>,
    counters: ScanCounters,
    sink: OutputSink,
    shutting_down: bool,
}

/// Shared, mutex-guarded scan state
pub struct ScanStore {
    inner: Mutex<StoreInner>,
}

impl ScanStore {
    /// Create an empty store. `output_path` configures the live stream
    /// target; `None` means stdout mode (no live stream).
    pub fn new(output_path: Option<PathBuf>) -> Self {
        Self {
            inner: Mutex::new(StoreInner {
                paths: Vec::with_capacity(INITIAL_CAPACITY),
                counters: ScanCounters::default(),
                sink: OutputSink::new(output_path),
                shutting_down: false,
            }),
        }
    }

    /// Record one discovered file: append an owned copy of the path,
    /// bump the discovery counter, open the sink if this is the first
    /// discovery, and stream the line if the sink is file-bound.
    ///
    /// Growth failure is fatal to the scan; the calling worker reports it
    /// and terminates the process.
    pub fn record(&self, path: &str) -> Result<()> {
        let mut inner = self.inner.lock();

        inner.paths.try_reserve(1)?;
        inner.paths.push(path.to_owned());
        inner.counters.files_found += 1;

        inner.sink.ensure_open();
        inner.sink.stream_line(path);

        Ok(())
    }

    /// Count one enumerated directory.
    pub fn note_dir_scanned(&self) {
        self.inner.lock().counters.dirs_scanned += 1;
    }

    /// Read the counters consistently with in-flight appends.
    pub fn counters(&self) -> ScanCounters {
        self.inner.lock().counters
    }

    /// Number of recorded paths.
    pub fn len(&self) -> usize {
        self.inner.lock().paths.len()
    }

    /// True if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clone the collection in insertion order.
    ///
    /// Meant for after the workers have joined; concurrent `record` calls
    /// serialize against it but the copy is only a point-in-time view.
    pub fn snapshot(&self) -> Vec<String> {
        self.inner.lock().paths.clone()
    }

    /// Close the sink. Normal-completion path, after all workers join.
    pub fn close_sink(&self) {
        self.inner.lock().sink.close();
    }

    /// First-interrupt transition: flips armed to shutting-down and
    /// closes the sink, all under the lock. Returns `false` when shutdown
    /// was already underway, so a second interrupt cannot re-enter the
    /// teardown.
    pub fn begin_shutdown(&self) -> bool {
        let mut inner = self.inner.lock();
        if inner.shutting_down {
            return false;
        }
        inner.shutting_down = true;
        inner.sink.close();
        true
    }
}

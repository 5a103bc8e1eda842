//! Worker thread logic for the parallel scan
//!
//! Each worker independently walks the entire tree from the configured
//! root: there is no partitioning of subdirectories across workers, so
//! with N workers every file is discovered N times. That multiplicity is
//! part of the tool's contract, not an accident (see DESIGN.md).
//!
//! Workers share nothing but the store; recursion stacks and path
//! buffers are thread-local.

use crate::config::ScanConfig;
use crate::error::{ScanError, TraversalError, WorkerError};
use crate::store::ScanStore;
use std::fs;
use std::path::MAIN_SEPARATOR;
use std::process;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use tracing::{debug, error};

/// A worker thread performing one full traversal of the tree
pub struct ScanWorker {
    /// Worker ID
    id: usize,

    /// Thread handle
    handle: Option<JoinHandle<()>>,
}

impl ScanWorker {
    /// Spawn a worker that walks the configured root to completion.
    ///
    /// A traversal failure anywhere in the tree ends the whole process
    /// with status 1, not just this worker: a scan that silently misses a
    /// subtree is worse than no scan at all.
    pub fn spawn(
        id: usize,
        config: Arc<ScanConfig>,
        store: Arc<ScanStore>,
    ) -> Result<Self, WorkerError> {
        let handle = thread::Builder::new()
            .name(format!("scan-{id}"))
            .spawn(move || {
                debug!(worker = id, root = %config.root, "Worker starting");

                if let Err(err) = walk_directory(&config.root, &config, &store) {
                    error!(worker = id, error = %err, "Scan failed");
                    eprintln!("{err}");
                    process::exit(1);
                }

                debug!(worker = id, "Worker finished");
            })
            .map_err(|err| WorkerError::SpawnFailed {
                id,
                reason: err.to_string(),
            })?;

        Ok(Self {
            id,
            handle: Some(handle),
        })
    }

    /// Get worker ID
    pub fn id(&self) -> usize {
        self.id
    }

    /// Wait for the worker to finish.
    pub fn join(mut self) -> Result<(), WorkerError> {
        match self.handle.take() {
            Some(handle) => handle
                .join()
                .map_err(|_| WorkerError::Panicked { id: self.id }),
            None => Ok(()),
        }
    }
}

/// Depth-first pre-order walk of `dir`, recording every non-directory
/// entry in the store.
///
/// Symlinks are not followed: an entry's own file type decides whether
/// it is recursed into, and anything that is not a directory (including
/// an entry whose type cannot be determined) counts as a discovered
/// file.
pub fn walk_directory(dir: &str, config: &ScanConfig, store: &ScanStore) -> Result<(), ScanError> {
    let entries = fs::read_dir(dir).map_err(|source| TraversalError::OpenDirFailed {
        path: dir.to_owned(),
        source,
    })?;
    store.note_dir_scanned();

    for entry in entries {
        let entry = entry.map_err(|source| TraversalError::ReadEntryFailed {
            path: dir.to_owned(),
            source,
        })?;

        let name = entry.file_name();
        let child = join_bounded(dir, &name.to_string_lossy(), config.max_path);

        let is_dir = entry.file_type().map(|ft| ft.is_dir()).unwrap_or(false);
        if is_dir {
            walk_directory(&child, config, store)?;
        } else {
            store.record(&child)?;
        }
    }

    Ok(())
}

/// Join `parent` and `name` into a child path bounded by the configured
/// path buffer size.
///
/// The bound is a buffer size, so at most `max_len - 1` bytes of path
/// survive; truncation backs up to a UTF-8 character boundary. An
/// undersized bound yields a truncated path, never an error.
pub fn join_bounded(parent: &str, name: &str, max_len: usize) -> String {
    let mut path = format!("{parent}{MAIN_SEPARATOR}{name}");

    let budget = max_len.saturating_sub(1);
    if path.len() > budget {
        let mut end = budget;
        while end > 0 && !path.is_char_boundary(end) {
            end -= 1;
        }
        path.truncate(end);
    }

    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as stdfs;
    use tempfile::tempdir;

    fn config_for(root: &str, max_path: usize) -> ScanConfig {
        ScanConfig {
            root: root.to_owned(),
            threads: 1,
            max_path,
            output_path: None,
        }
    }

    #[test]
    fn test_join_bounded_fits() {
        assert_eq!(join_bounded("/data", "file.txt", 1024), "/data/file.txt");
    }

    #[test]
    fn test_join_bounded_truncates_to_buffer_minus_one() {
        // Buffer of 4 bytes leaves room for 3 bytes of path.
        assert_eq!(join_bounded("a", "bcdef", 4), "a/b");
        // Buffer of 1 leaves nothing.
        assert_eq!(join_bounded("a", "b", 1), "");
    }

    #[test]
    fn test_join_bounded_respects_char_boundaries() {
        // "dir/é" is 6 bytes; a 6-byte buffer gives a 5-byte budget that
        // lands mid-codepoint and must back up.
        let path = join_bounded("dir", "\u{e9}x", 6);
        assert_eq!(path, "dir/");
    }

    #[test]
    fn test_walk_records_files_and_counts_dirs() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        stdfs::write(root.join("a.txt"), "a").unwrap();
        stdfs::create_dir(root.join("sub")).unwrap();
        stdfs::write(root.join("sub").join("b.md"), "b").unwrap();

        let root_str = root.to_string_lossy().into_owned();
        let config = config_for(&root_str, 1024);
        let store = ScanStore::new(None);

        walk_directory(&root_str, &config, &store).unwrap();

        let counters = store.counters();
        assert_eq!(counters.files_found, 2);
        assert_eq!(counters.dirs_scanned, 2);

        let mut paths = store.snapshot();
        paths.sort();
        assert!(paths[0].ends_with("a.txt"));
        assert!(paths[1].ends_with("b.md"));
    }

    #[test]
    fn test_walk_fails_on_unopenable_root() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope").to_string_lossy().into_owned();
        let config = config_for(&missing, 1024);
        let store = ScanStore::new(None);

        let err = walk_directory(&missing, &config, &store).unwrap_err();
        assert!(matches!(
            err,
            ScanError::Traversal(TraversalError::OpenDirFailed { .. })
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn test_walk_truncates_in_flat_directory() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        stdfs::write(root.join("averylongfilename.extension"), "x").unwrap();

        let root_str = root.to_string_lossy().into_owned();
        // Budget covers the root plus a few bytes of the child name.
        let max_path = root_str.len() + 4;
        let config = config_for(&root_str, max_path);
        let store = ScanStore::new(None);

        walk_directory(&root_str, &config, &store).unwrap();

        let paths = store.snapshot();
        assert_eq!(paths.len(), 1);
        assert!(paths[0].len() <= max_path - 1);
        assert!(paths[0].starts_with(&root_str));
    }
}

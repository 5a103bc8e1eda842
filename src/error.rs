//! Error types for extscan
//!
//! This module defines the error hierarchy that covers:
//! - Configuration and CLI errors
//! - Traversal errors (unreadable directories)
//! - Worker thread errors
//! - Collection growth failure
//!
//! Design philosophy:
//! - Use thiserror for structured error types in library code
//! - Errors should be actionable - include the path or value that failed
//! - Fatal errors terminate the process at the worker/binary layer, not here

use std::collections::TryReserveError;
use thiserror::Error;

/// Top-level error type for the extscan application
#[derive(Error, Debug)]
pub enum ScanError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Traversal errors
    #[error("{0}")]
    Traversal(#[from] TraversalError),

    /// Worker/concurrency errors
    #[error("Worker error: {0}")]
    Worker(#[from] WorkerError),

    /// Path collection could not grow
    #[error("Failed to allocate memory for path collection: {0}")]
    Allocation(#[from] TryReserveError),

    /// I/O errors (report writing, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration and CLI errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Invalid thread count
    #[error("Invalid number of threads {count}: must be between 1 and {max}")]
    InvalidThreadCount { count: usize, max: usize },

    /// Invalid path buffer size
    #[error("Invalid maximum path size {size}: must be at least 1")]
    InvalidPathBufferSize { size: usize },
}

/// Traversal errors encountered mid-scan
///
/// Any of these is fatal to the whole scan: a silently incomplete result
/// is worse than no result.
#[derive(Error, Debug)]
pub enum TraversalError {
    /// A directory could not be opened
    #[error("Failed to open directory '{path}': {source}")]
    OpenDirFailed {
        path: String,
        source: std::io::Error,
    },

    /// An entry could not be read while enumerating a directory
    #[error("Failed to read directory entry in '{path}': {source}")]
    ReadEntryFailed {
        path: String,
        source: std::io::Error,
    },
}

/// Worker thread errors
#[derive(Error, Debug)]
pub enum WorkerError {
    /// Worker panicked
    #[error("Worker {id} panicked")]
    Panicked { id: usize },

    /// Worker thread could not be spawned
    #[error("Failed to spawn worker {id}: {reason}")]
    SpawnFailed { id: usize, reason: String },
}

/// Result type alias for ScanError
pub type Result<T> = std::result::Result<T, ScanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversion() {
        let config_err = ConfigError::InvalidThreadCount { count: 0, max: 64 };
        let scan_err: ScanError = config_err.into();
        assert!(matches!(scan_err, ScanError::Config(_)));
    }

    #[test]
    fn test_traversal_error_message_names_path() {
        let err = TraversalError::OpenDirFailed {
            path: "/missing".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().contains("/missing"));
    }
}

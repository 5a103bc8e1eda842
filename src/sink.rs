//! Live output sink for discovered paths
//!
//! When `-o FILE` is given, every discovered path is streamed to the file
//! as it is found, one per line, giving an ungrouped live feed alongside
//! the final report. Without `-o` the sink binds to stdout, where it
//! writes nothing: stdout belongs to the final grouped report, which
//! would otherwise be duplicated line by line.
//!
//! The sink opens lazily, on the first recorded discovery, and always
//! under the store's lock. An open or write failure is reported once and
//! disables streaming for the rest of the run; the in-memory collection
//! is unaffected.

use std::fs::File;
use std::io::{LineWriter, Write};
use std::path::PathBuf;
use tracing::warn;

/// Sink state machine: `Pending` until the first discovery, then one of
/// the bound states, then `Closed`.
enum SinkState {
    /// Not yet opened; holds the configured target, if any.
    Pending { path: Option<PathBuf> },

    /// Bound to stdout: nothing is streamed (the report owns stdout).
    Stdout,

    /// Streaming to an open file.
    File(LineWriter<File>),

    /// Open or write failed; streaming is skipped from here on.
    Disabled,

    /// Closed by normal completion or interrupt.
    Closed,
}

/// Lazily-opened destination for the live discovery stream
pub struct OutputSink {
    state: SinkState,
}

impl OutputSink {
    /// Create an unopened sink. `path` of `None` means stdout mode.
    pub fn new(path: Option<PathBuf>) -> Self {
        Self {
            state: SinkState::Pending { path },
        }
    }

    /// Open the sink if it has never been opened.
    ///
    /// Binds to the configured file, or to stdout when no file was given.
    /// A failed open is reported and leaves the sink disabled; the caller
    /// keeps scanning.
    pub fn ensure_open(&mut self) {
        let target = match &mut self.state {
            SinkState::Pending { path } => path.take(),
            _ => return,
        };

        self.state = match target {
            Some(path) => match File::create(&path) {
                Ok(file) => SinkState::File(LineWriter::new(file)),
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "Failed to open output file");
                    eprintln!("Failed to open output file: {}", path.display());
                    SinkState::Disabled
                }
            },
            None => SinkState::Stdout,
        };
    }

    /// Stream one discovered path, newline-terminated.
    ///
    /// Only a file-bound sink writes. A write failure disables the sink
    /// for the rest of the run, same policy as a failed open.
    pub fn stream_line(&mut self, path: &str) {
        if let SinkState::File(writer) = &mut self.state {
            if let Err(err) = writeln!(writer, "{path}") {
                warn!(error = %err, "Failed to write to output file, disabling live stream");
                self.state = SinkState::Disabled;
            }
        }
    }

    /// Close the sink. Idempotent; only a file-bound sink has anything to
    /// flush. Stdout is never closed.
    pub fn close(&mut self) {
        if let SinkState::File(writer) = &mut self.state {
            if let Err(err) = writer.flush() {
                warn!(error = %err, "Failed to flush output file");
            }
        }
        self.state = SinkState::Closed;
    }

    /// True while the sink is streaming to an open file.
    pub fn is_streaming(&self) -> bool {
        matches!(self.state, SinkState::File(_))
    }

    /// True once `close` has run.
    pub fn is_closed(&self) -> bool {
        matches!(self.state, SinkState::Closed)
    }
}

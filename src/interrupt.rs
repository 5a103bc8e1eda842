//! Interrupt handling
//!
//! The first ctrl-c closes the live output sink (if one is open) and
//! exits immediately with status 0; running workers are abandoned and
//! the final report is skipped. The armed/shutting-down transition lives
//! inside the store's lock, so a second interrupt cannot re-enter the
//! teardown, and a worker holding the lock finishes its append before
//! the sink is closed.

use crate::store::ScanStore;
use std::process;
use std::sync::Arc;
use tracing::info;

/// Install the ctrl-c handler for early termination.
pub fn install(store: Arc<ScanStore>) -> Result<(), ctrlc::Error> {
    ctrlc::set_handler(move || {
        if !store.begin_shutdown() {
            return;
        }

        info!("Interrupt received");
        eprintln!("\nInterrupt received, shutting down...");
        process::exit(0);
    })
}

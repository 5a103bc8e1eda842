//! Parallel tree walker
//!
//! N worker threads each perform a full depth-first walk of the same
//! root, funneling every discovered file into the shared store.
//!
//! # Architecture
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │     ScanCoordinator     │
//!                    │  spawn / join workers   │
//!                    └───────────┬─────────────┘
//!                                │
//!      ┌─────────────────────────┼─────────────────────────┐
//!      │                         │                         │
//! ┌────▼─────┐             ┌─────▼────┐              ┌─────▼────┐
//! │ Worker 0 │             │ Worker 1 │     ...      │ Worker N │
//! │ full walk│             │ full walk│              │ full walk│
//! └────┬─────┘             └─────┬────┘              └─────┬────┘
//!      │                         │                         │
//!      └─────────────────────────┼─────────────────────────┘
//!                                ▼
//!                   ┌─────────────────────────┐
//!                   │        ScanStore        │
//!                   │  paths + counters+ sink │
//!                   │     (single mutex)      │
//!                   └─────────────────────────┘
//! ```

pub mod coordinator;
pub mod worker;

pub use coordinator::{ScanCoordinator, ScanResult};
pub use worker::ScanWorker;

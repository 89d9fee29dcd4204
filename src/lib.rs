//! Timed lock-hold worker threads.
//!
//! A caller launches a background task that waits a configurable delay,
//! acquires a shared lock, holds it for a second configurable delay, releases
//! it, and reports how far it got. The crate exists to get the hard part
//! right: handing ownership of the per-task state to the worker thread at
//! spawn time and back to the caller at join time, so no two threads ever
//! touch it concurrently.
//!
//! # Architecture
//!
//! - [`launch`] validates the timing parameters and spawns one named OS
//!   thread per call. It never blocks on the worker.
//! - The worker runs the fixed sleep → acquire → sleep → release sequence and
//!   records an [`Outcome`] plus timing observations.
//! - [`TaskHandle::join`] consumes the handle and yields the [`TaskReport`].
//!   Joining twice is a compile error, not a runtime hazard.
//! - [`HoldLock`] is the seam between the worker and the lock it contends
//!   for. `std::sync::Mutex<T>` implements it out of the box; tests and
//!   instrumented callers can supply their own.
//!
//! # Example
//!
//! ```
//! use std::sync::{Arc, Mutex};
//! use clench::{TaskSpec, launch};
//!
//! let lock = Arc::new(Mutex::new(()));
//! let handle = launch(Arc::clone(&lock), TaskSpec::from_millis(5, 10)).unwrap();
//! // ... the caller is free to do other work here ...
//! let report = handle.join();
//! assert!(report.succeeded());
//! ```
//!
//! There is no timeout or cancellation: once spawned, a worker runs to
//! completion, or blocks indefinitely if the lock is never released by
//! whoever holds it. Every handle must eventually be joined to reclaim the
//! thread.

pub mod lock;
pub mod task;
mod trace;
pub mod worker;

pub use lock::{HoldLock, LockError};
pub use task::{Outcome, TaskReport, TaskSpec};
pub use trace::init_tracing;
pub use worker::{LaunchError, TaskHandle, launch};

//! Launching and joining lock-hold workers.
//!
//! [`launch`] spawns one named OS thread per call and returns immediately;
//! the worker runs the fixed sleep → acquire → sleep → release sequence. The
//! task's state is moved into the worker closure at spawn time and moved back
//! to the caller through [`TaskHandle::join`], so the caller cannot observe
//! or mutate it while the worker runs.

use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crate::lock::HoldLock;
use crate::task::{MAX_DELAY, Outcome, TaskReport, TaskSpec};
use crate::trace::{debug, error};

/// Error launching a worker. Nothing has been spawned when this is returned.
#[derive(Debug, thiserror::Error)]
pub enum LaunchError {
    /// A delay exceeds [`MAX_DELAY`].
    #[error("delay of {0:?} exceeds the maximum of {MAX_DELAY:?}")]
    DelayTooLong(Duration),
    /// The OS refused to create the worker thread.
    #[error("failed to spawn worker thread: {0}")]
    Spawn(#[from] std::io::Error),
}

/// Handle to a running worker.
///
/// [`TaskHandle::join`] consumes the handle, so each worker can be joined
/// exactly once. Dropping the handle without joining leaks nothing but
/// abandons the report; every handle should eventually be joined.
#[must_use = "a launched task must eventually be joined"]
#[derive(Debug)]
pub struct TaskHandle {
    handle: JoinHandle<TaskReport>,
}

impl TaskHandle {
    /// Blocks until the worker finishes and yields its report.
    ///
    /// # Panics
    /// Panics if the worker thread itself panicked, which the worker body
    /// never does on its own.
    pub fn join(self) -> TaskReport {
        self.handle.join().expect("worker thread panicked")
    }

    /// Non-blocking probe: has the worker finished?
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

/// Spawns a worker that waits, acquires `lock`, holds it, and releases it.
///
/// Returns without blocking; the worker's outcome is retrieved later via
/// [`TaskHandle::join`]. Delay validation happens before the spawn, so an
/// error means no thread exists and the lock was never touched.
///
/// # Errors
/// - [`LaunchError::DelayTooLong`] if either delay exceeds [`MAX_DELAY`].
/// - [`LaunchError::Spawn`] if the OS cannot create the thread.
pub fn launch<L: HoldLock>(lock: Arc<L>, spec: TaskSpec) -> Result<TaskHandle, LaunchError> {
    if let Some(delay) = spec.oversized_delay() {
        error!(delay_ms = delay.as_millis() as u64, "refusing to launch");
        return Err(LaunchError::DelayTooLong(delay));
    }

    let handle = thread::Builder::new()
        .name("clench-worker".into())
        .spawn(move || run_worker(&*lock, spec))?;

    Ok(TaskHandle { handle })
}

/// The worker body: sleep, acquire, sleep, release, in that order.
fn run_worker<L: HoldLock>(lock: &L, spec: TaskSpec) -> TaskReport {
    let started_at = Instant::now();
    let mut report = TaskReport {
        spec,
        outcome: Outcome::LockFailed,
        started_at,
        locked_at: None,
        released_at: None,
    };

    debug!(
        wait_before_lock_ms = spec.wait_before_lock.as_millis() as u64,
        "worker started, sleeping before acquisition"
    );
    thread::sleep(spec.wait_before_lock);

    debug!("attempting to acquire lock");
    let guard = match lock.acquire() {
        Ok(guard) => guard,
        Err(e) => {
            error!(error = %e, "failed to acquire lock");
            return report;
        }
    };
    report.locked_at = Some(Instant::now());

    debug!(
        wait_while_locked_ms = spec.wait_while_locked.as_millis() as u64,
        "lock acquired, holding"
    );
    thread::sleep(spec.wait_while_locked);

    debug!("releasing lock");
    if let Err(e) = lock.release(guard) {
        error!(error = %e, "failed to release lock");
        report.outcome = Outcome::UnlockFailed;
        return report;
    }
    report.released_at = Some(Instant::now());
    report.outcome = Outcome::Succeeded;

    debug!("worker completed");
    report
}

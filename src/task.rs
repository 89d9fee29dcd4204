//! Per-task timing parameters and the report a joined worker yields.

use std::time::{Duration, Instant};

/// Longest delay accepted for either phase of a task.
///
/// The delays exist to stage lock contention in tests and demos; anything
/// beyond an hour is a caller bug, not a plausible hold window, and is
/// rejected at launch rather than handed to the sleep primitive.
pub const MAX_DELAY: Duration = Duration::from_secs(3600);

/// Timing parameters for one lock-hold task.
///
/// Delays are unsigned durations, so negative values are unrepresentable.
/// Values above [`MAX_DELAY`] are rejected by [`crate::launch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskSpec {
    /// Delay before the worker attempts acquisition.
    pub wait_before_lock: Duration,
    /// Delay the worker holds the lock once acquired.
    pub wait_while_locked: Duration,
}

impl TaskSpec {
    /// Convenience constructor from millisecond counts.
    #[must_use]
    pub const fn from_millis(wait_before_lock_ms: u64, wait_while_locked_ms: u64) -> Self {
        Self {
            wait_before_lock: Duration::from_millis(wait_before_lock_ms),
            wait_while_locked: Duration::from_millis(wait_while_locked_ms),
        }
    }

    /// Returns the first out-of-range delay, if any.
    pub(crate) fn oversized_delay(&self) -> Option<Duration> {
        [self.wait_before_lock, self.wait_while_locked]
            .into_iter()
            .find(|d| *d > MAX_DELAY)
    }
}

/// Terminal state of a task, reported through [`TaskReport`].
///
/// The three states are mutually exclusive: a task that fails acquisition
/// never attempts the hold or the release, and a task that fails release
/// still held the lock for its full window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Acquisition, hold, and release all completed.
    Succeeded,
    /// Acquisition failed; the lock was never taken.
    LockFailed,
    /// The lock was acquired and held, but release failed.
    UnlockFailed,
}

/// What a worker hands back through [`crate::TaskHandle::join`].
#[derive(Debug, Clone, Copy)]
pub struct TaskReport {
    /// The parameters the task ran with.
    pub spec: TaskSpec,
    /// How the task ended.
    pub outcome: Outcome,
    /// When the worker thread started executing.
    pub started_at: Instant,
    /// When acquisition succeeded. `None` if it never did.
    pub locked_at: Option<Instant>,
    /// When release succeeded. `None` unless the task succeeded outright.
    pub released_at: Option<Instant>,
}

impl TaskReport {
    /// True only for [`Outcome::Succeeded`].
    #[must_use]
    pub fn succeeded(&self) -> bool {
        self.outcome == Outcome::Succeeded
    }

    /// Observed acquisition-to-release interval, when both ends exist.
    #[must_use]
    pub fn hold_window(&self) -> Option<Duration> {
        match (self.locked_at, self.released_at) {
            (Some(locked), Some(released)) => Some(released - locked),
            _ => None,
        }
    }
}

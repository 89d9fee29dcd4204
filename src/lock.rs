//! The lock seam between workers and the shared resource they contend for.
//!
//! A worker never sees a concrete mutex type; it acquires and releases
//! through [`HoldLock`]. Both operations are fallible, mirroring lock APIs
//! where acquisition can fail (a poisoned `std` mutex, a refused backend
//! operation) and keeping the release-failure branch representable even
//! though `std::sync::Mutex` cannot fail it.

use std::sync::{Mutex, MutexGuard};

/// Error acquiring or releasing a [`HoldLock`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LockError {
    /// A previous holder panicked while holding the lock.
    #[error("lock poisoned by a panicked holder")]
    Poisoned,
    /// The lock implementation refused the operation.
    #[error("lock operation refused: {0}")]
    Refused(&'static str),
}

/// A lock a worker can hold for a timed window.
///
/// Implementations must be shareable across threads; workers receive the lock
/// as an `Arc<L>` and call `acquire`/`release` from their own thread. The
/// guard is a proof of acquisition that never leaves that thread, so it
/// carries no `Send` bound.
///
/// Exactly one `release` call is made per successful `acquire`, with the
/// guard that `acquire` produced. A failed `acquire` is never followed by a
/// `release`.
pub trait HoldLock: Send + Sync + 'static {
    /// Proof of acquisition, alive until passed back to [`HoldLock::release`].
    type Guard<'a>
    where
        Self: 'a;

    /// Acquire the lock, blocking until it is available.
    fn acquire(&self) -> Result<Self::Guard<'_>, LockError>;

    /// Release the lock held by `guard`.
    fn release(&self, guard: Self::Guard<'_>) -> Result<(), LockError>;
}

impl<T: Send + 'static> HoldLock for Mutex<T> {
    type Guard<'a>
        = MutexGuard<'a, T>
    where
        Self: 'a;

    fn acquire(&self) -> Result<MutexGuard<'_, T>, LockError> {
        self.lock().map_err(|_| LockError::Poisoned)
    }

    fn release(&self, guard: MutexGuard<'_, T>) -> Result<(), LockError> {
        drop(guard);
        Ok(())
    }
}

//! Lock observability seam.
//!
//! The grid store emits acquire/release events for every critical section.
//! The default observer drops them; [`LogObserver`] forwards them to the
//! `log` facade for debugging lock traffic.

/// Receives one event per lock acquisition and release, tagged with the
/// store operation name. Implementations must be cheap: the acquire event
/// is emitted while the lock is held.
pub trait LockObserver: Send + Sync {
    fn lock_acquired(&self, _op: &str) {}
    fn lock_released(&self, _op: &str) {}
}

/// Default observer, ignores all events.
#[derive(Debug, Default)]
pub struct NoopObserver;

impl LockObserver for NoopObserver {}

/// Observer that logs lock traffic at debug level.
#[derive(Debug, Default)]
pub struct LogObserver;

impl LockObserver for LogObserver {
    fn lock_acquired(&self, op: &str) {
        log::debug!("[GridStore] {} acquired lock", op);
    }

    fn lock_released(&self, op: &str) {
        log::debug!("[GridStore] {} released lock", op);
    }
}

use std::sync::Arc;

/// Callback bracketing every emission that passes the threshold. Called
/// with `true` right before the sinks are written and with `false` right
/// after.
pub type LockFn = Arc<dyn Fn(bool) + Send + Sync>;

/// Calls the lock callback with `true` when created and with `false` when
/// dropped, so the release also happens on early returns and panics.
pub(crate) struct LockGuard {
    lock: Option<LockFn>,
}

impl LockGuard {
    pub(crate) fn acquire(lock: Option<LockFn>) -> Self {
        if let Some(lock) = &lock {
            lock(true);
        }
        LockGuard { lock }
    }
}

impl Drop for LockGuard {
    fn drop(&mut self) {
        if let Some(lock) = self.lock.take() {
            lock(false);
        }
    }
}

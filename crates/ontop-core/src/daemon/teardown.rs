//! Completion signal for the process-wide teardown.
//!
//! Windows runs console control handlers on a thread of their own and
//! terminates the process as soon as a close, logoff or shutdown handler
//! returns. Such a handler asks the loop to quit and then waits here until
//! the loop thread has reset every menu it touched.

use std::sync::{Condvar, Mutex, PoisonError};
use std::time::Duration;

/// Signalled by [`serve`](crate::daemon::serve) once teardown has run.
pub static TEARDOWN: TeardownSignal = TeardownSignal::new();

/// How long a close, logoff or shutdown handler blocks. Windows kills the
/// process after five seconds regardless.
pub const TEARDOWN_WAIT: Duration = Duration::from_millis(4500);

#[derive(Debug)]
pub struct TeardownSignal {
    completed: Mutex<bool>,
    changed: Condvar,
}

impl Default for TeardownSignal {
    fn default() -> Self {
        Self::new()
    }
}

impl TeardownSignal {
    pub const fn new() -> Self {
        Self {
            completed: Mutex::new(false),
            changed: Condvar::new(),
        }
    }

    /// Mark teardown as finished and wake every waiter.
    pub fn complete(&self) {
        let mut completed = self.completed.lock().unwrap_or_else(PoisonError::into_inner);
        *completed = true;
        self.changed.notify_all();
    }

    /// Arm the signal for a new daemon run.
    pub fn reset(&self) {
        *self.completed.lock().unwrap_or_else(PoisonError::into_inner) = false;
    }

    pub fn is_complete(&self) -> bool {
        *self.completed.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Block until [`complete`](Self::complete) or the timeout. Returns
    /// whether teardown finished.
    pub fn wait(&self, timeout: Duration) -> bool {
        let completed = self.completed.lock().unwrap_or_else(PoisonError::into_inner);
        let (completed, _) = self
            .changed
            .wait_timeout_while(completed, timeout, |done| !*done)
            .unwrap_or_else(PoisonError::into_inner);
        *completed
    }
}

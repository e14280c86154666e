//! Stacking flag accessor: reads and flips the topmost z-order class.
//!
//! Failures are folded into plain booleans. A window that vanished reads as
//! not topmost, and a rejected change reports `false`.

use tracing::debug;

use crate::window::{WindowHandle, WindowSystem};

/// Whether the window is currently in the topmost stacking class.
pub fn is_topmost<W: WindowSystem + ?Sized>(os: &W, window: WindowHandle) -> bool {
    match os.is_topmost(window) {
        Ok(topmost) => topmost,
        Err(e) => {
            debug!(
                event = "core.stacking.read_failed",
                window = %window,
                error = %e
            );
            false
        }
    }
}

/// Request a stacking class change. Returns whether the OS accepted it.
pub fn set_topmost<W: WindowSystem + ?Sized>(os: &W, window: WindowHandle, desired: bool) -> bool {
    match os.set_topmost(window, desired) {
        Ok(()) => {
            debug!(
                event = "core.stacking.set_completed",
                window = %window,
                topmost = desired
            );
            true
        }
        Err(e) => {
            debug!(
                event = "core.stacking.set_rejected",
                window = %window,
                topmost = desired,
                error = %e
            );
            false
        }
    }
}

/// Flip the stacking class. Returns the new state if the OS accepted it.
pub fn toggle<W: WindowSystem + ?Sized>(os: &W, window: WindowHandle) -> Option<bool> {
    let desired = !is_topmost(os, window);
    set_topmost(os, window, desired).then_some(desired)
}

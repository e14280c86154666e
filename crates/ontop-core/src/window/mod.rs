//! Native window system boundary.
//!
//! Everything ontop does to other processes' windows goes through the
//! [`WindowSystem`] trait. On Windows it is backed by user32; elsewhere the
//! constructors report [`WindowSystemError::Unsupported`].

pub mod errors;
pub mod traits;
pub mod types;

#[cfg(test)]
pub(crate) mod fake;
#[cfg(windows)]
mod win32;

pub use errors::WindowSystemError;
pub use traits::WindowSystem;
pub use types::{MenuHandle, MenuItem, SubscriptionHandle, TopLevelWindow, WindowHandle};

use crate::dispatch::EventSource;

/// The platform window system.
#[cfg(windows)]
pub fn native() -> Result<Box<dyn WindowSystem>, WindowSystemError> {
    Ok(Box::new(win32::Win32WindowSystem))
}

#[cfg(not(windows))]
pub fn native() -> Result<Box<dyn WindowSystem>, WindowSystemError> {
    Err(WindowSystemError::Unsupported)
}

/// Subscribe to global focus changes and return the queue they arrive on.
///
/// Must be called on the thread that will drain the source; notifications
/// are delivered to that thread's message loop.
#[cfg(windows)]
pub fn native_event_source() -> Result<Box<dyn EventSource>, WindowSystemError> {
    Ok(Box::new(win32::Win32EventSource::start()?))
}

#[cfg(not(windows))]
pub fn native_event_source() -> Result<Box<dyn EventSource>, WindowSystemError> {
    Err(WindowSystemError::Unsupported)
}

#[cfg(all(test, not(windows)))]
mod tests {
    use super::*;

    #[test]
    fn test_native_unsupported_off_windows() {
        assert!(matches!(native(), Err(WindowSystemError::Unsupported)));
        assert!(matches!(
            native_event_source(),
            Err(WindowSystemError::Unsupported)
        ));
    }
}

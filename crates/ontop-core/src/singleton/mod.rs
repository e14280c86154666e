//! Process singleton guard backed by a named mutex.
//!
//! Only one daemon may inject menu entries at a time. A second instance finds
//! the mutex already held and exits without touching any window.

pub mod errors;

pub use errors::SingletonError;

/// Name of the mutex guarding the daemon.
pub const INSTANCE_NAME: &str = "ontop-always-on-top";

/// Holds the named mutex until dropped.
#[derive(Debug)]
pub struct InstanceGuard {
    #[cfg(windows)]
    handle: windows::Win32::Foundation::HANDLE,
}

/// Try to become the single running instance.
///
/// Returns `Ok(None)` when another process already holds the guard.
#[cfg(windows)]
pub fn acquire(name: &str) -> Result<Option<InstanceGuard>, SingletonError> {
    use tracing::{debug, info};
    use windows::Win32::Foundation::{CloseHandle, ERROR_ALREADY_EXISTS, GetLastError, TRUE};
    use windows::Win32::System::Threading::CreateMutexW;
    use windows::core::HSTRING;

    let handle = unsafe { CreateMutexW(None, TRUE, &HSTRING::from(name)) }.map_err(|e| {
        SingletonError::CreateFailed {
            name: name.to_string(),
            message: e.to_string(),
        }
    })?;

    if unsafe { GetLastError() } == ERROR_ALREADY_EXISTS {
        let _ = unsafe { CloseHandle(handle) };
        info!(event = "core.singleton.already_running", name = name);
        return Ok(None);
    }

    debug!(event = "core.singleton.acquired", name = name);
    Ok(Some(InstanceGuard { handle }))
}

#[cfg(not(windows))]
pub fn acquire(_name: &str) -> Result<Option<InstanceGuard>, SingletonError> {
    Err(SingletonError::Unsupported)
}

#[cfg(windows)]
impl Drop for InstanceGuard {
    fn drop(&mut self) {
        use windows::Win32::Foundation::CloseHandle;
        use windows::Win32::System::Threading::ReleaseMutex;

        unsafe {
            let _ = ReleaseMutex(self.handle);
            let _ = CloseHandle(self.handle);
        }
        tracing::debug!(event = "core.singleton.released");
    }
}

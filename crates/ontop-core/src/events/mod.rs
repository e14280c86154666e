//! Process-level lifecycle events shared by every ontop command.

use tracing::{error, info, warn};

use crate::errors::OnTopError;

/// Logged once per invocation, before the command runs.
pub fn log_app_startup(command: &str) {
    info!(
        event = "core.app.startup_completed",
        version = env!("CARGO_PKG_VERSION"),
        command = command,
        platform = std::env::consts::OS
    );
}

/// Logged after the daemon has torn down every window it touched.
pub fn log_app_shutdown(events_handled: usize) {
    info!(
        event = "core.app.shutdown_completed",
        events_handled = events_handled
    );
}

/// User errors (unknown target, unsupported platform) log as warnings.
pub fn log_app_error<E: OnTopError>(error: &E) {
    if error.is_user_error() {
        warn!(
            event = "core.app.error_occurred",
            error = %error,
            error_code = error.error_code(),
            user_error = true
        );
    } else {
        error!(
            event = "core.app.error_occurred",
            error = %error,
            error_code = error.error_code(),
            user_error = false
        );
    }
}

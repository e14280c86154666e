//! Fatal error reporting: crash log plus native dialog, both best-effort.

use std::fs;
use std::path::Path;

use tracing::{error, warn};

use crate::config::DiagnosticsConfig;
use crate::window::WindowSystem;

pub const DIALOG_TITLE: &str = "ontop error";

/// Plain-text crash report: a UTC timestamp line, then the error.
pub fn format_crash_report(kind: &str, message: &str) -> String {
    format!(
        "{}\n{}: {}\n",
        chrono::Utc::now().to_rfc3339(),
        kind,
        message
    )
}

/// Overwrite the crash log with `report`.
pub fn write_crash_log(path: &Path, report: &str) -> std::io::Result<()> {
    fs::write(path, report)
}

/// Report an error that escaped the event loop.
///
/// Writes the crash log and, if enabled, shows a modal dialog. Failures of
/// either are logged and otherwise ignored.
pub fn report_fatal<W: WindowSystem + ?Sized>(
    os: Option<&W>,
    config: &DiagnosticsConfig,
    kind: &str,
    message: &str,
) {
    error!(event = "core.diagnostics.fatal", kind = kind, message = message);

    let path = config.crash_log_path();
    if let Err(e) = write_crash_log(&path, &format_crash_report(kind, message)) {
        warn!(
            event = "core.diagnostics.crash_log_failed",
            path = %path.display(),
            error = %e
        );
    }

    if config.show_dialog()
        && let Some(os) = os
    {
        os.show_error_dialog(DIALOG_TITLE, message);
    }
}

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use tracing::info;

use crate::config::OnTopConfig;
use crate::daemon::errors::DaemonError;
use crate::daemon::runtime::Runtime;
use crate::daemon::teardown::TEARDOWN;
use crate::diagnostics;
use crate::dispatch::EventSource;
use crate::label;
use crate::singleton::{self, INSTANCE_NAME};
use crate::window::{self, WindowSystem};

/// How a daemon run ended without a fatal error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DaemonExit {
    /// Quit was requested; every window was cleaned up.
    Completed { events: usize },
    /// Another instance holds the singleton guard. Nothing was touched.
    AlreadyRunning,
}

/// Run the daemon on the native window system until quit.
///
/// Must be called from the thread that will own the message loop.
pub fn run_daemon(config: &OnTopConfig) -> Result<DaemonExit, DaemonError> {
    let Some(_guard) = singleton::acquire(INSTANCE_NAME)? else {
        return Ok(DaemonExit::AlreadyRunning);
    };

    TEARDOWN.reset();
    let os = window::native()?;
    let mut source = window::native_event_source()?;
    serve(os, &mut source, config)
}

/// Drive a runtime from `source` and always tear it down.
///
/// An error or panic escaping the loop is reported through the crash log
/// and dialog before teardown, then returned as [`DaemonError::Fatal`].
/// [`TEARDOWN`] is completed on every path.
pub fn serve<W, S>(os: W, source: &mut S, config: &OnTopConfig) -> Result<DaemonExit, DaemonError>
where
    W: WindowSystem,
    S: EventSource + ?Sized,
{
    let label = label::resolve(config.menu.label.as_deref(), &os);
    info!(event = "core.daemon.start_completed", label = %label);

    let mut runtime = Runtime::new(os, label);
    let result = panic::catch_unwind(AssertUnwindSafe(|| runtime.run(source)));

    let (kind, message) = match result {
        Ok(Ok(events)) => {
            runtime.shutdown();
            TEARDOWN.complete();
            return Ok(DaemonExit::Completed { events });
        }
        Ok(Err(e)) => ("error", e.to_string()),
        Err(payload) => ("panic", panic_message(payload.as_ref())),
    };

    diagnostics::report_fatal(Some(runtime.os()), &config.diagnostics, kind, &message);
    runtime.shutdown();
    TEARDOWN.complete();
    Err(DaemonError::Fatal { message })
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

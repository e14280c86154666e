//! Daemon lifecycle: singleton guard, event loop, fatal reporting, teardown.

pub mod errors;
pub mod handler;
pub mod runtime;
pub mod teardown;

pub use errors::DaemonError;
pub use handler::{DaemonExit, run_daemon, serve};
pub use runtime::Runtime;
pub use teardown::{TEARDOWN, TEARDOWN_WAIT, TeardownSignal};

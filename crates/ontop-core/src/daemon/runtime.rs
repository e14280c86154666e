use tracing::info;

use crate::dispatch::{Dispatcher, EventSource};
use crate::sync::MenuSynchronizer;
use crate::window::{WindowSystem, WindowSystemError};

/// A running synchronizer with a one-shot teardown.
///
/// `shutdown` may be reached from the normal exit path, the fatal path and
/// `Drop`; only the first call touches any window.
pub struct Runtime<W: WindowSystem> {
    dispatcher: Dispatcher<W>,
    torn_down: bool,
}

impl<W: WindowSystem> Runtime<W> {
    pub fn new(os: W, label: impl Into<String>) -> Self {
        Self {
            dispatcher: Dispatcher::new(MenuSynchronizer::new(os, label)),
            torn_down: false,
        }
    }

    pub fn dispatcher(&self) -> &Dispatcher<W> {
        &self.dispatcher
    }

    pub fn os(&self) -> &W {
        self.dispatcher.synchronizer().os()
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Pump events until the source reports quit.
    pub fn run<S: EventSource + ?Sized>(
        &mut self,
        source: &mut S,
    ) -> Result<usize, WindowSystemError> {
        self.dispatcher.run(source)
    }

    /// Reset every injected menu and detach every subscription. Returns how
    /// many windows were cleaned; zero after the first call.
    pub fn shutdown(&mut self) -> usize {
        if self.torn_down {
            return 0;
        }
        self.torn_down = true;
        let windows = self.dispatcher.synchronizer_mut().shutdown();
        info!(event = "core.daemon.teardown_completed", windows = windows);
        windows
    }
}

impl<W: WindowSystem> Drop for Runtime<W> {
    fn drop(&mut self) {
        self.shutdown();
    }
}

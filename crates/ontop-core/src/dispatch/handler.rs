use tracing::{debug, info};

use crate::dispatch::types::{DispatchOutcome, DropReason, Event, EventSource};
use crate::sync::MenuSynchronizer;
use crate::window::{WindowSystem, WindowSystemError};

/// Routes OS notifications to the synchronizer, one at a time.
pub struct Dispatcher<W: WindowSystem> {
    synchronizer: MenuSynchronizer<W>,
}

impl<W: WindowSystem> Dispatcher<W> {
    pub fn new(synchronizer: MenuSynchronizer<W>) -> Self {
        Self { synchronizer }
    }

    pub fn synchronizer(&self) -> &MenuSynchronizer<W> {
        &self.synchronizer
    }

    pub fn synchronizer_mut(&mut self) -> &mut MenuSynchronizer<W> {
        &mut self.synchronizer
    }

    /// Handle one event to completion.
    pub fn handle(&mut self, event: Event) -> DispatchOutcome {
        match event {
            Event::FocusChanged { window } => {
                if window.is_null() {
                    return DispatchOutcome::Dropped {
                        reason: DropReason::NullWindow,
                    };
                }
                DispatchOutcome::Synced {
                    window,
                    outcome: self.synchronizer.ensure_synced(window),
                }
            }
            Event::MenuInvoked {
                subscription,
                item_id,
            } => {
                let Some(window) = self.synchronizer.registry().window_for(subscription) else {
                    debug!(
                        event = "core.dispatch.unknown_subscription",
                        subscription = subscription.as_raw()
                    );
                    return DispatchOutcome::Dropped {
                        reason: DropReason::UnknownSubscription,
                    };
                };
                DispatchOutcome::Invoked {
                    window,
                    outcome: self.synchronizer.invoke(window, item_id),
                }
            }
        }
    }

    /// Drain the source until it reports quit. Returns the number of events
    /// handled.
    pub fn run<S: EventSource + ?Sized>(
        &mut self,
        source: &mut S,
    ) -> Result<usize, WindowSystemError> {
        info!(event = "core.dispatch.loop_started");
        let mut handled = 0;
        while let Some(event) = source.next_event()? {
            self.handle(event);
            handled += 1;
        }
        info!(event = "core.dispatch.loop_completed", handled = handled);
        Ok(handled)
    }
}

use std::collections::VecDeque;

use crate::sync::{InvokeOutcome, SyncOutcome};
use crate::window::{SubscriptionHandle, WindowHandle, WindowSystemError};

/// A notification delivered by the OS, already copied out of its callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A window gained input focus.
    FocusChanged { window: WindowHandle },
    /// An entry of a subscribed window's system menu was invoked.
    MenuInvoked {
        subscription: SubscriptionHandle,
        item_id: u32,
    },
}

/// Queue of OS notifications, drained on a single thread.
pub trait EventSource {
    /// Block until the next event. `Ok(None)` means quit was requested.
    fn next_event(&mut self) -> Result<Option<Event>, WindowSystemError>;
}

impl<S: EventSource + ?Sized> EventSource for Box<S> {
    fn next_event(&mut self) -> Result<Option<Event>, WindowSystemError> {
        (**self).next_event()
    }
}

/// A pre-filled queue; quits once drained.
impl EventSource for VecDeque<Event> {
    fn next_event(&mut self) -> Result<Option<Event>, WindowSystemError> {
        Ok(self.pop_front())
    }
}

/// Why an event was dropped before reaching the synchronizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropReason {
    NullWindow,
    /// The subscription was detached after the notification was queued.
    UnknownSubscription,
}

/// What handling one event did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    Synced {
        window: WindowHandle,
        outcome: SyncOutcome,
    },
    Invoked {
        window: WindowHandle,
        outcome: InvokeOutcome,
    },
    Dropped {
        reason: DropReason,
    },
}

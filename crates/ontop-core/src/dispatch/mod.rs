//! Event dispatcher: routes focus and menu-invoke notifications.

pub mod handler;
pub mod types;

pub use handler::Dispatcher;
pub use types::{DispatchOutcome, DropReason, Event, EventSource};

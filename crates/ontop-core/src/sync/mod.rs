//! Menu synchronizer: the per-window toggle state machine.

pub mod handler;
pub mod types;

pub use handler::MenuSynchronizer;
pub use types::{
    InvokeOutcome, MenuAction, StaleReason, SyncOutcome, SyncPlan, ToggleState, plan,
};

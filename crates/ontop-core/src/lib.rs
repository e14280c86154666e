//! ontop-core: always-on-top toggles injected into native system menus
//!
//! Any top-level window that receives focus gets an "Always on top" entry in
//! its system menu. The entry's checkmark tracks the window's topmost
//! stacking flag, and invoking the entry flips that flag.
//!
//! # Main Entry Points
//!
//! - [`sync`] - The per-window synchronizer that owns the menu/hook invariant
//! - [`dispatch`] - Routes focus and menu-invoke notifications to the synchronizer
//! - [`daemon`] - Singleton guard, event loop, fatal reporting and teardown
//! - [`selection`] - One-shot listing of processes with a visible main window
//! - [`window`] - The native window system boundary

pub mod config;
pub mod daemon;
pub mod diagnostics;
pub mod dispatch;
pub mod errors;
pub mod events;
pub mod hooks;
pub mod label;
pub mod logging;
pub mod menu;
pub mod selection;
pub mod singleton;
pub mod stacking;
pub mod sync;
pub mod window;

// Re-export commonly used types at crate root for convenience
pub use config::OnTopConfig;
pub use dispatch::{DispatchOutcome, Dispatcher, Event, EventSource};
pub use hooks::HookRegistry;
pub use menu::{MENU_ITEM_ID, MenuEntryState};
pub use selection::TargetWindow;
pub use sync::{MenuSynchronizer, SyncOutcome, ToggleState};
pub use window::{SubscriptionHandle, WindowHandle, WindowSystem, WindowSystemError};

// Re-export logging initialization
pub use logging::init_logging;

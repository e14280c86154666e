use tracing::{debug, info};

use crate::hooks::HookRegistry;
use crate::menu::{self, MENU_ITEM_ID};
use crate::stacking;
use crate::sync::types::{InvokeOutcome, MenuAction, StaleReason, SyncOutcome, ToggleState, plan};
use crate::window::{WindowHandle, WindowSystem, WindowSystemError};

/// Keeps each window's toggle entry, subscription and stacking flag in step.
///
/// Owns the hook registry. After every public operation a window has a
/// registry entry exactly when its menu carries the toggle entry, as far as
/// the OS let us observe it.
pub struct MenuSynchronizer<W: WindowSystem> {
    os: W,
    registry: HookRegistry,
    label: String,
}

impl<W: WindowSystem> MenuSynchronizer<W> {
    pub fn new(os: W, label: impl Into<String>) -> Self {
        Self {
            os,
            registry: HookRegistry::new(),
            label: label.into(),
        }
    }

    pub fn os(&self) -> &W {
        &self.os
    }

    pub fn registry(&self) -> &HookRegistry {
        &self.registry
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Bring the window's toggle entry in line with its stacking flag.
    pub fn ensure_synced(&mut self, window: WindowHandle) -> SyncOutcome {
        let Some(entry) = menu::get_entry_at_toggle_slot(&self.os, window) else {
            self.forget_if_gone(window);
            return SyncOutcome::Inaccessible;
        };

        let desired = stacking::is_topmost(&self.os, window);
        let state = ToggleState::observe(&entry, &self.label);
        let plan = plan(state, desired, self.registry.contains(window));

        debug!(
            event = "core.sync.planned",
            window = %window,
            state = ?state,
            topmost = desired,
            action = ?plan.menu,
            attach = plan.attach
        );

        let outcome = match plan.menu {
            MenuAction::Insert { checked } => self.insert(window, checked),
            MenuAction::Update { checked } => self.update(window, checked, plan.attach),
            MenuAction::Keep if plan.attach => {
                self.attach_existing(window, SyncOutcome::Reattached)
            }
            MenuAction::Keep => SyncOutcome::Unchanged,
        };

        if outcome != SyncOutcome::Unchanged {
            debug!(event = "core.sync.completed", window = %window, outcome = ?outcome);
        }
        outcome
    }

    fn insert(&mut self, window: WindowHandle, checked: bool) -> SyncOutcome {
        if let Err(e) = menu::insert_entry(&self.os, window, &self.label, checked) {
            debug!(event = "core.sync.insert_failed", window = %window, error = %e);
            // The entry was lost behind our back; drop the orphaned subscription.
            self.registry.detach(&self.os, window);
            return SyncOutcome::Rejected {
                operation: "insert",
            };
        }
        self.attach_existing(window, SyncOutcome::Inserted { checked })
    }

    fn update(&mut self, window: WindowHandle, checked: bool, attach: bool) -> SyncOutcome {
        if let Err(e) = menu::update_entry(&self.os, window, &self.label, checked) {
            debug!(event = "core.sync.update_failed", window = %window, error = %e);
            // A tracked entry keeps its stale checkmark until the next event.
            // An untracked one must not stay behind without a subscription.
            if attach {
                menu::reset_menu(&self.os, window);
            }
            return SyncOutcome::Rejected {
                operation: "update",
            };
        }
        if attach {
            self.attach_existing(window, SyncOutcome::Updated { checked })
        } else {
            SyncOutcome::Updated { checked }
        }
    }

    /// Attach to a window whose menu already carries the entry. On failure
    /// the entry is removed again.
    fn attach_existing(&mut self, window: WindowHandle, success: SyncOutcome) -> SyncOutcome {
        if self.registry.attach(&self.os, window).is_some() {
            return success;
        }
        menu::reset_menu(&self.os, window);
        SyncOutcome::Rejected {
            operation: "attach",
        }
    }

    /// A destroyed window takes its menu with it; only the subscription is
    /// left to release. A live window with a denied menu stays tracked.
    fn forget_if_gone(&mut self, window: WindowHandle) {
        if !self.registry.contains(window) {
            return;
        }
        if let Err(WindowSystemError::WindowGone { .. }) = self.os.is_topmost(window) {
            debug!(event = "core.sync.window_gone", window = %window);
            self.registry.detach(&self.os, window);
        }
    }

    /// Reset the menu only while it still carries our entry. A menu the
    /// owning application rebuilt holds its own items, not ours.
    fn remove_entry(&self, window: WindowHandle) {
        let ours = menu::get_entry_at_toggle_slot(&self.os, window)
            .is_some_and(|entry| entry.is_toggle_entry(&self.label));
        if ours {
            menu::reset_menu(&self.os, window);
        } else {
            debug!(event = "core.sync.entry_already_gone", window = %window);
        }
    }

    /// Remove the toggle entry and the window's subscription.
    pub fn teardown(&mut self, window: WindowHandle) {
        self.remove_entry(window);
        self.registry.detach(&self.os, window);
    }

    /// Handle a click on an entry of a subscribed window's menu.
    pub fn invoke(&mut self, window: WindowHandle, item_id: u32) -> InvokeOutcome {
        if item_id != MENU_ITEM_ID {
            return InvokeOutcome::Stale(StaleReason::ForeignItem);
        }
        if self.os.foreground_window() != Some(window) {
            debug!(event = "core.sync.invoke_stale", window = %window);
            return InvokeOutcome::Stale(StaleReason::NotForeground);
        }

        match stacking::toggle(&self.os, window) {
            Some(topmost) => {
                info!(event = "core.sync.toggled", window = %window, topmost = topmost);
                let sync = self.ensure_synced(window);
                InvokeOutcome::Toggled { topmost, sync }
            }
            None => InvokeOutcome::Rejected,
        }
    }

    /// Tear down every tracked window. Returns how many were tracked.
    pub fn shutdown(&mut self) -> usize {
        let windows = self.registry.windows();
        for window in &windows {
            self.remove_entry(*window);
        }
        self.registry.detach_all(&self.os);
        info!(event = "core.sync.shutdown_completed", windows = windows.len());
        windows.len()
    }
}

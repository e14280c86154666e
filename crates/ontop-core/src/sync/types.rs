use crate::menu::MenuEntryState;

/// Logical state of a window's toggle entry, observed from its menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleState {
    /// The toggle slot holds a foreign entry.
    Unmanaged,
    ManagedUnchecked,
    ManagedChecked,
}

impl ToggleState {
    /// Classify the entry at the toggle slot.
    pub fn observe(entry: &MenuEntryState, label: &str) -> Self {
        match (entry.is_toggle_entry(label), entry.checked) {
            (false, _) => Self::Unmanaged,
            (true, false) => Self::ManagedUnchecked,
            (true, true) => Self::ManagedChecked,
        }
    }

    pub fn checked(&self) -> bool {
        matches!(self, Self::ManagedChecked)
    }
}

/// What to do to the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Insert { checked: bool },
    Update { checked: bool },
    Keep,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncPlan {
    pub menu: MenuAction,
    /// Attach a subscription after the menu action succeeds.
    pub attach: bool,
}

/// Decide how to bring a window's menu in line with its stacking flag.
///
/// `attached` is whether the registry already tracks the window.
pub fn plan(state: ToggleState, desired_checked: bool, attached: bool) -> SyncPlan {
    match state {
        ToggleState::Unmanaged => SyncPlan {
            menu: MenuAction::Insert {
                checked: desired_checked,
            },
            attach: true,
        },
        managed if managed.checked() != desired_checked => SyncPlan {
            menu: MenuAction::Update {
                checked: desired_checked,
            },
            attach: !attached,
        },
        _ => SyncPlan {
            menu: MenuAction::Keep,
            attach: !attached,
        },
    }
}

/// Result of synchronizing one window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The menu could not be obtained or read. Nothing changed.
    Inaccessible,
    Inserted { checked: bool },
    Updated { checked: bool },
    /// The entry was already correct but had no subscription; one was attached.
    Reattached,
    Unchanged,
    /// An OS call failed. Entry and subscription are still both present or
    /// both gone.
    Rejected { operation: &'static str },
}

/// Why a menu-invoked notification was discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaleReason {
    /// Some other entry of the menu was invoked.
    ForeignItem,
    /// The window is no longer the foreground window.
    NotForeground,
}

/// Result of handling a click on the toggle entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvokeOutcome {
    Toggled { topmost: bool, sync: SyncOutcome },
    /// The OS refused the stacking change.
    Rejected,
    Stale(StaleReason),
}

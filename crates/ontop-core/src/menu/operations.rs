//! System menu accessor.
//!
//! Every call obtains the menu and recomputes the toggle slot from the live
//! item count. The OS can replace a window's system menu at any time, so no
//! handle or position survives between calls.

use tracing::debug;

use super::types::{
    MENU_ITEM_ID, MenuEntryState, OFFSET_FROM_BOTTOM, ToggleSlot, compute_slot,
};
use crate::window::{MenuHandle, MenuItem, WindowHandle, WindowSystem, WindowSystemError};

struct LocatedMenu {
    menu: MenuHandle,
    slot: ToggleSlot,
}

fn try_locate<W: WindowSystem + ?Sized>(os: &W, window: WindowHandle) -> Option<LocatedMenu> {
    let menu = os.system_menu(window)?;
    let count = os.menu_item_count(menu).ok()?;
    Some(LocatedMenu {
        menu,
        slot: compute_slot(count, OFFSET_FROM_BOTTOM),
    })
}

/// Obtain the menu. If its item count cannot be read, revert it to the
/// default template and retry, then query one last time as-is.
fn locate<W: WindowSystem + ?Sized>(os: &W, window: WindowHandle) -> Option<LocatedMenu> {
    let menu = os.system_menu(window)?;
    if let Ok(count) = os.menu_item_count(menu) {
        return Some(LocatedMenu {
            menu,
            slot: compute_slot(count, OFFSET_FROM_BOTTOM),
        });
    }

    debug!(event = "core.menu.acquire_retry", window = %window);
    os.revert_system_menu(window);

    let found = try_locate(os, window).or_else(|| try_locate(os, window));
    if found.is_none() {
        debug!(event = "core.menu.acquire_failed", window = %window);
    }
    found
}

fn toggle_item(label: &str, checked: bool) -> MenuItem {
    MenuItem::new(MENU_ITEM_ID, label, checked)
}

/// Read the entry at the toggle slot.
///
/// Returns `None` when the menu cannot be obtained or the read is rejected
/// (window destroyed, access denied).
pub fn get_entry_at_toggle_slot<W: WindowSystem + ?Sized>(
    os: &W,
    window: WindowHandle,
) -> Option<MenuEntryState> {
    let located = locate(os, window)?;
    match os.read_menu_item(located.menu, located.slot.entry_at) {
        Ok(item) => Some(MenuEntryState {
            item_id: item.id,
            label: item.label,
            checked: item.checked,
        }),
        Err(e) => {
            debug!(
                event = "core.menu.read_failed",
                window = %window,
                position = located.slot.entry_at,
                error = %e
            );
            None
        }
    }
}

/// Insert a new toggle entry at the toggle slot.
pub fn insert_entry<W: WindowSystem + ?Sized>(
    os: &W,
    window: WindowHandle,
    label: &str,
    checked: bool,
) -> Result<(), WindowSystemError> {
    let located = locate(os, window).ok_or_else(|| WindowSystemError::MenuUnavailable {
        window: window.to_string(),
    })?;
    os.insert_menu_item(
        located.menu,
        located.slot.insert_at,
        &toggle_item(label, checked),
    )
}

/// Rewrite the entry already at the toggle slot in place.
pub fn update_entry<W: WindowSystem + ?Sized>(
    os: &W,
    window: WindowHandle,
    label: &str,
    checked: bool,
) -> Result<(), WindowSystemError> {
    let located = locate(os, window).ok_or_else(|| WindowSystemError::MenuUnavailable {
        window: window.to_string(),
    })?;
    os.update_menu_item(
        located.menu,
        located.slot.entry_at,
        &toggle_item(label, checked),
    )
}

/// Rebuild the system menu from its default template.
///
/// Discards the toggle entry. Removing a single entry by position is not
/// reliable once other code has touched the menu.
pub fn reset_menu<W: WindowSystem + ?Sized>(os: &W, window: WindowHandle) {
    debug!(event = "core.menu.reset", window = %window);
    os.revert_system_menu(window);
}

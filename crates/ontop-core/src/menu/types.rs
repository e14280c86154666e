/// Reserved command id of the injected toggle entry.
pub const MENU_ITEM_ID: u32 = 31337;

/// The toggle entry sits this many entries above the bottom of the menu,
/// i.e. immediately above the final native entry (usually "Close").
pub const OFFSET_FROM_BOTTOM: u32 = 1;

/// Longest label, in UTF-16 units, that can be read back from a menu.
pub const LABEL_CAPACITY: usize = 63;

/// Positions derived from a menu's current item count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleSlot {
    /// Where a new toggle entry is inserted.
    pub insert_at: u32,
    /// Where a previously inserted toggle entry is found.
    pub entry_at: u32,
}

/// Compute the toggle slot for a menu with `item_count` entries.
///
/// Inserting at `insert_at` grows the menu by one, so on the next call the
/// same entry is found at the new `entry_at`.
pub fn compute_slot(item_count: u32, offset: u32) -> ToggleSlot {
    let insert_at = item_count.saturating_sub(offset);
    ToggleSlot {
        insert_at,
        entry_at: insert_at.saturating_sub(1),
    }
}

/// Whatever entry currently occupies the toggle slot.
///
/// Derived from a fresh menu read every time, never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntryState {
    pub item_id: u32,
    pub label: String,
    pub checked: bool,
}

impl MenuEntryState {
    pub fn label_matches(&self, label: &str) -> bool {
        self.label == label
    }

    /// Whether the slot holds the toggle entry.
    ///
    /// Either the label or the reserved id is enough; only an entry matching
    /// neither is treated as foreign. A stale label (say, after a locale
    /// change) therefore never causes a second insertion.
    pub fn is_toggle_entry(&self, label: &str) -> bool {
        self.label_matches(label) || self.item_id == MENU_ITEM_ID
    }
}

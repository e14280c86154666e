pub mod operations;
pub mod types;

pub use operations::{get_entry_at_toggle_slot, insert_entry, reset_menu, update_entry};
pub use types::{
    LABEL_CAPACITY, MENU_ITEM_ID, MenuEntryState, OFFSET_FROM_BOTTOM, ToggleSlot, compute_slot,
};

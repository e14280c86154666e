use serde::{Deserialize, Serialize};

/// Opaque identifier for a top-level window owned by the OS.
///
/// The raw value is the native handle. ontop never creates or destroys the
/// windows behind these handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowHandle(isize);

impl WindowHandle {
    pub fn from_raw(raw: isize) -> Self {
        Self(raw)
    }

    pub fn as_raw(&self) -> isize {
        self.0
    }

    pub fn is_null(&self) -> bool {
        self.0 == 0
    }
}

impl std::fmt::Display for WindowHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{:X}", self.0)
    }
}

/// Opaque identifier for a per-window "menu entry invoked" subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionHandle(isize);

impl SubscriptionHandle {
    pub fn from_raw(raw: isize) -> Self {
        Self(raw)
    }

    pub fn as_raw(&self) -> isize {
        self.0
    }
}

/// Native system menu handle.
///
/// Only valid for the duration of a single accessor call; the OS may replace
/// a window's system menu at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuHandle(isize);

impl MenuHandle {
    pub fn from_raw(raw: isize) -> Self {
        Self(raw)
    }

    pub fn as_raw(&self) -> isize {
        self.0
    }
}

/// A string entry as read from or written to a system menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub id: u32,
    pub label: String,
    pub checked: bool,
}

impl MenuItem {
    pub fn new(id: u32, label: impl Into<String>, checked: bool) -> Self {
        Self {
            id,
            label: label.into(),
            checked,
        }
    }
}

/// A top-level window as reported by enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopLevelWindow {
    pub handle: WindowHandle,
    pub pid: u32,
    pub title: String,
    pub visible: bool,
    pub owned: bool,
}

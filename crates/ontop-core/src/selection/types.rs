use serde::Serialize;

use crate::window::WindowHandle;

/// A process that has a main window ontop can act on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetWindow {
    pub pid: u32,
    /// Process executable name, as reported by the OS.
    pub name: String,
    pub window: WindowHandle,
    pub title: String,
    pub topmost: bool,
}

impl TargetWindow {
    /// Case-insensitive match on the executable name, with or without `.exe`.
    pub fn name_matches(&self, query: &str) -> bool {
        normalize_name(&self.name) == normalize_name(query)
    }
}

fn normalize_name(name: &str) -> String {
    let lower = name.trim().to_lowercase();
    match lower.strip_suffix(".exe") {
        Some(stem) => stem.to_string(),
        None => lower,
    }
}

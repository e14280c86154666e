//! One-shot listing of processes with a visible main window.

use std::collections::{HashMap, HashSet};

use sysinfo::{ProcessesToUpdate, System};
use tracing::{debug, info};

use crate::selection::errors::SelectionError;
use crate::selection::types::TargetWindow;
use crate::stacking;
use crate::window::{TopLevelWindow, WindowSystem};

/// First visible, unowned, titled window of each process, in enumeration
/// order.
pub fn main_windows(windows: &[TopLevelWindow]) -> Vec<&TopLevelWindow> {
    let mut seen = HashSet::new();
    windows
        .iter()
        .filter(|w| w.visible && !w.owned && !w.title.trim().is_empty())
        .filter(|w| seen.insert(w.pid))
        .collect()
}

/// Executable names of running processes, keyed by pid.
pub fn process_names() -> HashMap<u32, String> {
    let mut system = System::new();
    system.refresh_processes(ProcessesToUpdate::All, true);
    system
        .processes()
        .iter()
        .map(|(pid, process)| (pid.as_u32(), process.name().to_string_lossy().into_owned()))
        .collect()
}

/// List targets, naming processes through `name_of`.
///
/// Windows whose process has no name (exited since enumeration) are skipped.
pub fn list_targets_with<W, F>(os: &W, name_of: F) -> Result<Vec<TargetWindow>, SelectionError>
where
    W: WindowSystem + ?Sized,
    F: Fn(u32) -> Option<String>,
{
    let windows = os.top_level_windows()?;
    let targets: Vec<TargetWindow> = main_windows(&windows)
        .into_iter()
        .filter_map(|w| {
            let name = name_of(w.pid)?;
            Some(TargetWindow {
                pid: w.pid,
                name,
                window: w.handle,
                title: w.title.clone(),
                topmost: stacking::is_topmost(os, w.handle),
            })
        })
        .collect();

    info!(event = "core.selection.list_completed", count = targets.len());
    Ok(targets)
}

pub fn list_targets<W: WindowSystem + ?Sized>(os: &W) -> Result<Vec<TargetWindow>, SelectionError> {
    let names = process_names();
    debug!(event = "core.selection.processes_scanned", count = names.len());
    list_targets_with(os, |pid| names.get(&pid).cloned())
}

/// Keep targets whose name contains `filter`, ignoring case.
pub fn filter_by_app(targets: Vec<TargetWindow>, filter: &str) -> Vec<TargetWindow> {
    let needle = filter.to_lowercase();
    targets
        .into_iter()
        .filter(|t| t.name.to_lowercase().contains(&needle))
        .collect()
}

pub fn find_by_name<'a>(targets: &'a [TargetWindow], name: &str) -> Option<&'a TargetWindow> {
    targets.iter().find(|t| t.name_matches(name))
}

pub fn find_by_pid(targets: &[TargetWindow], pid: u32) -> Option<&TargetWindow> {
    targets.iter().find(|t| t.pid == pid)
}

/// Flip the target's stacking flag. Returns the new state.
pub fn toggle_target<W: WindowSystem + ?Sized>(
    os: &W,
    target: &TargetWindow,
) -> Result<bool, SelectionError> {
    let topmost = stacking::toggle(os, target.window).ok_or_else(|| {
        SelectionError::ToggleRejected {
            name: target.name.clone(),
        }
    })?;
    info!(
        event = "core.selection.toggle_completed",
        pid = target.pid,
        name = %target.name,
        topmost = topmost
    );
    Ok(topmost)
}

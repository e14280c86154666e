//! Configuration type definitions for ontop.
//!
//! These types are serialized/deserialized from TOML config files.
//!
//! # Example Configuration
//!
//! ```toml
//! [menu]
//! label = "Pin on top"
//!
//! [diagnostics]
//! crash_log = "C:\\Users\\me\\ontop-crash.txt"
//! show_dialog = false
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration loaded from TOML config files.
///
/// Loaded from:
/// 1. User config: `~/.ontop/config.toml`
/// 2. Project config: `./.ontop/config.toml`
///
/// Project config values override user config values.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct OnTopConfig {
    /// Injected menu entry settings
    #[serde(default)]
    pub menu: MenuConfig,

    /// Fatal error reporting
    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

/// Settings for the injected system menu entry.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct MenuConfig {
    /// Entry text. Overrides the label picked from the user locale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Settings for reporting an error that escapes the event loop.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DiagnosticsConfig {
    /// Crash log path. Relative paths resolve against the working directory.
    /// Default: `exception.txt`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crash_log: Option<PathBuf>,

    /// Whether to show a native error dialog.
    /// Default: true.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_dialog: Option<bool>,
}

impl DiagnosticsConfig {
    pub fn crash_log_path(&self) -> PathBuf {
        self.crash_log
            .clone()
            .unwrap_or_else(|| PathBuf::from(super::defaults::DEFAULT_CRASH_LOG))
    }

    pub fn show_dialog(&self) -> bool {
        self.show_dialog.unwrap_or(true)
    }
}

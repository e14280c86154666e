//! Configuration loading and merging logic.
//!
//! # Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.ontop/config.toml`
//! 3. **Project config** - `./.ontop/config.toml`

use crate::config::defaults::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use crate::config::types::{DiagnosticsConfig, MenuConfig, OnTopConfig};
use crate::config::validation::validate_config;
use crate::errors::ConfigError;
use std::fs;
use std::path::Path;

/// Check if an error is a "file not found" error.
fn is_file_not_found(e: &(dyn std::error::Error + 'static)) -> bool {
    if let Some(io_err) = e.downcast_ref::<std::io::Error>() {
        return io_err.kind() == std::io::ErrorKind::NotFound;
    }

    let err_str = e.to_string();
    err_str.contains("No such file or directory") || err_str.contains("cannot find the path")
}

/// Load configuration from the hierarchy of config files.
///
/// # Errors
///
/// Returns an error if a config file cannot be parsed or validation fails.
/// Missing config files are not errors.
pub fn load_hierarchy() -> Result<OnTopConfig, Box<dyn std::error::Error>> {
    let mut config = OnTopConfig::default();

    match load_user_config() {
        Ok(user_config) => config = merge_configs(config, user_config),
        Err(e) if !is_file_not_found(e.as_ref()) => return Err(e),
        Err(_) => {} // File not found - continue with defaults
    }

    match load_project_config() {
        Ok(project_config) => config = merge_configs(config, project_config),
        Err(e) if !is_file_not_found(e.as_ref()) => return Err(e),
        Err(_) => {} // File not found - continue with merged config
    }

    validate_config(&config)?;

    Ok(config)
}

/// Load the user configuration from ~/.ontop/config.toml.
fn load_user_config() -> Result<OnTopConfig, Box<dyn std::error::Error>> {
    let home_dir = dirs::home_dir().ok_or("Could not find home directory")?;
    load_config_file(&home_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Load the project configuration from ./.ontop/config.toml.
fn load_project_config() -> Result<OnTopConfig, Box<dyn std::error::Error>> {
    let config_path = std::env::current_dir()?
        .join(CONFIG_DIR_NAME)
        .join(CONFIG_FILE_NAME);
    load_config_file(&config_path)
}

/// Load a configuration file from the given path.
pub fn load_config_file(path: &Path) -> Result<OnTopConfig, Box<dyn std::error::Error>> {
    // Keep the io::Error intact so a missing file stays distinguishable.
    let content = fs::read_to_string(path)?;
    let config: OnTopConfig =
        toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
            message: format!("'{}': {}", path.display(), e),
        })?;
    Ok(config)
}

/// Merge two configurations, with override_config taking precedence.
///
/// Optional fields in the override replace base values only if present.
pub fn merge_configs(base: OnTopConfig, override_config: OnTopConfig) -> OnTopConfig {
    OnTopConfig {
        menu: MenuConfig {
            label: override_config.menu.label.or(base.menu.label),
        },
        diagnostics: DiagnosticsConfig {
            crash_log: override_config
                .diagnostics
                .crash_log
                .or(base.diagnostics.crash_log),
            show_dialog: override_config
                .diagnostics
                .show_dialog
                .or(base.diagnostics.show_dialog),
        },
    }
}

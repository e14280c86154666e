//! Configuration validation.

use crate::config::types::OnTopConfig;
use crate::errors::ConfigError;
use crate::menu::LABEL_CAPACITY;

/// Validate a merged configuration.
///
/// # Errors
///
/// Returns `ConfigError::InvalidConfiguration` when a configured label is
/// blank or too long to be read back from a system menu.
pub fn validate_config(config: &OnTopConfig) -> Result<(), ConfigError> {
    if let Some(label) = &config.menu.label {
        if label.trim().is_empty() {
            return Err(ConfigError::InvalidConfiguration {
                message: "menu.label must not be empty".to_string(),
            });
        }

        // A longer label would be truncated on read and never compare equal.
        let units = label.encode_utf16().count();
        if units > LABEL_CAPACITY {
            return Err(ConfigError::InvalidConfiguration {
                message: format!(
                    "menu.label is {} UTF-16 units long, maximum is {}",
                    units, LABEL_CAPACITY
                ),
            });
        }
    }

    Ok(())
}

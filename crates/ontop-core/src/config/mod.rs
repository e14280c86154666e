//! # Configuration System
//!
//! Hierarchical TOML configuration for ontop.
//!
//! ## Configuration Hierarchy
//!
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.ontop/config.toml`
//! 3. **Project config** - `./.ontop/config.toml`
//!
//! ## Loading Configuration
//!
//! ```rust,no_run
//! use ontop_core::config::OnTopConfig;
//!
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = OnTopConfig::load_hierarchy()?;
//!     println!("crash log: {}", config.diagnostics.crash_log_path().display());
//!     Ok(())
//! }
//! ```

pub mod defaults;
pub mod loading;
pub mod types;
pub mod validation;

pub use types::{DiagnosticsConfig, MenuConfig, OnTopConfig};
pub use validation::validate_config;

impl OnTopConfig {
    /// Load configuration from the hierarchy of config files.
    ///
    /// See [`loading::load_hierarchy`] for details.
    pub fn load_hierarchy() -> Result<Self, Box<dyn std::error::Error>> {
        loading::load_hierarchy()
    }
}

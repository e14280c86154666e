//! Default values for configuration.

/// Crash log written to the working directory when nothing else is configured.
pub const DEFAULT_CRASH_LOG: &str = "exception.txt";

/// Directory name holding `config.toml`, under the home directory and the
/// working directory.
pub const CONFIG_DIR_NAME: &str = ".ontop";

/// Config file name inside [`CONFIG_DIR_NAME`].
pub const CONFIG_FILE_NAME: &str = "config.toml";

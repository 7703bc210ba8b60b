//! Centralized path definitions for commit-corpus
//!
//! ```text
//! ~/.config/commit-corpus/
//! └── config.toml               # Extraction and formatting defaults
//! ```

use std::path::PathBuf;

/// Application directory name under the user config dir
const APP_DIR: &str = "commit-corpus";

/// Global config filename
const CONFIG_FILE: &str = "config.toml";

/// Get the global commit-corpus directory.
///
/// Returns `<config dir>/commit-corpus/`, falling back to the home
/// directory when the platform has no config dir.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::config_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

/// Get the global config file path.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(CONFIG_FILE)
}

//! Configuration management
//!
//! Extraction and formatting defaults, stored as TOML. The global file
//! lives at `~/.config/commit-corpus/config.toml`; an explicit path can be
//! passed on the command line instead. Every field has a default, so a
//! partial file is valid.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::services::{DEFAULT_MAX_DIFF_LINES, TemplateFormat};
use crate::paths;

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// History extraction settings
    #[serde(default)]
    pub extract: ExtractConfig,
    /// Output formatting settings
    #[serde(default)]
    pub format: FormatConfig,
}

/// History extraction settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractConfig {
    /// Branch to read first; `master`, `develop` and `dev` are tried after it
    #[serde(default = "default_branch")]
    pub branch: String,
    /// Maximum commits to walk
    #[serde(default = "default_max_commits")]
    pub max_commits: usize,
    /// Line budget passed to the diff sanitizer
    #[serde(default = "default_max_diff_lines")]
    pub max_diff_lines: usize,
}

fn default_branch() -> String {
    "main".to_string()
}

const fn default_max_commits() -> usize {
    5000
}

const fn default_max_diff_lines() -> usize {
    DEFAULT_MAX_DIFF_LINES
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            branch: default_branch(),
            max_commits: default_max_commits(),
            max_diff_lines: default_max_diff_lines(),
        }
    }
}

/// Output formatting settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatConfig {
    /// Training text template
    #[serde(default)]
    pub template: TemplateFormat,
}

impl Config {
    /// Get the global config file path
    #[must_use]
    pub fn config_path() -> PathBuf {
        paths::global_config()
    }

    /// Load the global config, or defaults if it is missing or unreadable
    #[must_use]
    pub fn load() -> Self {
        let path = Self::config_path();
        if !path.exists() {
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("Ignoring {}: {err}", path.display());
                Self::default()
            },
        }
    }

    /// Load config from an explicit path
    pub fn load_from(path: &Path) -> crate::Result<Self> {
        if !path.exists() {
            return Err(crate::Error::ConfigNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse config from TOML text
    pub fn parse(content: &str) -> crate::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Save config to a path, creating parent directories
    pub fn save_to(&self, path: &Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

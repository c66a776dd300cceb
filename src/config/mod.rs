//! Engine configuration with TOML file loading.
//!
//! All file fields are optional - missing values fall back to hardcoded
//! defaults. A missing config file is not an error.

use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Default maximum retained item count per zone during eviction.
pub const DEFAULT_SECTION_CAP: usize = 500;

/// Default item count for a single history page fetch.
pub const DEFAULT_PRELOAD_COUNT: usize = 100;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permissions, I/O).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// Corresponds to `~/.config/chatwin/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Maximum retained item count per zone.
    #[serde(default)]
    pub section_cap: Option<usize>,

    /// Item count per history page fetch.
    #[serde(default)]
    pub preload_count: Option<usize>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

impl ConfigFile {
    /// Parse a TOML document.
    ///
    /// # Errors
    /// [`ConfigError::ParseError`] on syntax errors or unknown keys;
    /// `path` is only used for error reporting.
    pub fn from_toml_str(contents: &str, path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::ParseError {
            path: path.into(),
            reason: e.to_string(),
        })
    }
}

/// Resolved engine configuration after applying defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryConfig {
    /// Maximum retained item count per zone during eviction (CAP).
    pub section_cap: usize,
    /// Item count for a single history page fetch; jump-to-item loads use
    /// twice this budget.
    pub preload_count: usize,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            section_cap: DEFAULT_SECTION_CAP,
            preload_count: DEFAULT_PRELOAD_COUNT,
            log_file_path: default_log_path(),
        }
    }
}

impl HistoryConfig {
    /// Apply a parsed config file on top of the defaults.
    pub fn resolve(file: Option<ConfigFile>) -> Self {
        let mut config = Self::default();
        if let Some(file) = file {
            if let Some(cap) = file.section_cap {
                config.section_cap = cap;
            }
            if let Some(count) = file.preload_count {
                config.preload_count = count;
            }
            if let Some(path) = file.log_file_path {
                config.log_file_path = path;
            }
        }
        config
    }
}

/// Resolve the default log file path.
///
/// Returns `~/.local/state/chatwin/chatwin.log` on Unix-like systems, or
/// the platform equivalent. Falls back to the current directory if no
/// state directory can be determined.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("chatwin").join("chatwin.log")
    } else {
        PathBuf::from("chatwin.log")
    }
}

/// Resolve the default config file path.
///
/// Returns `~/.config/chatwin/config.toml` on Unix, the platform
/// equivalent elsewhere, or `None` if no config directory exists.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("chatwin").join("config.toml"))
}

/// Load a configuration file from a specific path.
///
/// Returns `Ok(None)` if the file doesn't exist (not an error - use
/// defaults).
///
/// # Errors
/// Returns an error only if the file exists but cannot be read or parsed.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    ConfigFile::from_toml_str(&contents, path).map(Some)
}

// ===== Tests =====

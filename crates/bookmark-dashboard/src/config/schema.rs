//! TOML configuration schema types.
//!
//! Every section carries `#[serde(default)]`, so an empty or partial file
//! yields a complete [`Config`].

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config::xdg;

/// Storage key the dashboard state lives under.
pub const DEFAULT_STORAGE_KEY: &str = "twlf_portal_data_v1";

/// Subtitle shown for pages without a description.
pub const DEFAULT_EMPTY_DESCRIPTION: &str = "Manage your essential legal links and tools.";

/// Root configuration.
///
/// ```toml
/// [storage]
/// [display]
/// [logging]
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Where and how state is persisted.
    pub storage: StorageConfig,
    /// Rendering hand-off settings.
    pub display: DisplayConfig,
    /// Log output.
    pub logging: LoggingConfig,
}

/// State persistence settings.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct StorageConfig {
    /// State file. Empty means `$XDG_DATA_HOME/bookmark-dashboard/storage.json`.
    /// A leading `~` is expanded.
    pub path: String,
    /// Key the serialized state is stored under.
    pub key: String,
    /// Total bytes of keys and values the store accepts.
    pub quota_bytes: usize,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: String::new(),
            key: DEFAULT_STORAGE_KEY.to_string(),
            quota_bytes: local_store::DEFAULT_QUOTA_BYTES,
        }
    }
}

impl StorageConfig {
    /// The state file this config points at.
    pub fn resolved_path(&self) -> PathBuf {
        if self.path.is_empty() {
            xdg::default_storage_path()
        } else {
            xdg::expand_tilde(&self.path)
        }
    }
}

/// Display settings.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct DisplayConfig {
    /// Viewport width in CSS pixels, used to pick the width tier.
    pub viewport_width: u32,
    /// Subtitle for pages without a description.
    pub empty_description: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            viewport_width: 1280,
            empty_description: DEFAULT_EMPTY_DESCRIPTION.to_string(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Level used when `BMD_LOG` is unset.
    pub level: LogLevel,
    /// Log file. Empty means stderr.
    pub file: String,
}

/// Log verbosity levels (kebab-case in TOML).
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum LogLevel {
    /// Only errors.
    Error,
    /// Errors and warnings.
    Warn,
    /// Informational messages (default).
    #[default]
    Info,
    /// Debug-level detail.
    Debug,
    /// Full trace output.
    Trace,
}

impl LogLevel {
    /// Filter directive for this level.
    pub fn as_directive(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

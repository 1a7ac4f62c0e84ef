//! Logging initialization for the `bmd` binary.
//!
//! Configures the `tracing` subscriber with level filtering via the `BMD_LOG`
//! environment variable. Falls back to the `[logging] level` from the config
//! file when the variable is unset.
//!
//! # Usage
//!
//! ```bash
//! # Level from config (info by default)
//! bmd show
//!
//! # Debug level
//! BMD_LOG=debug bmd page add Research
//!
//! # Module-specific filtering
//! BMD_LOG=bookmark_dashboard::store=trace,warn bmd show
//! ```

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::schema::LoggingConfig;
use crate::config::xdg;

/// Environment variable holding filter directives.
pub const LOG_ENV_VAR: &str = "BMD_LOG";

/// Builds the filter: `BMD_LOG` when set and valid, else the configured level.
pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(config.level.as_directive()))
}

/// Log file from the config, `None` for stderr.
pub fn log_file_path(config: &LoggingConfig) -> Option<PathBuf> {
    if config.file.is_empty() {
        None
    } else {
        Some(xdg::expand_tilde(&config.file))
    }
}

/// Initialize the tracing subscriber.
///
/// Output goes to stderr unless `[logging] file` is set, in which case it is
/// appended to that file without ANSI colors.
///
/// Returns an error if the log file cannot be opened. Does nothing if a
/// global subscriber is already set.
pub fn init(config: &LoggingConfig) -> std::io::Result<()> {
    let filter = env_filter(config);

    match log_file_path(config) {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(&path)?;
            let _ = fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init();
        }
        None => {
            let _ = fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .try_init();
        }
    }
    Ok(())
}

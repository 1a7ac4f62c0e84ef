//! Where the dashboard keeps its files.
//!
//! Both locations honor the XDG variables on every platform and otherwise
//! fall back to the platform convention:
//!
//! | | Linux | macOS |
//! |---|---|---|
//! | config | `~/.config/bookmark-dashboard` | `~/Library/Application Support/bookmark-dashboard` |
//! | data | `~/.local/share/bookmark-dashboard` | `~/Library/Application Support/bookmark-dashboard` |

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const APP_NAME: &str = "bookmark-dashboard";

/// File name of the dashboard state store inside the data directory.
pub const STORAGE_FILE_NAME: &str = "storage.json";

const CONFIG_FILE_NAME: &str = "config.toml";

/// The two base directories the dashboard uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Base {
    Config,
    Data,
}

impl Base {
    fn env_var(self) -> &'static str {
        match self {
            Base::Config => "XDG_CONFIG_HOME",
            Base::Data => "XDG_DATA_HOME",
        }
    }

    fn platform_default(self) -> PathBuf {
        let (native, linux_relative) = match self {
            Base::Config => (dirs::config_dir(), ".config"),
            Base::Data => (dirs::data_dir(), ".local/share"),
        };
        if cfg!(target_os = "macos") {
            native.unwrap_or_else(|| home_dir().join("Library/Application Support"))
        } else {
            home_dir().join(linux_relative)
        }
    }

    /// `<base>/bookmark-dashboard`; an empty env var counts as unset.
    fn app_dir(self) -> PathBuf {
        let base = std::env::var_os(self.env_var())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| self.platform_default());
        base.join(APP_NAME)
    }
}

fn home_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
}

/// Path of `config.toml`.
pub fn config_path() -> PathBuf {
    Base::Config.app_dir().join(CONFIG_FILE_NAME)
}

/// State store location used when `[storage] path` is empty.
pub fn default_storage_path() -> PathBuf {
    Base::Data.app_dir().join(STORAGE_FILE_NAME)
}

/// Expands a leading `~` to the home directory. Other paths are returned as-is.
pub fn expand_tilde(path: &str) -> PathBuf {
    match path.strip_prefix('~') {
        Some("") => home_dir(),
        Some(rest) if rest.starts_with('/') => home_dir().join(&rest[1..]),
        _ => PathBuf::from(path),
    }
}

/// `mkdir -p` with mode 0700 on Unix.
pub fn ensure_dir(path: &Path) -> io::Result<()> {
    fs::create_dir_all(path)?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o700))?;
    }
    Ok(())
}

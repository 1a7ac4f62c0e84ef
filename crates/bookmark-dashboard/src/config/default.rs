//! The commented `config.toml` template written by `bmd config init`.

use std::fs;
use std::path::Path;

use crate::config::error::ConfigError;
use crate::config::xdg;

/// A commented TOML template with all default values.
///
/// Every value here must match `Config::default()` from `schema.rs`.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# Bookmark Dashboard Configuration
#
# This file was generated with the built-in defaults.
# Edit the values below to customize the dashboard.
#
# Location: $XDG_CONFIG_HOME/bookmark-dashboard/config.toml

# ==============================================================================
# Storage
# ==============================================================================

[storage]

# State file holding pages, widgets, bookmarks and settings.
# Empty string means $XDG_DATA_HOME/bookmark-dashboard/storage.json.
# Tilde (~) is expanded to the user's home directory.
path = ""

# Key the dashboard state is stored under inside the state file.
key = "twlf_portal_data_v1"

# Maximum total size of all stored keys and values, in bytes.
# Saves that would exceed it are dropped and logged.
quota_bytes = 5242880

# ==============================================================================
# Display
# ==============================================================================

[display]

# Viewport width in CSS pixels used by `bmd show`.
# Width tiers: narrow < 640, small >= 640, medium >= 768, wide >= 1024.
viewport_width = 1280

# Subtitle shown for pages that have no description.
empty_description = "Manage your essential legal links and tools."

# ==============================================================================
# Logging
# ==============================================================================

[logging]

# Verbosity when the BMD_LOG environment variable is unset.
# Options: "error", "warn", "info", "debug", "trace"
level = "info"

# Path to log file. Empty string means log to stderr.
file = ""
"#;

/// Writes the template to `path`.
///
/// An existing file is an error unless `force` is set, in which case it is
/// first renamed to `<name>.toml.backup` beside it.
pub fn create_default_config(path: &Path, force: bool) -> Result<(), ConfigError> {
    if path.exists() {
        if !force {
            return Err(ConfigError::AlreadyExists {
                path: path.to_path_buf(),
            });
        }
        let backup = path.with_extension("toml.backup");
        fs::rename(path, &backup).map_err(|source| ConfigError::WriteError {
            path: backup.clone(),
            source,
        })?;
        tracing::info!(backup = %backup.display(), "kept previous configuration");
    }

    let write_error = |source| ConfigError::WriteError {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        xdg::ensure_dir(parent).map_err(write_error)?;
    }
    fs::write(path, DEFAULT_CONFIG_TEMPLATE).map_err(write_error)?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600)).map_err(write_error)?;
    }
    tracing::info!(path = %path.display(), "wrote default configuration");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::Config;

    #[test]
    fn template_parses_to_the_defaults() {
        let from_template: Config =
            toml::from_str(DEFAULT_CONFIG_TEMPLATE).expect("template should parse");
        assert_eq!(from_template, Config::default());
    }

    #[test]
    fn template_documents_every_section() {
        for section in ["[storage]", "[display]", "[logging]"] {
            assert!(
                DEFAULT_CONFIG_TEMPLATE.contains(section),
                "missing {section} section"
            );
        }
    }

    #[test]
    fn creates_missing_parent_directories() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path = tmp.path().join("nested/dir/config.toml");
        create_default_config(&path, false).expect("create");
        let content = fs::read_to_string(&path).expect("read");
        assert_eq!(content, DEFAULT_CONFIG_TEMPLATE);
    }

    #[test]
    fn existing_file_needs_force() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path = tmp.path().join("config.toml");
        fs::write(&path, "# mine\n").expect("write");
        let err = create_default_config(&path, false).expect_err("should fail");
        assert!(matches!(err, ConfigError::AlreadyExists { .. }));
        assert_eq!(fs::read_to_string(&path).expect("read"), "# mine\n");
    }

    #[test]
    fn force_backs_up_the_previous_file() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path = tmp.path().join("config.toml");
        fs::write(&path, "# mine\n").expect("write");

        create_default_config(&path, true).expect("force");

        let backup = tmp.path().join("config.toml.backup");
        assert_eq!(fs::read_to_string(&backup).expect("backup"), "# mine\n");
        assert_eq!(
            fs::read_to_string(&path).expect("read"),
            DEFAULT_CONFIG_TEMPLATE
        );
    }

    #[cfg(unix)]
    #[test]
    fn written_file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;
        let tmp = tempfile::tempdir().expect("tempdir");
        let path = tmp.path().join("config.toml");
        create_default_config(&path, false).expect("create");
        let mode = fs::metadata(&path).expect("metadata").permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}

//! `config` subcommand handlers.

use std::path::{Path, PathBuf};

use bookmark_dashboard::config::{default, loader::ConfigLoader, xdg};
use bookmark_dashboard::error::Result;
use bookmark_dashboard::persistence::Persistence;

use crate::ConfigAction;

/// Runs a `config` action. `explicit` is the global `--config` path, if given.
pub(crate) fn run(action: ConfigAction, explicit: Option<&Path>) -> Result<()> {
    match action {
        ConfigAction::Init { force } => {
            let path = target(explicit);
            default::create_default_config(&path, force)?;
            println!("Created configuration at {}", path.display());
        }
        ConfigAction::Path => println!("{}", target(explicit).display()),
        ConfigAction::Validate => {
            let config = ConfigLoader::load(explicit)?;
            println!("Configuration is valid");
            println!("{config:#?}");
            print_storage_usage(&Persistence::from_config(&config.storage));
        }
    }
    Ok(())
}

fn target(explicit: Option<&Path>) -> PathBuf {
    explicit.map_or_else(xdg::config_path, Path::to_path_buf)
}

/// One line on the state file. An unreadable file is reported, not fatal.
fn print_storage_usage(persistence: &Persistence) {
    let store = persistence.store();
    let usage = store
        .keys()
        .and_then(|keys| store.used_bytes().map(|used| (keys, used)));
    match usage {
        Ok((keys, used)) => {
            let stored = if keys.iter().any(|k| k == persistence.key()) {
                "stored"
            } else {
                "not stored yet"
            };
            println!(
                "Storage: {} ({} keys, {} of {} bytes, dashboard {stored})",
                store.path().display(),
                keys.len(),
                used,
                store.quota(),
            );
        }
        Err(e) => println!("Storage: {} is unreadable: {e}", store.path().display()),
    }
}

//! Command implementations for the bmd CLI.
//!
//! This module contains all command handler functions, organized by domain:
//! - `config` - Configuration file commands (init, path, validate)
//! - `show` - Rendering the active page
//! - `edit` - Commands that change the dashboard
//! - `resolve` - Checking ids and values before dispatching

use bookmark_dashboard::config::loader::ConfigLoader;
use bookmark_dashboard::config::schema::{Config, LoggingConfig};
use bookmark_dashboard::error::{DashboardError, Result};
use bookmark_dashboard::logging;
use bookmark_dashboard::persistence::{spawn_autosave, Persistence};
use bookmark_dashboard::store::DashboardStore;

use crate::{Cli, Commands, PageAction};

pub(crate) mod config;
pub(crate) mod edit;
pub(crate) mod resolve;
pub(crate) mod show;

/// Runs one parsed command line.
pub(crate) fn run(cli: Cli) -> Result<()> {
    if let Commands::Config { action } = cli.command {
        init_logging(&LoggingConfig::default())?;
        return config::run(action, cli.config.as_deref());
    }

    let config = ConfigLoader::load(cli.config.as_deref())?;
    init_logging(&config.logging)?;

    let rt = tokio::runtime::Runtime::new().map_err(DashboardError::Runtime)?;
    rt.block_on(run_dashboard(cli.command, config))
}

fn init_logging(config: &LoggingConfig) -> Result<()> {
    logging::init(config).map_err(|source| DashboardError::LogFile {
        path: logging::log_file_path(config).unwrap_or_default(),
        source,
    })
}

async fn run_dashboard(command: Commands, config: Config) -> Result<()> {
    let persistence = Persistence::from_config(&config.storage);

    match command {
        Commands::Show { width, json } => {
            let state = persistence.load_or_seed();
            let width = width.unwrap_or(config.display.viewport_width);
            return show::run(&state, width, json, &config.display);
        }
        Commands::Page {
            action: PageAction::List,
        } => {
            show::list_pages(&persistence.load_or_seed());
            return Ok(());
        }
        Commands::Reset => {
            let removed = persistence.clear()?;
            tracing::info!(removed, "cleared stored dashboard");
            let state = persistence.load_or_seed();
            println!("Dashboard reset to defaults ({} pages)", state.pages.len());
            return Ok(());
        }
        _ => {}
    }

    let store = DashboardStore::new(persistence.load_or_seed());
    let autosave = spawn_autosave(&store, persistence);
    let result = edit::run(&store, command).await;

    // Autosave drains once the last store handle is gone.
    drop(store);
    if let Err(e) = autosave.await {
        tracing::error!(error = %e, "autosave task failed");
    }
    result
}

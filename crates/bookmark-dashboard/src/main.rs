//! Bookmark Dashboard - CLI entry point
//!
//! `bmd` loads the stored dashboard, applies one change through the store and
//! lets autosave write it back, or renders the current view.

use bookmark_dashboard::model::{AppIcon, GridItemSize, ViewStyle, WidgetSize};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;

/// Personalizable bookmark dashboard
#[derive(Parser, Debug)]
#[command(name = "bmd")]
#[command(version, about = "Personalizable bookmark dashboard")]
struct Cli {
    /// Configuration file (default: XDG config location)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the bmd CLI
#[derive(Subcommand, Debug)]
enum Commands {
    /// Render the active page
    Show {
        /// Viewport width in pixels (default from config)
        #[arg(long)]
        width: Option<u32>,
        /// Print the view as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage pages
    Page {
        #[command(subcommand)]
        action: PageAction,
    },

    /// Manage widgets on the active page
    Widget {
        #[command(subcommand)]
        action: WidgetAction,
    },

    /// Manage bookmarks in a widget on the active page
    Bookmark {
        #[command(subcommand)]
        action: BookmarkAction,
    },

    /// Change global appearance
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },

    /// Manage configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Delete the stored dashboard and start over with the first-run dashboard
    Reset,
}

/// Actions for the `page` subcommand.
#[derive(Subcommand, Debug)]
enum PageAction {
    /// List pages (active page marked with *)
    List,
    /// Add a page and make it active
    Add {
        /// Page title
        title: String,
    },
    /// Make a page active
    Select {
        /// Page id
        page_id: String,
    },
    /// Remove a page and its widgets
    Remove {
        /// Page id
        page_id: String,
    },
    /// Change a page's title or description
    Rename {
        /// Page id
        page_id: String,
        /// New title
        #[arg(long)]
        title: Option<String>,
        /// New description
        #[arg(long)]
        description: Option<String>,
    },
    /// Override a page's background
    Background {
        /// Page id
        page_id: String,
        #[command(flatten)]
        source: BackgroundArgs,
    },
}

/// Actions for the `widget` subcommand.
#[derive(Subcommand, Debug)]
enum WidgetAction {
    /// Add an empty widget
    Add {
        /// Widget title
        title: String,
    },
    /// Remove a widget and its bookmarks
    Remove {
        /// Widget id
        widget_id: String,
    },
    /// Configure a widget
    Set {
        /// Widget id
        widget_id: String,
        /// New title
        #[arg(long)]
        title: Option<String>,
        /// Footprint: small, medium, large, full
        #[arg(long)]
        size: Option<WidgetSize>,
        /// Bookmark presentation: list, detailed, grid
        #[arg(long)]
        view: Option<ViewStyle>,
        /// Grid tile density: small, medium, large
        #[arg(long)]
        density: Option<GridItemSize>,
        /// Panel color (#RRGGBB)
        #[arg(long)]
        color: Option<String>,
        /// Use the global widget accent again
        #[arg(long, conflicts_with = "color")]
        reset_color: bool,
    },
}

/// Actions for the `bookmark` subcommand.
#[derive(Subcommand, Debug)]
enum BookmarkAction {
    /// Add a bookmark
    Add {
        /// Widget id
        widget_id: String,
        /// Bookmark title
        title: String,
        /// Link target (https:// is added when missing)
        url: String,
        /// One-line description
        #[arg(long)]
        description: Option<String>,
        /// Icon URL
        #[arg(long)]
        icon_url: Option<String>,
    },
    /// Remove a bookmark
    Remove {
        /// Widget id
        widget_id: String,
        /// Bookmark id
        bookmark_id: String,
    },
    /// Swap a bookmark with its neighbor
    Move {
        /// Widget id
        widget_id: String,
        /// Current position (0-based)
        index: usize,
        /// Direction to move
        direction: MoveDirection,
    },
    /// Edit a bookmark
    Edit {
        /// Widget id
        widget_id: String,
        /// Bookmark id
        bookmark_id: String,
        /// New title
        #[arg(long)]
        title: Option<String>,
        /// New URL
        #[arg(long)]
        url: Option<String>,
        /// New description
        #[arg(long)]
        description: Option<String>,
        /// Remove the description
        #[arg(long, conflicts_with = "description")]
        clear_description: bool,
        /// New icon URL
        #[arg(long)]
        icon_url: Option<String>,
        /// Remove the custom icon
        #[arg(long, conflicts_with = "icon_url")]
        clear_icon: bool,
    },
    /// Upload a custom icon image (.png, .jpg, .jpeg, .ico)
    Icon {
        /// Widget id
        widget_id: String,
        /// Bookmark id
        bookmark_id: String,
        /// Image file
        file: PathBuf,
    },
}

/// Actions for the `settings` subcommand.
#[derive(Subcommand, Debug)]
enum SettingsAction {
    /// Rename the application
    Name {
        /// New name
        name: String,
    },
    /// Choose the application icon
    Icon {
        #[command(flatten)]
        source: IconArgs,
    },
    /// Choose the header style
    Header {
        #[command(flatten)]
        source: HeaderArgs,
    },
    /// Set the global widget accent
    Accent {
        #[command(flatten)]
        source: AccentArgs,
    },
    /// Set the global background
    Background {
        #[command(flatten)]
        source: BackgroundArgs,
    },
}

/// Actions for the `config` subcommand.
#[derive(Subcommand, Debug)]
enum ConfigAction {
    /// Create default configuration file
    Init {
        /// Overwrite existing configuration (creates backup)
        #[arg(long)]
        force: bool,
    },
    /// Show configuration file path
    Path,
    /// Validate configuration file
    Validate,
}

/// Where a background comes from.
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct BackgroundArgs {
    /// Preset name (e.g. "Midnight Blue") or class token
    #[arg(long)]
    preset: Option<String>,
    /// Flat color (#RRGGBB)
    #[arg(long)]
    color: Option<String>,
    /// Image file (.png, .jpg, .jpeg, .ico)
    #[arg(long)]
    image: Option<PathBuf>,
    /// Drop the overrides on this level
    #[arg(long)]
    inherit: bool,
}

/// Where the app icon comes from.
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct IconArgs {
    /// Built-in icon: layout, scale, briefcase, gavel, shield
    builtin: Option<AppIcon>,
    /// Image file (.png, .jpg, .jpeg, .ico)
    #[arg(long)]
    image: Option<PathBuf>,
    /// Drop the custom icon, showing the built-in one again
    #[arg(long)]
    clear: bool,
}

/// Header preset or color.
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct HeaderArgs {
    /// Preset name (e.g. "Glass Light") or class token
    #[arg(long)]
    preset: Option<String>,
    /// Custom color (#RRGGBB)
    #[arg(long)]
    color: Option<String>,
    /// Drop the custom color
    #[arg(long)]
    reset: bool,
}

/// Global widget accent.
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct AccentArgs {
    /// Panel color (#RRGGBB)
    color: Option<String>,
    /// Drop the global accent
    #[arg(long)]
    reset: bool,
}

/// Direction of a bookmark move.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum MoveDirection {
    /// Towards the top
    Up,
    /// Towards the bottom
    Down,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match commands::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            let mut source = std::error::Error::source(&e);
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
#[path = "cli_tests/cli.rs"]
mod cli_tests;

//! CLI argument parsing tests.

use crate::{
    BookmarkAction, Cli, Commands, ConfigAction, MoveDirection, PageAction, SettingsAction,
    WidgetAction,
};
use bookmark_dashboard::model::{AppIcon, GridItemSize, ViewStyle, WidgetSize};
use clap::{CommandFactory, Parser};
use std::path::PathBuf;

#[test]
fn verify_cli() {
    Cli::command().debug_assert();
}

#[test]
fn test_show_defaults() {
    let cli = Cli::try_parse_from(["bmd", "show"]).unwrap();
    match cli.command {
        Commands::Show { width, json } => {
            assert_eq!(width, None);
            assert!(!json);
        }
        _ => panic!("unexpected command variant"),
    }
    assert_eq!(cli.config, None);
}

#[test]
fn test_global_config_flag_after_subcommand() {
    let cli = Cli::try_parse_from(["bmd", "show", "--json", "--config", "/tmp/bmd.toml"]).unwrap();
    assert_eq!(cli.config, Some(PathBuf::from("/tmp/bmd.toml")));
}

#[test]
fn test_page_without_action_fails() {
    assert!(Cli::try_parse_from(["bmd", "page"]).is_err());
}

#[test]
fn test_page_rename_options() {
    let cli = Cli::try_parse_from(["bmd", "page", "rename", "home", "--title", "Start"]).unwrap();
    match cli.command {
        Commands::Page {
            action:
                PageAction::Rename {
                    page_id,
                    title,
                    description,
                },
        } => {
            assert_eq!(page_id, "home");
            assert_eq!(title.as_deref(), Some("Start"));
            assert_eq!(description, None);
        }
        _ => panic!("unexpected command variant"),
    }
}

#[test]
fn test_background_requires_exactly_one_source() {
    assert!(Cli::try_parse_from(["bmd", "page", "background", "home"]).is_err());
    assert!(Cli::try_parse_from([
        "bmd",
        "page",
        "background",
        "home",
        "--color",
        "#112233",
        "--inherit",
    ])
    .is_err());
    assert!(Cli::try_parse_from(["bmd", "settings", "background", "--inherit"]).is_ok());
}

#[test]
fn test_widget_set_parses_enums() {
    let cli = Cli::try_parse_from([
        "bmd", "widget", "set", "w1", "--size", "full", "--view", "grid", "--density", "small",
    ])
    .unwrap();
    match cli.command {
        Commands::Widget {
            action:
                WidgetAction::Set {
                    size,
                    view,
                    density,
                    reset_color,
                    ..
                },
        } => {
            assert_eq!(size, Some(WidgetSize::Full));
            assert_eq!(view, Some(ViewStyle::Grid));
            assert_eq!(density, Some(GridItemSize::Small));
            assert!(!reset_color);
        }
        _ => panic!("unexpected command variant"),
    }
}

#[test]
fn test_widget_set_rejects_unknown_size() {
    assert!(Cli::try_parse_from(["bmd", "widget", "set", "w1", "--size", "huge"]).is_err());
}

#[test]
fn test_widget_color_conflicts_with_reset() {
    let result = Cli::try_parse_from([
        "bmd",
        "widget",
        "set",
        "w1",
        "--color",
        "#000000",
        "--reset-color",
    ]);
    assert!(result.is_err());
}

#[test]
fn test_bookmark_move_direction() {
    let cli = Cli::try_parse_from(["bmd", "bookmark", "move", "w1", "2", "up"]).unwrap();
    match cli.command {
        Commands::Bookmark {
            action:
                BookmarkAction::Move {
                    widget_id,
                    index,
                    direction,
                },
        } => {
            assert_eq!(widget_id, "w1");
            assert_eq!(index, 2);
            assert_eq!(direction, MoveDirection::Up);
        }
        _ => panic!("unexpected command variant"),
    }
}

#[test]
fn test_bookmark_add_optional_fields() {
    let cli = Cli::try_parse_from([
        "bmd",
        "bookmark",
        "add",
        "w1",
        "Docs",
        "docs.rs",
        "--description",
        "Rust docs",
    ])
    .unwrap();
    match cli.command {
        Commands::Bookmark {
            action:
                BookmarkAction::Add {
                    title,
                    url,
                    description,
                    icon_url,
                    ..
                },
        } => {
            assert_eq!(title, "Docs");
            assert_eq!(url, "docs.rs");
            assert_eq!(description.as_deref(), Some("Rust docs"));
            assert_eq!(icon_url, None);
        }
        _ => panic!("unexpected command variant"),
    }
}

#[test]
fn test_settings_icon_builtin_or_image() {
    let cli = Cli::try_parse_from(["bmd", "settings", "icon", "gavel"]).unwrap();
    match cli.command {
        Commands::Settings {
            action: SettingsAction::Icon { source },
        } => {
            assert_eq!(source.builtin, Some(AppIcon::Gavel));
            assert_eq!(source.image, None);
        }
        _ => panic!("unexpected command variant"),
    }
    assert!(
        Cli::try_parse_from(["bmd", "settings", "icon", "gavel", "--image", "logo.png"]).is_err()
    );
}

#[test]
fn test_settings_accent_requires_color_or_reset() {
    assert!(Cli::try_parse_from(["bmd", "settings", "accent"]).is_err());
    assert!(Cli::try_parse_from(["bmd", "settings", "accent", "--reset"]).is_ok());
}

#[test]
fn test_config_init_force_flag() {
    let cli = Cli::try_parse_from(["bmd", "config", "init", "--force"]).unwrap();
    match cli.command {
        Commands::Config {
            action: ConfigAction::Init { force },
        } => assert!(force),
        _ => panic!("unexpected command variant"),
    }
}

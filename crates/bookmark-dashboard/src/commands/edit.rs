//! Commands that change the dashboard.
//!
//! Each command checks its ids against the current snapshot, dispatches one
//! action (or one upload) and prints what changed. Saving is left to the
//! autosave task the caller started.

use std::path::PathBuf;

use bookmark_dashboard::error::{DashboardError, Result};
use bookmark_dashboard::presets::{BACKGROUND_PRESETS, HEADER_PRESETS};
use bookmark_dashboard::state::{
    Action, BackgroundChoice, BookmarkChanges, BookmarkDraft, Direction, WidgetChanges,
};
use bookmark_dashboard::store::DashboardStore;
use bookmark_dashboard::upload::{spawn_upload, UploadTarget};

use super::resolve;
use crate::{
    AccentArgs, BackgroundArgs, BookmarkAction, Commands, HeaderArgs, IconArgs, MoveDirection,
    PageAction, SettingsAction, WidgetAction,
};

/// Runs one mutating command against `store`.
pub(crate) async fn run(store: &DashboardStore, command: Commands) -> Result<()> {
    match command {
        Commands::Page { action } => page(store, action).await,
        Commands::Widget { action } => widget(store, action).await,
        Commands::Bookmark { action } => bookmark(store, action).await,
        Commands::Settings { action } => settings(store, action).await,
        // Handled before a store exists.
        Commands::Show { .. } | Commands::Config { .. } | Commands::Reset => Ok(()),
    }
}

/// A background either dispatched directly or read from a file first.
enum BackgroundSource {
    Choice(BackgroundChoice),
    Upload(PathBuf),
}

fn background_source(args: BackgroundArgs) -> Result<BackgroundSource> {
    let BackgroundArgs {
        preset,
        color,
        image,
        inherit,
    } = args;
    if let Some(query) = preset {
        let token = resolve::preset(BACKGROUND_PRESETS, &query)?;
        return Ok(BackgroundSource::Choice(BackgroundChoice::Preset(token)));
    }
    if let Some(color) = color {
        return Ok(BackgroundSource::Choice(BackgroundChoice::Color(
            resolve::color(color)?,
        )));
    }
    if let Some(path) = image {
        return Ok(BackgroundSource::Upload(path));
    }
    if inherit {
        return Ok(BackgroundSource::Choice(BackgroundChoice::Inherit));
    }
    Err(DashboardError::InvalidInput(
        "choose one of --preset, --color, --image or --inherit".to_string(),
    ))
}

async fn upload(store: &DashboardStore, path: PathBuf, target: UploadTarget) -> Result<()> {
    spawn_upload(store, path, target).await??;
    Ok(())
}

async fn page(store: &DashboardStore, action: PageAction) -> Result<()> {
    let state = store.snapshot().await;
    match action {
        PageAction::List => super::show::list_pages(&state),
        PageAction::Add { title } => {
            let title = resolve::non_empty("title", title)?;
            let next = store.dispatch(Action::AddPage(title)).await;
            println!("Added page {}", next.active_page_id);
        }
        PageAction::Select { page_id } => {
            resolve::page(&state, &page_id)?;
            store.dispatch(Action::Navigate(page_id.clone())).await;
            println!("Active page is {page_id}");
        }
        PageAction::Remove { page_id } => {
            resolve::page(&state, &page_id)?;
            if state.pages.len() <= 1 {
                return Err(DashboardError::LastPage);
            }
            let next = store.dispatch(Action::DeletePage(page_id.clone())).await;
            println!("Removed page {page_id}");
            if let Some(active) = next.resolved_active_id() {
                println!("Active page is {active}");
            }
        }
        PageAction::Rename {
            page_id,
            title,
            description,
        } => {
            resolve::page(&state, &page_id)?;
            if title.is_none() && description.is_none() {
                return Err(DashboardError::InvalidInput(
                    "nothing to change: pass --title or --description".to_string(),
                ));
            }
            let title = title.map(|t| resolve::non_empty("title", t)).transpose()?;
            store
                .dispatch(Action::UpdatePageDetails {
                    page_id: page_id.clone(),
                    title,
                    description,
                })
                .await;
            println!("Updated page {page_id}");
        }
        PageAction::Background { page_id, source } => {
            resolve::page(&state, &page_id)?;
            match background_source(source)? {
                BackgroundSource::Choice(choice) => {
                    store
                        .dispatch(Action::SetPageBackground {
                            page_id: page_id.clone(),
                            choice,
                        })
                        .await;
                }
                BackgroundSource::Upload(path) => {
                    upload(store, path, UploadTarget::PageBackground(page_id.clone())).await?;
                }
            }
            println!("Updated background of page {page_id}");
        }
    }
    Ok(())
}

async fn widget(store: &DashboardStore, action: WidgetAction) -> Result<()> {
    let state = store.snapshot().await;
    match action {
        WidgetAction::Add { title } => {
            let title = resolve::non_empty("title", title)?;
            let next = store.dispatch(Action::AddWidget(title)).await;
            let id = next
                .active_page()
                .and_then(|p| p.widgets.last())
                .map(|w| w.id.as_str())
                .unwrap_or_default();
            println!("Added widget {id}");
        }
        WidgetAction::Remove { widget_id } => {
            resolve::widget(&state, &widget_id)?;
            store.dispatch(Action::DeleteWidget(widget_id.clone())).await;
            println!("Removed widget {widget_id}");
        }
        WidgetAction::Set {
            widget_id,
            title,
            size,
            view,
            density,
            color,
            reset_color,
        } => {
            resolve::widget(&state, &widget_id)?;
            let custom_background_color = match (color, reset_color) {
                (Some(color), _) => Some(Some(resolve::color(color)?)),
                (None, true) => Some(None),
                (None, false) => None,
            };
            let changes = WidgetChanges {
                title: title.map(|t| resolve::non_empty("title", t)).transpose()?,
                size,
                view_style: view,
                grid_item_size: density,
                custom_background_color,
            };
            if changes == WidgetChanges::default() {
                return Err(DashboardError::InvalidInput(
                    "nothing to change: pass at least one option".to_string(),
                ));
            }
            store
                .dispatch(Action::ConfigureWidget {
                    widget_id: widget_id.clone(),
                    changes,
                })
                .await;
            println!("Updated widget {widget_id}");
        }
    }
    Ok(())
}

async fn bookmark(store: &DashboardStore, action: BookmarkAction) -> Result<()> {
    let state = store.snapshot().await;
    match action {
        BookmarkAction::Add {
            widget_id,
            title,
            url,
            description,
            icon_url,
        } => {
            resolve::widget(&state, &widget_id)?;
            let draft = BookmarkDraft {
                title: resolve::non_empty("title", title)?,
                url: resolve::non_empty("url", url)?,
                description,
                icon_url,
            };
            let next = store
                .dispatch(Action::AddBookmark {
                    widget_id: widget_id.clone(),
                    draft,
                })
                .await;
            let added = next
                .active_page()
                .and_then(|p| p.widget(&widget_id))
                .and_then(|w| w.bookmarks.last());
            if let Some(b) = added {
                println!("Added bookmark {} ({})", b.id, b.url);
            }
        }
        BookmarkAction::Remove {
            widget_id,
            bookmark_id,
        } => {
            resolve::bookmark(&state, &widget_id, &bookmark_id)?;
            store
                .dispatch(Action::DeleteBookmark {
                    widget_id,
                    bookmark_id: bookmark_id.clone(),
                })
                .await;
            println!("Removed bookmark {bookmark_id}");
        }
        BookmarkAction::Move {
            widget_id,
            index,
            direction,
        } => {
            let len = resolve::widget(&state, &widget_id)?.bookmarks.len();
            let (direction, target) = match direction {
                MoveDirection::Up => (Direction::Up, index.checked_sub(1)),
                MoveDirection::Down => (Direction::Down, index.checked_add(1)),
            };
            match target {
                Some(target) if index < len && target < len => {
                    store
                        .dispatch(Action::MoveBookmark {
                            widget_id,
                            index,
                            direction,
                        })
                        .await;
                    println!("Moved bookmark from {index} to {target}");
                }
                _ => {
                    return Err(DashboardError::InvalidInput(format!(
                        "cannot move bookmark {index} {} in a list of {len}",
                        if direction == Direction::Up { "up" } else { "down" }
                    )));
                }
            }
        }
        BookmarkAction::Edit {
            widget_id,
            bookmark_id,
            title,
            url,
            description,
            clear_description,
            icon_url,
            clear_icon,
        } => {
            resolve::bookmark(&state, &widget_id, &bookmark_id)?;
            let changes = BookmarkChanges {
                title: title.map(|t| resolve::non_empty("title", t)).transpose()?,
                url: url.map(|u| resolve::non_empty("url", u)).transpose()?,
                description: if clear_description {
                    Some(None)
                } else {
                    description.map(Some)
                },
                icon_url: if clear_icon { Some(None) } else { icon_url.map(Some) },
            };
            if changes == BookmarkChanges::default() {
                return Err(DashboardError::InvalidInput(
                    "nothing to change: pass at least one option".to_string(),
                ));
            }
            store
                .dispatch(Action::UpdateBookmark {
                    widget_id,
                    bookmark_id: bookmark_id.clone(),
                    changes,
                })
                .await;
            println!("Updated bookmark {bookmark_id}");
        }
        BookmarkAction::Icon {
            widget_id,
            bookmark_id,
            file,
        } => {
            resolve::bookmark(&state, &widget_id, &bookmark_id)?;
            let target = UploadTarget::BookmarkIcon {
                widget_id,
                bookmark_id: bookmark_id.clone(),
            };
            upload(store, file, target).await?;
            println!("Updated icon of bookmark {bookmark_id}");
        }
    }
    Ok(())
}

async fn settings(store: &DashboardStore, action: SettingsAction) -> Result<()> {
    match action {
        SettingsAction::Name { name } => {
            let name = resolve::non_empty("name", name)?;
            store.dispatch(Action::SetAppName(name.clone())).await;
            println!("App name is {name:?}");
        }
        SettingsAction::Icon {
            source: IconArgs {
                builtin,
                image,
                clear,
            },
        } => {
            if let Some(icon) = builtin {
                store.dispatch(Action::SelectAppIcon(icon)).await;
                println!("App icon is {icon}");
            } else if let Some(path) = image {
                upload(store, path, UploadTarget::AppIcon).await?;
                println!("Custom app icon uploaded");
            } else if clear {
                store.dispatch(Action::ClearCustomAppIcon).await;
                println!("Custom app icon removed");
            }
        }
        SettingsAction::Header {
            source: HeaderArgs {
                preset,
                color,
                reset,
            },
        } => {
            if let Some(query) = preset {
                let token = resolve::preset(HEADER_PRESETS, &query)?;
                store.dispatch(Action::SetHeaderPreset(token)).await;
            } else if let Some(color) = color {
                store
                    .dispatch(Action::SetHeaderColor(resolve::color(color)?))
                    .await;
            } else if reset {
                store.dispatch(Action::ResetHeaderColor).await;
            }
            println!("Header updated");
        }
        SettingsAction::Accent {
            source: AccentArgs { color, reset },
        } => {
            let accent = match color {
                Some(color) => Some(resolve::color(color)?),
                None if reset => None,
                None => {
                    return Err(DashboardError::InvalidInput(
                        "pass a color or --reset".to_string(),
                    ))
                }
            };
            store.dispatch(Action::SetWidgetAccent(accent)).await;
            println!("Widget accent updated");
        }
        SettingsAction::Background { source } => {
            match background_source(source)? {
                BackgroundSource::Choice(choice) => {
                    store.dispatch(Action::SetGlobalBackground(choice)).await;
                }
                BackgroundSource::Upload(path) => {
                    upload(store, path, UploadTarget::GlobalBackground).await?;
                }
            }
            println!("Global background updated");
        }
    }
    Ok(())
}

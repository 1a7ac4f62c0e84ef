//! State transitions for the dashboard.
//!
//! Every mutation is an [`Action`] reduced against the current [`AppState`]
//! into a new one. The reducer never fails: references to unknown pages,
//! widgets or bookmarks and out-of-range moves leave the state unchanged.
//!
//! Widget and bookmark actions address the active page, resolved with the
//! same first-page fallback the view uses.

use crate::model::{AppIcon, AppSettings, AppState, GridItemSize, ViewStyle, Widget, WidgetSize};

mod page;
mod settings;
mod widget;


/// Where a page or the global background comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackgroundChoice {
    /// A preset token. Clears custom color and image.
    Preset(String),
    /// A flat `#RRGGBB` color. Clears the custom image (and the page preset).
    Color(String),
    /// Embedded image data. Clears the custom color.
    Image(String),
    /// Drop every override on this level.
    Inherit,
}

/// Direction of a bookmark move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards index 0.
    Up,
    /// Towards the end of the list.
    Down,
}

/// Partial widget configuration. `None` leaves a field as is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WidgetChanges {
    /// New title.
    pub title: Option<String>,
    /// New footprint.
    pub size: Option<WidgetSize>,
    /// New bookmark presentation.
    pub view_style: Option<ViewStyle>,
    /// New grid density.
    pub grid_item_size: Option<GridItemSize>,
    /// `Some(Some(c))` sets the panel color, `Some(None)` resets it to the
    /// global accent.
    pub custom_background_color: Option<Option<String>>,
}

/// Input for a new bookmark.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookmarkDraft {
    /// Required title.
    pub title: String,
    /// Required URL; `https://` is prepended unless it starts with `http`.
    pub url: String,
    /// Optional description.
    pub description: Option<String>,
    /// Optional custom icon.
    pub icon_url: Option<String>,
}

/// Partial bookmark edit. `None` leaves a field as is; for the optional
/// fields `Some(None)` clears them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookmarkChanges {
    /// New title.
    pub title: Option<String>,
    /// New URL, normalized like [`BookmarkDraft::url`].
    pub url: Option<String>,
    /// New description.
    pub description: Option<Option<String>>,
    /// New custom icon.
    pub icon_url: Option<Option<String>>,
}

/// A single state transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Make a page active. Unknown ids are stored as is.
    Navigate(String),
    /// Append a page with the given title and make it active.
    AddPage(String),
    /// Remove a page and its widgets. The last page cannot be removed.
    DeletePage(String),
    /// Edit a page's title and/or description.
    UpdatePageDetails {
        /// Target page.
        page_id: String,
        /// New title.
        title: Option<String>,
        /// New description.
        description: Option<String>,
    },
    /// Override a page's background.
    SetPageBackground {
        /// Target page.
        page_id: String,
        /// New background source.
        choice: BackgroundChoice,
    },
    /// Replace the whole settings object.
    UpdateSettings(AppSettings),
    /// Rename the application.
    SetAppName(String),
    /// Choose a built-in icon, dropping any custom one.
    SelectAppIcon(AppIcon),
    /// Use embedded image data as the app icon.
    SetCustomAppIcon(String),
    /// Go back to the built-in icon.
    ClearCustomAppIcon,
    /// Change the global background.
    SetGlobalBackground(BackgroundChoice),
    /// Choose a header preset, dropping any custom header color.
    SetHeaderPreset(String),
    /// Use a custom header color, dropping the preset token.
    SetHeaderColor(String),
    /// Drop the custom header color.
    ResetHeaderColor,
    /// Set or clear the global widget accent.
    SetWidgetAccent(Option<String>),
    /// Append an empty widget to the active page.
    AddWidget(String),
    /// Replace a widget on the active page by id.
    UpdateWidget(Widget),
    /// Edit a widget on the active page.
    ConfigureWidget {
        /// Target widget.
        widget_id: String,
        /// Fields to change.
        changes: WidgetChanges,
    },
    /// Remove a widget (and its bookmarks) from the active page.
    DeleteWidget(String),
    /// Append a bookmark to a widget on the active page.
    AddBookmark {
        /// Target widget.
        widget_id: String,
        /// New bookmark.
        draft: BookmarkDraft,
    },
    /// Edit a bookmark.
    UpdateBookmark {
        /// Owning widget.
        widget_id: String,
        /// Target bookmark.
        bookmark_id: String,
        /// Fields to change.
        changes: BookmarkChanges,
    },
    /// Remove a bookmark.
    DeleteBookmark {
        /// Owning widget.
        widget_id: String,
        /// Target bookmark.
        bookmark_id: String,
    },
    /// Swap the bookmark at `index` with its neighbor.
    MoveBookmark {
        /// Owning widget.
        widget_id: String,
        /// Current position.
        index: usize,
        /// Which neighbor.
        direction: Direction,
    },
}

impl Action {
    /// Short name for log lines.
    pub fn name(&self) -> &'static str {
        match self {
            Action::Navigate(_) => "navigate",
            Action::AddPage(_) => "add_page",
            Action::DeletePage(_) => "delete_page",
            Action::UpdatePageDetails { .. } => "update_page_details",
            Action::SetPageBackground { .. } => "set_page_background",
            Action::UpdateSettings(_) => "update_settings",
            Action::SetAppName(_) => "set_app_name",
            Action::SelectAppIcon(_) => "select_app_icon",
            Action::SetCustomAppIcon(_) => "set_custom_app_icon",
            Action::ClearCustomAppIcon => "clear_custom_app_icon",
            Action::SetGlobalBackground(_) => "set_global_background",
            Action::SetHeaderPreset(_) => "set_header_preset",
            Action::SetHeaderColor(_) => "set_header_color",
            Action::ResetHeaderColor => "reset_header_color",
            Action::SetWidgetAccent(_) => "set_widget_accent",
            Action::AddWidget(_) => "add_widget",
            Action::UpdateWidget(_) => "update_widget",
            Action::ConfigureWidget { .. } => "configure_widget",
            Action::DeleteWidget(_) => "delete_widget",
            Action::AddBookmark { .. } => "add_bookmark",
            Action::UpdateBookmark { .. } => "update_bookmark",
            Action::DeleteBookmark { .. } => "delete_bookmark",
            Action::MoveBookmark { .. } => "move_bookmark",
        }
    }
}

/// Computes the state that follows `state` under `action`.
///
/// The input is left untouched; callers swap the result in.
pub fn reduce(state: &AppState, action: Action) -> AppState {
    let mut next = state.clone();
    next.apply(action);
    next
}

impl AppState {
    /// Applies `action` in place.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Navigate(page_id) => self.active_page_id = page_id,
            Action::AddPage(title) => page::add(self, title),
            Action::DeletePage(page_id) => page::delete(self, &page_id),
            Action::UpdatePageDetails {
                page_id,
                title,
                description,
            } => page::update_details(self, &page_id, title, description),
            Action::SetPageBackground { page_id, choice } => {
                page::set_background(self, &page_id, choice)
            }
            Action::UpdateSettings(new) => self.settings = new,
            Action::SetAppName(name) => self.settings.app_name = name,
            Action::SelectAppIcon(icon) => settings::select_icon(&mut self.settings, icon),
            Action::SetCustomAppIcon(data) => self.settings.custom_app_icon_data = Some(data),
            Action::ClearCustomAppIcon => self.settings.custom_app_icon_data = None,
            Action::SetGlobalBackground(choice) => {
                settings::set_background(&mut self.settings, choice)
            }
            Action::SetHeaderPreset(token) => settings::set_header_preset(&mut self.settings, token),
            Action::SetHeaderColor(color) => settings::set_header_color(&mut self.settings, color),
            Action::ResetHeaderColor => self.settings.custom_header_color = None,
            Action::SetWidgetAccent(color) => {
                self.settings.custom_widget_color = color.filter(|c| !c.is_empty())
            }
            Action::AddWidget(title) => widget::add(self, title),
            Action::UpdateWidget(updated) => widget::replace(self, updated),
            Action::ConfigureWidget { widget_id, changes } => {
                widget::configure(self, &widget_id, changes)
            }
            Action::DeleteWidget(widget_id) => widget::delete(self, &widget_id),
            Action::AddBookmark { widget_id, draft } => {
                widget::add_bookmark(self, &widget_id, draft)
            }
            Action::UpdateBookmark {
                widget_id,
                bookmark_id,
                changes,
            } => widget::update_bookmark(self, &widget_id, &bookmark_id, changes),
            Action::DeleteBookmark {
                widget_id,
                bookmark_id,
            } => widget::delete_bookmark(self, &widget_id, &bookmark_id),
            Action::MoveBookmark {
                widget_id,
                index,
                direction,
            } => widget::move_bookmark(self, &widget_id, index, direction),
        }
    }

    /// Mutable access to the active page (with first-page fallback).
    pub(crate) fn active_page_mut(&mut self) -> Option<&mut crate::model::Page> {
        let id = self.resolved_active_id()?.to_string();
        self.pages.iter_mut().find(|p| p.id == id)
    }
}

/// Prepends `https://` unless the URL already starts with `http`.
///
/// Matches any `http` prefix, so `http://`, `https://` and oddities like
/// `httpfoo` are kept as typed.
pub fn normalize_url(url: &str) -> String {
    if url.starts_with("http") {
        url.to_string()
    } else {
        format!("https://{url}")
    }
}

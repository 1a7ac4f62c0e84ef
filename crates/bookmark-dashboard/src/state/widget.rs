use super::{normalize_url, BookmarkChanges, BookmarkDraft, Direction, WidgetChanges};
use crate::id::generate_id;
use crate::model::{AppState, Bookmark, Widget};

fn widget_mut<'a>(state: &'a mut AppState, widget_id: &str) -> Option<&'a mut Widget> {
    state
        .active_page_mut()?
        .widgets
        .iter_mut()
        .find(|w| w.id == widget_id)
}

pub(super) fn add(state: &mut AppState, title: String) {
    if title.is_empty() {
        return;
    }
    if let Some(page) = state.active_page_mut() {
        page.widgets.push(Widget::new(generate_id(), title));
    }
}

pub(super) fn replace(state: &mut AppState, updated: Widget) {
    if let Some(widget) = widget_mut(state, &updated.id) {
        *widget = updated;
    }
}

pub(super) fn configure(state: &mut AppState, widget_id: &str, changes: WidgetChanges) {
    let Some(widget) = widget_mut(state, widget_id) else {
        return;
    };
    if let Some(title) = changes.title {
        widget.title = title;
    }
    if let Some(size) = changes.size {
        widget.size = size;
    }
    if let Some(view_style) = changes.view_style {
        widget.view_style = view_style;
    }
    if let Some(density) = changes.grid_item_size {
        widget.grid_item_size = Some(density);
    }
    if let Some(color) = changes.custom_background_color {
        widget.custom_background_color = color.filter(|c| !c.is_empty());
    }
}

pub(super) fn delete(state: &mut AppState, widget_id: &str) {
    if let Some(page) = state.active_page_mut() {
        page.widgets.retain(|w| w.id != widget_id);
    }
}

pub(super) fn add_bookmark(state: &mut AppState, widget_id: &str, draft: BookmarkDraft) {
    if draft.title.is_empty() || draft.url.is_empty() {
        return;
    }
    let Some(widget) = widget_mut(state, widget_id) else {
        return;
    };
    widget.bookmarks.push(Bookmark {
        id: generate_id(),
        title: draft.title,
        url: normalize_url(&draft.url),
        description: draft.description.filter(|d| !d.is_empty()),
        icon_url: draft.icon_url.filter(|i| !i.is_empty()),
    });
}

pub(super) fn update_bookmark(
    state: &mut AppState,
    widget_id: &str,
    bookmark_id: &str,
    changes: BookmarkChanges,
) {
    let Some(bookmark) = widget_mut(state, widget_id)
        .and_then(|w| w.bookmarks.iter_mut().find(|b| b.id == bookmark_id))
    else {
        return;
    };
    if let Some(title) = changes.title {
        bookmark.title = title;
    }
    if let Some(url) = changes.url.filter(|u| !u.is_empty()) {
        bookmark.url = normalize_url(&url);
    }
    if let Some(description) = changes.description {
        bookmark.description = description.filter(|d| !d.is_empty());
    }
    if let Some(icon_url) = changes.icon_url {
        bookmark.icon_url = icon_url.filter(|i| !i.is_empty());
    }
}

pub(super) fn delete_bookmark(state: &mut AppState, widget_id: &str, bookmark_id: &str) {
    if let Some(widget) = widget_mut(state, widget_id) {
        widget.bookmarks.retain(|b| b.id != bookmark_id);
    }
}

pub(super) fn move_bookmark(
    state: &mut AppState,
    widget_id: &str,
    index: usize,
    direction: Direction,
) {
    let Some(widget) = widget_mut(state, widget_id) else {
        return;
    };
    let target = match direction {
        Direction::Up => index.checked_sub(1),
        Direction::Down => index.checked_add(1),
    };
    match target {
        Some(target) if index < widget.bookmarks.len() && target < widget.bookmarks.len() => {
            widget.bookmarks.swap(index, target);
        }
        _ => {}
    }
}

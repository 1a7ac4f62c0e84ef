//! Checks ids and values against the current state before dispatching.
//!
//! The reducer ignores anything it cannot resolve; these turn the same cases
//! into errors the user sees.

use bookmark_dashboard::error::{DashboardError, Result};
use bookmark_dashboard::model::{AppState, Page, Widget};
use bookmark_dashboard::presets::{find_preset, Preset};
use bookmark_dashboard::style::is_hex_color;

/// The page with `page_id`.
pub(crate) fn page<'a>(state: &'a AppState, page_id: &str) -> Result<&'a Page> {
    state
        .page(page_id)
        .ok_or_else(|| DashboardError::UnknownPage(page_id.to_string()))
}

/// The widget with `widget_id` on the active page.
pub(crate) fn widget<'a>(state: &'a AppState, widget_id: &str) -> Result<&'a Widget> {
    state
        .active_page()
        .and_then(|p| p.widget(widget_id))
        .ok_or_else(|| DashboardError::UnknownWidget(widget_id.to_string()))
}

/// Fails unless the widget on the active page holds `bookmark_id`.
pub(crate) fn bookmark(state: &AppState, widget_id: &str, bookmark_id: &str) -> Result<()> {
    match widget(state, widget_id)?.bookmark(bookmark_id) {
        Some(_) => Ok(()),
        None => Err(DashboardError::UnknownBookmark {
            widget_id: widget_id.to_string(),
            bookmark_id: bookmark_id.to_string(),
        }),
    }
}

/// Fails on an empty (or all-whitespace) value.
pub(crate) fn non_empty(field: &str, value: String) -> Result<String> {
    if value.trim().is_empty() {
        Err(DashboardError::InvalidInput(format!("{field} must not be empty")))
    } else {
        Ok(value)
    }
}

/// Fails unless `value` is `#RRGGBB`.
pub(crate) fn color(value: String) -> Result<String> {
    if is_hex_color(&value) {
        Ok(value)
    } else {
        Err(DashboardError::InvalidInput(format!(
            "expected a #RRGGBB color, got {value:?}"
        )))
    }
}

/// Token of the preset named (or equal to) `query`.
pub(crate) fn preset(presets: &[Preset], query: &str) -> Result<String> {
    find_preset(presets, query)
        .map(|p| p.value.to_string())
        .ok_or_else(|| {
            let names: Vec<&str> = presets.iter().map(|p| p.name).collect();
            DashboardError::InvalidInput(format!(
                "unknown preset {query:?} (available: {})",
                names.join(", ")
            ))
        })
}

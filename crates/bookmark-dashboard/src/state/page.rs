use tracing::warn;

use super::BackgroundChoice;
use crate::id::generate_id;
use crate::model::{AppState, Page};
use crate::presets::NEW_PAGE_DESCRIPTION;

pub(super) fn add(state: &mut AppState, title: String) {
    if title.is_empty() {
        return;
    }
    let page = Page::new(generate_id(), title, Some(NEW_PAGE_DESCRIPTION.to_string()));
    state.active_page_id = page.id.clone();
    state.pages.push(page);
}

pub(super) fn delete(state: &mut AppState, page_id: &str) {
    if state.pages.len() <= 1 {
        warn!(page_id, "refusing to delete the last page");
        return;
    }
    let before = state.pages.len();
    state.pages.retain(|p| p.id != page_id);
    if state.pages.len() == before {
        return;
    }
    if state.active_page_id == page_id {
        if let Some(first) = state.pages.first() {
            state.active_page_id = first.id.clone();
        }
    }
}

pub(super) fn update_details(
    state: &mut AppState,
    page_id: &str,
    title: Option<String>,
    description: Option<String>,
) {
    let Some(page) = state.pages.iter_mut().find(|p| p.id == page_id) else {
        return;
    };
    if let Some(title) = title {
        page.title = title;
    }
    if let Some(description) = description {
        page.description = Some(description);
    }
}

pub(super) fn set_background(state: &mut AppState, page_id: &str, choice: BackgroundChoice) {
    let Some(page) = state.pages.iter_mut().find(|p| p.id == page_id) else {
        return;
    };
    match choice {
        BackgroundChoice::Preset(token) => {
            page.background = Some(token);
            page.custom_background_color = None;
            page.custom_background_image_data = None;
        }
        BackgroundChoice::Color(color) => {
            page.custom_background_color = Some(color);
            page.custom_background_image_data = None;
            page.background = None;
        }
        BackgroundChoice::Image(data) => {
            page.custom_background_image_data = Some(data);
            page.custom_background_color = None;
        }
        BackgroundChoice::Inherit => {
            page.background = None;
            page.custom_background_color = None;
            page.custom_background_image_data = None;
        }
    }
}

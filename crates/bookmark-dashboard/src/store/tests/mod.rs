//! Tests for the DashboardStore module.
//!
//! - `dispatch`: committing actions and snapshots
//! - `subscriber`: broadcast channel and notifications


use super::DashboardStore;
use crate::model::{AppSettings, AppState, Page};

/// A store with two empty pages, `a` active.
pub(super) fn two_page_store() -> DashboardStore {
    DashboardStore::new(AppState {
        pages: vec![
            Page::new("a".to_string(), "A".to_string(), None),
            Page::new("b".to_string(), "B".to_string(), None),
        ],
        active_page_id: "a".to_string(),
        settings: AppSettings::default(),
    })
}

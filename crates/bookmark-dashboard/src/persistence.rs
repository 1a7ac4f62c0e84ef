//! Loading and saving the dashboard through [`LocalStore`].
//!
//! Both directions are boundary functions that never fail towards the
//! caller: a record that cannot be read or parsed yields the first-run
//! dashboard, and a failed write is logged and dropped.

use local_store::LocalStore;
use serde::Deserialize;
use tokio::sync::broadcast::error::RecvError;
use tokio::task::JoinHandle;
use tracing::{debug, error, warn};

use crate::config::schema::StorageConfig;
use crate::model::{AppSettings, AppState, Page};
use crate::presets::{default_settings, initial_state};
use crate::store::DashboardStore;

/// Stored record shape. `settings` may be missing (or `null`) in records
/// written before settings existed.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredState {
    pages: Vec<Page>,
    #[serde(default)]
    active_page_id: String,
    #[serde(default)]
    settings: Option<AppSettings>,
}

impl From<StoredState> for AppState {
    fn from(stored: StoredState) -> Self {
        AppState {
            pages: stored.pages,
            active_page_id: stored.active_page_id,
            settings: stored.settings.unwrap_or_else(default_settings),
        }
    }
}

/// Parses a stored record, filling default settings when absent.
pub fn parse_record(raw: &str) -> Result<AppState, serde_json::Error> {
    serde_json::from_str::<StoredState>(raw).map(AppState::from)
}

/// Dashboard state persisted under one key of a [`LocalStore`].
#[derive(Debug, Clone)]
pub struct Persistence {
    store: LocalStore,
    key: String,
}

impl Persistence {
    /// Persists under `key` in `store`.
    pub fn new(store: LocalStore, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Builds from the `[storage]` config section.
    pub fn from_config(config: &StorageConfig) -> Self {
        let store = LocalStore::open(config.resolved_path()).with_quota(config.quota_bytes);
        Self::new(store, config.key.clone())
    }

    /// Underlying store.
    pub fn store(&self) -> &LocalStore {
        &self.store
    }

    /// Key the state is stored under.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Loads the stored dashboard, or the first-run dashboard when nothing
    /// usable is stored.
    pub fn load(&self) -> AppState {
        match self.store.get_item(&self.key) {
            Ok(Some(raw)) => match parse_record(&raw) {
                Ok(state) => {
                    debug!(key = %self.key, pages = state.pages.len(), "loaded stored state");
                    return state;
                }
                Err(e) => error!(key = %self.key, error = %e, "Failed to parse stored state"),
            },
            Ok(None) => debug!(key = %self.key, "no stored state, using first-run dashboard"),
            Err(e) => error!(key = %self.key, error = %e, "Failed to load state"),
        }
        initial_state()
    }

    /// Like [`load`](Self::load), but writes the first-run dashboard back
    /// when nothing was stored yet, so its generated ids stay stable across
    /// runs. An unreadable or corrupt record is left in place.
    pub fn load_or_seed(&self) -> AppState {
        match self.store.get_item(&self.key) {
            Ok(None) => {
                let state = initial_state();
                self.save(&state);
                state
            }
            _ => self.load(),
        }
    }

    /// Saves `state`. Failures (quota exceeded, I/O) are logged and dropped.
    pub fn save(&self, state: &AppState) {
        let raw = match serde_json::to_string(state) {
            Ok(raw) => raw,
            Err(e) => {
                error!(error = %e, "Failed to serialize state");
                return;
            }
        };
        match self.store.set_item(&self.key, &raw) {
            Ok(()) => debug!(key = %self.key, bytes = raw.len(), "state saved"),
            Err(e) => error!(key = %self.key, error = %e, "Failed to save state"),
        }
    }

    /// Removes the stored state. Returns whether anything was stored.
    pub fn clear(&self) -> local_store::Result<bool> {
        self.store.remove_item(&self.key)
    }
}

/// Saves every state committed to `store` until all store handles are gone.
///
/// Await the returned handle after dropping the last store handle to be sure
/// the final state reached disk.
pub fn spawn_autosave(store: &DashboardStore, persistence: Persistence) -> JoinHandle<()> {
    let mut rx = store.subscribe();
    debug!(subscribers = store.subscriber_count(), "autosave subscribed");
    tokio::spawn(async move {
        loop {
            match rx.recv().await {
                Ok(state) => {
                    let persistence = persistence.clone();
                    let saved = tokio::task::spawn_blocking(move || persistence.save(&state)).await;
                    if let Err(e) = saved {
                        error!(error = %e, "autosave task failed");
                    }
                }
                Err(RecvError::Lagged(skipped)) => {
                    warn!(skipped, "autosave fell behind, skipping to newer states");
                }
                Err(RecvError::Closed) => break,
            }
        }
        debug!("autosave stopped");
    })
}

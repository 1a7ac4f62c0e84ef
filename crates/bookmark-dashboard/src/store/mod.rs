//! Dashboard state store.
//!
//! Holds the committed [`AppState`] and is the single writer for it. Every
//! mutation goes through [`DashboardStore::dispatch`], which reduces the
//! current snapshot into a new one, swaps it in and broadcasts it. Rendering
//! and persistence both listen to the same broadcast, so whatever they see is
//! a committed state.

use std::sync::Arc;
use tokio::sync::{broadcast, RwLock};

use crate::model::AppState;
use crate::presets;
use crate::state::{reduce, Action};

#[cfg(test)]
mod tests;

/// Capacity of the state-change channel. Slow subscribers that fall further
/// behind skip ahead to newer snapshots.
const DEFAULT_SUBSCRIBER_CHANNEL_CAPACITY: usize = 64;

/// Shared handle to the dashboard state.
///
/// Cloning is cheap; clones share the state and the broadcast channel.
///
/// # Example
///
/// ```
/// use bookmark_dashboard::store::DashboardStore;
/// use bookmark_dashboard::state::Action;
///
/// #[tokio::main]
/// async fn main() {
///     let store = DashboardStore::default();
///     let state = store.dispatch(Action::AddPage("Research".to_string())).await;
///     assert_eq!(state.pages.len(), 3);
/// }
/// ```
#[derive(Clone)]
pub struct DashboardStore {
    state: Arc<RwLock<Arc<AppState>>>,
    update_tx: broadcast::Sender<Arc<AppState>>,
}

impl std::fmt::Debug for DashboardStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DashboardStore")
            .field("state", &self.state)
            .field("subscriber_count", &self.update_tx.receiver_count())
            .finish()
    }
}

impl Default for DashboardStore {
    /// A store holding the first-run dashboard.
    fn default() -> Self {
        Self::new(presets::initial_state())
    }
}

impl DashboardStore {
    /// Creates a store holding `state`.
    pub fn new(state: AppState) -> Self {
        let (update_tx, _rx) = broadcast::channel(DEFAULT_SUBSCRIBER_CHANNEL_CAPACITY);
        Self {
            state: Arc::new(RwLock::new(Arc::new(state))),
            update_tx,
        }
    }

    /// The current committed state.
    pub async fn snapshot(&self) -> Arc<AppState> {
        Arc::clone(&*self.state.read().await)
    }

    /// Reduces `action` against the current state and commits the result.
    ///
    /// Returns the state in effect afterwards. Actions that change nothing
    /// are not broadcast.
    pub async fn dispatch(&self, action: Action) -> Arc<AppState> {
        let name = action.name();
        let mut current = self.state.write().await;
        let next = reduce(&current, action);
        if next == **current {
            tracing::debug!(action = name, "action left state unchanged");
            return Arc::clone(&*current);
        }
        let next = Arc::new(next);
        *current = Arc::clone(&next);
        tracing::debug!(action = name, "state committed");
        // Broadcast under the lock so subscribers see commits in order.
        self.broadcast(&next);
        next
    }

    fn broadcast(&self, state: &Arc<AppState>) {
        match self.update_tx.send(Arc::clone(state)) {
            Ok(count) => tracing::trace!("State broadcast sent to {} subscribers", count),
            Err(_) => tracing::debug!("No subscribers for state broadcast"),
        }
    }

    /// Subscribes to committed states.
    pub fn subscribe(&self) -> broadcast::Receiver<Arc<AppState>> {
        self.update_tx.subscribe()
    }

    /// Number of live subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.update_tx.receiver_count()
    }
}

//! Resize notifications from the rendering surface.
//!
//! The surface owns one [`ResizeObserver`] and calls [`ResizeObserver::notify`]
//! whenever it lays out a region again. Interested parties register a callback
//! per region id and get a [`Subscription`] back; dropping it unsubscribes.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, Weak};

type Callback = Arc<dyn Fn(Option<f64>) + Send + Sync>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    regions: HashMap<String, Vec<(u64, Callback)>>,
}

fn lock(registry: &Mutex<Registry>) -> MutexGuard<'_, Registry> {
    registry.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Hub routing measured heights to per-region callbacks.
#[derive(Clone, Default)]
pub struct ResizeObserver {
    registry: Arc<Mutex<Registry>>,
}

impl std::fmt::Debug for ResizeObserver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let registry = lock(&self.registry);
        f.debug_struct("ResizeObserver")
            .field("regions", &registry.regions.len())
            .finish()
    }
}

impl ResizeObserver {
    /// Creates a hub with no observers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `callback` for `region`.
    ///
    /// The callback receives the measured content height in pixels, or
    /// `None` when the surface could not measure the region.
    pub fn observe<F>(&self, region: &str, callback: F) -> Subscription
    where
        F: Fn(Option<f64>) + Send + Sync + 'static,
    {
        let mut registry = lock(&self.registry);
        let id = registry.next_id;
        registry.next_id += 1;
        registry
            .regions
            .entry(region.to_string())
            .or_default()
            .push((id, Arc::new(callback)));
        tracing::trace!(region, id, "resize observer registered");
        Subscription {
            id,
            region: region.to_string(),
            registry: Arc::downgrade(&self.registry),
        }
    }

    /// Delivers a measurement for `region` to its observers, in registration
    /// order. Returns how many were notified.
    ///
    /// Callbacks run after the registry lock is released, so they may
    /// subscribe or unsubscribe.
    pub fn notify(&self, region: &str, height: Option<f64>) -> usize {
        let callbacks: Vec<Callback> = {
            let registry = lock(&self.registry);
            registry
                .regions
                .get(region)
                .map(|entries| entries.iter().map(|(_, cb)| Arc::clone(cb)).collect())
                .unwrap_or_default()
        };
        for callback in &callbacks {
            callback(height);
        }
        callbacks.len()
    }

    /// Number of live subscriptions for `region`.
    #[cfg(test)]
    pub(crate) fn observer_count(&self, region: &str) -> usize {
        lock(&self.registry)
            .regions
            .get(region)
            .map_or(0, Vec::len)
    }
}

/// Keeps a callback registered. Unsubscribes on drop.
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    region: String,
    registry: Weak<Mutex<Registry>>,
}

impl Subscription {
    /// Region this subscription listens to.
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Unsubscribes now. Same as dropping.
    pub fn unsubscribe(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let Some(registry) = self.registry.upgrade() else {
            return;
        };
        let mut registry = lock(&registry);
        if let Some(entries) = registry.regions.get_mut(&self.region) {
            entries.retain(|(id, _)| *id != self.id);
            if entries.is_empty() {
                registry.regions.remove(&self.region);
            }
        }
        tracing::trace!(region = %self.region, id = self.id, "resize observer removed");
    }
}

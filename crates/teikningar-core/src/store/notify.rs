use std::sync::{Arc, Mutex, Weak};

use crate::models::PersistentState;

pub(super) type Listener = Arc<dyn Fn(&PersistentState) + Send + Sync>;

#[derive(Default)]
pub(super) struct Listeners {
    next_id: u64,
    entries: Vec<(u64, Listener)>,
}

impl Listeners {
    pub(super) fn insert(&mut self, listener: Listener) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push((id, listener));
        id
    }

    fn remove(&mut self, id: u64) {
        self.entries.retain(|(entry_id, _)| *entry_id != id);
    }

    pub(super) fn snapshot(&self) -> Vec<Listener> {
        self.entries
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect()
    }

    pub(super) fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Handle returned by `PreferenceStore::subscribe`. The listener stays
/// registered until the handle is dropped or `unsubscribe` is called.
#[must_use = "dropping the subscription unsubscribes the listener"]
pub struct Subscription {
    id: u64,
    registry: Weak<Mutex<Listeners>>,
}

impl Subscription {
    pub(super) fn new(id: u64, registry: &Arc<Mutex<Listeners>>) -> Self {
        Self {
            id,
            registry: Arc::downgrade(registry),
        }
    }

    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let Some(registry) = self.registry.upgrade() else {
            return;
        };
        if let Ok(mut listeners) = registry.lock() {
            listeners.remove(self.id);
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

use std::sync::{Arc, Mutex};

use crate::config::StoreConfig;
use crate::error::{Result, TeikningarError};
use crate::models::{BlueprintRecord, PersistentState, PreferenceEntry};

mod backend;
mod notify;
mod schema;
#[cfg(feature = "sqlite")]
mod sqlite;

pub use backend::{MemoryBackend, PersistenceBackend};
pub use notify::Subscription;
#[cfg(feature = "sqlite")]
pub use sqlite::SqliteBackend;

use notify::{Listener, Listeners};

/// Fixed slot holding the whole preference blob.
pub const STATE_KEY: &str = "db-key-v1";

const LOG_TARGET: &str = "teikningar.store";

/// Favorites and recently viewed blueprints, persisted through an injected
/// backend.
///
/// Every mutation is a full read-modify-write of one blob, so two stores over
/// the same medium are last-write-wins. Listeners registered with
/// [`PreferenceStore::subscribe`] hear about every successful write.
pub struct PreferenceStore<B> {
    backend: B,
    config: StoreConfig,
    listeners: Arc<Mutex<Listeners>>,
}

impl<B> std::fmt::Debug for PreferenceStore<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreferenceStore")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<B: PersistenceBackend> PreferenceStore<B> {
    #[must_use]
    pub fn new(backend: B) -> Self {
        Self::with_config(backend, StoreConfig::default())
    }

    #[must_use]
    pub fn with_config(backend: B, config: StoreConfig) -> Self {
        Self {
            backend,
            config,
            listeners: Arc::new(Mutex::new(Listeners::default())),
        }
    }

    #[must_use]
    pub const fn backend(&self) -> &B {
        &self.backend
    }

    /// Current state. A missing, unreadable or malformed blob yields the empty
    /// version-1 state; the only trace of that is a warning.
    #[must_use]
    pub fn load(&self) -> PersistentState {
        match self.read_state() {
            Ok(state) => state,
            Err(error) => {
                tracing::warn!(
                    target: LOG_TARGET,
                    %error,
                    "preference backend read failed; using empty state"
                );
                PersistentState::default()
            }
        }
    }

    /// Like `load`, but backend failures propagate so that mutations never
    /// overwrite stored data they could not read.
    fn read_state(&self) -> Result<PersistentState> {
        let Some(raw) = self.backend.get(STATE_KEY)? else {
            return Ok(PersistentState::default());
        };
        match schema::decode(&raw) {
            Ok(state) => Ok(state),
            Err(error) => {
                tracing::warn!(
                    target: LOG_TARGET,
                    %error,
                    "invalid persisted preferences; reverting to version 1 defaults"
                );
                tracing::debug!(target: LOG_TARGET, raw = %raw, "discarded preference blob");
                Ok(PersistentState::default())
            }
        }
    }

    /// Persists `state` and then notifies every current listener once.
    pub fn write(&self, state: &PersistentState) -> Result<()> {
        let raw = schema::encode(state)?;
        self.backend.set(STATE_KEY, &raw)?;
        tracing::debug!(
            target: LOG_TARGET,
            favorites = state.favorites.len(),
            recently_viewed = state.recently_viewed.len(),
            "preferences written"
        );
        self.broadcast(state)
    }

    pub fn add_favorite(&self, blueprint: &BlueprintRecord, address: &str) -> Result<()> {
        let mut state = self.read_state()?;
        if state.contains_favorite(blueprint.dedup_key()) {
            return Ok(());
        }
        state
            .favorites
            .insert(0, PreferenceEntry::new(blueprint.clone(), address));
        self.write(&state)
    }

    /// Removes every favorite with the blueprint's key. Persists even when
    /// nothing matched.
    pub fn remove_favorite(&self, blueprint: &BlueprintRecord) -> Result<()> {
        let mut state = self.read_state()?;
        let key = blueprint.dedup_key();
        state.favorites.retain(|entry| entry.dedup_key() != key);
        self.write(&state)
    }

    /// Moves the blueprint to the front of the recently viewed list, evicting
    /// the oldest entries beyond the cap.
    pub fn add_recently_viewed(&self, blueprint: &BlueprintRecord, address: &str) -> Result<()> {
        let mut state = self.read_state()?;
        let key = blueprint.dedup_key();
        state.recently_viewed.retain(|entry| entry.dedup_key() != key);
        state
            .recently_viewed
            .insert(0, PreferenceEntry::new(blueprint.clone(), address));
        state
            .recently_viewed
            .truncate(self.config.recently_viewed_limit());
        self.write(&state)
    }

    #[must_use]
    pub fn is_favorite(&self, blueprint: &BlueprintRecord) -> bool {
        self.load().contains_favorite(blueprint.dedup_key())
    }

    #[must_use]
    pub fn favorites(&self) -> Vec<PreferenceEntry> {
        self.load().favorites
    }

    #[must_use]
    pub fn recently_viewed(&self) -> Vec<PreferenceEntry> {
        self.load().recently_viewed
    }

    /// Registers `listener` to receive the state after every successful write.
    pub fn subscribe(
        &self,
        listener: impl Fn(&PersistentState) + Send + Sync + 'static,
    ) -> Result<Subscription> {
        let listener: Listener = Arc::new(listener);
        let id = self
            .listeners
            .lock()
            .map_err(|_| TeikningarError::mutex_poisoned("store listeners"))?
            .insert(listener);
        Ok(Subscription::new(id, &self.listeners))
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.lock().map_or(0, |listeners| listeners.len())
    }

    /// Called by the host when another context changed the shared slot.
    /// Listeners receive the freshly loaded state.
    pub fn notify_external_change(&self) -> Result<()> {
        let state = self.load();
        self.broadcast(&state)
    }

    fn broadcast(&self, state: &PersistentState) -> Result<()> {
        // Listeners run outside the lock so they may subscribe or drop handles.
        let listeners = self
            .listeners
            .lock()
            .map_err(|_| TeikningarError::mutex_poisoned("store listeners"))?
            .snapshot();
        for listener in listeners {
            listener(state);
        }
        Ok(())
    }
}

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::error::{Result, TeikningarError};

/// Storage for the preference blob: one string value per key.
///
/// Implementations overwrite whole values; there is no merge or locking beyond
/// what the medium itself provides.
pub trait PersistenceBackend {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

impl<T: PersistenceBackend + ?Sized> PersistenceBackend for &T {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

impl<T: PersistenceBackend + ?Sized> PersistenceBackend for Arc<T> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

/// Process-local backend. Clones share the same slots, so two stores built
/// from clones behave like two views over one medium.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    slots: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PersistenceBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let slots = self
            .slots
            .lock()
            .map_err(|_| TeikningarError::mutex_poisoned("memory backend"))?;
        Ok(slots.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut slots = self
            .slots
            .lock()
            .map_err(|_| TeikningarError::mutex_poisoned("memory backend"))?;
        slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

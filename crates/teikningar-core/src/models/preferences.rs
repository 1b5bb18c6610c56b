use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::BlueprintRecord;

/// Annotation overlays keyed by `original_source_url`. The overlay objects are
/// owned by the sketching feature and are carried through unchanged.
pub type Sketches = BTreeMap<String, Vec<serde_json::Value>>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceEntry {
    pub address: String,
    pub blueprint: BlueprintRecord,
}

impl PreferenceEntry {
    #[must_use]
    pub fn new(blueprint: BlueprintRecord, address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            blueprint,
        }
    }

    #[must_use]
    pub fn dedup_key(&self) -> &str {
        self.blueprint.dedup_key()
    }
}

/// Everything the store persists. Both lists are newest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersistentState {
    #[serde(default)]
    pub favorites: Vec<PreferenceEntry>,
    #[serde(default, rename = "recentlyViewed")]
    pub recently_viewed: Vec<PreferenceEntry>,
    #[serde(default)]
    pub sketches: Sketches,
}

impl PersistentState {
    #[must_use]
    pub fn contains_favorite(&self, dedup_key: &str) -> bool {
        self.favorites
            .iter()
            .any(|entry| entry.dedup_key() == dedup_key)
    }
}

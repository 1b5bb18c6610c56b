use std::collections::HashSet;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::config::MAX_RECENTLY_VIEWED;
use crate::error::{Result, TeikningarError};
use crate::models::{PersistentState, PreferenceEntry};

pub(super) const SCHEMA_VERSION: u64 = 1;

const VERSION_FIELD: &str = "version";

#[derive(Serialize)]
struct Envelope<'a> {
    version: u64,
    #[serde(flatten)]
    state: &'a PersistentState,
}

/// Version found on a stored blob.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StoredVersion {
    /// Written before the tag existed. Same field layout as version 1, but
    /// lists may carry duplicate entries.
    Untagged,
    V1,
}

pub(super) fn encode(state: &PersistentState) -> Result<String> {
    Ok(serde_json::to_string(&Envelope {
        version: SCHEMA_VERSION,
        state,
    })?)
}

pub(super) fn decode(raw: &str) -> Result<PersistentState> {
    let value: Value = serde_json::from_str(raw)?;
    let Value::Object(mut body) = value else {
        return Err(TeikningarError::Validation(
            "persisted state must be a JSON object".to_string(),
        ));
    };
    let version = read_version(body.remove(VERSION_FIELD))?;
    migrate(version, body)
}

fn read_version(raw: Option<Value>) -> Result<StoredVersion> {
    match raw {
        None => Ok(StoredVersion::Untagged),
        Some(Value::Number(number)) if number.as_u64() == Some(SCHEMA_VERSION) => {
            Ok(StoredVersion::V1)
        }
        Some(other) => Err(TeikningarError::Validation(format!(
            "unsupported persisted state version: {other}"
        ))),
    }
}

fn migrate(version: StoredVersion, body: Map<String, Value>) -> Result<PersistentState> {
    let state: PersistentState = serde_json::from_value(Value::Object(body))?;
    let mut state = match version {
        StoredVersion::V1 => state,
        StoredVersion::Untagged => migrate_untagged_to_v1(state),
    };
    state.recently_viewed.truncate(MAX_RECENTLY_VIEWED);
    Ok(state)
}

fn migrate_untagged_to_v1(mut state: PersistentState) -> PersistentState {
    dedup_keep_first(&mut state.favorites);
    dedup_keep_first(&mut state.recently_viewed);
    state
}

fn dedup_keep_first(entries: &mut Vec<PreferenceEntry>) {
    let mut seen = HashSet::new();
    entries.retain(|entry| seen.insert(entry.dedup_key().to_string()));
}

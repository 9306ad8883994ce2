//! Keyed persistence of playback state across sessions.
//!
//! Every store maps a media resource's stable source identifier to the
//! last observed [`PersistedState`]. The surface is deliberately
//! infallible: persistence is an opportunistic convenience, so write
//! failures are logged and swallowed and unreadable entries load as
//! absent. Entries are overwritten on every position tick and never
//! expired.

use std::collections::HashMap;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

/// Durable JSON-file-backed store
pub mod file;

pub use file::JsonFileStore;

/// Snapshot of playback state for one media resource.
///
/// Fields are optional so a caller can tell "never saved" apart from a
/// saved zero or `false`: a resource genuinely paused at position 0 with
/// the volume slid to 0 round-trips exactly as written.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PersistedState {
    /// Playback position in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<f64>,

    /// Volume as a fraction in `[0, 1]`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,

    /// Whether playback was paused
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paused: Option<bool>,
}

/// Keyed save/restore of playback state.
///
/// Implementations must degrade silently: a save that cannot be written
/// is dropped, a load that cannot be served returns `None`. Stores are
/// shared across decks and keyed by resource identity, so two decks
/// bound to the same resource read and write the same entry. Last writer
/// wins.
pub trait PersistenceStore: Send + Sync {
    /// Record the state for a resource, replacing any previous entry.
    fn save(&self, key: &str, state: &PersistedState);

    /// Fetch the recorded state for a resource, if any.
    fn load(&self, key: &str) -> Option<PersistedState>;
}

/// Store used when persistence is disabled.
///
/// Saves are dropped and loads always come back absent.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopStore;

impl PersistenceStore for NoopStore {
    fn save(&self, _key: &str, _state: &PersistedState) {}

    fn load(&self, _key: &str) -> Option<PersistedState> {
        None
    }
}

/// Process-local store backed by a hash map.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, PersistedState>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl PersistenceStore for MemoryStore {
    fn save(&self, key: &str, state: &PersistedState) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_owned(), state.clone());
        }
    }

    fn load(&self, key: &str) -> Option<PersistedState> {
        self.entries.lock().ok()?.get(key).cloned()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips() {
        let store = MemoryStore::new();
        let state = PersistedState {
            time: Some(12.5),
            volume: Some(0.8),
            paused: Some(false),
        };

        store.save("track-a", &state);

        assert_eq!(store.load("track-a"), Some(state));
    }

    #[test]
    fn zeros_and_false_survive_a_round_trip() {
        let store = MemoryStore::new();
        let state = PersistedState {
            time: Some(0.0),
            volume: Some(0.0),
            paused: Some(false),
        };

        store.save("track-a", &state);

        let loaded = store.load("track-a").unwrap();
        assert_eq!(loaded.time, Some(0.0));
        assert_eq!(loaded.volume, Some(0.0));
        assert_eq!(loaded.paused, Some(false));
    }

    #[test]
    fn unknown_key_is_absent() {
        let store = MemoryStore::new();

        assert_eq!(store.load("never-saved"), None);
    }

    #[test]
    fn saves_overwrite_previous_entries() {
        let store = MemoryStore::new();

        store.save(
            "track-a",
            &PersistedState {
                time: Some(1.0),
                ..PersistedState::default()
            },
        );
        store.save(
            "track-a",
            &PersistedState {
                time: Some(2.0),
                ..PersistedState::default()
            },
        );

        assert_eq!(store.load("track-a").unwrap().time, Some(2.0));
    }

    #[test]
    fn noop_store_drops_everything() {
        let store = NoopStore;

        store.save(
            "track-a",
            &PersistedState {
                time: Some(5.0),
                ..PersistedState::default()
            },
        );

        assert_eq!(store.load("track-a"), None);
    }

    #[test]
    fn absent_fields_are_omitted_from_serialized_form() {
        let state = PersistedState {
            time: Some(5.0),
            volume: None,
            paused: None,
        };

        let json = serde_json::to_string(&state).unwrap();

        assert_eq!(json, r#"{"time":5.0}"#);
    }
}

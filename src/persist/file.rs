use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use tracing::warn;

use super::{PersistedState, PersistenceStore};

/// Durable store keeping every entry in one human-readable JSON file.
///
/// The file holds a flat map from resource identifier to its
/// [`PersistedState`]. The whole map is re-read on every access, so
/// concurrent processes see each other's writes with last-writer-wins
/// semantics. I/O failures degrade to non-persistent operation: saves
/// log a warning and are dropped, loads return absent.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store backed by the given file path.
    ///
    /// The file and its parent directories are created lazily on the
    /// first save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_entries(&self) -> HashMap<String, PersistedState> {
        let Ok(content) = fs::read_to_string(&self.path) else {
            return HashMap::new();
        };

        serde_json::from_str(&content).unwrap_or_else(|e| {
            warn!("Invalid playback state file, starting fresh: {e}");
            HashMap::new()
        })
    }

    fn write_entries(&self, entries: &HashMap<String, PersistedState>) {
        if let Some(parent) = self.path.parent()
            && let Err(e) = fs::create_dir_all(parent)
        {
            warn!("Failed to create state directory: {e}");
            return;
        }

        let content = match serde_json::to_string_pretty(entries) {
            Ok(content) => content,
            Err(e) => {
                warn!("Failed to serialize playback state: {e}");
                return;
            }
        };

        if let Err(e) = fs::write(&self.path, content) {
            warn!("Failed to write playback state: {e}");
        }
    }
}

impl PersistenceStore for JsonFileStore {
    fn save(&self, key: &str, state: &PersistedState) {
        let mut entries = self.read_entries();
        entries.insert(key.to_owned(), state.clone());
        self.write_entries(&entries);
    }

    fn load(&self, key: &str) -> Option<PersistedState> {
        self.read_entries().get(key).cloned()
    }
}

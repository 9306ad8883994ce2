//! Integration tests for the durable JSON-file persistence store.

#![cfg_attr(test, allow(clippy::unwrap_used))]

use std::fs;

use tempfile::TempDir;

use mediadeck::persist::{JsonFileStore, PersistedState, PersistenceStore};

fn store_in(temp: &TempDir) -> JsonFileStore {
    JsonFileStore::new(temp.path().join("state/playback.json"))
}

#[test]
fn round_trips_through_the_filesystem() {
    let temp = TempDir::new().unwrap();
    let store = store_in(&temp);
    let state = PersistedState {
        time: Some(42.5),
        volume: Some(0.6),
        paused: Some(true),
    };

    store.save("album/track-1.ogg", &state);

    assert_eq!(store.load("album/track-1.ogg"), Some(state));
}

#[test]
fn missing_file_loads_as_absent() {
    let temp = TempDir::new().unwrap();
    let store = store_in(&temp);

    assert_eq!(store.load("anything"), None);
}

#[test]
fn entries_are_keyed_by_resource_identity() {
    let temp = TempDir::new().unwrap();
    let store = store_in(&temp);

    store.save(
        "a.ogg",
        &PersistedState {
            time: Some(1.0),
            ..PersistedState::default()
        },
    );
    store.save(
        "b.ogg",
        &PersistedState {
            time: Some(2.0),
            ..PersistedState::default()
        },
    );

    assert_eq!(store.load("a.ogg").unwrap().time, Some(1.0));
    assert_eq!(store.load("b.ogg").unwrap().time, Some(2.0));
}

#[test]
fn two_stores_on_the_same_file_share_entries() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("shared.json");
    let writer = JsonFileStore::new(&path);
    let reader = JsonFileStore::new(&path);

    writer.save(
        "track.ogg",
        &PersistedState {
            time: Some(7.0),
            ..PersistedState::default()
        },
    );

    assert_eq!(reader.load("track.ogg").unwrap().time, Some(7.0));
}

#[test]
fn corrupt_file_degrades_to_absent_and_recovers_on_save() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("state.json");
    fs::write(&path, "not json at all").unwrap();
    let store = JsonFileStore::new(&path);

    assert_eq!(store.load("track.ogg"), None);

    store.save(
        "track.ogg",
        &PersistedState {
            time: Some(3.0),
            ..PersistedState::default()
        },
    );

    assert_eq!(store.load("track.ogg").unwrap().time, Some(3.0));
}

#[test]
fn serialized_form_is_human_readable_json() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("state.json");
    let store = JsonFileStore::new(&path);

    store.save(
        "track.ogg",
        &PersistedState {
            time: Some(5.0),
            volume: Some(0.5),
            paused: Some(false),
        },
    );

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("\"track.ogg\""));
    assert!(content.contains("\"time\""));
    assert!(content.contains("\"paused\""));
}

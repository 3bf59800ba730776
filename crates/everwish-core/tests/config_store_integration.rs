//! Integration tests for the persisted configuration store
//!
//! Exercises full open/save/reopen cycles against a real redb file.

use everwish_core::{ConfigEvent, ConfigPatch, ConfigStore, GreetingConfig, Letter, LoadSource};
use tempfile::TempDir;

#[test]
fn seeding_happens_exactly_once() {
    let temp = TempDir::new().unwrap();

    {
        let store = ConfigStore::open(temp.path()).unwrap();
        assert_eq!(store.load_source(), LoadSource::Seeded);
        store
            .save(ConfigPatch {
                entry_title: Some("Changed once".to_string()),
                ..Default::default()
            })
            .unwrap();
    }

    // Reopening must read the stored record, not reseed defaults
    let store = ConfigStore::open(temp.path()).unwrap();
    assert_eq!(store.load_source(), LoadSource::Stored);
    assert_eq!(store.current().entry_title, "Changed once");
}

#[test]
fn letters_are_replaced_wholesale_across_saves() {
    let temp = TempDir::new().unwrap();
    let store = ConfigStore::open(temp.path()).unwrap();

    let first_set = vec![
        Letter::new("sunflower", "One", "body one"),
        Letter::new("rose", "Two", "body two"),
    ];
    store
        .save(ConfigPatch {
            letters: Some(first_set),
            ..Default::default()
        })
        .unwrap();

    // A later save with a single letter must not leave stale entries behind
    let replacement = vec![Letter::new("tulip", "Only", "only body")];
    store
        .save(ConfigPatch {
            letters: Some(replacement.clone()),
            ..Default::default()
        })
        .unwrap();

    assert_eq!(store.current().letters, replacement);

    // And the wholesale replacement survives a reopen
    drop(store);
    let reopened = ConfigStore::open(temp.path()).unwrap();
    assert_eq!(reopened.current().letters, replacement);
}

#[test]
fn partial_saves_accumulate_against_latest_state() {
    let temp = TempDir::new().unwrap();

    {
        let store = ConfigStore::open(temp.path()).unwrap();
        store
            .save(ConfigPatch {
                gate_title: Some("Gate".to_string()),
                ..Default::default()
            })
            .unwrap();
        store
            .save(ConfigPatch {
                photo_gallery: Some(vec!["a.png".to_string(), "b.png".to_string()]),
                ..Default::default()
            })
            .unwrap();
    }

    let store = ConfigStore::open(temp.path()).unwrap();
    let config = store.current();
    assert_eq!(config.gate_title, "Gate");
    assert_eq!(config.photo_gallery.len(), 2);
    // Fields never touched keep their defaults
    assert_eq!(config.cake_text, GreetingConfig::default().cake_text);
}

#[test]
fn reopened_record_satisfies_letter_invariant() {
    let temp = TempDir::new().unwrap();

    {
        let store = ConfigStore::open(temp.path()).unwrap();
        let mut inactive = Letter::new("word", "T", "b");
        inactive.active = false;
        // The save-time merge keeps the previous active set instead
        store
            .save(ConfigPatch {
                letters: Some(vec![inactive]),
                ..Default::default()
            })
            .unwrap();
    }

    let store = ConfigStore::open(temp.path()).unwrap();
    assert!(store.current().active_letters().count() > 0);
}

#[tokio::test]
async fn each_save_notifies_subscribers() {
    let temp = TempDir::new().unwrap();
    let store = ConfigStore::open(temp.path()).unwrap();
    let mut events = store.subscribe();

    for title in ["one", "two", "three"] {
        store
            .save(ConfigPatch {
                entry_title: Some(title.to_string()),
                ..Default::default()
            })
            .unwrap();
    }

    for _ in 0..3 {
        assert!(matches!(
            events.recv().await.unwrap(),
            ConfigEvent::Changed
        ));
    }
    assert_eq!(store.current().entry_title, "three");
}

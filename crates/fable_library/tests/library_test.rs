//! Tests for the story archive.

use chrono::Utc;
use fable_core::{Chapter, ChapterImage, Genre, Story};
use fable_library::{DEFAULT_MAX_ENTRIES, HistoryStore, LibraryConfig, id_prefix};
use uuid::Uuid;

fn story(title: &str) -> Story {
    Story {
        id: Uuid::new_v4(),
        title: title.to_string(),
        summary: "A hook.".to_string(),
        genre: Genre::Fable,
        created_at: Utc::now(),
        chapters: vec![Chapter {
            id: Uuid::new_v4(),
            title: "One".to_string(),
            content: "Text.".to_string(),
            image_prompt: "prompt".to_string(),
            image: Some(ChapterImage {
                mime: "image/png".to_string(),
                data: vec![0u8; 64],
            }),
            narration: None,
        }],
    }
}

#[test]
fn missing_file_loads_empty() {
    let dir = tempfile::tempdir().unwrap();
    let config = LibraryConfig::new(dir.path().join("history.json"));
    let store = HistoryStore::load(config);
    assert!(store.stories().is_empty());
}

#[test]
fn corrupt_file_loads_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");
    std::fs::write(&path, "{ not json").unwrap();
    let store = HistoryStore::load(LibraryConfig::new(&path));
    assert!(store.stories().is_empty());
}

#[test]
fn save_strips_media_and_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");
    let mut store = HistoryStore::load(LibraryConfig::new(&path));

    let original = story("The Citadel");
    store.save(&original).unwrap();
    assert!(store.stories()[0].chapters[0].image.is_none());

    // reload from disk
    let reloaded = HistoryStore::load(LibraryConfig::new(&path));
    assert_eq!(reloaded.stories().len(), 1);
    assert_eq!(reloaded.stories()[0].id, original.id);
    assert_eq!(reloaded.stories()[0].title, "The Citadel");
}

#[test]
fn save_is_newest_first_and_dedupes_by_id() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = HistoryStore::load(LibraryConfig::new(dir.path().join("history.json")));

    let first = story("First");
    let second = story("Second");
    store.save(&first).unwrap();
    store.save(&second).unwrap();
    assert_eq!(store.stories()[0].title, "Second");

    // re-saving the first story moves it to the front instead of duplicating
    store.save(&first).unwrap();
    assert_eq!(store.stories().len(), 2);
    assert_eq!(store.stories()[0].id, first.id);
}

#[test]
fn archive_truncates_to_cap() {
    let dir = tempfile::tempdir().unwrap();
    let config = LibraryConfig::new(dir.path().join("history.json")).with_max_entries(3);
    let mut store = HistoryStore::load(config);

    for i in 0..DEFAULT_MAX_ENTRIES {
        store.save(&story(&format!("Story {}", i))).unwrap();
    }
    assert_eq!(store.stories().len(), 3);
    assert_eq!(store.stories()[0].title, "Story 4");
}

#[test]
fn find_matches_id_prefix() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = HistoryStore::load(LibraryConfig::new(dir.path().join("history.json")));
    let saved = story("Found");
    store.save(&saved).unwrap();

    let prefix = id_prefix(&saved.id);
    assert_eq!(prefix.len(), 8);
    assert_eq!(store.find(&prefix).unwrap().id, saved.id);
    assert!(store.find("zzzzzzzz").is_none());
}

#[test]
fn clear_empties_archive_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");
    let mut store = HistoryStore::load(LibraryConfig::new(&path));
    store.save(&story("Gone")).unwrap();
    store.clear().unwrap();
    assert!(store.stories().is_empty());

    let reloaded = HistoryStore::load(LibraryConfig::new(&path));
    assert!(reloaded.stories().is_empty());
}

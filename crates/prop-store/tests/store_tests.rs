use pretty_assertions::assert_eq;
use prop_store::{CHECKSUM_KEY, PropStore};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_load_missing_file_yields_empty_store() {
    let temp = TempDir::new().unwrap();
    let store = PropStore::load(&temp.path().join("absent.props")).unwrap();
    assert!(store.is_empty());
    assert_eq!(store.checksum(), 0);
}

#[test]
fn test_save_empty_store_creates_no_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("settings.props");

    PropStore::new().save(&path, "header").unwrap();

    assert!(!path.exists());
}

#[test]
fn test_save_into_missing_directory_fails() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("no_such_dir").join("settings.props");

    let mut store = PropStore::new();
    store.set("key", "value");

    assert!(store.save(&path, "").is_err());
}

#[test]
fn test_save_load_round_trip_preserves_entries_and_order() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("settings.props");

    let mut store = PropStore::new();
    store.set("allowUpdateCheck", "true");
    store.set("allowDebugOutput", "false");
    store.set_checksum(42);
    store.save(&path, "allowUpdateCheck (bool:true)\n").unwrap();

    let loaded = PropStore::load(&path).unwrap();
    let entries: Vec<(&str, &str)> = loaded.iter().collect();
    assert_eq!(
        entries,
        [
            ("allowUpdateCheck", "true"),
            ("allowDebugOutput", "false"),
            (CHECKSUM_KEY, "16"),
        ]
    );
    assert_eq!(loaded.checksum(), 42);
}

#[test]
fn test_comment_header_is_written_and_ignored_on_load() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("settings.props");

    let mut store = PropStore::new();
    store.set("key", "value");
    store.save(&path, "line one\nline two\n").unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("# line one\n# line two\n"));

    let loaded = PropStore::load(&path).unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded.get("key"), Some("value"));
}

#[test]
fn test_awkward_keys_and_values_survive_round_trip() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("settings.props");

    let mut store = PropStore::new();
    store.set("spaced key", "value = with : separators");
    store.set("multi", "line\nbreak");
    store.save(&path, "").unwrap();

    let loaded = PropStore::load(&path).unwrap();
    assert_eq!(loaded.get("spaced key"), Some("value = with : separators"));
    assert_eq!(loaded.get("multi"), Some("line\nbreak"));
}

#[test]
fn test_load_accepts_hand_edited_conventions() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("settings.props");
    fs::write(
        &path,
        "# hand-written header\nallowDebugOutput = true\n! stale note\nretries:3\n",
    )
    .unwrap();

    let loaded = PropStore::load(&path).unwrap();
    assert_eq!(loaded.get("allowDebugOutput"), Some("true"));
    assert_eq!(loaded.get("retries"), Some("3"));
    assert_eq!(loaded.len(), 2);
}

#[test]
fn test_save_overwrites_previous_content() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("settings.props");

    let mut store = PropStore::new();
    store.set("key", "first");
    store.save(&path, "").unwrap();

    store.set("key", "second");
    store.save(&path, "").unwrap();

    let loaded = PropStore::load(&path).unwrap();
    assert_eq!(loaded.get("key"), Some("second"));
    assert_eq!(loaded.len(), 1);
}

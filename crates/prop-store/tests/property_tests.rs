use prop_store::{PropStore, base36};
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_base36_round_trips_any_i32(value in any::<i32>()) {
        let encoded = base36::encode(value);
        prop_assert_eq!(base36::decode(&encoded), Some(value));

        // Encoded form stays within the properties-safe alphabet.
        prop_assert!(encoded.bytes().all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-'));
    }

    #[test]
    fn test_checksum_survives_persistence(value in any::<i32>()) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.props");

        let mut store = PropStore::new();
        store.set("anchor", "present");
        store.set_checksum(value);
        store.save(&path, "").unwrap();

        let loaded = PropStore::load(&path).unwrap();
        prop_assert_eq!(loaded.checksum(), value);
    }

    #[test]
    fn test_simple_entries_survive_persistence(
        key in "[A-Za-z][A-Za-z0-9_.]{0,30}",
        value in "[ -~]{0,60}",
    ) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.props");

        let mut store = PropStore::new();
        store.set(key.clone(), value.clone());
        store.save(&path, "header\n").unwrap();

        let loaded = PropStore::load(&path).unwrap();
        prop_assert_eq!(loaded.get(&key), Some(value.as_str()));
    }
}

use docraft_core::{open_store_in_memory, PersistentStore, StoreError};
use serde_json::json;

#[test]
fn values_round_trip_structurally() {
    let store = PersistentStore::open_in_memory().unwrap();

    let samples = [
        json!({"title": "Unit", "pages": 3, "published": false}),
        json!([1, 2.5, "three", null, {"nested": []}]),
        json!("plain text"),
        json!(42),
        json!(true),
        json!(null),
    ];

    for (index, value) in samples.iter().enumerate() {
        let key = format!("sample_{index}");
        store.write_key(&key, value).unwrap();
        assert_eq!(store.read_key(&key).unwrap().as_ref(), Some(value));
    }
}

#[test]
fn read_with_default_persists_the_default() {
    let store = PersistentStore::open_in_memory().unwrap();
    let default = json!([{"id": "dco_1"}]);

    let value = store.read_key_or("objects", default.clone()).unwrap();
    assert_eq!(value, default);

    // Observable through a raw read, not just through the decode path.
    let raw = store.raw_read("objects").unwrap().unwrap();
    assert_eq!(serde_json::from_str::<serde_json::Value>(&raw).unwrap(), default);
}

#[test]
fn read_without_default_stores_nothing() {
    let store = PersistentStore::open_in_memory().unwrap();
    assert_eq!(store.read_key("missing").unwrap(), None);
    assert_eq!(store.raw_read("missing").unwrap(), None);
}

#[test]
fn default_is_not_applied_over_an_existing_value() {
    let store = PersistentStore::open_in_memory().unwrap();
    store.write_key("slot", &json!(["kept"])).unwrap();

    let value = store.read_key_or("slot", json!(["default"])).unwrap();
    assert_eq!(value, json!(["kept"]));
}

#[test]
fn undecodable_value_surfaces_corrupt() {
    let conn = open_store_in_memory().unwrap();
    conn.execute(
        "INSERT INTO kv_entries (key, value) VALUES ('objects', 'not json at all');",
        [],
    )
    .unwrap();

    let store = PersistentStore::new(conn);
    let err = store.read_key("objects").unwrap_err();
    assert!(matches!(err, StoreError::Corrupt { ref key, .. } if key == "objects"));

    // The corrupt value must survive the failed read untouched.
    assert_eq!(store.raw_read("objects").unwrap().as_deref(), Some("not json at all"));
}

#[test]
fn file_backed_store_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.db");

    {
        let store = PersistentStore::open(&path).unwrap();
        store.write_key("objects", &json!([{"id": "dco_9"}])).unwrap();
    }

    let store = PersistentStore::open(&path).unwrap();
    assert_eq!(
        store.read_key("objects").unwrap(),
        Some(json!([{"id": "dco_9"}]))
    );
}

use super::*;

#[test]
fn memory_storage_round_trips_values() {
    let store = MemoryStorage::new();
    assert_eq!(store.get("k"), Ok(None));
    store.set("k", "v").unwrap();
    assert_eq!(store.get("k"), Ok(Some("v".to_owned())));
}

#[test]
fn memory_storage_overwrites_existing_key() {
    let store = MemoryStorage::new();
    store.set("k", "one").unwrap();
    store.set("k", "two").unwrap();
    assert_eq!(store.get("k"), Ok(Some("two".to_owned())));
}

#[test]
fn memory_storage_clear_drops_entries() {
    let store = MemoryStorage::new();
    store.set("k", "v").unwrap();
    store.clear();
    assert_eq!(store.get("k"), Ok(None));
}

#[cfg(not(feature = "csr"))]
#[test]
fn browser_storage_is_unavailable_natively() {
    let store = BrowserStorage;
    assert_eq!(store.get("k"), Err(StorageError::Unavailable));
    assert_eq!(store.set("k", "v"), Err(StorageError::Unavailable));
}

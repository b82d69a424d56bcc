use super::*;
use crate::util::storage::{MemoryStorage, StorageError};

struct BrokenStorage;

impl KeyValueStore for BrokenStorage {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }
}

struct ReadOnlyStorage;

impl KeyValueStore for ReadOnlyStorage {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Access("quota exceeded".to_owned()))
    }
}

#[test]
fn establish_persists_new_id_under_fixed_key() {
    let store = MemoryStorage::new();
    let session = SessionContext::establish(&store);
    assert!(!session.id.is_empty());
    assert_eq!(store.get(SESSION_STORAGE_KEY), Ok(Some(session.id.clone())));
}

#[test]
fn establish_reuses_existing_id() {
    let store = MemoryStorage::new();
    store.set(SESSION_STORAGE_KEY, "test-session-id").unwrap();
    assert_eq!(SessionContext::establish(&store).id, "test-session-id");
}

#[test]
fn id_is_stable_across_mounts_while_storage_survives() {
    let store = MemoryStorage::new();
    let first = SessionContext::establish(&store);
    let second = SessionContext::establish(&store);
    assert_eq!(first, second);
}

#[test]
fn id_changes_after_storage_is_cleared() {
    let store = MemoryStorage::new();
    let first = SessionContext::establish(&store);
    store.clear();
    let second = SessionContext::establish(&store);
    assert_ne!(first, second);
}

#[test]
fn blank_stored_id_is_replaced() {
    let store = MemoryStorage::new();
    store.set(SESSION_STORAGE_KEY, "  ").unwrap();
    let session = SessionContext::establish(&store);
    assert!(!session.id.trim().is_empty());
    assert_eq!(store.get(SESSION_STORAGE_KEY), Ok(Some(session.id)));
}

#[test]
fn unavailable_storage_yields_fresh_id_each_activation() {
    let first = SessionContext::establish(&BrokenStorage);
    let second = SessionContext::establish(&BrokenStorage);
    assert!(!first.id.is_empty());
    assert_ne!(first, second);
}

#[test]
fn failed_write_still_returns_an_id() {
    let session = SessionContext::establish(&ReadOnlyStorage);
    assert!(!session.id.is_empty());
}

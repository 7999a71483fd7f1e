//! Mock entry store for testing.
//!
//! Provides [`MockStore`] for unit testing cache behavior without
//! filesystem access.

use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, SystemTime};

use crate::id::EntryId;
use crate::store::{EntryStore, StoreError};

/// One stored payload with its last-write time.
#[derive(Clone, Debug)]
struct MockEntry {
    payload: Vec<u8>,
    last_write: SystemTime,
}

/// In-memory [`EntryStore`] for testing.
///
/// Builder methods pre-populate entries, and [`backdate`](Self::backdate)
/// shifts an entry's last-write time into the past so expiry is testable
/// without sleeping.
///
/// # Example
///
/// ```ignore
/// use std::time::Duration;
/// use larder_store::MockStore;
///
/// let store = MockStore::new().with_entry("prova", "prova");
/// store.backdate("prova", Duration::from_secs(3600));
/// ```
#[derive(Debug, Default)]
pub struct MockStore {
    entries: RwLock<HashMap<EntryId, MockEntry>>,
}

impl MockStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate an entry for `key`, written "now".
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_entry(self, key: &str, payload: impl Into<Vec<u8>>) -> Self {
        self.entries.write().unwrap().insert(
            EntryId::from_key(key),
            MockEntry {
                payload: payload.into(),
                last_write: SystemTime::now(),
            },
        );
        self
    }

    /// Shift the last-write time of the entry for `key` into the past.
    ///
    /// # Panics
    ///
    /// Panics if no entry exists for `key` or the internal lock is poisoned.
    pub fn backdate(&self, key: &str, age: Duration) {
        let id = EntryId::from_key(key);
        let mut entries = self.entries.write().unwrap();
        let entry = entries.get_mut(&id).expect("no entry to backdate");
        entry.last_write -= age;
    }

    /// Number of entries currently stored.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().unwrap().len()
    }

    /// True when no entries are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl EntryStore for MockStore {
    fn exists(&self, id: &EntryId) -> bool {
        self.entries.read().unwrap().contains_key(id)
    }

    fn last_write(&self, id: &EntryId) -> Result<SystemTime, StoreError> {
        self.entries
            .read()
            .unwrap()
            .get(id)
            .map(|entry| entry.last_write)
            .ok_or_else(|| StoreError::NotFound(id.clone()))
    }

    fn read(&self, id: &EntryId) -> Result<Vec<u8>, StoreError> {
        self.entries
            .read()
            .unwrap()
            .get(id)
            .map(|entry| entry.payload.clone())
            .ok_or_else(|| StoreError::NotFound(id.clone()))
    }

    fn write(&self, id: &EntryId, payload: &[u8]) -> Result<(), StoreError> {
        self.entries.write().unwrap().insert(
            id.clone(),
            MockEntry {
                payload: payload.to_vec(),
                last_write: SystemTime::now(),
            },
        );
        Ok(())
    }

    fn delete(&self, id: &EntryId) -> Result<(), StoreError> {
        if self.entries.write().unwrap().remove(id).is_some() {
            Ok(())
        } else {
            Err(StoreError::NotFound(id.clone()))
        }
    }

    fn list(&self) -> Result<Vec<EntryId>, StoreError> {
        Ok(self.entries.read().unwrap().keys().cloned().collect())
    }
}

//! Typed convenience layer over the JSON payload family.
//!
//! Serializes any `serde`-capable value through the same on-disk JSON
//! representation the `*_json` operations use. Callers must stay consistent
//! per key: a key stored through this layer must be read back through it
//! (or as JSON), never as raw text.

use serde::Serialize;
use serde::de::DeserializeOwned;

use larder_store::{EntryId, EntryStore};

use crate::cache::{Cache, Lookup};
use crate::error::CacheError;

impl<S: EntryStore> Cache<S> {
    /// Store any serializable value under `key`, bypassing freshness checks.
    ///
    /// # Errors
    ///
    /// - [`CacheError::EncodeJson`] if the value cannot be serialized
    /// - [`CacheError::Store`] if the payload cannot be persisted
    pub fn store_value<T: Serialize>(&self, key: &str, value: &T) -> Result<(), CacheError> {
        let payload = serde_json::to_vec(value).map_err(|source| CacheError::EncodeJson {
            key: key.to_owned(),
            source,
        })?;
        self.store().write(&EntryId::from_key(key), &payload)?;
        Ok(())
    }

    /// Pure cache read deserializing the stored payload into `T`.
    ///
    /// # Errors
    ///
    /// - [`CacheError::NotCached`] if the key has no fresh entry
    /// - [`CacheError::InvalidJson`] if the payload does not deserialize
    pub fn hit_value<T: DeserializeOwned>(&self, key: &str) -> Result<T, CacheError> {
        match self.lookup(key)? {
            Lookup::Fresh(payload) => {
                serde_json::from_slice(&payload).map_err(|source| CacheError::InvalidJson {
                    key: key.to_owned(),
                    source,
                })
            }
            Lookup::Stale | Lookup::Absent => Err(CacheError::NotCached {
                key: key.to_owned(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use larder_store::MockStore;
    use serde::Deserialize;

    use super::*;

    const TTL: Duration = Duration::from_secs(60);

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Report {
        title: String,
        rows: Vec<u32>,
    }

    fn report() -> Report {
        Report {
            title: "daily".to_owned(),
            rows: vec![1, 2, 3],
        }
    }

    #[test]
    fn test_typed_roundtrip() {
        use pretty_assertions::assert_eq;

        let cache = Cache::with_store(MockStore::new(), TTL);

        cache.store_value("reports/daily", &report()).unwrap();

        let restored: Report = cache.hit_value("reports/daily").unwrap();
        assert_eq!(restored, report());
    }

    #[test]
    fn test_typed_value_is_readable_as_json() {
        // The typed layer shares the JSON payload family.
        let cache = Cache::with_store(MockStore::new(), TTL);
        cache.store_value("reports/daily", &report()).unwrap();

        let map = cache.hit_json("reports/daily").unwrap();
        assert_eq!(
            map.get("title"),
            Some(&serde_json::Value::String("daily".to_owned()))
        );
    }

    #[test]
    fn test_hit_value_on_miss_is_not_cached() {
        let cache = Cache::with_store(MockStore::new(), TTL);

        let err = cache.hit_value::<Report>("ghost").unwrap_err();

        assert!(matches!(err, CacheError::NotCached { .. }));
    }

    #[test]
    fn test_hit_value_on_stale_entry_is_not_cached() {
        let store = MockStore::new().with_entry("reports/daily", "{}");
        store.backdate("reports/daily", TTL + Duration::from_secs(1));
        let cache = Cache::with_store(store, TTL);

        let err = cache.hit_value::<serde_json::Value>("reports/daily").unwrap_err();

        assert!(matches!(err, CacheError::NotCached { .. }));
    }

    #[test]
    fn test_hit_value_on_mismatched_shape_is_invalid_json() {
        let store = MockStore::new().with_entry("reports/daily", r#"{"unexpected": true}"#);
        let cache = Cache::with_store(store, TTL);

        let err = cache.hit_value::<Report>("reports/daily").unwrap_err();

        assert!(matches!(err, CacheError::InvalidJson { .. }));
        assert_eq!(err.key(), Some("reports/daily"));
    }
}

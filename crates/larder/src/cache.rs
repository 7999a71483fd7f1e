//! Read-through cache facade.
//!
//! [`Cache`] orchestrates the read-through/write-back protocol over an
//! [`EntryStore`]: a get returns the stored payload while it is fresh and
//! otherwise invokes the caller-supplied producer, persists the result, and
//! returns it. Freshness decisions go through the explicit [`Lookup`]
//! variant; no error drives internal control flow.

use std::time::{Duration, SystemTime};

use larder_store::{EntryId, EntryStore, FsStore};

use crate::config::CacheConfig;
use crate::error::CacheError;
use crate::freshness::is_fresh;
use crate::producer::{JsonMap, JsonProducer, StringProducer};

/// Outcome of looking a key up in the store.
///
/// `Stale` and `Absent` lead to the same externally observable decisions
/// everywhere; they are kept apart so callers inspecting a lookup can tell
/// an expired entry from one that never existed.
#[derive(Debug)]
pub enum Lookup {
    /// A fresh entry exists; its full payload.
    Fresh(Vec<u8>),
    /// An entry exists but its freshness window has passed.
    Stale,
    /// No entry exists.
    Absent,
}

/// Read-through cache over an entry store.
///
/// Every operation runs to completion on the caller's thread; producers are
/// invoked synchronously, at most once per call, with no internal timeout or
/// retry. Calls are not coordinated with each other: two callers racing on
/// the same key can each observe a miss, each produce, and each write, with
/// the last write winning. Callers that need per-key serialization must add
/// it themselves.
///
/// # Example
///
/// ```ignore
/// use std::time::Duration;
/// use larder::{Cache, CacheConfig, ProducerError};
///
/// let cache = Cache::new(CacheConfig::new(".cache").with_ttl(Duration::from_secs(2)));
/// let producer = || -> Result<String, ProducerError> { Ok("prova".to_owned()) };
/// let value = cache.get_string("prova2", Some(&producer))?;
/// assert_eq!(value, "prova");
/// assert!(cache.is_cached("prova2"));
/// ```
#[derive(Debug)]
pub struct Cache<S: EntryStore = FsStore> {
    store: S,
    ttl: Duration,
}

impl Cache<FsStore> {
    /// Build a filesystem-backed cache from explicit settings.
    #[must_use]
    pub fn new(config: CacheConfig) -> Self {
        Self::with_store(FsStore::new(config.root), config.ttl)
    }
}

impl<S: EntryStore> Cache<S> {
    /// Build a cache over any entry store backend.
    #[must_use]
    pub fn with_store(store: S, ttl: Duration) -> Self {
        Self { store, ttl }
    }

    /// The backing entry store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The freshness window applied to all entries.
    #[must_use]
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Look a key up: fresh payload, stale entry, or no entry at all.
    ///
    /// Freshness and existence are evaluated with a single wall-clock read.
    /// An entry that vanishes between the timestamp check and the payload
    /// read counts as absent.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::Store`] on backend failures other than a miss.
    pub fn lookup(&self, key: &str) -> Result<Lookup, CacheError> {
        let id = EntryId::from_key(key);
        let last_write = match self.store.last_write(&id) {
            Ok(t) => t,
            Err(e) if e.is_not_found() => return Ok(Lookup::Absent),
            Err(e) => return Err(e.into()),
        };
        if !is_fresh(last_write, self.ttl, SystemTime::now()) {
            return Ok(Lookup::Stale);
        }
        match self.store.read(&id) {
            Ok(payload) => Ok(Lookup::Fresh(payload)),
            Err(e) if e.is_not_found() => Ok(Lookup::Absent),
            Err(e) => Err(e.into()),
        }
    }

    /// Read-through get for a text payload.
    ///
    /// Returns the stored text while the entry is fresh. On a miss (absent
    /// or stale) the producer is called once, its result persisted and
    /// returned.
    ///
    /// # Errors
    ///
    /// - [`CacheError::MissingProducer`] on a miss with no producer supplied
    /// - [`CacheError::Producer`] if the producer fails (nothing is stored)
    /// - [`CacheError::InvalidUtf8`] if the stored payload is not text
    pub fn get_string(
        &self,
        key: &str,
        producer: Option<&dyn StringProducer>,
    ) -> Result<String, CacheError> {
        match self.lookup(key)? {
            Lookup::Fresh(payload) => decode_string(key, payload),
            Lookup::Stale | Lookup::Absent => {
                tracing::debug!("no fresh entry for `{key}`, producing");
                let producer = producer.ok_or_else(|| missing_producer(key))?;
                let value = producer.produce().map_err(CacheError::Producer)?;
                self.store_string(key, &value)?;
                Ok(value)
            }
        }
    }

    /// Read-through get for a JSON object payload.
    ///
    /// # Errors
    ///
    /// As [`get_string`](Self::get_string), with [`CacheError::InvalidJson`]
    /// when a fresh payload does not parse as a JSON object.
    pub fn get_json(
        &self,
        key: &str,
        producer: Option<&dyn JsonProducer>,
    ) -> Result<JsonMap, CacheError> {
        match self.lookup(key)? {
            Lookup::Fresh(payload) => decode_json(key, &payload),
            Lookup::Stale | Lookup::Absent => {
                tracing::debug!("no fresh entry for `{key}`, producing");
                let producer = producer.ok_or_else(|| missing_producer(key))?;
                let value = producer.produce().map_err(CacheError::Producer)?;
                self.store_json(key, &value)?;
                Ok(value)
            }
        }
    }

    /// Produce and overwrite unconditionally, ignoring freshness.
    ///
    /// The forced variant of [`get_string`](Self::get_string): the producer
    /// is always required and always called, and its result fully replaces
    /// any existing entry, fresh or not.
    ///
    /// # Errors
    ///
    /// - [`CacheError::MissingProducer`] when no producer is supplied
    /// - [`CacheError::Producer`] if the producer fails (the old entry is
    ///   left untouched)
    pub fn refresh_string(
        &self,
        key: &str,
        producer: Option<&dyn StringProducer>,
    ) -> Result<String, CacheError> {
        let producer = producer.ok_or_else(|| missing_producer(key))?;
        let value = producer.produce().map_err(CacheError::Producer)?;
        self.store_string(key, &value)?;
        Ok(value)
    }

    /// Produce and overwrite unconditionally, ignoring freshness.
    ///
    /// # Errors
    ///
    /// As [`refresh_string`](Self::refresh_string).
    pub fn refresh_json(
        &self,
        key: &str,
        producer: Option<&dyn JsonProducer>,
    ) -> Result<JsonMap, CacheError> {
        let producer = producer.ok_or_else(|| missing_producer(key))?;
        let value = producer.produce().map_err(CacheError::Producer)?;
        self.store_json(key, &value)?;
        Ok(value)
    }

    /// Pure cache read for a text payload; never calls a producer.
    ///
    /// # Errors
    ///
    /// - [`CacheError::NotCached`] if the key has no fresh entry
    /// - [`CacheError::InvalidUtf8`] if the stored payload is not text
    pub fn hit_string(&self, key: &str) -> Result<String, CacheError> {
        match self.lookup(key)? {
            Lookup::Fresh(payload) => decode_string(key, payload),
            Lookup::Stale | Lookup::Absent => Err(not_cached(key)),
        }
    }

    /// Pure cache read for a JSON object payload; never calls a producer.
    ///
    /// # Errors
    ///
    /// - [`CacheError::NotCached`] if the key has no fresh entry
    /// - [`CacheError::InvalidJson`] if the stored payload does not parse;
    ///   a fresh entry that fails to decode is an error, not a miss
    pub fn hit_json(&self, key: &str) -> Result<JsonMap, CacheError> {
        match self.lookup(key)? {
            Lookup::Fresh(payload) => decode_json(key, &payload),
            Lookup::Stale | Lookup::Absent => Err(not_cached(key)),
        }
    }

    /// Store a text payload unconditionally, bypassing freshness checks.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::Store`] if the payload cannot be persisted.
    pub fn store_string(&self, key: &str, value: &str) -> Result<(), CacheError> {
        self.store
            .write(&EntryId::from_key(key), value.as_bytes())?;
        Ok(())
    }

    /// Store a JSON object payload unconditionally.
    ///
    /// # Errors
    ///
    /// - [`CacheError::EncodeJson`] if the value cannot be serialized
    /// - [`CacheError::Store`] if the payload cannot be persisted
    pub fn store_json(&self, key: &str, value: &JsonMap) -> Result<(), CacheError> {
        let payload = serde_json::to_vec(value).map_err(|source| CacheError::EncodeJson {
            key: key.to_owned(),
            source,
        })?;
        self.store.write(&EntryId::from_key(key), &payload)?;
        Ok(())
    }

    /// True iff an entry exists for `key` and is still fresh.
    ///
    /// A stale entry answers `false`, exactly like an absent one; so do
    /// backend failures. This is a boolean probe, not an error channel.
    #[must_use]
    pub fn is_cached(&self, key: &str) -> bool {
        self.store
            .last_write(&EntryId::from_key(key))
            .is_ok_and(|last_write| is_fresh(last_write, self.ttl, SystemTime::now()))
    }

    /// Remove the entry for `key`.
    ///
    /// Existence, not freshness, governs: a stale entry is deleted just as
    /// a fresh one is.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::NotCached`] if the key has no entry at all.
    pub fn invalidate(&self, key: &str) -> Result<(), CacheError> {
        match self.store.delete(&EntryId::from_key(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.is_not_found() => Err(not_cached(key)),
            Err(e) => Err(e.into()),
        }
    }

    /// Remove every entry in the store, returning how many were removed.
    ///
    /// Best-effort, not transactional: the store is enumerated once and
    /// entries that vanish between listing and deletion are skipped without
    /// error. An empty store is a no-op, `Ok(0)`.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::Store`] if the store cannot be enumerated or a
    /// deletion fails for a reason other than the entry being gone.
    pub fn invalidate_all(&self) -> Result<usize, CacheError> {
        let mut removed = 0;
        for id in self.store.list()? {
            match self.store.delete(&id) {
                Ok(()) => removed += 1,
                Err(e) if e.is_not_found() => {
                    tracing::debug!("entry `{id}` vanished during bulk invalidation, skipping");
                }
                Err(e) => return Err(e.into()),
            }
        }
        Ok(removed)
    }
}

fn not_cached(key: &str) -> CacheError {
    CacheError::NotCached {
        key: key.to_owned(),
    }
}

fn missing_producer(key: &str) -> CacheError {
    CacheError::MissingProducer {
        key: key.to_owned(),
    }
}

fn decode_string(key: &str, payload: Vec<u8>) -> Result<String, CacheError> {
    String::from_utf8(payload).map_err(|source| CacheError::InvalidUtf8 {
        key: key.to_owned(),
        source,
    })
}

fn decode_json(key: &str, payload: &[u8]) -> Result<JsonMap, CacheError> {
    serde_json::from_slice(payload).map_err(|source| CacheError::InvalidJson {
        key: key.to_owned(),
        source,
    })
}

//! Storage identifier derivation.
//!
//! Provides [`EntryId`] for mapping caller-chosen cache keys to fixed-length,
//! medium-safe storage names.

use sha2::{Digest, Sha256};

/// Storage identifier derived from a cache key.
///
/// The identifier is the SHA-256 digest of the key, hex encoded: 64 lowercase
/// hex characters. The mapping is stable across runs (same key, same
/// identifier), safe to use as a file name, and collision-free short of a
/// hash collision. Keys never round-trip back out of an identifier; the
/// digest is one-way.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EntryId(String);

impl EntryId {
    /// Derive the identifier for a cache key.
    ///
    /// Keys must be non-empty; an empty key is a caller bug, checked only in
    /// debug builds.
    #[must_use]
    pub fn from_key(key: &str) -> Self {
        debug_assert!(!key.is_empty(), "cache keys must be non-empty");
        let mut hasher = Sha256::new();
        hasher.update(key.as_bytes());
        Self(hex::encode(hasher.finalize()))
    }

    /// Parse a storage name back into an identifier.
    ///
    /// Accepts exactly the names [`from_key`](Self::from_key) produces: 64
    /// lowercase hex characters. Anything else (stray files, temp files)
    /// yields `None`, which keeps backend enumeration free of non-entries.
    #[must_use]
    pub fn from_hex(name: &str) -> Option<Self> {
        let valid = name.len() == 64
            && name
                .bytes()
                .all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'));
        valid.then(|| Self(name.to_owned()))
    }

    /// The identifier as a string slice — the entry's name on the backing
    /// medium (for the filesystem backend, the file name under the root).
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

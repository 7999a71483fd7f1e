//! Entry store trait and error type.

use std::path::PathBuf;
use std::time::SystemTime;

use crate::id::EntryId;

/// Error raised by an entry store backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No entry is persisted under the identifier.
    #[error("no entry stored under `{0}`")]
    NotFound(EntryId),
    /// Any other backend failure.
    #[error("storage failure at {}: {}", .path.display(), .source)]
    Io {
        /// Path the backend was touching.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    /// True iff this is the store-level miss, as opposed to a real failure.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Persistence seam for cache entries.
///
/// An entry is an opaque byte payload plus a last-write timestamp, keyed by
/// an [`EntryId`]. Stores answer existence regardless of freshness; deciding
/// whether an entry is still *valid* is the caller's business.
///
/// Implementations must never surface a partial payload: `read` returns the
/// whole entry or fails, and `write` fully replaces any previous payload so
/// no tail of a longer predecessor survives.
pub trait EntryStore: Send + Sync {
    /// True iff a persisted entry exists for `id`, regardless of freshness.
    ///
    /// Returns `false` on backend errors.
    fn exists(&self, id: &EntryId) -> bool;

    /// When the entry was last written.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no entry exists for `id`.
    fn last_write(&self, id: &EntryId) -> Result<SystemTime, StoreError>;

    /// The entry's full payload.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no entry exists for `id`.
    fn read(&self, id: &EntryId) -> Result<Vec<u8>, StoreError>;

    /// Persist a payload under `id`, fully replacing any previous entry.
    ///
    /// Overwriting is idempotent; the store keeps no history.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the payload cannot be persisted.
    fn write(&self, id: &EntryId, payload: &[u8]) -> Result<(), StoreError>;

    /// Remove the entry under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no entry exists for `id`.
    fn delete(&self, id: &EntryId) -> Result<(), StoreError>;

    /// Snapshot of all currently stored identifiers.
    ///
    /// The snapshot is taken at call time; entries created or removed
    /// afterwards are not reflected. Order is unspecified.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the backend cannot be enumerated.
    fn list(&self) -> Result<Vec<EntryId>, StoreError>;
}

//! Cache error types.

use larder_store::StoreError;

use crate::producer::ProducerError;

/// Error raised by cache operations.
///
/// Every error surfaces synchronously to the caller of the operation that
/// triggered it; the cache never logs-and-swallows, except for entries that
/// vanish mid-iteration during [`invalidate_all`](crate::Cache::invalidate_all).
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    /// No fresh entry for the key: never stored, or expired.
    ///
    /// Returned verbatim by the pure-read `hit_*` operations; the `get_*`
    /// operations handle this case internally when a producer is available.
    #[error("resource `{key}` is not cached")]
    NotCached {
        /// The cache key that missed.
        key: String,
    },
    /// A read-through or refresh needed a producer and none was supplied.
    #[error("resource `{key}` must be produced, but no producer was supplied")]
    MissingProducer {
        /// The key whose value could not be produced.
        key: String,
    },
    /// Stored bytes are not valid UTF-8 text.
    ///
    /// Distinct from a miss: a fresh entry that fails to decode is never
    /// silently re-produced.
    #[error("cached payload for `{key}` is not valid UTF-8")]
    InvalidUtf8 {
        /// The key whose payload failed to decode.
        key: String,
        /// Underlying decode failure.
        #[source]
        source: std::string::FromUtf8Error,
    },
    /// Stored bytes do not parse as a JSON object.
    #[error("cached payload for `{key}` is not a JSON object")]
    InvalidJson {
        /// The key whose payload failed to parse.
        key: String,
        /// Underlying parse failure.
        #[source]
        source: serde_json::Error,
    },
    /// A value could not be serialized for storage.
    #[error("value for `{key}` could not be encoded as JSON")]
    EncodeJson {
        /// The key the value was meant to be stored under.
        key: String,
        /// Underlying encode failure.
        #[source]
        source: serde_json::Error,
    },
    /// Producer failure, passed through unchanged.
    #[error(transparent)]
    Producer(ProducerError),
    /// Backend failure other than a plain miss.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl CacheError {
    /// The cache key the error concerns, where one exists.
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::NotCached { key }
            | Self::MissingProducer { key }
            | Self::InvalidUtf8 { key, .. }
            | Self::InvalidJson { key, .. }
            | Self::EncodeJson { key, .. } => Some(key),
            Self::Producer(_) | Self::Store(_) => None,
        }
    }
}

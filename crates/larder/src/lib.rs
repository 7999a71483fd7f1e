//! Read-through file cache with TTL freshness.
//!
//! A [`Cache`] returns a previously stored value while it is still fresh,
//! and otherwise invokes a caller-supplied producer to obtain fresh data,
//! persists it, and returns it. Freshness is a single TTL applied uniformly
//! to all entries; invalidation works per key or in bulk.
//!
//! The crate is organized around three seams:
//!
//! - [`Cache`]: the facade orchestrating the read-through protocol
//! - [`StringProducer`] / [`JsonProducer`]: caller capabilities invoked on
//!   a miss (plain closures work through blanket impls)
//! - `larder_store::EntryStore`: the persistence backend ([`FsStore`] by
//!   default, `MockStore` for tests behind the `mock` feature)
//!
//! # Example
//!
//! ```ignore
//! use std::time::Duration;
//! use larder::{Cache, CacheConfig, ProducerError};
//!
//! let cache = Cache::new(CacheConfig::new(".cache").with_ttl(Duration::from_secs(300)));
//!
//! let fetch = || -> Result<String, ProducerError> {
//!     Ok(expensive_computation()?)
//! };
//! // First call produces and persists; later calls within the TTL are hits.
//! let value = cache.get_string("reports/daily", Some(&fetch))?;
//! ```
//!
//! # Limitations
//!
//! The cache is a single authority over one storage root. Multiple
//! instances may share a root, but nothing coordinates them: two callers
//! racing a miss on the same key each produce and each write, and the last
//! write wins. Producers run synchronously with no internal timeout.

mod cache;
mod config;
mod error;
pub mod freshness;
mod producer;
mod typed;

pub use cache::{Cache, Lookup};
pub use config::{CacheConfig, DEFAULT_TTL};
pub use error::CacheError;
pub use larder_store::{EntryId, EntryStore, FsStore, StoreError};
#[cfg(feature = "mock")]
pub use larder_store::MockStore;
pub use producer::{JsonMap, JsonProducer, ProducerError, StringProducer};

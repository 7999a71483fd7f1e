//! Entry storage for the larder cache.
//!
//! This crate persists raw byte payloads keyed by an opaque identifier and
//! reports when each payload was last written. It knows nothing about
//! freshness or payload formats; those decisions belong to the cache facade
//! in the `larder` crate.
//!
//! The crate provides:
//! - [`EntryId`]: storage identifier derived from a cache key (SHA-256, hex)
//! - [`EntryStore`] trait with `exists`, `last_write`, `read`, `write`,
//!   `delete`, and `list`
//! - [`FsStore`]: filesystem backend, one file per entry under a root
//!   directory
//! - [`MockStore`]: in-memory backend for testing (behind the `mock`
//!   feature flag)
//!
//! # Example
//!
//! ```ignore
//! use larder_store::{EntryId, EntryStore, FsStore};
//!
//! let store = FsStore::new(".cache");
//! let id = EntryId::from_key("reports/daily");
//! store.write(&id, b"payload")?;
//! assert!(store.exists(&id));
//! ```

mod fs;
mod id;
#[cfg(feature = "mock")]
mod mock;
mod store;

pub use fs::FsStore;
pub use id::EntryId;
#[cfg(feature = "mock")]
pub use mock::MockStore;
pub use store::{EntryStore, StoreError};

//! Cache construction settings.

use std::path::PathBuf;
use std::time::Duration;

/// Freshness window applied when none is configured: one hour.
pub const DEFAULT_TTL: Duration = Duration::from_secs(3600);

/// Settings for a cache instance.
///
/// A cache owns exactly one storage root and one TTL for its lifetime; both
/// are fixed here at construction. There is no environment lookup and no
/// config-file discovery — callers wire these values in explicitly.
///
/// Multiple instances may point at the same root; nothing enforces
/// exclusivity, and concurrent writers to one key resolve as last write
/// wins.
#[derive(Clone, Debug)]
pub struct CacheConfig {
    /// Directory the entries live under, one file per entry.
    pub root: PathBuf,
    /// Freshness window applied uniformly to all entries.
    pub ttl: Duration,
}

impl CacheConfig {
    /// Configuration rooted at `root` with the default one-hour TTL.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ttl: DEFAULT_TTL,
        }
    }

    /// Replace the freshness window.
    #[must_use]
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }
}

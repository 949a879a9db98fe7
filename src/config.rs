//! Configuration for the response cache.
//!
//! This module provides a builder for the two knobs the cache recognizes:
//! how long an entry stays fresh and how many entries may be held at once.

use std::time::Duration;

/// Default time-to-live for cached values (one hour).
pub const DEFAULT_TTL: Duration = Duration::from_secs(3600);

/// Default maximum number of cached values.
pub const DEFAULT_MAX_SIZE: usize = 100;

/// Configuration for creating a new cache instance.
///
/// Use the builder pattern to construct configuration:
///
/// ```
/// use diff_cache::CacheConfig;
///
/// let config = CacheConfig::new()
///     .ttl_seconds(600)
///     .max_size(500)
///     .build();
///
/// assert_eq!(config.get_max_size(), 500);
/// ```
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Age at which an entry is considered stale.
    pub(crate) ttl: Duration,

    /// Maximum number of entries the cache can hold.
    /// When a new key arrives at this limit, the oldest entry is evicted.
    pub(crate) max_size: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: DEFAULT_TTL,
            max_size: DEFAULT_MAX_SIZE,
        }
    }
}

impl CacheConfig {
    /// Create a new configuration builder with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the time-to-live for entries.
    ///
    /// An entry is stale once it is strictly older than the TTL, so with a
    /// zero TTL only lookups made at the same clock reading can hit.
    pub fn ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Set the time-to-live in whole seconds.
    pub fn ttl_seconds(self, seconds: u64) -> Self {
        self.ttl(Duration::from_secs(seconds))
    }

    /// Set the maximum number of entries.
    ///
    /// Values below one are raised to one; the cache always has room for
    /// the value it just computed.
    pub fn max_size(mut self, size: usize) -> Self {
        self.max_size = size.max(1);
        self
    }

    /// Build the final configuration.
    pub fn build(self) -> Self {
        self
    }

    /// Get the configured time-to-live.
    pub fn get_ttl(&self) -> Duration {
        self.ttl
    }

    /// Get the configured maximum number of entries.
    pub fn get_max_size(&self) -> usize {
        self.max_size
    }
}

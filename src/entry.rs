//! Cache entry with its creation timestamp.

use std::time::{Duration, Instant};

/// A single cached value and the moment it was computed.
///
/// Entries are never mutated in place; a refresh replaces the whole entry.
#[derive(Debug, Clone)]
pub struct Entry<V> {
    /// The stored value.
    pub(crate) value: V,

    /// When this value was stored.
    pub(crate) created_at: Instant,
}

impl<V> Entry<V> {
    /// Create an entry with an explicit creation time.
    pub fn created_at(value: V, created_at: Instant) -> Self {
        Self { value, created_at }
    }

    /// Check whether this entry is stale for the given TTL.
    ///
    /// An entry is stale once it is strictly older than `ttl`.
    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.is_expired_at(Instant::now(), ttl)
    }

    /// Check staleness against a given clock reading.
    /// This is useful for testing with a controlled clock.
    pub fn is_expired_at(&self, now: Instant, ttl: Duration) -> bool {
        now.saturating_duration_since(self.created_at) > ttl
    }

    /// Get a reference to the value.
    pub fn value(&self) -> &V {
        &self.value
    }
}

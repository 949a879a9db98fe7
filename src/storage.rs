//! Internal storage for the response cache.
//!
//! Entries live in an `IndexMap` kept in creation order: every insert goes
//! to the back, so the front is always the oldest entry and eviction is a
//! pop from the front.

use indexmap::IndexMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Instant;
use tracing::{debug, trace};

use crate::config::CacheConfig;
use crate::entry::Entry;
use crate::stats::CacheStats;

/// Thread-safe map of keys to timestamped values.
///
/// This is the internal implementation; users should use `Cache` instead.
#[derive(Debug)]
pub struct Store<V> {
    /// The entries, oldest first.
    entries: Mutex<IndexMap<String, Entry<V>>>,

    /// Configuration for this cache instance.
    config: CacheConfig,

    /// Statistics for cache operations.
    stats: Arc<CacheStats>,
}

impl<V: Clone> Store<V> {
    /// Create an empty store with the given configuration.
    pub fn new(config: CacheConfig) -> Self {
        Self {
            entries: Mutex::new(IndexMap::new()),
            config,
            stats: Arc::new(CacheStats::new()),
        }
    }

    /// Look up a live value, counting a hit or a miss.
    ///
    /// A stale entry is removed on the way out.
    pub fn get(&self, key: &str) -> Option<V> {
        self.get_at(key, Instant::now())
    }

    pub(crate) fn get_at(&self, key: &str, now: Instant) -> Option<V> {
        let mut entries = self.lock();

        let expired = match entries.get(key) {
            Some(entry) if !entry.is_expired_at(now, self.config.ttl) => {
                self.stats.record_hit();
                trace!(key, "cache hit");
                return Some(entry.value().clone());
            }
            Some(_) => true,
            None => false,
        };

        if expired {
            entries.shift_remove(key);
            self.stats.record_expiration();
            self.stats.set_size(entries.len());
            debug!(key, "expired cache entry");
        }
        self.stats.record_miss();
        trace!(key, "cache miss");
        None
    }

    /// Store a value, evicting the oldest entries if a new key would
    /// exceed the configured size.
    pub fn insert(&self, key: impl Into<String>, value: V) {
        self.insert_at(key.into(), value, Instant::now());
    }

    pub(crate) fn insert_at(&self, key: String, value: V, now: Instant) {
        let mut entries = self.lock();

        // A refreshed key moves to the back with its new timestamp.
        if entries.shift_remove(&key).is_none() {
            while entries.len() >= self.config.max_size {
                if !self.evict_oldest(&mut entries) {
                    break;
                }
            }
        }

        entries.insert(key, Entry::created_at(value, now));
        self.stats.record_set();
        self.stats.set_size(entries.len());
    }

    /// Check for a live entry without touching hit/miss counters.
    pub fn contains(&self, key: &str) -> bool {
        let entries = self.lock();
        entries
            .get(key)
            .is_some_and(|entry| !entry.is_expired(self.config.ttl))
    }

    /// Number of entries held, stale ones included until they are noticed.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove all entries.
    pub fn clear(&self) {
        let mut entries = self.lock();
        entries.clear();
        self.stats.set_size(0);
    }

    /// Get a reference to the statistics.
    pub fn stats(&self) -> Arc<CacheStats> {
        Arc::clone(&self.stats)
    }

    /// Get the configuration this store was built with.
    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Remove every stale entry, returning how many were dropped.
    pub fn cleanup_expired(&self) -> usize {
        let mut entries = self.lock();
        let initial_len = entries.len();
        let now = Instant::now();
        let ttl = self.config.ttl;

        entries.retain(|_, entry| {
            let expired = entry.is_expired_at(now, ttl);
            if expired {
                self.stats.record_expiration();
            }
            !expired
        });
        self.stats.set_size(entries.len());

        initial_len - entries.len()
    }

    /// Entries are replaced whole under the lock, so a poisoned map is
    /// still consistent and safe to keep using.
    fn lock(&self) -> MutexGuard<'_, IndexMap<String, Entry<V>>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Evict the entry with the oldest creation time.
    fn evict_oldest(&self, entries: &mut IndexMap<String, Entry<V>>) -> bool {
        match entries.shift_remove_index(0) {
            Some((key, _)) => {
                self.stats.record_eviction();
                debug!(key = %key, "evicted oldest cache entry");
                true
            }
            None => false,
        }
    }
}

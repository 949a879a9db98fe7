//! The main cache interface.
//!
//! `Cache` memoizes deterministic computations (typically slow network
//! calls) behind a TTL and a size bound. Construct one at startup and hand
//! clones of it to every call site that needs memoization.

use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

use crate::config::CacheConfig;
use crate::error::{CacheError, CacheResult};
use crate::key::CacheKey;
use crate::stats::{CacheStats, StatsSnapshot};
use crate::storage::Store;

/// A thread-safe TTL cache of computed values.
///
/// Cloning a `Cache` creates a new handle to the same underlying entries.
///
/// # Example
/// ```
/// use diff_cache::{Cache, CacheConfig};
///
/// let cache: Cache<String> = Cache::new(CacheConfig::new().ttl_seconds(300).build());
///
/// let key = cache.key_for("greet", &("Alice",)).unwrap();
/// let value = cache
///     .get_or_compute(&key, || Ok::<_, std::io::Error>("hello Alice".to_string()))
///     .unwrap();
/// assert_eq!(value, "hello Alice");
///
/// // Second call is served from the cache.
/// let again = cache
///     .get_or_compute(&key, || -> Result<String, std::io::Error> { unreachable!() })
///     .unwrap();
/// assert_eq!(again, "hello Alice");
/// ```
#[derive(Debug)]
pub struct Cache<V> {
    store: Arc<Store<V>>,
}

impl<V> Clone for Cache<V> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<V: Clone> Cache<V> {
    /// Create a new cache with the given configuration.
    pub fn new(config: CacheConfig) -> Self {
        Self {
            store: Arc::new(Store::new(config)),
        }
    }

    /// Derive the key for calling `name` with `args`.
    ///
    /// See [`CacheKey::derive`].
    pub fn key_for<A>(&self, name: &str, args: &A) -> CacheResult<CacheKey>
    where
        A: Serialize + ?Sized,
    {
        CacheKey::derive(name, args)
    }

    /// Return the live value for `key`, or run `compute` and remember its
    /// result.
    ///
    /// The map lock is not held while `compute` runs, so two callers
    /// missing on the same key at the same time may both compute; the later
    /// write wins. An `Err` from `compute` is returned unchanged and nothing
    /// is stored.
    pub fn get_or_compute<F, E>(&self, key: &CacheKey, compute: F) -> Result<V, E>
    where
        F: FnOnce() -> Result<V, E>,
    {
        if let Some(value) = self.store.get(key.as_str()) {
            return Ok(value);
        }

        let value = compute()?;
        self.store.insert(key.as_str(), value.clone());
        debug!(key = %key, "cached computed value");
        Ok(value)
    }

    /// Wrap `f` so that calls with equal arguments within the TTL reuse the
    /// first result.
    ///
    /// `name` identifies the function in the key; two different functions
    /// sharing a cache must use different names.
    ///
    /// ```
    /// use diff_cache::{Cache, CacheError};
    /// use std::cell::Cell;
    ///
    /// #[derive(Debug)]
    /// enum AppError { Cache(CacheError) }
    /// impl From<CacheError> for AppError {
    ///     fn from(err: CacheError) -> Self { AppError::Cache(err) }
    /// }
    ///
    /// let calls = Cell::new(0);
    /// let cache: Cache<usize> = Cache::default();
    /// let word_count = cache.memoize("word_count", |text: &str| {
    ///     calls.set(calls.get() + 1);
    ///     Ok::<_, AppError>(text.split_whitespace().count())
    /// });
    ///
    /// assert_eq!(word_count("a b c").unwrap(), 3);
    /// assert_eq!(word_count("a b c").unwrap(), 3);
    /// assert_eq!(calls.get(), 1);
    /// ```
    pub fn memoize<'a, A, F, E>(&'a self, name: &'a str, f: F) -> impl Fn(&A) -> Result<V, E> + 'a
    where
        A: Serialize + ?Sized + 'a,
        F: Fn(&A) -> Result<V, E> + 'a,
        E: From<CacheError> + 'a,
    {
        move |args: &A| {
            let key = self.key_for(name, args)?;
            self.get_or_compute(&key, || f(args))
        }
    }

    /// Get a live value without computing anything.
    pub fn get(&self, key: &CacheKey) -> Option<V> {
        self.store.get(key.as_str())
    }

    /// Store a value directly, replacing any previous one.
    pub fn insert(&self, key: &CacheKey, value: V) {
        self.store.insert(key.as_str(), value);
    }

    /// Check for a live entry. Does not count as a hit or a miss.
    pub fn contains(&self, key: &CacheKey) -> bool {
        self.store.contains(key.as_str())
    }

    /// Number of entries held.
    ///
    /// May include stale entries that have not been looked up or cleaned
    /// since they expired.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Check if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Remove all entries.
    pub fn clear(&self) {
        self.store.clear();
    }

    /// Remove stale entries now rather than on their next lookup.
    ///
    /// Returns the number of entries removed.
    pub fn cleanup_expired(&self) -> usize {
        self.store.cleanup_expired()
    }

    /// Get a snapshot of the cache statistics.
    pub fn stats(&self) -> StatsSnapshot {
        self.store.stats().snapshot()
    }

    /// Get a reference to the live statistics counters.
    pub fn stats_ref(&self) -> Arc<CacheStats> {
        self.store.stats()
    }

    /// The configuration this cache was built with.
    pub fn config(&self) -> &CacheConfig {
        self.store.config()
    }
}

impl<V: Clone> Default for Cache<V> {
    fn default() -> Self {
        Self::new(CacheConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::time::Duration;

    #[derive(Debug, PartialEq)]
    enum TestError {
        Upstream(&'static str),
        Key,
    }

    impl From<CacheError> for TestError {
        fn from(_: CacheError) -> Self {
            TestError::Key
        }
    }

    #[test]
    fn test_computes_once_within_ttl() {
        let cache: Cache<u32> = Cache::default();
        let key = cache.key_for("f", &(1,)).unwrap();
        let calls = Cell::new(0);

        for _ in 0..3 {
            let value = cache
                .get_or_compute(&key, || {
                    calls.set(calls.get() + 1);
                    Ok::<_, TestError>(42)
                })
                .unwrap();
            assert_eq!(value, 42);
        }

        assert_eq!(calls.get(), 1);
        let stats = cache.stats();
        assert_eq!(stats.hits, 2);
        assert_eq!(stats.misses, 1);
    }

    #[test]
    fn test_failure_is_not_cached() {
        let cache: Cache<u32> = Cache::default();
        let key = cache.key_for("f", &()).unwrap();

        let err = cache
            .get_or_compute(&key, || Err(TestError::Upstream("timeout")))
            .unwrap_err();
        assert_eq!(err, TestError::Upstream("timeout"));
        assert!(!cache.contains(&key));

        let value = cache.get_or_compute(&key, || Ok::<_, TestError>(7)).unwrap();
        assert_eq!(value, 7);
    }

    #[test]
    fn test_recomputes_after_ttl() {
        let cache: Cache<u32> = Cache::new(CacheConfig::new().ttl(Duration::from_millis(20)).build());
        let key = cache.key_for("f", &()).unwrap();
        let calls = Cell::new(0);
        let compute = || {
            calls.set(calls.get() + 1);
            Ok::<_, TestError>(calls.get())
        };

        assert_eq!(cache.get_or_compute(&key, compute).unwrap(), 1);
        assert_eq!(cache.get_or_compute(&key, compute).unwrap(), 1);

        std::thread::sleep(Duration::from_millis(40));
        assert_eq!(cache.get_or_compute(&key, compute).unwrap(), 2);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_memoize_distinguishes_arguments() {
        let cache: Cache<String> = Cache::default();
        let calls = Cell::new(0);
        let shout = cache.memoize("shout", |s: &str| {
            calls.set(calls.get() + 1);
            Ok::<_, TestError>(s.to_uppercase())
        });

        assert_eq!(shout("a").unwrap(), "A");
        assert_eq!(shout("b").unwrap(), "B");
        assert_eq!(shout("a").unwrap(), "A");
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_cache_is_clone() {
        let cache1: Cache<String> = Cache::default();
        let key = cache1.key_for("f", &()).unwrap();
        cache1.insert(&key, "value".to_string());

        let cache2 = cache1.clone();
        assert_eq!(cache2.get(&key), Some("value".to_string()));
        cache2.clear();
        assert!(cache1.is_empty());
    }

    #[test]
    fn test_cache_thread_safety() {
        use std::thread;

        let cache: Cache<String> = Cache::new(CacheConfig::new().max_size(50).build());
        let mut handles = vec![];

        for i in 0..10 {
            let cache = cache.clone();
            handles.push(thread::spawn(move || {
                for j in 0..100 {
                    let key = cache.key_for("f", &(j,)).unwrap();
                    let _ = cache.get_or_compute(&key, || {
                        Ok::<_, TestError>(format!("value_{}_{}", i, j))
                    });
                }
            }));
        }

        for handle in handles {
            handle.join().unwrap();
        }

        assert!(!cache.is_empty());
        assert!(cache.len() <= 50);
    }
}

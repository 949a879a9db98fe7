//! # diff-cache
//!
//! Two small building blocks for tools that compare uploaded files and call
//! slow, deterministic services:
//!
//! - **Set-based diffing** of CSV, plain text and JSON inputs into
//!   only-in-A / only-in-B / common partitions with consistent counts.
//! - **A TTL cache** that memoizes computations by function name and
//!   arguments, with oldest-first eviction at a size bound.
//!
//! The two are independent; neither module uses the other.
//!
//! ## Comparing files
//!
//! ```rust
//! use diff_cache::compare_files;
//!
//! let result = compare_files(
//!     "before.csv", "id,name\n1,Alice\n2,Bob",
//!     "after.csv",  "id,name\n1,Alice\n3,Carol",
//! ).unwrap();
//!
//! assert_eq!(result.only_in_a, vec!["2 | Bob"]);
//! assert_eq!(result.only_in_b, vec!["3 | Carol"]);
//! assert_eq!(result.common, vec!["1 | Alice"]);
//! ```
//!
//! ## Memoizing a computation
//!
//! ```rust
//! use diff_cache::{Cache, CacheConfig};
//!
//! let cache: Cache<String> = Cache::new(
//!     CacheConfig::new().ttl_seconds(3600).max_size(100).build(),
//! );
//!
//! let key = cache.key_for("review_code", &("fn main() {}", "rust")).unwrap();
//! let review = cache.get_or_compute(&key, || {
//!     // e.g. a network call
//!     Ok::<_, std::io::Error>("looks fine".to_string())
//! });
//! assert_eq!(review.unwrap(), "looks fine");
//! ```
//!
//! ## Thread Safety
//!
//! `Cache` is safe to share across threads. Cloning it creates a new handle
//! to the same entries, so build one at startup and clone it into workers.

pub mod cache;
pub mod cli;
pub mod config;
pub mod diff;
pub mod dispatch;
pub mod error;
pub mod key;
pub mod stats;

pub use cache::Cache;
pub use config::CacheConfig;
pub use diff::{compare, compare_named, ComparableSet, DiffKind, DiffResult, DiffStats, Table};
pub use dispatch::compare_files;
pub use error::{CacheError, CacheResult, DiffError};
pub use key::CacheKey;
pub use stats::{CacheStats, StatsSnapshot};

// Internal modules - not part of public API
pub(crate) mod canonical;
pub(crate) mod entry;
pub(crate) mod storage;

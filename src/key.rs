//! Cache key derivation.
//!
//! A key is the SHA-256 of the canonical JSON form of the function name and
//! its arguments, so structurally equal arguments built separately always
//! land on the same key.

use serde::Serialize;
use serde_json::json;
use sha2::{Digest, Sha256};
use std::fmt;

use crate::canonical::to_canonical_string;
use crate::error::{CacheError, CacheResult};

/// Stable identifier of one (function, arguments) pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CacheKey(String);

impl CacheKey {
    /// Derive the key for calling `name` with `args`.
    ///
    /// `args` is typically a tuple of the call's arguments. Values that do
    /// not describe the computation (handles, clocks) must be left out by
    /// the caller.
    ///
    /// ```
    /// use diff_cache::CacheKey;
    ///
    /// let a = CacheKey::derive("summarize", &("report.csv", 3)).unwrap();
    /// let b = CacheKey::derive("summarize", &("report.csv", 3)).unwrap();
    /// assert_eq!(a, b);
    /// assert_eq!(a.as_str().len(), 64);
    /// ```
    pub fn derive<A>(name: &str, args: &A) -> CacheResult<Self>
    where
        A: Serialize + ?Sized,
    {
        let args = serde_json::to_value(args).map_err(|source| CacheError::KeySerialization {
            name: name.to_string(),
            source,
        })?;
        let material = to_canonical_string(&json!({ "name": name, "args": args }));

        let digest = Sha256::digest(material.as_bytes());
        Ok(CacheKey(hex::encode(digest)))
    }

    /// The hex digest.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CacheKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

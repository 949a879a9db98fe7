//! Set-based comparison of two inputs of the same kind.
//!
//! Each input is reduced to a set of canonical strings (rows, lines or JSON
//! entries) and the two sets are split into only-in-A, only-in-B and
//! common. Every partition comes back sorted ascending, so results are
//! reproducible regardless of input order.
//!
//! ```
//! use diff_cache::{compare, DiffKind};
//!
//! let result = compare(DiffKind::Lines, "apple\nbanana", "banana\ncherry").unwrap();
//! assert_eq!(result.only_in_a, vec!["apple"]);
//! assert_eq!(result.only_in_b, vec!["cherry"]);
//! assert_eq!(result.common, vec!["banana"]);
//! ```

mod json;
mod lines;
mod tabular;

pub use tabular::Table;

use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::error::DiffError;

/// Canonical items extracted from one input, kept sorted.
pub type ComparableSet = BTreeSet<String>;

/// How the two inputs are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DiffKind {
    /// CSV with a header row; rows are compared.
    Tabular,
    /// Newline-delimited text; lines are compared.
    Lines,
    /// JSON; array elements or top-level object entries are compared.
    Json,
}

impl DiffKind {
    /// Map a lowercase file extension to the kind it declares.
    pub fn from_extension(extension: &str) -> Option<DiffKind> {
        match extension {
            "csv" => Some(DiffKind::Tabular),
            "txt" => Some(DiffKind::Lines),
            "json" => Some(DiffKind::Json),
            _ => None,
        }
    }

    /// Get the string representation of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            DiffKind::Tabular => "tabular",
            DiffKind::Lines => "lines",
            DiffKind::Json => "json",
        }
    }
}

impl fmt::Display for DiffKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DiffKind {
    type Err = DiffError;

    /// Accepts kind names as well as the extensions that declare them.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        match lower.as_str() {
            "tabular" => Ok(DiffKind::Tabular),
            "lines" => Ok(DiffKind::Lines),
            other => DiffKind::from_extension(other).ok_or_else(|| DiffError::UnsupportedType {
                extension: s.to_uppercase(),
            }),
        }
    }
}

/// Partition sizes. `only_a_count + common_count == total_a`, and the same
/// for B.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DiffStats {
    pub total_a: usize,
    pub total_b: usize,
    pub only_a_count: usize,
    pub only_b_count: usize,
    pub common_count: usize,
}

/// Outcome of comparing two inputs.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct DiffResult {
    pub only_in_a: Vec<String>,
    pub only_in_b: Vec<String>,
    pub common: Vec<String>,
    pub stats: DiffStats,
}

impl DiffResult {
    /// Split two sets into their three partitions.
    pub fn from_sets(a: &ComparableSet, b: &ComparableSet) -> Self {
        let only_in_a: Vec<String> = a.difference(b).cloned().collect();
        let only_in_b: Vec<String> = b.difference(a).cloned().collect();
        let common: Vec<String> = a.intersection(b).cloned().collect();

        let stats = DiffStats {
            total_a: a.len(),
            total_b: b.len(),
            only_a_count: only_in_a.len(),
            only_b_count: only_in_b.len(),
            common_count: common.len(),
        };

        Self {
            only_in_a,
            only_in_b,
            common,
            stats,
        }
    }

    /// True when neither side has anything the other lacks.
    pub fn is_identical(&self) -> bool {
        self.stats.only_a_count == 0 && self.stats.only_b_count == 0
    }
}

/// Compare two inputs of the same kind.
///
/// Parse errors name the sides `"File 1"` and `"File 2"`; use
/// [`compare_named`] to report real file names.
pub fn compare(kind: DiffKind, content_a: &str, content_b: &str) -> Result<DiffResult, DiffError> {
    compare_named(kind, "File 1", content_a, "File 2", content_b)
}

/// Compare two inputs of the same kind, naming each side in errors.
///
/// The caller vouches that both inputs really are of `kind`; see
/// [`crate::dispatch::compare_files`] for routing by file name.
pub fn compare_named(
    kind: DiffKind,
    name_a: &str,
    content_a: &str,
    name_b: &str,
    content_b: &str,
) -> Result<DiffResult, DiffError> {
    let (set_a, set_b) = match kind {
        DiffKind::Tabular => tabular::row_sets(name_a, content_a, name_b, content_b)?,
        DiffKind::Lines => (lines::line_set(content_a), lines::line_set(content_b)),
        DiffKind::Json => json::entry_sets(name_a, content_a, name_b, content_b)?,
    };

    let result = DiffResult::from_sets(&set_a, &set_b);
    debug!(
        %kind,
        only_a = result.stats.only_a_count,
        only_b = result.stats.only_b_count,
        common = result.stats.common_count,
        "compared inputs"
    );
    Ok(result)
}

//! Line-set extraction for plain text.

use super::ComparableSet;

/// Collect the distinct lines of `content`.
///
/// Whitespace around the whole content is trimmed first, so leading or
/// trailing blank lines and the indentation of the first line do not count.
/// Every other line is kept verbatim, case and whitespace included.
pub(crate) fn line_set(content: &str) -> ComparableSet {
    content.trim().lines().map(str::to_owned).collect()
}

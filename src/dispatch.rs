//! Routing of named files to the right comparison.
//!
//! The kind of each input is declared by its file extension. Both inputs
//! must declare the same extension; that is checked before either body is
//! parsed.

use crate::diff::{compare_named, DiffKind, DiffResult};
use crate::error::DiffError;

/// Lowercased text after the last `.` of `file_name`, or the whole name
/// when there is no dot.
pub fn extension(file_name: &str) -> String {
    file_name
        .rsplit('.')
        .next()
        .unwrap_or(file_name)
        .to_lowercase()
}

/// Work out the kind shared by two named inputs.
///
/// Fails with [`DiffError::TypeMismatch`] when the extensions differ and
/// with [`DiffError::UnsupportedType`] when they agree on something other
/// than `csv`, `txt` or `json`.
pub fn resolve_kind(name_a: &str, name_b: &str) -> Result<DiffKind, DiffError> {
    let ext_a = extension(name_a);
    let ext_b = extension(name_b);

    if ext_a != ext_b {
        return Err(DiffError::TypeMismatch {
            name_a: name_a.to_string(),
            kind_a: ext_a.to_uppercase(),
            name_b: name_b.to_string(),
            kind_b: ext_b.to_uppercase(),
        });
    }

    DiffKind::from_extension(&ext_a).ok_or_else(|| DiffError::UnsupportedType {
        extension: ext_a.to_uppercase(),
    })
}

/// Compare two named files, choosing the comparison from their extensions.
///
/// ```
/// use diff_cache::{compare_files, DiffError};
///
/// let result = compare_files("a.txt", "x\ny", "b.txt", "y").unwrap();
/// assert_eq!(result.only_in_a, vec!["x"]);
///
/// let err = compare_files("a.csv", "id\n1", "b.json", "[]").unwrap_err();
/// assert!(matches!(err, DiffError::TypeMismatch { .. }));
/// ```
pub fn compare_files(
    name_a: &str,
    content_a: &str,
    name_b: &str,
    content_b: &str,
) -> Result<DiffResult, DiffError> {
    let kind = resolve_kind(name_a, name_b)?;
    compare_named(kind, name_a, content_a, name_b, content_b)
}

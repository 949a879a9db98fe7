//! Entry-set extraction for JSON documents.

use serde_json::Value;

use super::ComparableSet;
use crate::canonical::to_canonical_string;
use crate::error::DiffError;

/// Parse both documents and reduce them to canonical entries.
///
/// - both arrays: one entry per element;
/// - both objects: one `"key: value"` entry per top-level key;
/// - anything else (scalars, or an array against an object): the whole
///   value as a single entry, so the comparison is simply equal or not.
///
/// Nested changes are not broken down further: a difference anywhere under
/// a top-level key makes that whole key differ on both sides.
pub(crate) fn entry_sets(
    name_a: &str,
    content_a: &str,
    name_b: &str,
    content_b: &str,
) -> Result<(ComparableSet, ComparableSet), DiffError> {
    let a = parse(name_a, content_a)?;
    let b = parse(name_b, content_b)?;

    Ok(match (&a, &b) {
        (Value::Array(_), Value::Array(_)) | (Value::Object(_), Value::Object(_)) => {
            (entries(&a), entries(&b))
        }
        _ => (whole(&a), whole(&b)),
    })
}

fn parse(file_name: &str, content: &str) -> Result<Value, DiffError> {
    serde_json::from_str(content).map_err(|err| DiffError::parse(file_name, err))
}

fn entries(value: &Value) -> ComparableSet {
    match value {
        Value::Array(items) => items.iter().map(to_canonical_string).collect(),
        Value::Object(map) => map
            .iter()
            .map(|(key, field)| format!("{}: {}", key, to_canonical_string(field)))
            .collect(),
        other => whole(other),
    }
}

fn whole(value: &Value) -> ComparableSet {
    std::iter::once(to_canonical_string(value)).collect()
}

//! Coercion of raw cell values into comparable and searchable strings.

use std::cmp::Ordering;

use serde_json::Value;

use super::state::SortDirection;

/// Stringify a raw value the way search and sort see it.
///
/// `Null` has no text. Strings are used as-is, numbers and booleans through
/// their display form, arrays and objects through their JSON serialization
/// (keys are ordered, so the output is deterministic).
pub fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Array(_) | Value::Object(_) => {
            Some(serde_json::to_string(value).unwrap_or_default())
        }
    }
}

/// Case-insensitive key used by both search and sort.
pub fn folded_text(value: &Value) -> Option<String> {
    value_text(value).map(|text| text.to_lowercase())
}

/// Case-insensitive substring match. `needle` must already be lower-cased.
pub fn contains_folded(value: &Value, needle: &str) -> bool {
    folded_text(value).is_some_and(|text| text.contains(needle))
}

/// Compare two folded keys. Missing keys go last in either direction.
///
/// Comparison is lexicographic on the coerced strings, so `"10" < "2"`.
pub fn compare_keys(a: Option<&str>, b: Option<&str>, direction: SortDirection) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => match direction {
            SortDirection::Ascending => a.cmp(b),
            SortDirection::Descending => b.cmp(a),
        },
    }
}

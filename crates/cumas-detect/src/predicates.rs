//! Field Presence Predicates
//!
//! Absent, empty, and whitespace-only values are all treated as "not present".

use serde_json::Value;

/// Resolve a dotted field path (`"action.default_popup"`) against a manifest.
pub fn lookup<'a>(manifest: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.')
        .try_fold(manifest, |value, segment| value.as_object()?.get(segment))
}

/// A string with at least one non-whitespace character
pub fn is_non_empty_string(value: &Value) -> bool {
    value.as_str().is_some_and(|s| !s.trim().is_empty())
}

/// An array with at least one non-empty string element
pub fn is_non_empty_string_array(value: &Value) -> bool {
    value
        .as_array()
        .is_some_and(|items| items.iter().any(is_non_empty_string))
}

/// An array with at least one element of any type
pub fn is_non_empty_array(value: &Value) -> bool {
    value.as_array().is_some_and(|items| !items.is_empty())
}

/// An object with at least one key
pub fn is_non_empty_object(value: &Value) -> bool {
    value.as_object().is_some_and(|map| !map.is_empty())
}

/// Loose truthiness. Strings go through [`is_non_empty_string`], so a blank
/// keyword never counts; containers are truthy even when empty.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(_) => is_non_empty_string(value),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// `web_accessible_resources` in either dialect: MV2 lists bare strings,
/// MV3 lists objects carrying a `resources` array.
pub fn has_web_resource(value: &Value) -> bool {
    let Some(entries) = value.as_array() else {
        return false;
    };

    entries.iter().any(|entry| {
        is_non_empty_string(entry)
            || entry
                .get("resources")
                .is_some_and(is_non_empty_string_array)
    })
}

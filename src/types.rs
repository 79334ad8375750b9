//! Common types used throughout pagekit
//!
//! Type aliases plus the [`ParamSource`] seam that lets the lenient parsers
//! read query parameters from whatever map a web framework hands over.

use std::collections::{BTreeMap, HashMap};

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

/// Generic key-value map with string keys and values
pub type StringMap = HashMap<String, String>;

// ============================================================================
// Parameter Sources
// ============================================================================

/// Read-only lookup of string parameters by name.
///
/// Implemented for the usual string maps and for slices of pairs, so
/// `axum::extract::Query<HashMap<String, String>>` or a pre-parsed query
/// string can be passed straight to `from_query`.
pub trait ParamSource {
    /// Value for `key`, if present
    fn param(&self, key: &str) -> Option<&str>;

    /// Value for `key` when present and non-empty
    fn non_empty(&self, key: &str) -> Option<&str> {
        self.param(key).filter(|v| !v.is_empty())
    }
}

impl<S: std::hash::BuildHasher> ParamSource for HashMap<String, String, S> {
    fn param(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

impl ParamSource for BTreeMap<String, String> {
    fn param(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

impl<K: AsRef<str>, V: AsRef<str>> ParamSource for [(K, V)] {
    fn param(&self, key: &str) -> Option<&str> {
        self.iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }
}

impl<K: AsRef<str>, V: AsRef<str>> ParamSource for Vec<(K, V)> {
    fn param(&self, key: &str) -> Option<&str> {
        self.as_slice().param(key)
    }
}

/// Parse a strictly positive integer parameter
pub(crate) fn positive_u32(source: &(impl ParamSource + ?Sized), key: &str) -> Option<u32> {
    let raw = source.non_empty(key)?;
    match raw.parse::<i64>() {
        Ok(n) if n > 0 => Some(u32::try_from(n).unwrap_or(u32::MAX)),
        _ => {
            tracing::debug!(param = key, value = raw, "ignoring unusable pagination parameter");
            None
        }
    }
}

/// Integer view of a loosely typed JSON value: integers, floats (truncated)
/// and numeric strings. Anything else yields `None`.
pub(crate) fn json_int(value: &JsonValue) -> Option<i64> {
    match value {
        JsonValue::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        JsonValue::String(s) => s.parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    #[test]
    fn test_param_source_maps() {
        let mut map = StringMap::new();
        map.insert("page".to_string(), "2".to_string());
        map.insert("cursor".to_string(), String::new());

        assert_eq!(map.param("page"), Some("2"));
        assert_eq!(map.param("cursor"), Some(""));
        assert_eq!(map.non_empty("cursor"), None);
        assert_eq!(map.param("missing"), None);

        let pairs = vec![("limit", "5")];
        assert_eq!(pairs.param("limit"), Some("5"));
    }

    #[test_case("5" => Some(5) ; "positive")]
    #[test_case("0" => None ; "zero")]
    #[test_case("-3" => None ; "negative")]
    #[test_case("abc" => None ; "not a number")]
    #[test_case("99999999999" => Some(u32::MAX) ; "saturates")]
    fn test_positive_u32(raw: &str) -> Option<u32> {
        positive_u32(&[("n", raw)][..], "n")
    }

    #[test_case(json!(5) => Some(5) ; "integer")]
    #[test_case(json!(2.9) => Some(2) ; "float truncates")]
    #[test_case(json!("40") => Some(40) ; "numeric string")]
    #[test_case(json!("abc") => None ; "text")]
    #[test_case(json!(" 4 ") => None ; "padded string")]
    #[test_case(json!(null) => None ; "null")]
    fn test_json_int(value: JsonValue) -> Option<i64> {
        json_int(&value)
    }
}

//! Hand-built JSON object emission.
//!
//! Downstream string consumers expect the exact literal shape the original
//! tooling produced, so this is deliberately not a general JSON encoder:
//! values escape only the double-quote and newline characters, keys are
//! emitted verbatim, and nothing else is touched.

use std::collections::BTreeMap;

/// Serializes a key/value mapping as a flat JSON object literal.
///
/// One indented `"key": "value"` pair per line, comma-separated with no
/// trailing comma; an empty mapping is exactly `{}`.
///
/// # Examples
/// ```
/// use std::collections::BTreeMap;
/// use props2json::json::to_json;
///
/// let mut map = BTreeMap::new();
/// map.insert("greeting".to_string(), "Hello".to_string());
/// assert_eq!(to_json(&map), "{\n    \"greeting\": \"Hello\"\n}");
/// assert_eq!(to_json(&BTreeMap::new()), "{}");
/// ```
pub fn to_json(entries: &BTreeMap<String, String>) -> String {
    if entries.is_empty() {
        return "{}".to_string();
    }

    let mut out = String::from("{\n");
    let mut first = true;
    for (key, value) in entries {
        if !first {
            out.push_str(",\n");
        }
        first = false;
        out.push_str("    \"");
        out.push_str(key);
        out.push_str("\": \"");
        out.push_str(&escape_value(value));
        out.push('"');
    }
    out.push_str("\n}");
    out
}

/// Escapes a value for embedding in the object literal.
///
/// Only `"` and newline are escaped, in that order.
pub fn escape_value(value: &str) -> String {
    value.replace('"', "\\\"").replace('\n', "\\n")
}

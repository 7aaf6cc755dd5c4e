//! Translation documents: arbitrary JSON with key order preserved.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};

/// Indentation used for every JSON file this tool writes
const INDENT: &[u8] = b"    ";

/// Serialize `value` pretty-printed with 4-space indentation.
pub fn to_pretty_string<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    // serde_json only emits valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Parse a response body. An empty (or whitespace-only) body is `{}`.
pub fn parse_body(body: &str) -> serde_json::Result<Value> {
    if body.trim().is_empty() {
        Ok(Value::Object(Map::new()))
    } else {
        serde_json::from_str(body)
    }
}

/// Remove every null-valued key from `doc`, recursing into nested objects.
///
/// Arrays and non-null scalars are left untouched. Surviving keys keep their
/// order.
pub fn strip_null_values(doc: &mut Value) {
    if let Value::Object(map) = doc {
        strip_map(map);
    }
}

fn strip_map(map: &mut Map<String, Value>) {
    // retain keeps insertion order with preserve_order
    map.retain(|_, v| !v.is_null());
    for value in map.values_mut() {
        if let Value::Object(nested) = value {
            strip_map(nested);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_strip_removes_top_level_nulls() {
        let mut doc = json!({"a": "x", "b": null, "c": 1});
        strip_null_values(&mut doc);
        assert_eq!(doc, json!({"a": "x", "c": 1}));
    }

    #[test]
    fn test_strip_recurses_into_objects() {
        let mut doc = json!({
            "menu": {"open": "Ouvrir", "close": null, "sub": {"deep": null, "keep": false}}
        });
        strip_null_values(&mut doc);
        assert_eq!(
            doc,
            json!({"menu": {"open": "Ouvrir", "sub": {"keep": false}}})
        );
    }

    #[test]
    fn test_strip_leaves_arrays_alone() {
        let mut doc = json!({"list": [null, {"x": null}, 1]});
        strip_null_values(&mut doc);
        assert_eq!(doc, json!({"list": [null, {"x": null}, 1]}));
    }

    #[test]
    fn test_strip_keeps_empty_objects() {
        let mut doc = json!({"group": {"only": null}});
        strip_null_values(&mut doc);
        assert_eq!(doc, json!({"group": {}}));
    }

    #[test]
    fn test_strip_preserves_key_order() {
        let mut doc: Value =
            serde_json::from_str(r#"{"z": 1, "gone": null, "a": 2, "m": 3}"#).unwrap();
        strip_null_values(&mut doc);
        let keys: Vec<&String> = doc.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["z", "a", "m"]);
    }

    #[test]
    fn test_strip_non_object_is_noop() {
        let mut doc = json!([null, 1]);
        strip_null_values(&mut doc);
        assert_eq!(doc, json!([null, 1]));

        let mut doc = Value::Null;
        strip_null_values(&mut doc);
        assert!(doc.is_null());
    }

    #[test]
    fn test_pretty_uses_four_spaces() {
        let out = to_pretty_string(&json!({"a": {"b": 1}})).unwrap();
        assert_eq!(out, "{\n    \"a\": {\n        \"b\": 1\n    }\n}");
    }

    #[test]
    fn test_parse_empty_body() {
        assert_eq!(parse_body("").unwrap(), json!({}));
        assert_eq!(parse_body("  \n").unwrap(), json!({}));
        assert!(parse_body("<html>").is_err());
    }
}

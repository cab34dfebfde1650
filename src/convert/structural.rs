//! Generic struct-to-map and map-to-map conversion through JSON.
//!
//! `serde_json::Value` is the tagged intermediate representation: every
//! conversion is an exhaustive match over its variants rather than a runtime
//! downcast.

use crate::error::{ConversionError, ConversionResult};
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Convert a serializable value to a generic key-value map.
///
/// The value is serialized to JSON bytes and deserialized back into a map.
/// This is deliberately lossy: integer fields come back as floating point
/// numbers, because the intermediate encoding draws no distinction between
/// number types. Callers depend on that coercion, so it is preserved here
/// rather than fixed (`1` becomes `1.0`).
///
/// # Errors
///
/// - [`ConversionError::Encoding`] if the value cannot be serialized (for
///   example a struct containing a map keyed by something other than strings)
/// - [`ConversionError::NotAnObject`] if the value serializes to something
///   other than a JSON object
pub fn struct_to_map<T: Serialize>(value: &T) -> ConversionResult<Map<String, Value>> {
    let encoded = serde_json::to_vec(value).map_err(ConversionError::Encoding)?;
    let mut decoded: Value = serde_json::from_slice(&encoded).map_err(ConversionError::Decoding)?;
    widen_numbers(&mut decoded);
    match decoded {
        Value::Object(map) => Ok(map),
        _ => Err(ConversionError::NotAnObject),
    }
}

/// Replace every integer number with its floating point equivalent,
/// recursively. Keeps the historical JSON round-trip contract stable across
/// serializers that would otherwise preserve integers.
fn widen_numbers(value: &mut Value) {
    match value {
        Value::Number(n) if !n.is_f64() => {
            if let Some(f) = n.as_f64() {
                *value = Value::from(f);
            }
        }
        Value::Array(items) => {
            for item in items {
                widen_numbers(item);
            }
        }
        Value::Object(map) => {
            for item in map.values_mut() {
                widen_numbers(item);
            }
        }
        _ => {}
    }
}

/// Strictly convert a generic map to a string-valued map.
///
/// Every value must already be a string. Fails on the first non-string value
/// without returning a partial result.
///
/// # Errors
///
/// [`ConversionError::TypeMismatch`] naming the offending key, value and type.
pub fn map_any_to_map_string(
    input: &Map<String, Value>,
) -> ConversionResult<HashMap<String, String>> {
    let mut out = HashMap::with_capacity(input.len());
    for (key, value) in input {
        match value {
            Value::String(s) => {
                out.insert(key.clone(), s.clone());
            }
            other => {
                return Err(ConversionError::TypeMismatch {
                    key: key.clone(),
                    value: other.to_string(),
                    kind: value_kind(other),
                });
            }
        }
    }
    Ok(out)
}

/// Best-effort conversion of a generic map to a string-valued map.
///
/// String values are copied as-is. Any other value is replaced with a
/// placeholder describing it, and a debug-level diagnostic is emitted. This
/// function never fails by design; it is the deliberate lossy fallback for
/// callers that cannot reject input, and should stay documented as such
/// wherever it is reused.
pub fn coerce_to_string_map(input: Option<&Map<String, Value>>) -> HashMap<String, String> {
    let mut out = HashMap::new();
    let Some(input) = input else {
        return out;
    };
    for (key, value) in input {
        let coerced = match value {
            Value::String(s) => s.clone(),
            other => {
                tracing::debug!(
                    key = %key,
                    value = %other,
                    kind = value_kind(other),
                    "non-string value coerced during string-map conversion"
                );
                format!("invalid string value: {}", other)
            }
        };
        out.insert(key.clone(), coerced);
    }
    out
}

/// Widen a string-valued map to a generic map. Never fails; `None` or empty
/// input yields an empty map.
pub fn map_string_to_map_any(input: Option<&HashMap<String, String>>) -> Map<String, Value> {
    let mut out = Map::new();
    let Some(input) = input else {
        return out;
    };
    for (key, value) in input {
        out.insert(key.clone(), Value::String(value.clone()));
    }
    out
}

/// Human-readable name for a JSON value variant.
fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;
    use serde_json::json;

    #[derive(Serialize)]
    struct Sample {
        name: String,
        id: String,
    }

    #[derive(Serialize)]
    struct Numbered {
        first_field: String,
        second_field: i64,
    }

    #[test]
    fn test_struct_to_map_flat() {
        let sample = Sample {
            name: "John Doe".to_string(),
            id: "12121".to_string(),
        };

        let res = struct_to_map(&sample).unwrap();
        assert_eq!(res.get("name"), Some(&json!("John Doe")));
        assert_eq!(res.get("id"), Some(&json!("12121")));
    }

    #[test]
    fn test_struct_to_map_integers_widen_to_floats() {
        let sample = Numbered {
            first_field: "A".to_string(),
            second_field: 1,
        };

        let res = struct_to_map(&sample).unwrap();
        let second = res.get("second_field").unwrap();
        assert!(second.is_f64(), "integer fields must come back as floats");
        assert_eq!(second, &json!(1.0));
    }

    #[test]
    fn test_struct_to_map_nested_integers_widen() {
        #[derive(Serialize)]
        struct Outer {
            inner: Numbered,
            counts: Vec<i32>,
        }

        let res = struct_to_map(&Outer {
            inner: Numbered {
                first_field: "A".to_string(),
                second_field: 7,
            },
            counts: vec![1, 2],
        })
        .unwrap();

        assert_eq!(res.get("inner").unwrap().get("second_field"), Some(&json!(7.0)));
        assert_eq!(res.get("counts"), Some(&json!([1.0, 2.0])));
    }

    #[test]
    fn test_struct_to_map_non_serializable() {
        // JSON object keys must be strings; byte-vector keys cannot encode
        #[derive(Serialize)]
        struct Bad {
            lookup: HashMap<Vec<u8>, i32>,
        }

        let mut lookup = HashMap::new();
        lookup.insert(vec![1u8, 2], 3);

        let result = struct_to_map(&Bad { lookup });
        assert!(matches!(result, Err(ConversionError::Encoding(_))));
    }

    #[test]
    fn test_struct_to_map_non_object() {
        let result = struct_to_map(&42);
        assert!(matches!(result, Err(ConversionError::NotAnObject)));
    }

    #[test]
    fn test_map_any_to_map_string_all_strings() {
        let input = match json!({"a": "1", "b": "2"}) {
            Value::Object(map) => map,
            _ => unreachable!(),
        };

        let out = map_any_to_map_string(&input).unwrap();
        assert_eq!(out.len(), 2);
        assert_eq!(out.get("a"), Some(&"1".to_string()));
        assert_eq!(out.get("b"), Some(&"2".to_string()));
    }

    #[test]
    fn test_map_any_to_map_string_rejects_non_string() {
        let input = match json!({"a": 1}) {
            Value::Object(map) => map,
            _ => unreachable!(),
        };

        let result = map_any_to_map_string(&input);
        match result {
            Err(ConversionError::TypeMismatch { key, value, kind }) => {
                assert_eq!(key, "a");
                assert_eq!(value, "1");
                assert_eq!(kind, "number");
            }
            other => panic!("expected TypeMismatch, got: {:?}", other),
        }
    }

    #[test]
    fn test_coerce_to_string_map_none() {
        assert!(coerce_to_string_map(None).is_empty());
    }

    #[test]
    fn test_coerce_to_string_map_replaces_non_strings() {
        let input = match json!({"a": 1, "b": "2"}) {
            Value::Object(map) => map,
            _ => unreachable!(),
        };

        let out = coerce_to_string_map(Some(&input));
        assert_eq!(out.get("a"), Some(&"invalid string value: 1".to_string()));
        assert_eq!(out.get("b"), Some(&"2".to_string()));
    }

    #[test]
    fn test_map_string_to_map_any() {
        assert!(map_string_to_map_any(None).is_empty());

        let mut input = HashMap::new();
        input.insert("a".to_string(), "1".to_string());
        input.insert("b".to_string(), "2".to_string());

        let out = map_string_to_map_any(Some(&input));
        assert_eq!(out.get("a"), Some(&json!("1")));
        assert_eq!(out.get("b"), Some(&json!("2")));
    }
}

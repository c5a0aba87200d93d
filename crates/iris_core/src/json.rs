//! JSON helpers that stay off the thread stack's limits.
//!
//! [`ObjectHierarchy`](crate::ObjectHierarchy) chains have no depth bound, so
//! parsing, printing and dropping them must not recurse on a fixed-size stack.
//! These helpers grow the stack on demand with `stacker`.

use serde::de::DeserializeOwned;
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

/// Remaining stack below which a new segment is allocated.
pub(crate) const RED_ZONE: usize = 64 * 1024;

/// Size of each newly allocated stack segment.
pub(crate) const STACK_SIZE: usize = 2 * 1024 * 1024;

/// Parses JSON text without a nesting limit.
///
/// # Examples
///
/// ```
/// use iris_core::{DetectResult, json};
///
/// let mut body = String::new();
/// for _ in 0..500 {
///     body.push_str(r#"{"object":"node","parent":"#);
/// }
/// body.push_str(r#"{"object":"root"}"#);
/// body.push_str(&"}".repeat(500));
///
/// let result: DetectResult =
///     json::from_str(&format!(r#"{{"objects":[{{"parent":{}}}]}}"#, body)).unwrap();
/// assert_eq!(result.objects[0].ancestors().count(), 501);
/// ```
pub fn from_str<T: DeserializeOwned>(text: &str) -> serde_json::Result<T> {
    let mut deserializer = serde_json::Deserializer::from_str(text);
    deserializer.disable_recursion_limit();
    let value: T = Deserialize::deserialize(serde_stacker::Deserializer::new(&mut deserializer))?;
    deserializer.end()?;
    Ok(value)
}

/// Prints a JSON value of any depth.
pub fn to_string(value: &Value) -> serde_json::Result<String> {
    serde_json::to_string(&Deep(value))
}

/// Pretty-prints a JSON value of any depth.
///
/// Indentation grows with nesting, so prefer [`to_string`] for very deep values.
pub fn to_string_pretty(value: &Value) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&Deep(value))
}

/// Drops a JSON value of any depth without recursing.
pub fn dispose(value: Value) {
    let mut pending = vec![value];
    while let Some(value) = pending.pop() {
        match value {
            Value::Array(items) => pending.extend(items),
            Value::Object(map) => pending.extend(map.into_iter().map(|(_, v)| v)),
            _ => {}
        }
    }
}

struct Deep<'a>(&'a Value);

impl Serialize for Deep<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        stacker::maybe_grow(RED_ZONE, STACK_SIZE, || match self.0 {
            Value::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(&Deep(item))?;
                }
                seq.end()
            }
            Value::Object(map) => {
                let mut out = serializer.serialize_map(Some(map.len()))?;
                for (key, value) in map {
                    out.serialize_entry(key, &Deep(value))?;
                }
                out.end()
            }
            scalar => scalar.serialize(serializer),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nested_array(depth: usize) -> Value {
        let mut value = Value::Null;
        for _ in 0..depth {
            value = Value::Array(vec![value]);
        }
        value
    }

    #[test]
    fn deep_value_prints_and_drops() {
        let value = nested_array(20_000);
        let text = to_string(&value).unwrap();
        assert_eq!(text.len(), 20_000 * 2 + 4);
        dispose(value);

        let reparsed: Value = from_str(&text).unwrap();
        dispose(reparsed);
    }

    #[test]
    fn pretty_output_matches_serde_json() {
        let value = serde_json::json!({
            "objects": [{"object": "dog", "parent": {"object": "mammal"}}]
        });
        assert_eq!(
            to_string_pretty(&value).unwrap(),
            serde_json::to_string_pretty(&value).unwrap()
        );
    }

    #[test]
    fn trailing_garbage_is_rejected() {
        assert!(from_str::<Value>("{} {}").is_err());
    }
}

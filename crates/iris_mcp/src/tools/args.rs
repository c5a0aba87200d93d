//! Argument extraction shared by the vision tools.
//!
//! A JSON `null` counts as an absent argument. A present argument of the wrong
//! type is an [`McpError::InvalidInput`], raised before any request is made.

use crate::{McpError, McpResult};
use serde_json::{Map, Value};
use std::str::FromStr;

static EMPTY: std::sync::OnceLock<Map<String, Value>> = std::sync::OnceLock::new();

/// Returns the argument object; `null` is treated as `{}`.
pub(crate) fn object(input: &Value) -> McpResult<&Map<String, Value>> {
    match input {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(EMPTY.get_or_init(Map::new)),
        other => Err(McpError::InvalidInput(format!(
            "Arguments must be an object, got {}",
            type_name(other)
        ))),
    }
}

fn present<'a>(input: &'a Value, key: &str) -> McpResult<Option<&'a Value>> {
    Ok(object(input)?.get(key).filter(|v| !v.is_null()))
}

/// A required, non-empty string argument.
pub(crate) fn required_str<'a>(input: &'a Value, key: &str) -> McpResult<&'a str> {
    let value = optional_str(input, key)?
        .ok_or_else(|| McpError::InvalidInput(format!("Missing '{}'", key)))?;
    if value.trim().is_empty() {
        return Err(McpError::InvalidInput(format!("'{}' must not be empty", key)));
    }
    Ok(value)
}

/// An optional string argument.
pub(crate) fn optional_str<'a>(input: &'a Value, key: &str) -> McpResult<Option<&'a str>> {
    match present(input, key)? {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.as_str())),
        Some(other) => Err(wrong_type(key, "a string", other)),
    }
}

/// An optional boolean argument.
pub(crate) fn optional_bool(input: &Value, key: &str) -> McpResult<Option<bool>> {
    match present(input, key)? {
        None => Ok(None),
        Some(Value::Bool(b)) => Ok(Some(*b)),
        Some(other) => Err(wrong_type(key, "a boolean", other)),
    }
}

/// An optional positive integer argument.
pub(crate) fn optional_positive_u32(input: &Value, key: &str) -> McpResult<Option<u32>> {
    match present(input, key)? {
        None => Ok(None),
        Some(value) => value
            .as_u64()
            .filter(|n| *n >= 1)
            .and_then(|n| u32::try_from(n).ok())
            .map(Some)
            .ok_or_else(|| wrong_type(key, "a positive integer", value)),
    }
}

/// A list of enum values, given as a JSON array of strings or a comma-separated string.
///
/// Items are trimmed and blank items are skipped in both forms.
pub(crate) fn enum_list<T: FromStr>(input: &Value, key: &str) -> McpResult<Vec<T>> {
    let raw: Vec<&str> = match present(input, key)? {
        None => return Ok(Vec::new()),
        Some(Value::String(s)) => s.split(',').collect(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| item.as_str().ok_or_else(|| wrong_type(key, "a list of strings", item)))
            .collect::<McpResult<_>>()?,
        Some(other) => return Err(wrong_type(key, "a list of strings", other)),
    };

    raw.into_iter()
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| {
            item.parse::<T>().map_err(|_| {
                McpError::InvalidInput(format!("Unknown value '{}' for '{}'", item, key))
            })
        })
        .collect()
}

fn wrong_type(key: &str, expected: &str, actual: &Value) -> McpError {
    McpError::InvalidInput(format!(
        "'{}' must be {}, got {}",
        key,
        expected,
        type_name(actual)
    ))
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

//! Key-preserving merges of associative arrays.
//!
//! Associative arrays are JSON containers. Objects are merged key by key: a later
//! value for an existing key replaces the earlier one in place, so the key keeps
//! the position it was first seen at and integer-like keys are never renumbered.
//! Sequential arrays are concatenated instead, or appended under the next free
//! integer key when the accumulated result is already an object.

use crate::error::{ArrayError, Result};
use serde_json::{Map, Value};

/// Merges `arrays` left to right; later values win on shared keys.
///
/// Zero inputs produce an empty object.
///
/// # Errors
///
/// [`ArrayError::NotAnArray`] if an input is a scalar.
///
/// # Examples
///
/// ```
/// use arrayhelpers::merge_assoc;
/// use serde_json::json;
///
/// let merged = merge_assoc([
///     &json!({ "17": "value 17 version 1" }),
///     &json!({ "17": "value 17 version 2", "18": "value 18" }),
///     &json!({ "1": "value 1" }),
/// ])
/// .unwrap();
///
/// assert_eq!(
///     merged,
///     json!({ "17": "value 17 version 2", "18": "value 18", "1": "value 1" })
/// );
/// ```
pub fn merge_assoc<'a, I>(arrays: I) -> Result<Value>
where
    I: IntoIterator<Item = &'a Value>,
{
    merge_all(arrays, false)
}

/// Like [`merge_assoc`], but containers found under the same key on both sides
/// are merged recursively instead of replaced.
///
/// # Examples
///
/// ```
/// use arrayhelpers::merge_assoc_recursive;
/// use serde_json::json;
///
/// let merged = merge_assoc_recursive([
///     &json!({ "18": { "a": "value a", "b": "value b version 1" } }),
///     &json!({ "18": { "b": "value b version 2", "c": "value c" } }),
/// ])
/// .unwrap();
///
/// assert_eq!(
///     merged,
///     json!({ "18": { "a": "value a", "b": "value b version 2", "c": "value c" } })
/// );
/// ```
pub fn merge_assoc_recursive<'a, I>(arrays: I) -> Result<Value>
where
    I: IntoIterator<Item = &'a Value>,
{
    merge_all(arrays, true)
}

fn merge_all<'a, I>(arrays: I, recursive: bool) -> Result<Value>
where
    I: IntoIterator<Item = &'a Value>,
{
    let mut merged: Option<Value> = None;

    for (position, array) in arrays.into_iter().enumerate() {
        if !is_container(array) {
            log::debug!("merge input {position} is a scalar");
            return Err(ArrayError::NotAnArray { position });
        }
        merged = Some(match merged {
            None => array.clone(),
            Some(acc) => merge_pair(acc, array, recursive),
        });
    }

    Ok(merged.unwrap_or_else(|| Value::Object(Map::new())))
}

fn is_container(value: &Value) -> bool {
    matches!(value, Value::Array(_) | Value::Object(_))
}

/// Merges one container into the accumulator. Non-container values replace it.
fn merge_pair(acc: Value, incoming: &Value, recursive: bool) -> Value {
    match (acc, incoming) {
        (Value::Array(mut list), Value::Array(items)) => {
            list.extend(items.iter().cloned());
            Value::Array(list)
        }
        (Value::Object(mut map), Value::Array(items)) => {
            append_items(&mut map, items);
            Value::Object(map)
        }
        (Value::Array(list), Value::Object(entries)) => {
            let mut map: Map<String, Value> = list
                .into_iter()
                .enumerate()
                .map(|(index, value)| (index.to_string(), value))
                .collect();
            overlay(&mut map, entries, recursive);
            Value::Object(map)
        }
        (Value::Object(mut map), Value::Object(entries)) => {
            overlay(&mut map, entries, recursive);
            Value::Object(map)
        }
        (_, other) => other.clone(),
    }
}

fn overlay(map: &mut Map<String, Value>, entries: &Map<String, Value>, recursive: bool) {
    for (key, value) in entries {
        match map.get_mut(key) {
            Some(existing) if recursive && is_container(existing) && is_container(value) => {
                let current = existing.take();
                *existing = merge_pair(current, value, true);
            }
            Some(existing) => *existing = value.clone(),
            None => {
                map.insert(key.clone(), value.clone());
            }
        }
    }
}

/// Appends sequential items after the highest integer key, starting at 0.
fn append_items(map: &mut Map<String, Value>, items: &[Value]) {
    let mut next = map
        .keys()
        .filter_map(|key| integer_key(key))
        .max()
        .map_or(0, |max| max.saturating_add(1).max(0));

    for item in items {
        map.insert(next.to_string(), item.clone());
        next = next.saturating_add(1);
    }
}

// Only canonical decimal spellings count: "7" and "-3", not "07" or "+7".
fn integer_key(key: &str) -> Option<i64> {
    key.parse::<i64>()
        .ok()
        .filter(|value| value.to_string() == key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_integer_key() {
        assert_eq!(integer_key("17"), Some(17));
        assert_eq!(integer_key("-3"), Some(-3));
        assert_eq!(integer_key("017"), None);
        assert_eq!(integer_key("+1"), None);
        assert_eq!(integer_key("a"), None);
    }

    #[test]
    fn test_append_after_highest_integer_key() {
        let mut map = json!({ "b": 1, "4": 2, "-9": 3 }).as_object().cloned().unwrap();
        append_items(&mut map, &[json!("x"), json!("y")]);
        assert_eq!(map.get("5"), Some(&json!("x")));
        assert_eq!(map.get("6"), Some(&json!("y")));
    }
}

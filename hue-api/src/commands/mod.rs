//! Concrete commands for each bridge resource category
//!
//! One module per resource, each containing the resource's data shapes and
//! the commands that operate on it. Commands are thin: they describe a
//! request and translate the response, nothing more.

pub mod bridge;
pub mod groups;
pub mod lights;
pub mod scenes;
pub mod schedules;
pub mod sensors;
pub mod time_zones;
pub mod users;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ApiError, Result};

/// Deserialize an id-keyed resource map into (id, attributes) pairs
///
/// Collection endpoints answer with `{"1": {...}, "2": {...}}`. Ids are
/// ordered numerically where they parse as numbers, lexicographically
/// otherwise, so output order is stable.
pub(crate) fn parse_resource_map<T: DeserializeOwned>(
    response: Value,
) -> Result<Vec<(String, T)>> {
    let map = match response {
        Value::Object(map) => map,
        other => {
            return Err(ApiError::ParseError(format!(
                "expected resource map, got {}",
                other
            )))
        }
    };

    let mut entries = Vec::with_capacity(map.len());
    for (id, attributes) in map {
        let attributes = serde_json::from_value(attributes)
            .map_err(|e| ApiError::ParseError(e.to_string()))?;
        entries.push((id, attributes));
    }

    entries.sort_by(|a, b| match (a.0.parse::<u32>(), b.0.parse::<u32>()) {
        (Ok(left), Ok(right)) => left.cmp(&right),
        _ => a.0.cmp(&b.0),
    });

    Ok(entries)
}

/// Extract a field from the first success confirmation in a response
///
/// Mutating endpoints answer with `[{"success": {...}}]`; failures never
/// reach this point because the transport surfaces them as errors.
pub(crate) fn success_field(response: &Value, field: &str) -> Result<Value> {
    response
        .as_array()
        .and_then(|entries| {
            entries
                .iter()
                .find_map(|entry| entry.get("success").and_then(|s| s.get(field)).cloned())
        })
        .ok_or_else(|| {
            ApiError::ParseError(format!("missing success confirmation for {}", field))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, serde::Deserialize, PartialEq)]
    struct Named {
        name: String,
    }

    #[test]
    fn test_parse_resource_map_orders_numeric_ids() {
        let response = json!({
            "10": {"name": "ten"},
            "2": {"name": "two"},
            "1": {"name": "one"}
        });

        let entries: Vec<(String, Named)> = parse_resource_map(response).unwrap();
        let ids: Vec<&str> = entries.iter().map(|(id, _)| id.as_str()).collect();

        assert_eq!(ids, vec!["1", "2", "10"]);
    }

    #[test]
    fn test_parse_resource_map_rejects_non_object() {
        let result: Result<Vec<(String, Named)>> = parse_resource_map(json!([1, 2, 3]));
        assert!(matches!(result, Err(ApiError::ParseError(_))));
    }

    #[test]
    fn test_success_field_finds_nested_value() {
        let response = json!([{"success": {"username": "abc123"}}]);
        let value = success_field(&response, "username").unwrap();
        assert_eq!(value, json!("abc123"));
    }

    #[test]
    fn test_success_field_missing() {
        let response = json!([{"success": {"id": "1"}}]);
        let result = success_field(&response, "username");
        assert!(matches!(result, Err(ApiError::ParseError(_))));
    }
}

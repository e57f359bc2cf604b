use serde_json::{Map, Value};

use crate::domain::Identifier;

/// First non-empty string among the given keys
pub fn string_field(record: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| record.get(*key))
        .filter_map(Value::as_str)
        .map(str::trim)
        .find(|s| !s.is_empty())
        .map(str::to_string)
}

/// First usable identifier among the given keys
pub fn identifier_field(record: &Map<String, Value>, keys: &[&str]) -> Option<Identifier> {
    keys.iter()
        .filter_map(|key| record.get(*key))
        .find_map(Identifier::from_value)
}

/// The `data` array of a `{ status: "success", data: [...] }` envelope
pub fn success_data(response: &Value) -> Option<&Vec<Value>> {
    let is_success = response.get("status").and_then(Value::as_str) == Some("success");
    if !is_success {
        return None;
    }
    response.get("data")?.as_array()
}

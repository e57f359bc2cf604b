use anyhow::{bail, Result};
use log::{info, warn};
use serde_json::Value;

use super::fields::{identifier_field, string_field, success_data};
use crate::domain::Sport;

const ID_KEYS: &[&str] = &["sport_id", "sports_id", "id"];
const NAME_KEYS: &[&str] = &["sport_name", "sports_name", "name"];

/// Normalize a sports list response into the picker list
///
/// The `"all"` sentinel is always first and always unique. Records without a
/// sport identifier are dropped.
pub fn parse_sports_response(response: &Value) -> Result<Vec<Sport>> {
    let Some(records) = extract_records(response) else {
        bail!("Unexpected sports response format");
    };

    let mut sports = vec![Sport::all()];
    sports.extend(records.iter().filter_map(parse_sport));

    info!("  → Parsed {} sports (plus ALL)", sports.len() - 1);
    Ok(sports)
}

/// Accepts the success envelope, a status-less `data` array, or a bare array
fn extract_records(response: &Value) -> Option<&Vec<Value>> {
    if let Some(records) = success_data(response) {
        return Some(records);
    }

    match response {
        Value::Array(records) => Some(records),
        Value::Object(map) if !map.contains_key("status") => map.get("data")?.as_array(),
        _ => None,
    }
}

fn parse_sport(record: &Value) -> Option<Sport> {
    let Some(fields) = record.as_object() else {
        warn!("Invalid sport record filtered out: {}", record);
        return None;
    };

    let Some(id) = identifier_field(fields, ID_KEYS) else {
        warn!("Sport without identifier filtered out: {}", record);
        return None;
    };

    if id.is_all() {
        return None;
    }

    Some(Sport {
        id,
        name: string_field(fields, NAME_KEYS).unwrap_or_default(),
        code: string_field(fields, &["sport_code"]),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Identifier;
    use serde_json::json;

    #[test]
    fn test_success_envelope_gets_all_prepended() {
        let response = json!({
            "status": "success",
            "data": [{"sport_id": 7061509, "sport_name": "football"}]
        });

        let sports = parse_sports_response(&response).unwrap();

        assert_eq!(sports.len(), 2);
        assert!(sports[0].is_all());
        assert_eq!(sports[0].name, "ALL");
        assert_eq!(sports[1].id, Identifier::Number(7061509));
        assert_eq!(sports[1].name, "football");
    }

    #[test]
    fn test_records_without_id_are_dropped() {
        let response = json!({
            "status": "success",
            "data": [
                {"sport_name": "ghost"},
                {"sport_id": 7030819, "sport_name": "chess", "sport_code": "CHS"},
                "junk"
            ]
        });

        let sports = parse_sports_response(&response).unwrap();

        assert_eq!(sports.len(), 2);
        assert_eq!(sports[1].code.as_deref(), Some("CHS"));
    }

    #[test]
    fn test_source_supplied_all_is_not_duplicated() {
        let response = json!([{"id": "all", "name": "Everything"}, {"id": 7, "name": "x"}]);
        let sports = parse_sports_response(&response).unwrap();
        assert_eq!(sports.iter().filter(|s| s.is_all()).count(), 1);
        assert_eq!(sports[0].name, "ALL");
    }

    #[test]
    fn test_lenient_shapes() {
        assert_eq!(parse_sports_response(&json!({"data": [{"sport_id": 1}]})).unwrap().len(), 2);
        assert_eq!(parse_sports_response(&json!([{"sports_id": 1}])).unwrap().len(), 2);
    }

    #[test]
    fn test_unexpected_shapes_fail() {
        assert!(parse_sports_response(&json!({"status": "error", "data": []})).is_err());
        assert!(parse_sports_response(&json!({"status": "success", "data": "nope"})).is_err());
        assert!(parse_sports_response(&json!("hello")).is_err());
    }
}

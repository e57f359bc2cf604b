use anyhow::{bail, Result};
use log::{info, warn};
use serde_json::{Map, Value};

use super::fields::{identifier_field, string_field, success_data};
use crate::domain::{Match, SportGroup, Tournament};

const SPORT_ID_KEYS: &[&str] = &["sport_id", "sports_id"];
const SPORT_NAME_KEYS: &[&str] = &["sport_name", "sports_name"];

/// Normalize a tournaments response into validated sport groups
///
/// A group needs a sport identifier and a `tournaments` array. A tournament
/// needs `id`, `name` and `start_date`. Groups left without tournaments are
/// dropped. An empty result is still a success.
pub fn parse_tournaments_response(response: &Value) -> Result<Vec<SportGroup>> {
    let Some(records) = success_data(response) else {
        bail!("Unexpected tournaments response format");
    };

    let groups: Vec<SportGroup> = records
        .iter()
        .filter_map(parse_group)
        .filter(|group| !group.tournaments.is_empty())
        .collect();

    if groups.is_empty() {
        warn!("No valid tournaments found in response");
    } else {
        let total: usize = groups.iter().map(|g| g.tournaments.len()).sum();
        info!("  → Parsed {} tournaments in {} sport groups", total, groups.len());
    }

    Ok(groups)
}

fn parse_group(record: &Value) -> Option<SportGroup> {
    let fields = record.as_object()?;

    let (Some(sport_id), Some(tournaments)) = (
        identifier_field(fields, SPORT_ID_KEYS),
        fields.get("tournaments").and_then(Value::as_array),
    ) else {
        warn!("Invalid sport data filtered out: {}", record);
        return None;
    };

    Some(SportGroup {
        sport_id,
        sport_name: string_field(fields, SPORT_NAME_KEYS).unwrap_or_default(),
        tournaments: tournaments.iter().filter_map(parse_tournament).collect(),
    })
}

fn parse_tournament(record: &Value) -> Option<Tournament> {
    let Some(fields) = record.as_object() else {
        warn!("Invalid tournament data filtered out: {}", record);
        return None;
    };

    let (Some(id), Some(name), Some(start_date)) = (
        identifier_field(fields, &["id"]),
        string_field(fields, &["name"]),
        string_field(fields, &["start_date"]),
    ) else {
        warn!("Invalid tournament data filtered out: {}", record);
        return None;
    };

    Some(Tournament {
        id,
        name,
        start_date,
        end_date: string_field(fields, &["end_date"]),
        venue: string_field(fields, &["venue"]),
        level: string_field(fields, &["level"]),
        image_url: string_field(fields, &["tournament_img_url", "image_url"]),
        matches: parse_matches(fields),
    })
}

/// Non-array `matches` becomes an empty list, unreadable entries are skipped
fn parse_matches(fields: &Map<String, Value>) -> Vec<Match> {
    let Some(matches) = fields.get("matches").and_then(Value::as_array) else {
        return Vec::new();
    };

    matches
        .iter()
        .filter_map(|m| match serde_json::from_value::<Match>(m.clone()) {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                warn!("Invalid match data filtered out: {} ({})", m, e);
                None
            }
        })
        .collect()
}

use serde::Serialize;

use crate::config::sports::{get_known_sports, DEFAULT_SPORT_ICON};
use crate::domain::models::Identifier;

/// Match lifecycle as far as the card badge is concerned
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum MatchStatus {
    Upcoming,
    Live,
    Completed,
    Other(String),
}

impl MatchStatus {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "upcoming" => MatchStatus::Upcoming,
            "live" => MatchStatus::Live,
            "completed" => MatchStatus::Completed,
            _ => MatchStatus::Other(raw.trim().to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            MatchStatus::Upcoming => "Upcoming",
            MatchStatus::Live => "Live",
            MatchStatus::Completed => "Completed",
            MatchStatus::Other(raw) if raw.is_empty() => "TBD",
            MatchStatus::Other(raw) => raw,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TournamentLevel {
    International,
    National,
    Domestic,
    Unspecified,
}

impl TournamentLevel {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(|l| l.trim().to_lowercase()).as_deref() {
            Some("international") => TournamentLevel::International,
            Some("national") => TournamentLevel::National,
            Some("domestic") => TournamentLevel::Domestic,
            _ => TournamentLevel::Unspecified,
        }
    }

    pub fn label(&self) -> Option<&'static str> {
        match self {
            TournamentLevel::International => Some("International"),
            TournamentLevel::National => Some("National"),
            TournamentLevel::Domestic => Some("Domestic"),
            TournamentLevel::Unspecified => None,
        }
    }
}

/// Icon for a sport, looked up by name first and by known id second
pub fn sport_icon(name: Option<&str>, id: Option<&Identifier>) -> &'static str {
    let known = get_known_sports();

    let by_name = name
        .map(|n| n.trim().to_lowercase())
        .filter(|n| !n.is_empty())
        .and_then(|n| known.iter().find(|s| s.name == n));

    let by_id = || {
        id.and_then(|id| {
            let key = id.as_key();
            known.iter().find(|s| s.id.to_string() == key)
        })
    };

    by_name
        .or_else(by_id)
        .map(|s| s.icon)
        .unwrap_or(DEFAULT_SPORT_ICON)
}

/// Capitalize the first letter of every word, lowercase the rest
pub fn title_case(name: &str) -> String {
    name.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

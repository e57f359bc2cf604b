use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::dates::{self, DateKey};

pub const ALL_SPORTS_ID: &str = "all";
pub const ALL_SPORTS_NAME: &str = "ALL";

/// Record identifier that arrives as either a JSON number or a JSON string
///
/// Comparison goes through [`Identifier::as_key`], so `7061509` and
/// `"7061509"` are the same identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Identifier {
    Number(i64),
    Text(String),
}

impl Identifier {
    pub fn all() -> Self {
        Identifier::Text(ALL_SPORTS_ID.to_string())
    }

    pub fn is_all(&self) -> bool {
        self.as_key() == ALL_SPORTS_ID
    }

    /// Normalized string form used for every comparison
    pub fn as_key(&self) -> String {
        match self {
            Identifier::Number(n) => n.to_string(),
            Identifier::Text(s) => s.trim().to_string(),
        }
    }

    /// Read an identifier out of a raw payload field
    ///
    /// Missing, null, zero, empty and non-scalar values are not identifiers.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => {
                let id = n
                    .as_i64()
                    .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64))?;
                (id != 0).then_some(Identifier::Number(id))
            }
            Value::String(s) if !s.trim().is_empty() => Some(Identifier::Text(s.trim().to_string())),
            _ => None,
        }
    }

    pub fn matches_key(&self, key: &str) -> bool {
        self.as_key() == key.trim()
    }
}

impl PartialEq for Identifier {
    fn eq(&self, other: &Self) -> bool {
        self.as_key() == other.as_key()
    }
}

impl Eq for Identifier {}

impl Hash for Identifier {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_key().hash(state);
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_key())
    }
}

impl From<i64> for Identifier {
    fn from(id: i64) -> Self {
        Identifier::Number(id)
    }
}

impl From<i32> for Identifier {
    fn from(id: i32) -> Self {
        Identifier::Number(i64::from(id))
    }
}

impl From<&str> for Identifier {
    fn from(id: &str) -> Self {
        Identifier::Text(id.to_string())
    }
}

/// Sport entry shown in the sport picker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sport {
    pub id: Identifier,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl Sport {
    pub fn new(id: impl Into<Identifier>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            code: None,
        }
    }

    /// Client-side sentinel meaning "no sport filter"
    pub fn all() -> Self {
        Self::new(Identifier::all(), ALL_SPORTS_NAME)
    }

    pub fn is_all(&self) -> bool {
        self.id.is_all()
    }
}

/// Single fixture inside a tournament
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Match {
    pub id: Option<Identifier>,
    pub team_a: String,
    pub team_b: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_a_logo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_b_logo: Option<String>,
    pub start_time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tournament {
    pub id: Identifier,
    pub name: String,
    pub start_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(default, alias = "tournament_img_url", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub matches: Vec<Match>,
}

impl Tournament {
    pub fn new(id: impl Into<Identifier>, name: impl Into<String>, start_date: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            start_date: start_date.into(),
            end_date: None,
            venue: None,
            level: None,
            image_url: None,
            matches: Vec::new(),
        }
    }

    pub fn with_end_date(mut self, end_date: impl Into<String>) -> Self {
        self.end_date = Some(end_date.into());
        self
    }

    pub fn with_matches(mut self, matches: Vec<Match>) -> Self {
        self.matches = matches;
        self
    }

    pub fn start_key(&self) -> Option<DateKey> {
        dates::to_date_key(&self.start_date)
    }

    /// Last day of the tournament
    ///
    /// Falls back to the start day when the end date is absent or unparseable,
    /// and is clamped so it never precedes the start day.
    pub fn end_key(&self) -> Option<DateKey> {
        let start = self.start_key()?;
        let end = self
            .end_date
            .as_deref()
            .and_then(dates::to_date_key)
            .unwrap_or(start);
        Some(end.max(start))
    }

    pub fn spans(&self, day: &DateKey) -> bool {
        match (self.start_key(), self.end_key()) {
            (Some(start), Some(end)) => start <= *day && *day <= end,
            _ => false,
        }
    }

    pub fn date_range_label(&self) -> String {
        dates::format_date_range(&self.start_date, self.end_date.as_deref())
    }
}

/// One sport with its ordered tournaments, the unit the data source returns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SportGroup {
    #[serde(alias = "sports_id")]
    pub sport_id: Identifier,
    #[serde(default, alias = "sports_name")]
    pub sport_name: String,
    #[serde(default)]
    pub tournaments: Vec<Tournament>,
}

impl SportGroup {
    pub fn new(sport_id: impl Into<Identifier>, sport_name: impl Into<String>, tournaments: Vec<Tournament>) -> Self {
        Self {
            sport_id: sport_id.into(),
            sport_name: sport_name.into(),
            tournaments,
        }
    }

    /// Same group carrying a different tournament list
    pub fn with_tournaments(&self, tournaments: Vec<Tournament>) -> Self {
        Self {
            sport_id: self.sport_id.clone(),
            sport_name: self.sport_name.clone(),
            tournaments,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_identifier_numeric_and_text_compare_equal() {
        assert_eq!(Identifier::Number(7061509), Identifier::from("7061509"));
        assert!(Identifier::from(" all ").is_all());
        assert!(!Identifier::Number(7).is_all());
    }

    #[test]
    fn test_identifier_from_value_rejects_falsy() {
        assert_eq!(Identifier::from_value(&json!(7061509)), Some(Identifier::Number(7061509)));
        assert_eq!(Identifier::from_value(&json!("a1")), Some(Identifier::from("a1")));
        assert_eq!(Identifier::from_value(&json!(0)), None);
        assert_eq!(Identifier::from_value(&json!("")), None);
        assert_eq!(Identifier::from_value(&json!(null)), None);
        assert_eq!(Identifier::from_value(&json!({"id": 1})), None);
    }

    #[test]
    fn test_end_key_defaults_and_clamps() {
        let single = Tournament::new(1, "Cup", "2025-08-20T10:00:00Z");
        assert_eq!(single.end_key(), single.start_key());

        let reversed = Tournament::new(2, "Odd", "2025-08-20").with_end_date("2025-08-18");
        assert_eq!(reversed.end_key().unwrap().to_string(), "2025-08-20");

        let garbage_end = Tournament::new(3, "Open", "2025-08-20").with_end_date("n/a");
        assert_eq!(garbage_end.end_key(), garbage_end.start_key());
    }

    #[test]
    fn test_spans_is_inclusive() {
        let t = Tournament::new(1, "League", "2025-08-20").with_end_date("2025-08-22");
        for day in ["2025-08-20", "2025-08-21", "2025-08-22"] {
            assert!(t.spans(&day.parse().unwrap()), "{day}");
        }
        assert!(!t.spans(&"2025-08-23".parse().unwrap()));
    }

    #[test]
    fn test_group_accepts_legacy_field_names() {
        let legacy: SportGroup = serde_json::from_value(json!({
            "sports_id": 7061509,
            "sports_name": "football",
            "tournaments": []
        }))
        .unwrap();
        let current: SportGroup = serde_json::from_value(json!({
            "sport_id": "7061509",
            "sport_name": "football",
            "tournaments": []
        }))
        .unwrap();
        assert_eq!(legacy, current);
    }

    #[test]
    fn test_tournament_image_alias() {
        let t: Tournament = serde_json::from_value(json!({
            "id": 1,
            "name": "Cup",
            "start_date": "2025-08-20",
            "tournament_img_url": "https://img/cup.png"
        }))
        .unwrap();
        assert_eq!(t.image_url.as_deref(), Some("https://img/cup.png"));
        assert!(t.matches.is_empty());
    }
}

use log::debug;
use serde::Serialize;

use super::date::{filter_by_date_range, filter_by_exact_date};
use super::sport::{active_sport_filter, filter_by_sport};
use crate::dates::DateKey;
use crate::domain::{Sport, SportGroup};

/// How a selected calendar day narrows the list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum DateMatch {
    /// Tournaments running on the day
    #[default]
    Range,
    /// Tournaments starting on the day
    Exact,
}

/// The user's current selections on the calendar screen
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    pub sport_id: Option<String>,
    pub selected_date: Option<DateKey>,
    pub date_match: DateMatch,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sport(mut self, sport_id: impl Into<String>) -> Self {
        self.sport_id = Some(sport_id.into());
        self
    }

    pub fn with_date(mut self, day: DateKey) -> Self {
        self.selected_date = Some(day);
        self
    }

    pub fn with_date_match(mut self, date_match: DateMatch) -> Self {
        self.date_match = date_match;
        self
    }

    pub fn is_sport_filtered(&self) -> bool {
        active_sport_filter(self.sport_id.as_deref()).is_some()
    }

    pub fn is_date_filtered(&self) -> bool {
        self.selected_date.is_some()
    }
}

/// Headline and hint for an empty result list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmptyState {
    pub message: String,
    pub hint: String,
}

/// Sport first, then the selected day
pub fn apply_filters(groups: &[SportGroup], state: &FilterState) -> Vec<SportGroup> {
    let by_sport = filter_by_sport(groups, state.sport_id.as_deref());

    let filtered = match (&state.selected_date, state.date_match) {
        (Some(day), DateMatch::Range) => filter_by_date_range(&by_sport, day),
        (Some(day), DateMatch::Exact) => filter_by_exact_date(&by_sport, day),
        (None, _) => by_sport,
    };

    debug!(
        "Applied filters: sport={:?} date={:?} → {} sport groups",
        state.sport_id,
        state.selected_date.map(|d| d.to_string()),
        filtered.len()
    );
    filtered
}

/// Message shown when no tournament survives the active filters
pub fn empty_state_message(state: &FilterState, sport_name: Option<&str>) -> EmptyState {
    let sport = sport_name.unwrap_or("selected sport").to_lowercase();

    let (message, hint) = match (state.is_date_filtered(), state.is_sport_filtered()) {
        (true, true) => (
            format!("No {} tournaments on selected date", sport),
            "Try selecting a different date or sport",
        ),
        (true, false) => (
            "No tournaments found for selected date".to_string(),
            "Try selecting a different date",
        ),
        (false, true) => (
            format!("No {} tournaments found", sport),
            "Try selecting a different sport",
        ),
        (false, false) => ("No tournaments found".to_string(), "Pull down to refresh"),
    };

    EmptyState {
        message,
        hint: hint.to_string(),
    }
}

/// Case-insensitive name-prefix search over the picker list
pub fn search_sports(sports: &[Sport], query: &str) -> Vec<Sport> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return sports.to_vec();
    }

    sports
        .iter()
        .filter(|sport| sport.name.to_lowercase().starts_with(&query))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Tournament;

    fn key(raw: &str) -> DateKey {
        raw.parse().unwrap()
    }

    fn groups() -> Vec<SportGroup> {
        vec![
            SportGroup::new(
                7061509,
                "football",
                vec![
                    Tournament::new(1, "Cup", "2025-08-20"),
                    Tournament::new(2, "League", "2025-08-18").with_end_date("2025-08-25"),
                ],
            ),
            SportGroup::new(7030819, "chess", vec![Tournament::new(3, "Blitz", "2025-08-20")]),
        ]
    }

    #[test]
    fn test_no_filters_is_identity() {
        assert_eq!(apply_filters(&groups(), &FilterState::new()), groups());
    }

    #[test]
    fn test_sport_then_range() {
        let state = FilterState::new().with_sport("7061509").with_date(key("2025-08-22"));
        let result = apply_filters(&groups(), &state);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].tournaments.len(), 1);
        assert_eq!(result[0].tournaments[0].name, "League");
    }

    #[test]
    fn test_exact_mode() {
        let state = FilterState::new()
            .with_date(key("2025-08-20"))
            .with_date_match(DateMatch::Exact);
        let result = apply_filters(&groups(), &state);

        let names: Vec<&str> = result
            .iter()
            .flat_map(|g| g.tournaments.iter().map(|t| t.name.as_str()))
            .collect();
        assert_eq!(names, vec!["Cup", "Blitz"]);
    }

    #[test]
    fn test_empty_state_messages() {
        let none = empty_state_message(&FilterState::new(), None);
        assert_eq!(none.message, "No tournaments found");
        assert_eq!(none.hint, "Pull down to refresh");

        let sport = FilterState::new().with_sport("7030819");
        assert_eq!(empty_state_message(&sport, Some("Chess")).message, "No chess tournaments found");

        let both = sport.clone().with_date(key("2025-08-01"));
        let msg = empty_state_message(&both, Some("Chess"));
        assert_eq!(msg.message, "No chess tournaments on selected date");
        assert_eq!(msg.hint, "Try selecting a different date or sport");

        let all_sports = FilterState::new().with_sport("all").with_date(key("2025-08-01"));
        assert_eq!(
            empty_state_message(&all_sports, None).message,
            "No tournaments found for selected date"
        );
    }

    #[test]
    fn test_search_sports_by_prefix() {
        let sports = vec![
            Sport::all(),
            Sport::new(7011305, "american football"),
            Sport::new(7061509, "football"),
            Sport::new(7030819, "Chess"),
        ];

        let foot = search_sports(&sports, "Foot");
        assert_eq!(foot.len(), 1);
        assert_eq!(foot[0].name, "football");

        assert_eq!(search_sports(&sports, "ch")[0].name, "Chess");
        assert_eq!(search_sports(&sports, "   ").len(), 4);
        assert!(search_sports(&sports, "zzz").is_empty());
    }
}

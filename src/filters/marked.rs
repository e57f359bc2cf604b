use log::{info, warn};
use serde::Serialize;
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use super::sport::filter_by_sport;
use crate::dates::DateKey;
use crate::domain::{Identifier, SportGroup};

/// Marker for a calendar day on which at least one tournament starts
///
/// Carries the first tournament encountered for that day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarkInfo {
    pub tournament_id: Identifier,
    pub tournament_name: String,
}

pub type MarkedDates = BTreeMap<DateKey, MarkInfo>;

/// Days to highlight on the calendar
///
/// The sport filter is applied first. Each distinct start day appears once;
/// the first tournament seen for a day wins. Unparseable start dates are
/// skipped.
pub fn derive_marked_dates(groups: &[SportGroup], sport_filter: Option<&str>) -> MarkedDates {
    let groups = filter_by_sport(groups, sport_filter);
    let mut marked = MarkedDates::new();

    for tournament in groups.iter().flat_map(|g| g.tournaments.iter()) {
        let Some(day) = tournament.start_key() else {
            warn!(
                "Invalid date format for tournament {}: '{}'",
                tournament.id, tournament.start_date
            );
            continue;
        };

        if let Entry::Vacant(slot) = marked.entry(day) {
            slot.insert(MarkInfo {
                tournament_id: tournament.id.clone(),
                tournament_name: tournament.name.clone(),
            });
        }
    }

    info!("Extracted {} tournament dates", marked.len());
    marked
}

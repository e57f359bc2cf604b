use serde::Serialize;
use std::collections::BTreeSet;

use crate::dates::DateKey;
use crate::domain::{Identifier, SportGroup, Tournament};

/// One row of the flattened result list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TournamentListItem {
    pub sport_id: Identifier,
    pub sport_name: String,
    pub tournament: Tournament,
}

/// Flatten groups into one list ordered by start day
///
/// The sort is stable: ties keep group order, then tournament order.
/// Tournaments without a parseable start day go last, in encounter order.
pub fn flatten_sorted(groups: &[SportGroup]) -> Vec<TournamentListItem> {
    let mut items: Vec<(Option<DateKey>, TournamentListItem)> = groups
        .iter()
        .flat_map(|group| {
            group.tournaments.iter().map(move |tournament| {
                (
                    tournament.start_key(),
                    TournamentListItem {
                        sport_id: group.sport_id.clone(),
                        sport_name: group.sport_name.clone(),
                        tournament: tournament.clone(),
                    },
                )
            })
        })
        .collect();

    items.sort_by_key(|(start, _)| (start.is_none(), *start));
    items.into_iter().map(|(_, item)| item).collect()
}

/// Distinct `(year, month)` pairs containing a tournament start, ascending
pub fn calendar_months(groups: &[SportGroup]) -> Vec<(i32, u32)> {
    groups
        .iter()
        .flat_map(|g| g.tournaments.iter())
        .filter_map(Tournament::start_key)
        .map(|key| (key.year(), key.month()))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

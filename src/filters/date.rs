use log::{debug, warn};

use crate::dates::DateKey;
use crate::domain::{SportGroup, Tournament};

/// Tournaments starting exactly on `day`
pub fn filter_by_exact_date(groups: &[SportGroup], day: &DateKey) -> Vec<SportGroup> {
    let filtered = retain_tournaments(groups, |t| start_key_or_warn(t).is_some_and(|start| start == *day));
    debug!("Found {} sport groups with tournaments starting on {}", filtered.len(), day);
    filtered
}

/// Tournaments starting in the given month
pub fn filter_by_month(groups: &[SportGroup], month: u32, year: i32) -> Vec<SportGroup> {
    retain_tournaments(groups, |t| {
        start_key_or_warn(t).is_some_and(|start| start.is_in_month(month, year))
    })
}

/// Tournaments running on `day`, both ends inclusive
///
/// A missing end date means a single-day tournament.
pub fn filter_by_date_range(groups: &[SportGroup], day: &DateKey) -> Vec<SportGroup> {
    let filtered = retain_tournaments(groups, |t| t.spans(day));
    debug!("Found {} sport groups with tournaments running on {}", filtered.len(), day);
    filtered
}

/// Keep matching tournaments and prune groups left empty
pub fn retain_tournaments<F>(groups: &[SportGroup], mut keep: F) -> Vec<SportGroup>
where
    F: FnMut(&Tournament) -> bool,
{
    groups
        .iter()
        .filter_map(|group| {
            let kept: Vec<Tournament> = group.tournaments.iter().filter(|t| keep(t)).cloned().collect();
            (!kept.is_empty()).then(|| group.with_tournaments(kept))
        })
        .collect()
}

fn start_key_or_warn(tournament: &Tournament) -> Option<DateKey> {
    let key = tournament.start_key();
    if key.is_none() {
        warn!(
            "Skipping tournament {} with unparseable start date '{}'",
            tournament.id, tournament.start_date
        );
    }
    key
}

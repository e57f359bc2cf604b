use log::debug;

use crate::domain::{SportGroup, ALL_SPORTS_ID};

/// Keep the groups of one sport
///
/// `None`, blank and `"all"` mean no filter. Identifiers are compared in
/// their normalized string form, so `"7061509"` selects a numeric `7061509`.
pub fn filter_by_sport(groups: &[SportGroup], sport_id: Option<&str>) -> Vec<SportGroup> {
    let Some(target) = active_sport_filter(sport_id) else {
        return groups.to_vec();
    };

    let filtered: Vec<SportGroup> = groups
        .iter()
        .filter(|group| group.sport_id.matches_key(target))
        .cloned()
        .collect();

    debug!("Filtered {} sport groups for sport ID {}", filtered.len(), target);
    filtered
}

/// The sport id to filter by, if the selection actually narrows anything
pub fn active_sport_filter(sport_id: Option<&str>) -> Option<&str> {
    sport_id
        .map(str::trim)
        .filter(|id| !id.is_empty() && *id != ALL_SPORTS_ID)
}

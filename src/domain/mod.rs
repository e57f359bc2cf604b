pub mod models;
pub mod presentation;

pub use models::{Identifier, Match, Sport, SportGroup, Tournament, ALL_SPORTS_ID, ALL_SPORTS_NAME};
pub use presentation::{sport_icon, title_case, MatchStatus, TournamentLevel};

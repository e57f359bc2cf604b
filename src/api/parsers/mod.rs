pub mod fields;
pub mod sports;
pub mod tournaments;

pub use sports::parse_sports_response;
pub use tournaments::parse_tournaments_response;

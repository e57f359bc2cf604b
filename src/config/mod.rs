pub mod settings;
pub mod sports;

pub use settings::{AppConfig, ApiSettings, CacheSettings, CalendarSettings};
pub use sports::{get_known_sports, KnownSport};

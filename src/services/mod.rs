pub mod fetcher;
pub mod screen;

pub use fetcher::{CacheStatus, CachedFetcher, FetchResult};
pub use screen::{CalendarScreen, ScreenView};

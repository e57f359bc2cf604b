pub mod memory;
pub mod structs;

pub use memory::MemoryCache;
pub use structs::{Cache, CacheEntry, CacheStore};

pub const SPORTS_LIST_KEY: &str = "sports_list";
pub const TOURNAMENTS_KEY: &str = "tournaments";

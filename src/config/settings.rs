use chrono::Duration;
use std::path::PathBuf;

pub const DEMO_BASE_URL: &str = "https://mockly.me/custom";
pub const PRODUCTION_BASE_URL: &str = "https://stapubox";

pub const SPORTS_LIST_PATH: &str = "/sportslist";
pub const TOURNAMENTS_PATH: &str = "/tournament/demo";

pub const CACHE_DIR_VAR: &str = "TOURNAMENT_CACHE_DIR";
pub const API_BASE_URL_VAR: &str = "TOURNAMENT_API_BASE_URL";

#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub use_demo_api: bool,
    pub demo_base_url: String,
    pub production_base_url: String,
    pub user_agent: &'static str,
    pub timeout_secs: u64,
    pub reachability_timeout_ms: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            use_demo_api: true,
            demo_base_url: DEMO_BASE_URL.to_string(),
            production_base_url: PRODUCTION_BASE_URL.to_string(),
            user_agent: "TournamentCalendar/1.0",
            timeout_secs: 30,
            reachability_timeout_ms: 3000,
        }
    }
}

impl ApiSettings {
    /// Base URL picked by the demo/production switch
    pub fn base_url(&self) -> &str {
        if self.use_demo_api {
            &self.demo_base_url
        } else {
            &self.production_base_url
        }
    }
}

#[derive(Debug, Clone)]
pub struct CacheSettings {
    pub dir: PathBuf,
    pub ttl: Duration,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("cache"),
            ttl: Duration::hours(24),
        }
    }
}

/// Months the calendar may navigate between, inclusive, as `(year, month)`
#[derive(Debug, Clone, Default)]
pub struct CalendarSettings {
    pub min_month: Option<(i32, u32)>,
    pub max_month: Option<(i32, u32)>,
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub api: ApiSettings,
    pub cache: CacheSettings,
    pub calendar: CalendarSettings,
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Demo or production endpoints, everything else at defaults
    pub fn with_demo_api(use_demo_api: bool) -> Self {
        let mut config = Self::new();
        config.api.use_demo_api = use_demo_api;
        config
    }

    /// Apply `TOURNAMENT_CACHE_DIR` and `TOURNAMENT_API_BASE_URL` overrides
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|name| std::env::var(name).ok())
    }

    /// Overrides read through `lookup`; the URL replaces whichever base URL
    /// the demo/production switch selects
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup(CACHE_DIR_VAR).filter(|d| !d.trim().is_empty()) {
            self.cache.dir = PathBuf::from(dir.trim());
        }

        if let Some(url) = lookup(API_BASE_URL_VAR) {
            let url = url.trim().trim_end_matches('/').to_string();
            if !url.is_empty() {
                if self.api.use_demo_api {
                    self.api.demo_base_url = url;
                } else {
                    self.api.production_base_url = url;
                }
            }
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_base_url_follows_switch() {
        assert_eq!(AppConfig::with_demo_api(true).api.base_url(), DEMO_BASE_URL);
        assert_eq!(AppConfig::with_demo_api(false).api.base_url(), PRODUCTION_BASE_URL);
    }

    #[test]
    fn test_default_ttl_is_one_day() {
        assert_eq!(AppConfig::new().cache.ttl, Duration::hours(24));
    }

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn test_cache_dir_override() {
        let config = AppConfig::new().with_overrides(lookup(&[(CACHE_DIR_VAR, " /var/cache/tournaments ")]));
        assert_eq!(config.cache.dir, PathBuf::from("/var/cache/tournaments"));

        let config = AppConfig::new().with_overrides(lookup(&[(CACHE_DIR_VAR, "  ")]));
        assert_eq!(config.cache.dir, PathBuf::from("cache"));
    }

    #[test]
    fn test_base_url_override_targets_active_endpoint() {
        let vars = [(API_BASE_URL_VAR, "http://localhost:8080/api/")];

        let demo = AppConfig::with_demo_api(true).with_overrides(lookup(&vars));
        assert_eq!(demo.api.base_url(), "http://localhost:8080/api");
        assert_eq!(demo.api.production_base_url, PRODUCTION_BASE_URL);

        let production = AppConfig::with_demo_api(false).with_overrides(lookup(&vars));
        assert_eq!(production.api.base_url(), "http://localhost:8080/api");
        assert_eq!(production.api.demo_base_url, DEMO_BASE_URL);
    }

    #[test]
    fn test_no_overrides_keeps_defaults() {
        let config = AppConfig::new().with_overrides(lookup(&[]));
        assert_eq!(config.api.base_url(), DEMO_BASE_URL);
        assert_eq!(config.cache.dir, PathBuf::from("cache"));
    }
}

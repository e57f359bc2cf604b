use anyhow::{Result, anyhow};
use chrono::Duration;
use log::{error, info, warn};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::future::Future;
use std::sync::Arc;

use crate::api::TournamentApiClient;
use crate::cache::{Cache, CacheEntry, CacheStore, SPORTS_LIST_KEY, TOURNAMENTS_KEY};
use crate::config::AppConfig;
use crate::dates::{Clock, SystemClock};
use crate::domain::{Sport, SportGroup};
use crate::http::{HttpClient, Transport};

/// Result handed to the presentation layer
///
/// `from_cache` is set when the data is a fallback served after a failed
/// refresh. `error` carries the failure message whenever one occurred, even
/// if cached data could still be served.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FetchResult<T> {
    pub success: bool,
    pub data: T,
    pub from_cache: bool,
    pub error: Option<String>,
}

impl<T> FetchResult<T> {
    fn fresh(data: T) -> Self {
        Self {
            success: true,
            data,
            from_cache: false,
            error: None,
        }
    }

    fn fallback(data: T, error: String) -> Self {
        Self {
            success: true,
            data,
            from_cache: true,
            error: Some(error),
        }
    }

    fn failed(data: T, error: String) -> Self {
        Self {
            success: false,
            data,
            from_cache: false,
            error: Some(error),
        }
    }
}

/// Where a resource key stands in its cache lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheStatus {
    Empty,
    Fresh,
    Stale,
}

/// Read-through TTL cache over the sports and tournaments endpoints
pub struct CachedFetcher {
    api: TournamentApiClient,
    store: Arc<dyn CacheStore>,
    clock: Arc<dyn Clock>,
    ttl: Duration,
}

impl CachedFetcher {
    pub fn new(
        transport: Arc<dyn Transport>,
        store: Arc<dyn CacheStore>,
        clock: Arc<dyn Clock>,
        ttl: Duration,
    ) -> Self {
        Self {
            api: TournamentApiClient::new(transport),
            store,
            clock,
            ttl,
        }
    }

    /// HTTP transport, file cache and system clock from configuration
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let transport = HttpClient::new(&config.api)?;
        let cache = Cache::new(&config.cache.dir);

        info!("Using API base URL {}", transport.base_url());

        Ok(Self::new(
            Arc::new(transport),
            Arc::new(cache),
            Arc::new(SystemClock),
            config.cache.ttl,
        ))
    }

    /// Sports list with the `"all"` sentinel first
    ///
    /// With nothing cached and no network the data is just the sentinel.
    pub async fn fetch_sports(&self) -> FetchResult<Vec<Sport>> {
        self.fetch_resource(SPORTS_LIST_KEY, || self.api.fetch_sports(), vec![Sport::all()])
            .await
    }

    pub async fn fetch_tournaments(&self) -> FetchResult<Vec<SportGroup>> {
        self.fetch_resource(TOURNAMENTS_KEY, || self.api.fetch_tournaments(), Vec::new())
            .await
    }

    /// Drop both entries; storage errors are logged and swallowed
    pub fn clear_cache(&self) {
        for key in [SPORTS_LIST_KEY, TOURNAMENTS_KEY] {
            match self.store.remove(key) {
                Ok(()) => info!("Cleared cache entry {}", key),
                Err(e) => error!("Cache clear error for {}: {:?}", key, e),
            }
        }
    }

    pub fn cache_status(&self, key: &str) -> CacheStatus {
        match self.read_entry::<Value>(key) {
            None => CacheStatus::Empty,
            Some(entry) if entry.is_fresh(self.clock.now_millis(), self.ttl) => CacheStatus::Fresh,
            Some(_) => CacheStatus::Stale,
        }
    }

    // --- Fetch Pipeline ---

    async fn fetch_resource<T, F, Fut>(&self, key: &str, fetch: F, empty: T) -> FetchResult<T>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let cached = self.read_entry::<T>(key);

        let cached = match cached {
            Some(entry) if entry.is_fresh(self.clock.now_millis(), self.ttl) => {
                info!("Using cached {}", key);
                return FetchResult::fresh(entry.data);
            }
            other => other,
        };

        match self.refresh(key, fetch).await {
            Ok(data) => FetchResult::fresh(data),
            Err(e) => {
                let message = format!("{:#}", e);
                match cached {
                    Some(entry) => {
                        warn!("Falling back to cached {} due to error: {}", key, message);
                        FetchResult::fallback(entry.data, message)
                    }
                    None => {
                        error!("Failed to fetch {}: {}", key, message);
                        FetchResult::failed(empty, message)
                    }
                }
            }
        }
    }

    async fn refresh<T, F, Fut>(&self, key: &str, fetch: F) -> Result<T>
    where
        T: Serialize,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        if !self.api.is_reachable().await {
            return Err(anyhow!("Offline"));
        }

        let data = fetch().await?;
        self.write_entry(key, &data);
        Ok(data)
    }

    // --- Cache Helpers ---

    /// Any storage or decoding problem reads as a miss
    fn read_entry<T: DeserializeOwned>(&self, key: &str) -> Option<CacheEntry<T>> {
        let entry = match self.store.load_entry(key) {
            Ok(entry) => entry?,
            Err(e) => {
                error!("Cache read error for {}: {:?}", key, e);
                return None;
            }
        };

        match serde_json::from_value(entry.data) {
            Ok(data) => Some(CacheEntry::new(data, entry.timestamp)),
            Err(e) => {
                warn!("Discarding unreadable cache entry {}: {}", key, e);
                None
            }
        }
    }

    fn write_entry<T: Serialize>(&self, key: &str, data: &T) {
        let value = match serde_json::to_value(data) {
            Ok(value) => value,
            Err(e) => {
                error!("Cache write error for {}: {}", key, e);
                return;
            }
        };

        let entry = CacheEntry::new(value, self.clock.now_millis());
        if let Err(e) = self.store.save_entry(key, &entry) {
            error!("Cache write error for {}: {:?}", key, e);
        }
    }
}

use anyhow::{Context, Result};
use chrono::Duration;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::cache_context;

/// Cached payload together with the moment it was stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEntry<T> {
    pub data: T,
    /// Epoch milliseconds
    pub timestamp: i64,
}

impl<T> CacheEntry<T> {
    pub fn new(data: T, timestamp: i64) -> Self {
        Self { data, timestamp }
    }

    pub fn age_millis(&self, now_millis: i64) -> i64 {
        now_millis - self.timestamp
    }

    /// Fresh while strictly younger than the TTL
    pub fn is_fresh(&self, now_millis: i64, ttl: Duration) -> bool {
        self.age_millis(now_millis) < ttl.num_milliseconds()
    }
}

/// Key-value storage the fetcher persists its entries in
///
/// Payloads are plain JSON so one store serves every resource.
pub trait CacheStore: Send + Sync {
    fn load_entry(&self, key: &str) -> Result<Option<CacheEntry<Value>>>;

    fn save_entry(&self, key: &str, entry: &CacheEntry<Value>) -> Result<()>;

    fn remove(&self, key: &str) -> Result<()>;
}

/// File-based cache, one JSON document per key
pub struct Cache {
    cache_dir: PathBuf,
}

impl Cache {
    /// Create a new cache instance
    ///
    /// The directory is created on the first write, so an unusable location
    /// only surfaces as write errors.
    pub fn new<P: AsRef<Path>>(cache_dir: P) -> Self {
        Self {
            cache_dir: cache_dir.as_ref().to_path_buf(),
        }
    }

    /// Save data to cache
    pub fn save<T: Serialize>(&self, key: &str, data: &T) -> Result<()> {
        let file_path = self.build_path(key);
        self.write_json(&file_path, data)
            .with_context(|| cache_context("write", key))?;

        info!("Saved data to cache: {}", file_path.display());
        Ok(())
    }

    /// Load data from cache
    pub fn load<T: for<'de> Deserialize<'de>>(&self, key: &str) -> Result<Option<T>> {
        let file_path = self.build_path(key);
        let data = self
            .read_json_opt(&file_path)
            .with_context(|| cache_context("read", key))?;

        if data.is_some() {
            debug!("Loaded data from cache: {}", file_path.display());
        }
        Ok(data)
    }

    /// Remove a single key, absent keys are not an error
    pub fn remove_key(&self, key: &str) -> Result<()> {
        let file_path = self.build_path(key);
        if !file_path.exists() {
            return Ok(());
        }

        fs::remove_file(&file_path).with_context(|| cache_context("remove", key))?;
        info!("Removed cache entry: {}", file_path.display());
        Ok(())
    }

    // --- Helper Methods ---

    fn build_path(&self, key: &str) -> PathBuf {
        self.cache_dir.join(format!("{}.json", key))
    }

    fn write_json<T: Serialize>(&self, path: &Path, data: &T) -> Result<()> {
        fs::create_dir_all(&self.cache_dir).context("Failed to create cache directory")?;
        let json = serde_json::to_string_pretty(data).context("Failed to serialize data")?;
        fs::write(path, json).context("Failed to write cache file")?;
        Ok(())
    }

    fn read_json_opt<T: for<'de> Deserialize<'de>>(&self, path: &Path) -> Result<Option<T>> {
        if !path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(path).context("Failed to read cache file")?;
        let data = serde_json::from_str(&json).with_context(|| {
            format!(
                "Failed to parse JSON from {:?}. First 200 chars: {}",
                path,
                json.chars().take(200).collect::<String>()
            )
        })?;
        Ok(Some(data))
    }
}

impl CacheStore for Cache {
    fn load_entry(&self, key: &str) -> Result<Option<CacheEntry<Value>>> {
        self.load(key)
    }

    fn save_entry(&self, key: &str, entry: &CacheEntry<Value>) -> Result<()> {
        self.save(key, entry)
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.remove_key(key)
    }
}

use anyhow::{Context, Result};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;

use super::structs::{CacheEntry, CacheStore};

/// In-process store for embedders that keep their own persistence
///
/// Entries are kept serialized so reads behave like the file store.
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl CacheStore for MemoryCache {
    fn load_entry(&self, key: &str) -> Result<Option<CacheEntry<Value>>> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| anyhow::anyhow!("Memory cache lock poisoned"))?;

        match entries.get(key) {
            Some(json) => {
                let entry = serde_json::from_str(json).context("Failed to deserialize cache data")?;
                Ok(Some(entry))
            }
            None => Ok(None),
        }
    }

    fn save_entry(&self, key: &str, entry: &CacheEntry<Value>) -> Result<()> {
        let json = serde_json::to_string(entry).context("Failed to serialize data")?;
        self.entries
            .lock()
            .map_err(|_| anyhow::anyhow!("Memory cache lock poisoned"))?
            .insert(key.to_string(), json);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries
            .lock()
            .map_err(|_| anyhow::anyhow!("Memory cache lock poisoned"))?
            .remove(key);
        Ok(())
    }
}

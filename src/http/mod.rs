pub mod client;

pub use client::HttpClient;

use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;

/// Network seam under the cached fetcher
#[async_trait]
pub trait Transport: Send + Sync {
    /// Whether the data source looks reachable right now
    async fn is_reachable(&self) -> bool;

    /// GET `path` relative to the base URL and decode the body as JSON
    async fn get_json(&self, path: &str) -> Result<Value>;
}

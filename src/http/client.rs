use anyhow::{Context, Result};
use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

use crate::config::ApiSettings;
use crate::errors::{fetch_context, with_fetch_context, with_parse_context};

use super::Transport;

/// JSON-over-HTTP client bound to one base URL
pub struct HttpClient {
    client: Client,
    base_url: String,
    reachability_timeout: Duration,
}

impl HttpClient {
    pub fn new(settings: &ApiSettings) -> Result<Self> {
        let client = Self::build_client(settings.user_agent, settings.timeout_secs)?;

        Ok(Self {
            client,
            base_url: settings.base_url().trim_end_matches('/').to_string(),
            reachability_timeout: Duration::from_millis(settings.reachability_timeout_ms),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn build_client(user_agent: &str, timeout_secs: u64) -> Result<Client> {
        Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("Failed to build HTTP client")
    }

    // --- Helper Methods ---

    fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send_get_request(&self, url: &str) -> Result<reqwest::Response> {
        let response = self
            .client
            .get(url)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .send()
            .await;
        with_fetch_context(response, url)
    }
}

#[async_trait]
impl Transport for HttpClient {
    /// HEAD on the base URL through the regular client, proxies included
    ///
    /// Any HTTP response counts, whatever its status.
    async fn is_reachable(&self) -> bool {
        let probe = self
            .client
            .head(&self.base_url)
            .timeout(self.reachability_timeout)
            .send()
            .await;

        match probe {
            Ok(response) => {
                debug!("{} reachable: status {}", self.base_url, response.status());
                true
            }
            Err(e) => {
                warn!("{} unreachable: {}", self.base_url, e);
                false
            }
        }
    }

    async fn get_json(&self, path: &str) -> Result<Value> {
        let url = self.build_url(path);
        info!("Making request to: {}", url);

        let response = self.send_get_request(&url).await?;

        if !response.status().is_success() {
            anyhow::bail!("{}: HTTP error! status: {}", fetch_context(&url), response.status());
        }

        let body = with_fetch_context(response.text().await, &url)?;
        let data: Value = with_parse_context(serde_json::from_str(&body), path)?;
        debug!("Response from {}: {} bytes", path, body.len());
        Ok(data)
    }
}

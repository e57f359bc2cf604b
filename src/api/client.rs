use anyhow::{Context, Result};
use log::info;
use std::sync::Arc;

use crate::api::parsers;
use crate::config::settings::{SPORTS_LIST_PATH, TOURNAMENTS_PATH};
use crate::domain::{Sport, SportGroup};
use crate::http::Transport;

/// Typed access to the two read-only endpoints
pub struct TournamentApiClient {
    transport: Arc<dyn Transport>,
}

impl TournamentApiClient {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    pub async fn is_reachable(&self) -> bool {
        self.transport.is_reachable().await
    }

    /// Fetch and normalize the sports list, `"all"` first
    pub async fn fetch_sports(&self) -> Result<Vec<Sport>> {
        let response = self
            .transport
            .get_json(SPORTS_LIST_PATH)
            .await
            .context("Failed to fetch sports")?;

        let sports = parsers::parse_sports_response(&response)?;
        info!("Fetched {} sports", sports.len());
        Ok(sports)
    }

    /// Fetch and validate tournaments grouped by sport
    pub async fn fetch_tournaments(&self) -> Result<Vec<SportGroup>> {
        let response = self
            .transport
            .get_json(TOURNAMENTS_PATH)
            .await
            .context("Failed to fetch tournaments")?;

        let groups = parsers::parse_tournaments_response(&response)?;
        info!("Fetched {} sport groups", groups.len());
        Ok(groups)
    }
}

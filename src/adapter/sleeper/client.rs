//! Sleeper REST API client.
//!
//! Provides HTTP client functionality for the read-only Sleeper v1 API.
//! No authentication is needed; every call is a plain GET.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info};
use url::Url;

use super::dto::{parse_season, BracketMatchDto, MatchupDto};
use crate::domain::{BracketEntry, LeagueId, RawWeekScore};
use crate::error::{Error, Result};
use crate::port::{LeaguePayload, LeagueSource};

/// Public Sleeper API root.
pub const DEFAULT_BASE_URL: &str = "https://api.sleeper.app/v1";

/// HTTP client for the Sleeper REST API.
pub struct SleeperClient {
    client: Client,
    base_url: Url,
}

impl SleeperClient {
    /// Create a new Sleeper client with the given base URL.
    ///
    /// # Arguments
    ///
    /// * `base_url` - The API root (e.g., `https://api.sleeper.app/v1`)
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self {
            client: Client::new(),
            base_url: normalize_base(base_url)?,
        })
    }

    /// Resolve an endpoint path against the base URL.
    pub fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.endpoint(path)?;
        debug!(url = %url, "GET");

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Api {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response.json().await?)
    }
}

/// `Url::join` drops the last path segment unless the base ends with a slash.
fn normalize_base(base_url: &str) -> Result<Url> {
    let mut base = base_url.trim().to_string();
    if !base.ends_with('/') {
        base.push('/');
    }
    Ok(Url::parse(&base)?)
}

#[async_trait]
impl LeagueSource for SleeperClient {
    async fn fetch_league(&self, league_id: &LeagueId) -> Result<LeaguePayload> {
        info!(league_id = %league_id, "Fetching league");
        let raw: Value = self.get_json(&format!("league/{league_id}")).await?;
        let season = parse_season(&raw)?;
        Ok(LeaguePayload { season, raw })
    }

    async fn fetch_rosters(&self, league_id: &LeagueId) -> Result<Vec<Value>> {
        self.get_json(&format!("league/{league_id}/rosters")).await
    }

    async fn fetch_users(&self, league_id: &LeagueId) -> Result<Vec<Value>> {
        self.get_json(&format!("league/{league_id}/users")).await
    }

    async fn fetch_draft_picks(&self, draft_id: &str) -> Result<Vec<Value>> {
        self.get_json(&format!("draft/{draft_id}/picks")).await
    }

    async fn fetch_week_matchups(&self, league_id: &LeagueId, week: u32) -> Result<Vec<RawWeekScore>> {
        let matchups: Vec<MatchupDto> = self
            .get_json(&format!("league/{league_id}/matchups/{week}"))
            .await?;
        debug!(week, count = matchups.len(), "Fetched matchups");
        Ok(matchups.into_iter().map(RawWeekScore::from).collect())
    }

    async fn fetch_winners_bracket(&self, league_id: &LeagueId) -> Result<Vec<BracketEntry>> {
        let bracket: Option<Vec<BracketMatchDto>> = self
            .get_json(&format!("league/{league_id}/winners_bracket"))
            .await?;
        Ok(bracket
            .unwrap_or_default()
            .into_iter()
            .map(BracketEntry::from)
            .collect())
    }

    fn source_name(&self) -> &'static str {
        "sleeper"
    }
}

//! Read-side port for a fantasy league API.

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::{BracketEntry, LeagueId, RawWeekScore, Season};
use crate::error::Result;

/// League metadata: the parsed season plus the raw payload it came from.
#[derive(Debug, Clone)]
pub struct LeaguePayload {
    pub season: Season,
    pub raw: Value,
}

/// Source of league data, one call per resource.
///
/// Implementations report non-success responses as errors and never retry.
#[async_trait]
pub trait LeagueSource: Send + Sync {
    /// League (season) metadata, including the link to the previous season.
    async fn fetch_league(&self, league_id: &LeagueId) -> Result<LeaguePayload>;

    /// Raw roster payloads for the season.
    async fn fetch_rosters(&self, league_id: &LeagueId) -> Result<Vec<Value>>;

    /// Raw user payloads for the season.
    async fn fetch_users(&self, league_id: &LeagueId) -> Result<Vec<Value>>;

    /// Raw pick payloads for a draft.
    async fn fetch_draft_picks(&self, draft_id: &str) -> Result<Vec<Value>>;

    /// Every roster's score record for one week.
    async fn fetch_week_matchups(&self, league_id: &LeagueId, week: u32) -> Result<Vec<RawWeekScore>>;

    /// Matches of the winners bracket in bracket order.
    async fn fetch_winners_bracket(&self, league_id: &LeagueId) -> Result<Vec<BracketEntry>>;

    /// Source name for logging.
    fn source_name(&self) -> &'static str;
}

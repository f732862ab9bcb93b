//! In-memory [`LeagueSource`] with scripted responses.
//!
//! Unscripted resources answer like a missing endpoint: an
//! [`Error::Api`] with status 404.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use crate::adapter::sleeper::parse_season;
use crate::domain::{BracketEntry, LeagueId, RawWeekScore};
use crate::error::{Error, Result};
use crate::port::{LeaguePayload, LeagueSource};

#[derive(Default)]
pub struct ScriptedLeague {
    leagues: HashMap<LeagueId, Value>,
    rosters: HashMap<LeagueId, Vec<Value>>,
    users: HashMap<LeagueId, Vec<Value>>,
    picks: HashMap<String, Vec<Value>>,
    weeks: HashMap<(LeagueId, u32), Vec<RawWeekScore>>,
    brackets: HashMap<LeagueId, Vec<BracketEntry>>,
    requested_weeks: Mutex<Vec<(LeagueId, u32)>>,
}

impl ScriptedLeague {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a league payload under its own `league_id` field.
    pub fn with_league(mut self, raw: Value) -> Self {
        let id = raw["league_id"].as_str().unwrap_or_default().to_string();
        self.leagues.insert(LeagueId::new(id), raw);
        self
    }

    pub fn with_rosters(mut self, league_id: &str, rosters: Vec<Value>) -> Self {
        self.rosters.insert(LeagueId::new(league_id), rosters);
        self
    }

    pub fn with_users(mut self, league_id: &str, users: Vec<Value>) -> Self {
        self.users.insert(LeagueId::new(league_id), users);
        self
    }

    pub fn with_picks(mut self, draft_id: &str, picks: Vec<Value>) -> Self {
        self.picks.insert(draft_id.to_string(), picks);
        self
    }

    pub fn with_week(mut self, league_id: &str, week: u32, scores: Vec<RawWeekScore>) -> Self {
        self.weeks.insert((LeagueId::new(league_id), week), scores);
        self
    }

    pub fn with_bracket(mut self, league_id: &str, entries: Vec<BracketEntry>) -> Self {
        self.brackets.insert(LeagueId::new(league_id), entries);
        self
    }

    /// Weeks requested through `fetch_week_matchups`, in call order.
    pub fn requested_weeks(&self) -> Vec<(LeagueId, u32)> {
        self.requested_weeks.lock().unwrap().clone()
    }

    fn missing(resource: String) -> Error {
        Error::Api {
            status: 404,
            url: resource,
        }
    }
}

#[async_trait]
impl LeagueSource for ScriptedLeague {
    async fn fetch_league(&self, league_id: &LeagueId) -> Result<LeaguePayload> {
        let raw = self
            .leagues
            .get(league_id)
            .cloned()
            .ok_or_else(|| Self::missing(format!("league/{league_id}")))?;
        let season = parse_season(&raw)?;
        Ok(LeaguePayload { season, raw })
    }

    async fn fetch_rosters(&self, league_id: &LeagueId) -> Result<Vec<Value>> {
        self.rosters
            .get(league_id)
            .cloned()
            .ok_or_else(|| Self::missing(format!("league/{league_id}/rosters")))
    }

    async fn fetch_users(&self, league_id: &LeagueId) -> Result<Vec<Value>> {
        self.users
            .get(league_id)
            .cloned()
            .ok_or_else(|| Self::missing(format!("league/{league_id}/users")))
    }

    async fn fetch_draft_picks(&self, draft_id: &str) -> Result<Vec<Value>> {
        self.picks
            .get(draft_id)
            .cloned()
            .ok_or_else(|| Self::missing(format!("draft/{draft_id}/picks")))
    }

    async fn fetch_week_matchups(&self, league_id: &LeagueId, week: u32) -> Result<Vec<RawWeekScore>> {
        self.requested_weeks
            .lock()
            .unwrap()
            .push((league_id.clone(), week));
        self.weeks
            .get(&(league_id.clone(), week))
            .cloned()
            .ok_or_else(|| Self::missing(format!("league/{league_id}/matchups/{week}")))
    }

    async fn fetch_winners_bracket(&self, league_id: &LeagueId) -> Result<Vec<BracketEntry>> {
        self.brackets
            .get(league_id)
            .cloned()
            .ok_or_else(|| Self::missing(format!("league/{league_id}/winners_bracket")))
    }

    fn source_name(&self) -> &'static str {
        "scripted"
    }
}

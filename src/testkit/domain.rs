//! Builders for Sleeper-shaped payloads and domain records.
//!
//! Keeps fixtures short so tests focus on assertions rather than on the
//! exact JSON layout of the API.

use serde_json::{json, Value};

use crate::domain::{points_from_f64, BracketEntry, RawWeekScore, RosterId, TeamSlot};

/// Settings for [`league_json`].
#[derive(Debug, Clone, Copy)]
pub struct LeagueShape<'a> {
    pub league_id: &'a str,
    pub season: &'a str,
    pub previous_league_id: Option<&'a str>,
    pub start_week: u32,
    pub playoff_start_week: u32,
    pub last_completed_week: u32,
    pub median: bool,
}

/// A `GET /league/{id}` payload.
pub fn league_json(shape: LeagueShape<'_>) -> Value {
    json!({
        "league_id": shape.league_id,
        "name": "Test League",
        "season": shape.season,
        "status": "complete",
        "sport": "nfl",
        "total_rosters": 4,
        "previous_league_id": shape.previous_league_id,
        "draft_id": format!("draft-{}", shape.league_id),
        "settings": {
            "start_week": shape.start_week,
            "playoff_week_start": shape.playoff_start_week,
            "last_scored_leg": shape.last_completed_week,
            "league_average_match": u8::from(shape.median),
            "playoff_teams": 4,
            "num_teams": 4
        },
        "scoring_settings": { "rec": 0.5 }
    })
}

/// A roster payload owned by `owner_id`.
pub fn roster_json(roster_id: u32, owner_id: &str) -> Value {
    json!({
        "roster_id": roster_id,
        "owner_id": owner_id,
        "settings": { "wins": 0, "losses": 0, "ties": 0, "fpts": 0 },
        "starters": [],
        "players": []
    })
}

/// A user payload.
pub fn user_json(user_id: &str, display_name: &str) -> Value {
    json!({
        "user_id": user_id,
        "display_name": display_name,
        "metadata": { "team_name": format!("{display_name} FC") },
        "is_owner": false
    })
}

/// A draft pick payload.
pub fn pick_json(round: u32, pick_no: u32, roster_id: u32, player_id: &str) -> Value {
    json!({
        "round": round,
        "pick_no": pick_no,
        "roster_id": roster_id,
        "player_id": player_id,
        "metadata": { "first_name": "Test", "last_name": player_id, "position": "RB" }
    })
}

/// A weekly score with `points` set, taken as the API's float.
pub fn score(roster_id: u32, matchup_id: Option<u32>, points: f64) -> RawWeekScore {
    RawWeekScore {
        roster_id: RosterId::new(roster_id),
        matchup_id,
        points: points_from_f64(points),
        custom_points: None,
    }
}

/// Slot for a known roster.
pub fn slot(roster_id: u32) -> TeamSlot {
    TeamSlot::Roster(RosterId::new(roster_id))
}

/// A bracket match.
pub fn bracket_entry(round: u32, match_id: u32, t1: TeamSlot, t2: TeamSlot, placing: Option<u32>) -> BracketEntry {
    BracketEntry {
        round,
        match_id,
        t1,
        t2,
        placing,
    }
}

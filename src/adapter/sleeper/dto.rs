//! Sleeper API response types.

use serde::Deserialize;
use serde_json::Value;

use crate::domain::{
    points_from_f64, BracketEntry, LeagueId, RawWeekScore, RosterId, Season, SeasonSettings,
    TeamSlot,
};
use crate::error::{Error, Result};

/// One entry of `GET /league/{id}/matchups/{week}`.
///
/// Points are JSON floats and stay `f64` until converted exactly.
#[derive(Debug, Deserialize)]
pub struct MatchupDto {
    pub roster_id: u32,
    pub matchup_id: Option<u32>,
    #[serde(default)]
    pub points: Option<f64>,
    #[serde(default)]
    pub custom_points: Option<f64>,
}

impl From<MatchupDto> for RawWeekScore {
    fn from(dto: MatchupDto) -> Self {
        Self {
            roster_id: RosterId::new(dto.roster_id),
            matchup_id: dto.matchup_id,
            points: dto.points.and_then(points_from_f64),
            custom_points: dto.custom_points.and_then(points_from_f64),
        }
    }
}

/// Where an undecided bracket slot will be filled from.
#[derive(Debug, Default, Deserialize)]
pub struct SlotRefDto {
    pub w: Option<u32>,
    pub l: Option<u32>,
}

/// One entry of `GET /league/{id}/winners_bracket`.
#[derive(Debug, Deserialize)]
pub struct BracketMatchDto {
    pub r: u32,
    pub m: u32,
    pub t1: Option<u32>,
    pub t2: Option<u32>,
    #[serde(default)]
    pub t1_from: Option<SlotRefDto>,
    #[serde(default)]
    pub t2_from: Option<SlotRefDto>,
    #[serde(default)]
    pub p: Option<u32>,
}

fn slot(team: Option<u32>, from: Option<SlotRefDto>) -> TeamSlot {
    match (team, from) {
        (Some(roster), _) => TeamSlot::Roster(RosterId::new(roster)),
        (None, Some(SlotRefDto { w: Some(m), .. })) => TeamSlot::WinnerOf(m),
        (None, Some(SlotRefDto { l: Some(m), .. })) => TeamSlot::LoserOf(m),
        (None, _) => TeamSlot::Undetermined,
    }
}

impl From<BracketMatchDto> for BracketEntry {
    fn from(dto: BracketMatchDto) -> Self {
        Self {
            round: dto.r,
            match_id: dto.m,
            t1: slot(dto.t1, dto.t1_from),
            t2: slot(dto.t2, dto.t2_from),
            placing: dto.p,
        }
    }
}

#[derive(Debug, Deserialize)]
struct LeagueDto {
    league_id: String,
    season: String,
    #[serde(default)]
    previous_league_id: Option<String>,
    #[serde(default)]
    draft_id: Option<String>,
    settings: LeagueSettingsDto,
}

#[derive(Debug, Deserialize)]
struct LeagueSettingsDto {
    #[serde(default = "default_start_week")]
    start_week: u32,
    playoff_week_start: u32,
    /// Absent until the first week is scored.
    #[serde(default)]
    last_scored_leg: u32,
    /// 1 when every team also plays the league median.
    #[serde(default)]
    league_average_match: u32,
}

const fn default_start_week() -> u32 {
    1
}

/// Parse `GET /league/{id}` into a [`Season`].
pub fn parse_season(raw: &Value) -> Result<Season> {
    let dto: LeagueDto = serde_json::from_value(raw.clone()).map_err(|e| Error::Payload {
        endpoint: "league".into(),
        reason: e.to_string(),
    })?;

    let settings = SeasonSettings::try_new(
        dto.settings.start_week,
        dto.settings.playoff_week_start,
        dto.settings.last_scored_leg,
        dto.settings.league_average_match != 0,
    )?;

    Ok(Season {
        league_id: LeagueId::new(dto.league_id),
        year: dto.season,
        previous_league_id: LeagueId::from_link(dto.previous_league_id.as_deref()),
        draft_id: dto.draft_id.filter(|id| !id.is_empty()),
        settings,
    })
}

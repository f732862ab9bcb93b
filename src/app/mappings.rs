//! Column layouts for the tables built from raw Sleeper payloads.

use crate::domain::table::{FieldKind, FieldMapping};

use FieldKind::{Boolean, Float, Integer, Json, Text};

pub const SEASON: &[FieldMapping] = &[
    FieldMapping::new("name", "league_name", Text),
    FieldMapping::new("status", "status", Text),
    FieldMapping::new("sport", "sport", Text),
    FieldMapping::new("total_rosters", "total_rosters", Integer),
    FieldMapping::new("previous_league_id", "previous_league_id", Text),
    FieldMapping::new("draft_id", "draft_id", Text),
    FieldMapping::new("settings.start_week", "start_week", Integer),
    FieldMapping::new("settings.playoff_week_start", "playoff_start_week", Integer),
    FieldMapping::new("settings.playoff_teams", "playoff_teams", Integer),
    FieldMapping::new("settings.last_scored_leg", "last_completed_week", Integer),
    FieldMapping::new("settings.league_average_match", "median_enabled", Boolean),
    FieldMapping::new("settings.num_teams", "num_teams", Integer),
    FieldMapping::new("scoring_settings.rec", "points_per_reception", Float),
    FieldMapping::new("roster_positions", "roster_positions", Json),
];

pub const ROSTERS: &[FieldMapping] = &[
    FieldMapping::new("roster_id", "roster_id", Integer),
    FieldMapping::new("owner_id", "owner_id", Text),
    FieldMapping::new("manager_display_name", "manager_display_name", Text),
    FieldMapping::new("settings.wins", "wins", Integer),
    FieldMapping::new("settings.losses", "losses", Integer),
    FieldMapping::new("settings.ties", "ties", Integer),
    FieldMapping::new("settings.fpts", "points_for", Integer),
    FieldMapping::new("settings.fpts_decimal", "points_for_decimal", Integer),
    FieldMapping::new("settings.fpts_against", "points_against", Integer),
    FieldMapping::new("settings.fpts_against_decimal", "points_against_decimal", Integer),
    FieldMapping::new("settings.waiver_position", "waiver_position", Integer),
    FieldMapping::new("settings.total_moves", "total_moves", Integer),
    FieldMapping::new("starters", "starters", Json),
    FieldMapping::new("players", "players", Json),
];

pub const USERS: &[FieldMapping] = &[
    FieldMapping::new("user_id", "user_id", Text),
    FieldMapping::new("display_name", "display_name", Text),
    FieldMapping::new("metadata.team_name", "team_name", Text),
    FieldMapping::new("is_owner", "is_commissioner", Boolean),
    FieldMapping::new("avatar", "avatar", Text),
];

pub const DRAFT_PICKS: &[FieldMapping] = &[
    FieldMapping::new("round", "round", Integer),
    FieldMapping::new("pick_no", "pick_no", Integer),
    FieldMapping::new("draft_slot", "draft_slot", Integer),
    FieldMapping::new("roster_id", "roster_id", Integer),
    FieldMapping::new("picked_by", "picked_by", Text),
    FieldMapping::new("player_id", "player_id", Text),
    FieldMapping::new("metadata.first_name", "first_name", Text),
    FieldMapping::new("metadata.last_name", "last_name", Text),
    FieldMapping::new("metadata.position", "position", Text),
    FieldMapping::new("metadata.team", "nfl_team", Text),
    FieldMapping::new("is_keeper", "is_keeper", Boolean),
];

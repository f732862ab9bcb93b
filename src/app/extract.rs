//! Per-season extraction: runs the configured operations for one season.

use std::collections::HashMap;

use futures_util::stream::{self, StreamExt, TryStreamExt};
use rust_decimal::Decimal;
use serde_json::{json, Number, Value};
use tracing::{debug, info, warn};

use super::config::ExtractConfig;
use super::mappings;
use crate::domain::error::DomainError;
use crate::domain::table::{flatten, flatten_all, Row, Table};
use crate::domain::{
    classify_scores, pair, points_to_f64, BracketEntry, H2hRow, MedalLabels, MedianRow, Operation, PlayoffLookup,
    RawWeekScore, RosterId, Season, SeasonResults, TeamSlot, WeekPairing, WeekScore,
};
use crate::error::Result;
use crate::port::{LeaguePayload, LeagueSource};

pub const SEASON_TABLE: &str = "season";
pub const ROSTERS_TABLE: &str = "rosters";
pub const USERS_TABLE: &str = "users";
pub const DRAFT_PICKS_TABLE: &str = "draft_picks";
pub const H2H_TABLE: &str = "matchups_h2h";
pub const MEDIAN_TABLE: &str = "matchups_median";
pub const BRACKET_TABLE: &str = "winners_bracket";

/// Builds the tables for a single season from a [`LeagueSource`].
pub struct SeasonExtractor<'a> {
    source: &'a dyn LeagueSource,
    config: &'a ExtractConfig,
}

impl<'a> SeasonExtractor<'a> {
    pub fn new(source: &'a dyn LeagueSource, config: &'a ExtractConfig) -> Self {
        Self { source, config }
    }

    /// Run `operations` in order. Any failure aborts the season.
    pub async fn run(&self, league: &LeaguePayload, operations: &[Operation]) -> Result<Vec<Table>> {
        let season = &league.season;
        let mut tables = Vec::new();

        for &operation in operations {
            debug!(season = %season.year, %operation, "Running operation");
            let mut produced = self.run_operation(operation, league).await?;
            for table in &mut produced {
                table.tag(&[
                    ("season", json!(season.year)),
                    ("league_id", json!(season.league_id.as_str())),
                ]);
            }
            tables.extend(produced);
        }

        Ok(tables)
    }

    async fn run_operation(&self, operation: Operation, league: &LeaguePayload) -> Result<Vec<Table>> {
        let season = &league.season;
        let tables = match operation {
            Operation::Season => vec![Table::new(SEASON_TABLE, vec![flatten(&league.raw, mappings::SEASON)])],
            Operation::Rosters => vec![Table::new(ROSTERS_TABLE, self.roster_rows(season).await?)],
            Operation::Users => {
                let users = self.source.fetch_users(&season.league_id).await?;
                vec![Table::new(USERS_TABLE, flatten_all(&users, mappings::USERS))]
            }
            Operation::DraftPicks => vec![Table::new(DRAFT_PICKS_TABLE, self.draft_pick_rows(season).await?)],
            Operation::Matchups => {
                let pairing = self.matchups(season).await?;
                let labels = self.config.medal_labels;
                vec![
                    Table::new(H2H_TABLE, pairing.h2h.iter().map(|r| h2h_row(r, labels)).collect()),
                    Table::new(MEDIAN_TABLE, pairing.median.iter().map(|r| median_row(r, labels)).collect()),
                ]
            }
            Operation::WinnersBracket => {
                let entries = self.source.fetch_winners_bracket(&season.league_id).await?;
                let rows = entries.iter().map(|e| bracket_row(e, season, self.config.medal_labels)).collect();
                vec![Table::new(BRACKET_TABLE, rows)]
            }
        };
        Ok(tables)
    }

    /// Head-to-head and median rows for every completed week of the season.
    pub async fn matchups(&self, season: &Season) -> Result<WeekPairing> {
        let settings = season.settings;
        let league_id = &season.league_id;

        let bracket = match self.source.fetch_winners_bracket(league_id).await {
            Ok(entries) => PlayoffLookup::for_season(&entries, &settings),
            Err(e) => {
                warn!(season = %season.year, error = %e, "Winners bracket unavailable, playoff weeks will be empty");
                PlayoffLookup::default()
            }
        };

        let weeks: Vec<(u32, Vec<RawWeekScore>)> = stream::iter(settings.completed_weeks())
            .map(|week| async move {
                self.source
                    .fetch_week_matchups(league_id, week)
                    .await
                    .map(|scores| (week, scores))
            })
            .buffer_unordered(self.config.week_concurrency.max(1))
            .try_collect()
            .await?;

        let mut pairing = WeekPairing::default();
        for (week, raw) in weeks {
            let scores = raw
                .into_iter()
                .map(|r| r.into_score(week))
                .collect::<std::result::Result<Vec<WeekScore>, DomainError>>()?;
            let classified = classify_scores(scores, &settings, &bracket);
            pairing.append(pair(
                &classified,
                settings.median_enabled(),
                settings.playoff_start_week(),
            ));
        }
        pairing.sort();

        info!(
            season = %season.year,
            h2h = pairing.h2h.len(),
            median = pairing.median.len(),
            "Paired matchups"
        );
        Ok(pairing)
    }

    /// Matchups plus manager names, as needed for standings.
    pub async fn results(&self, season: &Season) -> Result<SeasonResults> {
        let managers = self.managers(season).await?;
        let pairing = self.matchups(season).await?;
        Ok(SeasonResults {
            season: season.year.clone(),
            managers,
            h2h: pairing.h2h,
            median: pairing.median,
        })
    }

    async fn managers(&self, season: &Season) -> Result<HashMap<RosterId, String>> {
        let rosters = self.roster_rows(season).await?;
        Ok(rosters
            .iter()
            .filter_map(|row| {
                let roster_id = row.get("roster_id")?.as_u64()?;
                let name = row.get("manager_display_name")?.as_str()?;
                Some((RosterId::new(u32::try_from(roster_id).ok()?), name.to_string()))
            })
            .collect())
    }

    async fn roster_rows(&self, season: &Season) -> Result<Vec<Row>> {
        let mut rosters = self.source.fetch_rosters(&season.league_id).await?;
        let users = self.source.fetch_users(&season.league_id).await?;
        let names = display_names(&users);

        for roster in &mut rosters {
            let name = roster
                .get("owner_id")
                .and_then(Value::as_str)
                .and_then(|owner| names.get(owner))
                .map_or(Value::Null, |name| Value::String(name.clone()));
            if let Value::Object(map) = roster {
                map.insert("manager_display_name".into(), name);
            }
        }

        Ok(flatten_all(&rosters, mappings::ROSTERS))
    }

    async fn draft_pick_rows(&self, season: &Season) -> Result<Vec<Row>> {
        let Some(draft_id) = season.draft_id.as_deref() else {
            warn!(season = %season.year, "League has no draft");
            return Ok(Vec::new());
        };
        let picks = self.source.fetch_draft_picks(draft_id).await?;
        Ok(flatten_all(&picks, mappings::DRAFT_PICKS))
    }
}

fn display_names(users: &[Value]) -> HashMap<String, String> {
    users
        .iter()
        .filter_map(|u| {
            let id = u.get("user_id")?.as_str()?;
            let name = u.get("display_name")?.as_str()?;
            Some((id.to_string(), name.to_string()))
        })
        .collect()
}

fn decimal_cell(value: Decimal) -> Value {
    Number::from_f64(points_to_f64(value)).map_or(Value::Null, Value::Number)
}

fn row(value: Value) -> Row {
    match value {
        Value::Object(map) => map,
        _ => Row::new(),
    }
}

fn h2h_row(r: &H2hRow, labels: MedalLabels) -> Row {
    row(json!({
        "week": r.week,
        "matchup_id": r.matchup_id,
        "roster_id": r.roster_id.get(),
        "points": decimal_cell(r.points),
        "type": r.matchup_type.label(labels),
        "roster_id_opp": r.roster_id_opp.get(),
        "points_opp": decimal_cell(r.points_opp),
    }))
}

fn median_row(r: &MedianRow, labels: MedalLabels) -> Row {
    row(json!({
        "week": r.week,
        "roster_id": r.roster_id.get(),
        "points": decimal_cell(r.points),
        "week_median_points": decimal_cell(r.week_median_points),
        "type": r.matchup_type.label(labels),
    }))
}

fn slot_cell(slot: TeamSlot) -> Value {
    match slot {
        TeamSlot::Roster(id) => json!(id.get()),
        TeamSlot::WinnerOf(m) => json!(format!("winner of match {m}")),
        TeamSlot::LoserOf(m) => json!(format!("loser of match {m}")),
        TeamSlot::Undetermined => Value::Null,
    }
}

fn bracket_row(entry: &BracketEntry, season: &Season, labels: MedalLabels) -> Row {
    row(json!({
        "round": entry.round,
        "match_id": entry.match_id,
        "week": season.settings.playoff_week(entry.round),
        "t1": slot_cell(entry.t1),
        "t2": slot_cell(entry.t2),
        "placing": entry.placing,
        "type": entry.matchup_type().label(labels),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MatchupType;
    use rust_decimal_macros::dec;

    #[test]
    fn h2h_row_uses_configured_labels() {
        let r = H2hRow {
            week: 17,
            matchup_id: 1,
            roster_id: RosterId::new(2),
            points: dec!(101.25),
            matchup_type: MatchupType::Championship,
            roster_id_opp: RosterId::new(5),
            points_opp: dec!(99.5),
        };

        let olympic = h2h_row(&r, MedalLabels::Olympic);
        assert_eq!(olympic["type"], json!("Gold Medal Match"));
        assert_eq!(olympic["points"], json!(101.25));
        assert_eq!(olympic["roster_id_opp"], json!(5));

        let classic = h2h_row(&r, MedalLabels::Classic);
        assert_eq!(classic["type"], json!("Championship"));
    }

    #[test]
    fn display_names_skip_incomplete_users() {
        let users = vec![
            json!({ "user_id": "u1", "display_name": "ann" }),
            json!({ "user_id": "u2" }),
        ];
        let names = display_names(&users);
        assert_eq!(names.len(), 1);
        assert_eq!(names["u1"], "ann");
    }

    #[test]
    fn forward_slots_render_as_text() {
        assert_eq!(slot_cell(TeamSlot::WinnerOf(3)), json!("winner of match 3"));
        assert_eq!(slot_cell(TeamSlot::Roster(RosterId::new(4))), json!(4));
        assert_eq!(slot_cell(TeamSlot::Undetermined), Value::Null);
    }
}

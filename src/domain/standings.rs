//! All-time standings and single-week records across seasons.

use std::cmp::Reverse;
use std::collections::{BTreeMap, BTreeSet, HashMap};

use rust_decimal::Decimal;

use super::ids::RosterId;
use super::matchup_type::MatchupType;
use super::pairing::{H2hRow, MedianRow};

/// Everything standings need from one extracted season.
#[derive(Debug, Clone, Default)]
pub struct SeasonResults {
    pub season: String,
    /// Manager display name per roster.
    pub managers: HashMap<RosterId, String>,
    pub h2h: Vec<H2hRow>,
    pub median: Vec<MedianRow>,
}

impl SeasonResults {
    fn manager(&self, roster_id: RosterId) -> String {
        self.managers
            .get(&roster_id)
            .cloned()
            .unwrap_or_else(|| format!("Roster {roster_id}"))
    }
}

/// A manager's record across every extracted season.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandingsRow {
    pub manager: String,
    pub gold: u32,
    pub silver: u32,
    pub bronze: u32,
    /// Share of regular-season games won (head-to-head and median), ties count half.
    pub regular_season_win_rate: Decimal,
    /// Share of seasons with at least one playoff game.
    pub made_playoffs_rate: Decimal,
    pub seasons_played: u32,
}

#[derive(Default)]
struct Tally {
    gold: u32,
    silver: u32,
    bronze: u32,
    wins: Decimal,
    games: u32,
    seasons: BTreeSet<String>,
    playoff_seasons: BTreeSet<String>,
}

const RATE_DP: u32 = 3;

/// Fold per-season results into one standings row per manager.
///
/// Medals go to the higher score of a Championship or ThirdPlace game; a
/// tied medal game awards none.
///
/// Rows are ordered by gold, silver and bronze counts, then win rate, all
/// descending, with the manager name as the final tie-break.
#[must_use]
pub fn all_time_standings(seasons: &[SeasonResults]) -> Vec<StandingsRow> {
    let mut tallies: BTreeMap<String, Tally> = BTreeMap::new();

    for season in seasons {
        for manager in season.managers.values() {
            tallies
                .entry(manager.clone())
                .or_default()
                .seasons
                .insert(season.season.clone());
        }

        for row in &season.h2h {
            let manager = season.manager(row.roster_id);
            let tally = tallies.entry(manager).or_default();
            tally.seasons.insert(season.season.clone());

            match row.matchup_type {
                MatchupType::RegularSeason => {
                    tally.games += 1;
                    tally.wins += game_credit(row.points, row.points_opp);
                }
                matchup_type => {
                    tally.playoff_seasons.insert(season.season.clone());
                    if row.points > row.points_opp {
                        award_medal(&mut tallies, season, row, matchup_type);
                    }
                }
            }
        }

        for row in &season.median {
            if row.matchup_type != MatchupType::RegularSeason {
                continue;
            }
            let tally = tallies.entry(season.manager(row.roster_id)).or_default();
            tally.games += 1;
            tally.wins += game_credit(row.points, row.week_median_points);
        }
    }

    let mut rows: Vec<StandingsRow> = tallies
        .into_iter()
        .map(|(manager, tally)| {
            let seasons_played = tally.seasons.len() as u32;
            StandingsRow {
                manager,
                gold: tally.gold,
                silver: tally.silver,
                bronze: tally.bronze,
                regular_season_win_rate: rate(tally.wins, tally.games),
                made_playoffs_rate: rate(
                    Decimal::from(tally.playoff_seasons.len() as u32),
                    seasons_played,
                ),
                seasons_played,
            }
        })
        .collect();

    rows.sort_by(|a, b| {
        (Reverse(a.gold), Reverse(a.silver), Reverse(a.bronze), Reverse(a.regular_season_win_rate))
            .cmp(&(Reverse(b.gold), Reverse(b.silver), Reverse(b.bronze), Reverse(b.regular_season_win_rate)))
            .then_with(|| a.manager.cmp(&b.manager))
    });
    rows
}

fn award_medal(
    tallies: &mut BTreeMap<String, Tally>,
    season: &SeasonResults,
    winning_row: &H2hRow,
    matchup_type: MatchupType,
) {
    let winner = season.manager(winning_row.roster_id);
    let loser = season.manager(winning_row.roster_id_opp);
    match matchup_type {
        MatchupType::Championship => {
            tallies.entry(winner).or_default().gold += 1;
            tallies.entry(loser).or_default().silver += 1;
        }
        MatchupType::ThirdPlace => {
            tallies.entry(winner).or_default().bronze += 1;
        }
        MatchupType::RegularSeason | MatchupType::Round(_) => {}
    }
}

fn game_credit(points: Decimal, against: Decimal) -> Decimal {
    match points.cmp(&against) {
        std::cmp::Ordering::Greater => Decimal::ONE,
        std::cmp::Ordering::Equal => Decimal::new(5, 1),
        std::cmp::Ordering::Less => Decimal::ZERO,
    }
}

fn rate(numerator: Decimal, denominator: u32) -> Decimal {
    if denominator == 0 {
        return Decimal::ZERO;
    }
    (numerator / Decimal::from(denominator)).round_dp(RATE_DP)
}

/// A single roster-week score attributed to its manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopScore {
    pub manager: String,
    pub points: Decimal,
    pub season: String,
    pub week: u32,
}

/// Highest `limit` weekly scores across all seasons.
///
/// Each roster-week is counted once even when it appears in several rows.
#[must_use]
pub fn top_single_week_scores(seasons: &[SeasonResults], limit: usize) -> Vec<TopScore> {
    let mut seen = BTreeSet::new();
    let mut scores = Vec::new();

    for season in seasons {
        let weekly = season
            .h2h
            .iter()
            .map(|r| (r.week, r.roster_id, r.points))
            .chain(season.median.iter().map(|r| (r.week, r.roster_id, r.points)));

        for (week, roster_id, points) in weekly {
            if seen.insert((season.season.clone(), week, roster_id)) {
                scores.push(TopScore {
                    manager: season.manager(roster_id),
                    points,
                    season: season.season.clone(),
                    week,
                });
            }
        }
    }

    scores.sort_by(|a, b| {
        b.points
            .cmp(&a.points)
            .then_with(|| a.season.cmp(&b.season))
            .then_with(|| a.week.cmp(&b.week))
            .then_with(|| a.manager.cmp(&b.manager))
    });
    scores.truncate(limit);
    scores
}

//! Head-to-head and median pairing of a week's scores.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use super::bracket::{resolve_matchup_type, PlayoffLookup};
use super::ids::RosterId;
use super::matchup_type::MatchupType;
use super::score::{points_from_f64, points_to_f64, round_points, WeekScore};
use super::season::SeasonSettings;

/// A week score with the type of game it was played in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedScore {
    pub score: WeekScore,
    pub matchup_type: MatchupType,
}

/// One roster's view of a head-to-head game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct H2hRow {
    pub week: u32,
    pub matchup_id: u32,
    pub roster_id: RosterId,
    pub points: Decimal,
    pub matchup_type: MatchupType,
    pub roster_id_opp: RosterId,
    pub points_opp: Decimal,
}

/// One roster's score against the league median for the week.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MedianRow {
    pub week: u32,
    pub roster_id: RosterId,
    pub points: Decimal,
    pub week_median_points: Decimal,
    pub matchup_type: MatchupType,
}

/// Output of pairing a single week.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeekPairing {
    pub h2h: Vec<H2hRow>,
    pub median: Vec<MedianRow>,
}

impl WeekPairing {
    /// Append another week's rows. Call [`WeekPairing::sort`] once all
    /// weeks are in.
    pub fn append(&mut self, other: WeekPairing) {
        self.h2h.extend(other.h2h);
        self.median.extend(other.median);
    }

    /// Restore the output order: h2h by week, matchup and roster; median by
    /// week and roster.
    pub fn sort(&mut self) {
        sort_rows(self);
    }
}

/// Attach matchup types, dropping rosters that had no typed game this week.
#[must_use]
pub fn classify_scores(
    scores: Vec<WeekScore>,
    settings: &SeasonSettings,
    bracket: &PlayoffLookup,
) -> Vec<ClassifiedScore> {
    scores
        .into_iter()
        .filter_map(|score| {
            resolve_matchup_type(settings, bracket, score.week, score.roster_id)
                .map(|matchup_type| ClassifiedScore { score, matchup_type })
        })
        .collect()
}

/// Pair every roster with its opponents and, when enabled, the week median.
///
/// Rosters without a `matchup_id`, or alone in their matchup, produce no
/// head-to-head row but still count toward the median.
#[must_use]
pub fn pair(week_matchups: &[ClassifiedScore], median_enabled: bool, playoff_start_week: u32) -> WeekPairing {
    let mut pairing = WeekPairing {
        h2h: head_to_head(week_matchups),
        median: Vec::new(),
    };

    if median_enabled {
        pairing.median = against_median(week_matchups, playoff_start_week);
    }

    sort_rows(&mut pairing);
    pairing
}

fn head_to_head(week_matchups: &[ClassifiedScore]) -> Vec<H2hRow> {
    let mut groups: BTreeMap<u32, Vec<&ClassifiedScore>> = BTreeMap::new();
    for entry in week_matchups {
        if let Some(matchup_id) = entry.score.matchup_id {
            groups.entry(matchup_id).or_default().push(entry);
        }
    }

    let mut rows = Vec::new();
    for (matchup_id, members) in groups {
        for own in &members {
            for opp in &members {
                if own.score.roster_id == opp.score.roster_id {
                    continue;
                }
                rows.push(H2hRow {
                    week: own.score.week,
                    matchup_id,
                    roster_id: own.score.roster_id,
                    points: own.score.points,
                    matchup_type: own.matchup_type,
                    roster_id_opp: opp.score.roster_id,
                    points_opp: opp.score.points,
                });
            }
        }
    }
    rows
}

fn against_median(week_matchups: &[ClassifiedScore], playoff_start_week: u32) -> Vec<MedianRow> {
    let Some(first) = week_matchups.first() else {
        return Vec::new();
    };
    if first.score.week >= playoff_start_week {
        return Vec::new();
    }

    let points: Vec<Decimal> = week_matchups.iter().map(|m| m.score.points).collect();
    let Some(week_median) = median(&points) else {
        return Vec::new();
    };
    let week_median = round_points(week_median);

    week_matchups
        .iter()
        .map(|m| MedianRow {
            week: m.score.week,
            roster_id: m.score.roster_id,
            points: m.score.points,
            week_median_points: week_median,
            matchup_type: m.matchup_type,
        })
        .collect()
}

/// Middle value, or the mean of the two middle values for an even count.
///
/// Values are expected at [`POINTS_DP`](super::score::POINTS_DP) places.
/// The mean is taken in `f64` and returned at its exact binary value, so a
/// midpoint such as `(100.01 + 100.04) / 2` lands on whichever side of
/// `100.025` the float does.
#[must_use]
pub fn median(values: &[Decimal]) -> Option<Decimal> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort();
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Some(sorted[mid])
    } else {
        points_from_f64((points_to_f64(sorted[mid - 1]) + points_to_f64(sorted[mid])) / 2.0)
    }
}

fn sort_rows(pairing: &mut WeekPairing) {
    pairing
        .h2h
        .sort_by_key(|r| (r.week, r.matchup_id, r.roster_id, r.roster_id_opp));
    pairing.median.sort_by_key(|r| (r.week, r.roster_id));
}

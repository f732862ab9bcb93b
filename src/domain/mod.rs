//! League-agnostic domain logic.
//!
//! Week classification, bracket expansion and matchup pairing are pure
//! functions over in-memory records; nothing here performs I/O.

pub mod error;
pub mod table;

mod bracket;
mod ids;
mod matchup_type;
mod operation;
mod pairing;
mod score;
mod season;
mod standings;

pub use bracket::{resolve_matchup_type, BracketEntry, PlayoffLookup, TeamSlot};
pub use ids::{LeagueId, RosterId};
pub use matchup_type::{MatchupType, MedalLabels};
pub use operation::Operation;
pub use pairing::{classify_scores, median, pair, ClassifiedScore, H2hRow, MedianRow, WeekPairing};
pub use score::{
    points_from_f64, points_to_f64, round_points, RawWeekScore, WeekScore, POINTS_DP,
};
pub use season::{classify, playoff_week, Season, SeasonSettings, WeekPhase};
pub use standings::{
    all_time_standings, top_single_week_scores, SeasonResults, StandingsRow, TopScore,
};

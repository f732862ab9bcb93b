//! Winners-bracket expansion into a per-week matchup type lookup.
//!
//! The league API describes the playoff bracket as a list of matches, each
//! tagged with its round and, for the medal games, a placing. Rounds map
//! onto calendar weeks counted from the playoff start week. Only rounds
//! whose week has already been scored are materialized, so games that are
//! not yet decided never receive a label.
//!
//! Team slots are kept exactly as the bracket reports them. A slot that
//! still points at "winner of match N" is stored as that reference and
//! never resolved to a roster, so it cannot match any roster lookup.

use std::collections::{BTreeMap, HashMap};

use super::ids::RosterId;
use super::matchup_type::MatchupType;
use super::season::{playoff_week, SeasonSettings, WeekPhase};

/// One side of a bracket match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TeamSlot {
    Roster(RosterId),
    /// Filled by the winner of the given match.
    WinnerOf(u32),
    /// Filled by the loser of the given match.
    LoserOf(u32),
    /// Not yet known and no reference given.
    Undetermined,
}

/// A single match of the winners bracket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BracketEntry {
    pub round: u32,
    pub match_id: u32,
    pub t1: TeamSlot,
    pub t2: TeamSlot,
    /// Final placing decided by this match (1 = title game, 3 = third place).
    pub placing: Option<u32>,
}

impl BracketEntry {
    #[must_use]
    pub const fn matchup_type(&self) -> MatchupType {
        MatchupType::from_bracket(self.round, self.placing)
    }
}

/// Lookup from week to team slot to matchup type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayoffLookup {
    weeks: BTreeMap<u32, HashMap<TeamSlot, MatchupType>>,
}

impl PlayoffLookup {
    /// Expand raw bracket entries, keeping only rounds already played.
    ///
    /// When two entries claim the same slot in the same week the first one
    /// in bracket order wins.
    #[must_use]
    pub fn build(entries: &[BracketEntry], playoff_start_week: u32, last_completed_week: u32) -> Self {
        let mut weeks: BTreeMap<u32, HashMap<TeamSlot, MatchupType>> = BTreeMap::new();

        for entry in entries {
            let week = playoff_week(playoff_start_week, entry.round);
            if week > last_completed_week {
                continue;
            }
            let matchup_type = entry.matchup_type();
            let slots = weeks.entry(week).or_default();
            for slot in [entry.t1, entry.t2] {
                slots.entry(slot).or_insert(matchup_type);
            }
        }

        Self { weeks }
    }

    /// Convenience wrapper reading both weeks from the season settings.
    #[must_use]
    pub fn for_season(entries: &[BracketEntry], settings: &SeasonSettings) -> Self {
        Self::build(
            entries,
            settings.playoff_start_week(),
            settings.last_completed_week(),
        )
    }

    #[must_use]
    pub fn get(&self, week: u32, roster_id: RosterId) -> Option<MatchupType> {
        self.weeks
            .get(&week)
            .and_then(|slots| slots.get(&TeamSlot::Roster(roster_id)))
            .copied()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weeks.is_empty()
    }

    /// Weeks that have at least one labelled match.
    pub fn weeks(&self) -> impl Iterator<Item = u32> + '_ {
        self.weeks.keys().copied()
    }

    /// Slots labelled in `week`.
    #[must_use]
    pub fn slots(&self, week: u32) -> Option<&HashMap<TeamSlot, MatchupType>> {
        self.weeks.get(&week)
    }
}

/// Resolve a roster's matchup type for a week.
///
/// Regular-season weeks never consult the bracket. In the playoffs a roster
/// without a bracket entry that week has no type and is left out.
#[must_use]
pub fn resolve_matchup_type(
    settings: &SeasonSettings,
    bracket: &PlayoffLookup,
    week: u32,
    roster_id: RosterId,
) -> Option<MatchupType> {
    match settings.phase(week) {
        WeekPhase::RegularSeason => Some(MatchupType::RegularSeason),
        WeekPhase::Playoff => bracket.get(week, roster_id),
    }
}

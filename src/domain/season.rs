//! Season settings and the week classification rule derived from them.

use std::ops::RangeInclusive;

use serde::Serialize;

use super::error::DomainError;
use super::ids::LeagueId;

/// Phase of the season a week falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WeekPhase {
    /// Week strictly before the playoff start week.
    RegularSeason,
    /// Week needs the playoff bracket to get a concrete label.
    Playoff,
}

/// Classify a week relative to the first playoff week.
#[must_use]
pub const fn classify(week: u32, playoff_start_week: u32) -> WeekPhase {
    if week < playoff_start_week {
        WeekPhase::RegularSeason
    } else {
        WeekPhase::Playoff
    }
}

/// Scheduling settings for one season.
///
/// Constructed through [`SeasonSettings::try_new`], which enforces
/// `start_week <= playoff_start_week`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeasonSettings {
    start_week: u32,
    playoff_start_week: u32,
    last_completed_week: u32,
    median_enabled: bool,
}

impl SeasonSettings {
    pub fn try_new(
        start_week: u32,
        playoff_start_week: u32,
        last_completed_week: u32,
        median_enabled: bool,
    ) -> Result<Self, DomainError> {
        if start_week > playoff_start_week {
            return Err(DomainError::InvalidSeasonSettings {
                reason: format!(
                    "start week {start_week} is after playoff start week {playoff_start_week}"
                ),
            });
        }
        Ok(Self {
            start_week,
            playoff_start_week,
            last_completed_week,
            median_enabled,
        })
    }

    #[must_use]
    pub const fn start_week(&self) -> u32 {
        self.start_week
    }

    #[must_use]
    pub const fn playoff_start_week(&self) -> u32 {
        self.playoff_start_week
    }

    #[must_use]
    pub const fn last_completed_week(&self) -> u32 {
        self.last_completed_week
    }

    #[must_use]
    pub const fn median_enabled(&self) -> bool {
        self.median_enabled
    }

    /// Weeks that have been scored, from the start week onwards.
    ///
    /// Empty before the first week is scored.
    #[must_use]
    pub fn completed_weeks(&self) -> RangeInclusive<u32> {
        self.start_week..=self.last_completed_week
    }

    /// Calendar week a playoff round is played in.
    #[must_use]
    pub const fn playoff_week(&self, round: u32) -> u32 {
        playoff_week(self.playoff_start_week, round)
    }

    #[must_use]
    pub const fn phase(&self, week: u32) -> WeekPhase {
        classify(week, self.playoff_start_week)
    }
}

/// Calendar week of playoff round `round` (1-based).
#[must_use]
pub const fn playoff_week(playoff_start_week: u32, round: u32) -> u32 {
    playoff_start_week.saturating_add(round).saturating_sub(1)
}

/// One season of a league as seen by the extractor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Season {
    pub league_id: LeagueId,
    /// Calendar year label, e.g. "2023".
    pub year: String,
    pub previous_league_id: Option<LeagueId>,
    pub draft_id: Option<String>,
    pub settings: SeasonSettings,
}

//! Matchup labels attached to every extracted game.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Wording used for the two medal games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MedalLabels {
    /// "Gold Medal Match" / "Bronze Medal Match".
    #[default]
    Olympic,
    /// "Championship" / "3rd Place".
    Classic,
}

/// Kind of game a roster played in a given week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchupType {
    RegularSeason,
    /// Elimination round identified only by its number.
    Round(u32),
    /// Top-place game (bracket placing 1).
    Championship,
    /// Third-place game (bracket placing 3).
    ThirdPlace,
}

impl MatchupType {
    /// Label for a winners-bracket entry.
    ///
    /// Placing 1 and 3 are the medal games; any other placing, including
    /// none, is an ordinary round.
    #[must_use]
    pub const fn from_bracket(round: u32, placing: Option<u32>) -> Self {
        match placing {
            Some(1) => Self::Championship,
            Some(3) => Self::ThirdPlace,
            _ => Self::Round(round),
        }
    }

    #[must_use]
    pub const fn is_playoff(self) -> bool {
        !matches!(self, Self::RegularSeason)
    }

    #[must_use]
    pub fn label(self, labels: MedalLabels) -> String {
        match (self, labels) {
            (Self::RegularSeason, _) => "Regular Season".to_string(),
            (Self::Round(n), _) => format!("Round {n}"),
            (Self::Championship, MedalLabels::Olympic) => "Gold Medal Match".to_string(),
            (Self::Championship, MedalLabels::Classic) => "Championship".to_string(),
            (Self::ThirdPlace, MedalLabels::Olympic) => "Bronze Medal Match".to_string(),
            (Self::ThirdPlace, MedalLabels::Classic) => "3rd Place".to_string(),
        }
    }
}

impl fmt::Display for MatchupType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label(MedalLabels::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placing_picks_medal_games() {
        assert_eq!(MatchupType::from_bracket(3, Some(1)), MatchupType::Championship);
        assert_eq!(MatchupType::from_bracket(3, Some(3)), MatchupType::ThirdPlace);
        assert_eq!(MatchupType::from_bracket(2, None), MatchupType::Round(2));
    }

    #[test]
    fn other_placings_fall_back_to_round() {
        assert_eq!(MatchupType::from_bracket(3, Some(5)), MatchupType::Round(3));
        assert_eq!(MatchupType::from_bracket(3, Some(2)), MatchupType::Round(3));
        assert_eq!(MatchupType::from_bracket(1, Some(0)), MatchupType::Round(1));
    }

    #[test]
    fn labels() {
        assert_eq!(MatchupType::RegularSeason.to_string(), "Regular Season");
        assert_eq!(MatchupType::Round(2).to_string(), "Round 2");
        assert_eq!(MatchupType::Championship.to_string(), "Gold Medal Match");
        assert_eq!(MatchupType::ThirdPlace.label(MedalLabels::Classic), "3rd Place");
        assert_eq!(
            MatchupType::Championship.label(MedalLabels::Classic),
            "Championship"
        );
    }
}

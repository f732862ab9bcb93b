//! The fixed set of extraction operations a season run can perform.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::DomainError;

/// A named extraction step. Each produces one or more tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    #[serde(alias = "get_season")]
    Season,
    #[serde(alias = "get_draft_picks")]
    DraftPicks,
    #[serde(alias = "get_rosters")]
    Rosters,
    #[serde(alias = "get_matchups")]
    Matchups,
    #[serde(alias = "get_users")]
    Users,
    #[serde(alias = "get_winners_bracket")]
    WinnersBracket,
}

impl Operation {
    pub const ALL: [Operation; 6] = [
        Operation::Season,
        Operation::Rosters,
        Operation::Users,
        Operation::DraftPicks,
        Operation::Matchups,
        Operation::WinnersBracket,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Operation::Season => "season",
            Operation::DraftPicks => "draft_picks",
            Operation::Rosters => "rosters",
            Operation::Matchups => "matchups",
            Operation::Users => "users",
            Operation::WinnersBracket => "winners_bracket",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let name = trimmed.strip_prefix("get_").unwrap_or(trimmed);
        Operation::ALL
            .into_iter()
            .find(|op| op.name() == name)
            .ok_or_else(|| DomainError::InvalidOperation {
                name: s.to_string(),
            })
    }
}

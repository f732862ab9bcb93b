//! Domain identifier types with proper encapsulation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// League identifier - newtype for type safety.
///
/// Sleeper issues a new league ID for every season, so a league ID
/// identifies exactly one season of a league's history.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LeagueId(String);

impl LeagueId {
    /// Create a new LeagueId from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the league ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse an optional link to a previous season.
    ///
    /// Sleeper reports "no previous season" as null, an empty string or "0".
    pub fn from_link(raw: Option<&str>) -> Option<Self> {
        match raw.map(str::trim) {
            None | Some("") | Some("0") => None,
            Some(id) => Some(Self::new(id)),
        }
    }
}

impl fmt::Display for LeagueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for LeagueId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for LeagueId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Roster identifier within a single season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RosterId(u32);

impl RosterId {
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for RosterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for RosterId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

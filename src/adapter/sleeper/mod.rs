//! Sleeper league API adapter.
//!
//! Sleeper issues a new league ID every season; each league links to the
//! previous season through `previous_league_id`.

mod client;
mod dto;

pub use client::{SleeperClient, DEFAULT_BASE_URL};
pub use dto::{parse_season, BracketMatchDto, MatchupDto, SlotRefDto};

//! Gridiron - fantasy football league extraction for the Sleeper API.
//!
//! This crate walks a league's history season by season, reshapes the
//! nested API payloads into flat tables and writes them to a sink.
//!
//! # Architecture
//!
//! - **`domain`** - Pure logic with no I/O
//!   - Week classification (regular season vs. playoffs)
//!   - Winners-bracket expansion into a week/roster lookup
//!   - Head-to-head and league-median pairing of weekly scores
//!   - Declarative field mappings for flattening payloads
//!   - All-time standings and single-week records
//!
//! - **`port`** - `LeagueSource` and `TableSink` traits
//! - **`adapter`** - Sleeper HTTP client and JSON-lines sink
//! - **`app`** - Configuration, per-season extraction and orchestration
//! - **`cli`** - Command-line interface
//!
//! # Features
//!
//! - `testkit` - In-memory league source and sink for integration tests
//!
//! # Example
//!
//! ```
//! use gridiron::domain::{pair, PlayoffLookup, SeasonSettings, classify_scores, WeekScore, RosterId};
//! use rust_decimal_macros::dec;
//!
//! let settings = SeasonSettings::try_new(1, 15, 17, true).unwrap();
//! let scores = vec![
//!     WeekScore { week: 3, roster_id: RosterId::new(1), matchup_id: Some(1), points: dec!(100) },
//!     WeekScore { week: 3, roster_id: RosterId::new(2), matchup_id: Some(1), points: dec!(80) },
//! ];
//!
//! let week = classify_scores(scores, &settings, &PlayoffLookup::default());
//! let pairing = pair(&week, settings.median_enabled(), settings.playoff_start_week());
//! assert_eq!(pairing.h2h.len(), 2);
//! assert_eq!(pairing.median[0].week_median_points, dec!(90));
//! ```

pub mod adapter;
pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;

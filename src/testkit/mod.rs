//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`league`] — [`ScriptedLeague`](league::ScriptedLeague), an in-memory
//!   [`LeagueSource`](crate::port::LeagueSource).
//! - [`sink`] — [`MemorySink`](sink::MemorySink), a recording
//!   [`TableSink`](crate::port::TableSink).
//! - [`domain`] — Builders for Sleeper-shaped payloads and domain records.

pub mod domain;
pub mod league;
pub mod sink;

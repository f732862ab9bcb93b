//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports are the seams where the extractor meets the outside world: the
//! league API it reads from and the table sink it writes to. Adapters in
//! [`crate::adapter`] implement them; tests use the in-memory versions in
//! `testkit`.
//!
//! ```text
//!  ┌──────────────┐      ┌──────────────────────┐      ┌────────────┐
//!  │ LeagueSource │ ───▶ │  SeasonExtractor     │ ───▶ │ TableSink  │
//!  │  (Sleeper)   │      │  domain + pipeline   │      │ (JSONL)    │
//!  └──────────────┘      └──────────────────────┘      └────────────┘
//! ```

mod league;
mod sink;

pub use league::{LeaguePayload, LeagueSource};
pub use sink::TableSink;

//! Application layer - configuration, per-season extraction and orchestration.

mod config;
mod extract;
mod history;
mod mappings;
mod orchestrator;

pub use config::{
    Config, ExtractConfig, LoggingConfig, OutputConfig, SleeperConfig, LEAGUE_ID_ENV,
};
pub use extract::{
    SeasonExtractor, BRACKET_TABLE, DRAFT_PICKS_TABLE, H2H_TABLE, MEDIAN_TABLE, ROSTERS_TABLE,
    SEASON_TABLE, USERS_TABLE,
};
pub use history::season_chain;
pub use orchestrator::{App, SeasonSummary};

//! Command-line interface definitions.
//!
//! Defines the CLI structure for gridiron using `clap`. Every command reads
//! the same TOML configuration; `--league` and `SLEEPER_LEAGUE_ID` override
//! the league to start from.

pub mod config;
pub mod extract;
pub mod output;
pub mod standings;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::app::Config;
use crate::error::Result;

/// Config file read when `--config` is not given, if it exists.
pub const DEFAULT_CONFIG: &str = "gridiron.toml";

/// Fantasy football league extractor for the Sleeper API
#[derive(Parser, Debug)]
#[command(name = "gridiron")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract every season of a league and write its tables
    Extract(ExtractArgs),

    /// Show all-time standings across seasons
    Standings(LeagueArgs),

    /// Show the highest single-week scores
    Scores(ScoresArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Subcommands for `gridiron config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Validate a configuration file for correctness.
    Validate(ConfigPathArg),
    /// Display the effective configuration with defaults applied.
    Show(ConfigPathArg),
}

/// Shared argument struct for commands that only need a configuration path.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to the configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Configuration path plus league override.
#[derive(Parser, Debug)]
pub struct LeagueArgs {
    #[command(flatten)]
    pub config: ConfigPathArg,

    /// Most recent season's league ID (overrides config and environment).
    #[arg(short, long)]
    pub league: Option<String>,
}

/// Arguments for the `extract` subcommand.
#[derive(Parser, Debug)]
pub struct ExtractArgs {
    #[command(flatten)]
    pub league: LeagueArgs,

    /// Comma-separated operations to run instead of the configured ones
    /// (season, rosters, users, draft_picks, matchups, winners_bracket).
    #[arg(long, value_delimiter = ',')]
    pub only: Option<Vec<String>>,

    /// Output directory (overrides config).
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

/// Arguments for the `scores` subcommand.
#[derive(Parser, Debug)]
pub struct ScoresArgs {
    #[command(flatten)]
    pub league: LeagueArgs,

    /// Number of scores to show.
    #[arg(short, long, default_value_t = 10)]
    pub top: usize,
}

/// Load the configuration for a command.
///
/// Without an explicit path, [`DEFAULT_CONFIG`] is used when present and
/// built-in defaults otherwise.
#[allow(clippy::result_large_err)]
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load(path),
        None if Path::new(DEFAULT_CONFIG).exists() => Config::load(DEFAULT_CONFIG),
        None => {
            let mut config = Config::default();
            if let Ok(league_id) = std::env::var(crate::app::LEAGUE_ID_ENV) {
                config.sleeper.league_id = Some(league_id);
            }
            config.validate()?;
            Ok(config)
        }
    }
}

/// Apply `--league`, `-v` and `-q` on top of a loaded config.
pub fn apply_overrides(config: &mut Config, cli_league: Option<&str>, verbose: u8, quiet: bool) {
    if let Some(league) = cli_league {
        config.sleeper.league_id = Some(league.to_string());
    }
    if quiet {
        config.logging.level = "warn".into();
    } else if verbose > 1 {
        config.logging.level = "trace".into();
    } else if verbose == 1 {
        config.logging.level = "debug".into();
    }
}

/// Dispatch a parsed command line.
pub async fn execute(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Extract(args) => extract::execute(&args, cli.verbose, cli.quiet).await,
        Commands::Standings(args) => standings::execute_standings(&args, cli.verbose, cli.quiet).await,
        Commands::Scores(args) => standings::execute_scores(&args, cli.verbose, cli.quiet).await,
        Commands::Config(ConfigCommand::Validate(args)) => config::validate(&args),
        Commands::Config(ConfigCommand::Show(args)) => config::show(&args),
    }
}

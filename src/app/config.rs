//! Application configuration loading and validation.
//!
//! Configuration is loaded from a TOML file with an environment variable
//! override for the league ID (`SLEEPER_LEAGUE_ID`), so the same file can
//! serve several leagues.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, EnvFilter};

use crate::adapter::sleeper::DEFAULT_BASE_URL;
use crate::domain::{LeagueId, MedalLabels, Operation};
use crate::error::{ConfigError, Result};

/// Environment variable that overrides `sleeper.league_id`.
pub const LEAGUE_ID_ENV: &str = "SLEEPER_LEAGUE_ID";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub sleeper: SleeperConfig,
    #[serde(default)]
    pub extract: ExtractConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SleeperConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Most recent season's league ID.
    #[serde(default)]
    pub league_id: Option<String>,
    /// Upper bound on seasons followed through `previous_league_id`.
    #[serde(default = "default_max_seasons")]
    pub max_seasons: usize,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

const fn default_max_seasons() -> usize {
    20
}

impl Default for SleeperConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            league_id: None,
            max_seasons: default_max_seasons(),
        }
    }
}

/// Which tables to build and how.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExtractConfig {
    #[serde(default = "default_operations")]
    pub operations: Vec<Operation>,
    /// Weekly matchup requests in flight at once.
    #[serde(default = "default_week_concurrency")]
    pub week_concurrency: usize,
    #[serde(default)]
    pub medal_labels: MedalLabels,
}

fn default_operations() -> Vec<Operation> {
    Operation::ALL.to_vec()
}

const fn default_week_concurrency() -> usize {
    4
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            operations: default_operations(),
            week_concurrency: default_week_concurrency(),
            medal_labels: MedalLabels::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("out")
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".into()
}

fn default_log_format() -> String {
    "pretty".into()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let mut config = Self::parse(&content)?;

        if let Ok(league_id) = std::env::var(LEAGUE_ID_ENV) {
            if !league_id.trim().is_empty() {
                config.sleeper.league_id = Some(league_id);
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// Parse TOML without environment overrides or validation.
    #[allow(clippy::result_large_err)]
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content).map_err(ConfigError::Parse)?)
    }

    #[allow(clippy::result_large_err)]
    pub fn validate(&self) -> Result<()> {
        if self.sleeper.base_url.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "base_url" }.into());
        }
        if let Err(e) = url::Url::parse(&self.sleeper.base_url) {
            return Err(ConfigError::InvalidValue {
                field: "base_url",
                reason: e.to_string(),
            }
            .into());
        }
        if self.sleeper.max_seasons == 0 {
            return Err(ConfigError::InvalidValue {
                field: "max_seasons",
                reason: "must be at least 1".into(),
            }
            .into());
        }
        if self.extract.week_concurrency == 0 {
            return Err(ConfigError::InvalidValue {
                field: "week_concurrency",
                reason: "must be at least 1".into(),
            }
            .into());
        }
        Ok(())
    }

    /// The league to start from, after CLI and environment overrides.
    #[allow(clippy::result_large_err)]
    pub fn league_id(&self) -> Result<LeagueId> {
        self.sleeper
            .league_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(LeagueId::new)
            .ok_or_else(|| ConfigError::MissingField { field: "league_id" }.into())
    }

    pub fn init_logging(&self) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&self.logging.level));

        match self.logging.format.as_str() {
            "json" => {
                fmt()
                    .json()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .init();
            }
            _ => {
                fmt()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .init();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn empty_file_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.sleeper.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.extract.operations, Operation::ALL.to_vec());
        assert_eq!(config.extract.week_concurrency, 4);
        assert_eq!(config.output.dir, PathBuf::from("out"));
        assert_eq!(config.logging.level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn parses_full_file() {
        let config = Config::parse(
            r#"
            [sleeper]
            league_id = "784512"
            max_seasons = 3

            [extract]
            operations = ["get_matchups", "rosters"]
            week_concurrency = 2
            medal_labels = "classic"

            [output]
            dir = "/tmp/ff"

            [logging]
            level = "debug"
            format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(config.league_id().unwrap().as_str(), "784512");
        assert_eq!(config.sleeper.max_seasons, 3);
        assert_eq!(
            config.extract.operations,
            vec![Operation::Matchups, Operation::Rosters]
        );
        assert_eq!(config.extract.medal_labels, MedalLabels::Classic);
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn example_file_is_valid() {
        let config = Config::parse(include_str!("../../gridiron.example.toml")).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.league_id().unwrap().as_str(), "123456789");
        assert_eq!(config.extract.operations, Operation::ALL.to_vec());
    }

    #[test]
    fn unknown_operation_fails_to_parse() {
        let err = Config::parse("[extract]\noperations = [\"trades\"]\n").unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::Parse(_))));
    }

    #[test]
    fn zero_concurrency_is_invalid() {
        let config = Config::parse("[extract]\nweek_concurrency = 0\n").unwrap();
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            Error::Config(ConfigError::InvalidValue {
                field: "week_concurrency",
                ..
            })
        ));
    }

    #[test]
    fn league_id_is_required() {
        let config = Config::default();
        assert!(matches!(
            config.league_id(),
            Err(Error::Config(ConfigError::MissingField { field: "league_id" }))
        ));
    }
}

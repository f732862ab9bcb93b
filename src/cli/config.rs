//! Handlers for `gridiron config`.

use super::{load_config, output, ConfigPathArg};
use crate::error::{ConfigError, Result};

/// Load and validate the configuration, reporting the outcome.
#[allow(clippy::result_large_err)]
pub fn validate(args: &ConfigPathArg) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    output::ok("Configuration is valid");
    match config.league_id() {
        Ok(league_id) => output::key_value("League", league_id),
        Err(_) => output::warn("No league ID set; pass --league or set SLEEPER_LEAGUE_ID"),
    }
    Ok(())
}

/// Print the effective configuration as TOML.
#[allow(clippy::result_large_err)]
pub fn show(args: &ConfigPathArg) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let rendered = toml::to_string_pretty(&config).map_err(ConfigError::Render)?;
    print!("{rendered}");
    Ok(())
}

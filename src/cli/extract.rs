//! Handler for the `extract` command.

use std::str::FromStr;

use tracing::info;

use super::{apply_overrides, load_config, output, ExtractArgs};
use crate::adapter::sink::JsonLinesSink;
use crate::adapter::sleeper::SleeperClient;
use crate::app::App;
use crate::domain::Operation;
use crate::error::Result;

/// Execute the extract command.
pub async fn execute(args: &ExtractArgs, verbose: u8, quiet: bool) -> Result<()> {
    let mut config = load_config(args.league.config.config.as_deref())?;
    apply_overrides(&mut config, args.league.league.as_deref(), verbose, quiet);
    if let Some(dir) = &args.out {
        config.output.dir.clone_from(dir);
    }
    config.init_logging();

    let operations = match &args.only {
        Some(names) => names
            .iter()
            .map(|name| Operation::from_str(name))
            .collect::<std::result::Result<Vec<_>, _>>()?,
        None => config.extract.operations.clone(),
    };

    let league_id = config.league_id()?;
    let source = SleeperClient::new(&config.sleeper.base_url)?;
    let sink = JsonLinesSink::new(&config.output.dir);
    info!(league_id = %league_id, out = %config.output.dir.display(), "Extraction starting");

    let app = App::new(&config, &source).with_progress(output::season_progress(quiet));
    let summaries = app.extract(league_id, &operations, &sink).await?;

    if !quiet {
        for summary in &summaries {
            output::section(&format!(
                "Season {} (league {}, {} weeks scored)",
                summary.season, summary.league_id, summary.last_completed_week
            ));
            for (table, rows) in &summary.tables {
                output::key_value(table, format!("{rows} rows"));
            }
        }
        println!();
        output::ok(&format!(
            "Wrote {} season(s) to {}",
            summaries.len(),
            sink.root().display()
        ));
    }
    Ok(())
}

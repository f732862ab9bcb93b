//! Run-level orchestration across every season of a league.

use indicatif::ProgressBar;
use tracing::info;

use super::config::Config;
use super::extract::SeasonExtractor;
use super::history::season_chain;
use crate::domain::{LeagueId, Operation, SeasonResults};
use crate::error::Result;
use crate::port::{LeagueSource, TableSink};

/// Tables written for one season.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeasonSummary {
    pub season: String,
    pub league_id: LeagueId,
    pub last_completed_week: u32,
    /// Table name and row count, in write order.
    pub tables: Vec<(String, usize)>,
}

/// One extraction run. Collaborators are passed in and live for the run.
pub struct App<'a> {
    config: &'a Config,
    source: &'a dyn LeagueSource,
    progress: ProgressBar,
}

impl<'a> App<'a> {
    pub fn new(config: &'a Config, source: &'a dyn LeagueSource) -> Self {
        Self {
            config,
            source,
            progress: ProgressBar::hidden(),
        }
    }

    /// Report per-season progress on the given bar.
    #[must_use]
    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = progress;
        self
    }

    /// Extract every season and write its tables to `sink`.
    pub async fn extract(
        &self,
        league_id: LeagueId,
        operations: &[Operation],
        sink: &dyn TableSink,
    ) -> Result<Vec<SeasonSummary>> {
        info!(source = self.source.source_name(), league_id = %league_id, "Walking league history");
        let seasons = season_chain(self.source, league_id, self.config.sleeper.max_seasons).await?;
        let extractor = SeasonExtractor::new(self.source, &self.config.extract);

        self.progress.set_length(seasons.len() as u64);
        let mut summaries = Vec::with_capacity(seasons.len());

        for league in &seasons {
            let season = &league.season;
            self.progress.set_message(season.year.clone());

            let tables = extractor.run(league, operations).await?;
            for table in &tables {
                sink.write(&season.year, table)?;
            }

            info!(season = %season.year, tables = tables.len(), "Season extracted");
            summaries.push(SeasonSummary {
                season: season.year.clone(),
                league_id: season.league_id.clone(),
                last_completed_week: season.settings.last_completed_week(),
                tables: tables.iter().map(|t| (t.name.clone(), t.len())).collect(),
            });
            self.progress.inc(1);
        }

        self.progress.finish_and_clear();
        Ok(summaries)
    }

    /// Paired matchups and manager names for every season, for standings.
    pub async fn results(&self, league_id: LeagueId) -> Result<Vec<SeasonResults>> {
        let seasons = season_chain(self.source, league_id, self.config.sleeper.max_seasons).await?;
        let extractor = SeasonExtractor::new(self.source, &self.config.extract);

        self.progress.set_length(seasons.len() as u64);
        let mut results = Vec::with_capacity(seasons.len());
        for league in &seasons {
            self.progress.set_message(league.season.year.clone());
            results.push(extractor.results(&league.season).await?);
            self.progress.inc(1);
        }

        self.progress.finish_and_clear();
        Ok(results)
    }
}

//! Walking a league's history through `previous_league_id` links.

use std::collections::HashSet;

use tracing::{info, warn};

use crate::domain::LeagueId;
use crate::error::Result;
use crate::port::{LeaguePayload, LeagueSource};

/// Fetch `start` and each earlier season it links to, newest first.
///
/// Stops at the first season without a predecessor, after `max_seasons`
/// seasons, or when a link points back at a season already visited.
pub async fn season_chain(
    source: &dyn LeagueSource,
    start: LeagueId,
    max_seasons: usize,
) -> Result<Vec<LeaguePayload>> {
    let mut seasons = Vec::new();
    let mut visited = HashSet::new();
    let mut next = Some(start);

    while let Some(league_id) = next.take() {
        if seasons.len() >= max_seasons {
            warn!(max_seasons, "Season limit reached, older seasons skipped");
            break;
        }
        if !visited.insert(league_id.clone()) {
            warn!(league_id = %league_id, "League history loops back on itself");
            break;
        }

        let league = source.fetch_league(&league_id).await?;
        info!(
            season = %league.season.year,
            league_id = %league_id,
            last_completed_week = league.season.settings.last_completed_week(),
            "Found season"
        );
        next = league.season.previous_league_id.clone();
        seasons.push(league);
    }

    Ok(seasons)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::domain::{league_json, LeagueShape};
    use crate::testkit::league::ScriptedLeague;

    fn shape<'a>(league_id: &'a str, season: &'a str, previous: Option<&'a str>) -> LeagueShape<'a> {
        LeagueShape {
            league_id,
            season,
            previous_league_id: previous,
            start_week: 1,
            playoff_start_week: 15,
            last_completed_week: 17,
            median: false,
        }
    }

    #[test]
    fn follows_links_newest_first() {
        let source = ScriptedLeague::new()
            .with_league(league_json(shape("c", "2023", Some("b"))))
            .with_league(league_json(shape("b", "2022", Some("a"))))
            .with_league(league_json(shape("a", "2021", Some("0"))));

        let chain = tokio_test::block_on(season_chain(&source, LeagueId::new("c"), 10)).unwrap();
        let years: Vec<_> = chain.iter().map(|l| l.season.year.as_str()).collect();
        assert_eq!(years, vec!["2023", "2022", "2021"]);
    }

    #[test]
    fn stops_when_history_loops() {
        let source = ScriptedLeague::new()
            .with_league(league_json(shape("x", "2023", Some("y"))))
            .with_league(league_json(shape("y", "2022", Some("x"))));

        let chain = tokio_test::block_on(season_chain(&source, LeagueId::new("x"), 10)).unwrap();
        assert_eq!(chain.len(), 2);
    }

    #[test]
    fn missing_start_league_is_an_error() {
        let source = ScriptedLeague::new();
        let result = tokio_test::block_on(season_chain(&source, LeagueId::new("nope"), 10));
        assert!(result.is_err());
    }
}

//! Handlers for the `standings` and `scores` commands.

use tabled::settings::Style;
use tabled::{Table as TextTable, Tabled};

use super::{apply_overrides, load_config, output, LeagueArgs, ScoresArgs};
use crate::adapter::sleeper::SleeperClient;
use crate::app::App;
use crate::domain::{
    all_time_standings, top_single_week_scores, SeasonResults, StandingsRow, TopScore,
};
use crate::error::Result;

#[derive(Tabled)]
struct StandingsLine {
    #[tabled(rename = "Manager")]
    manager: String,
    #[tabled(rename = "🥇")]
    gold: String,
    #[tabled(rename = "🥈")]
    silver: String,
    #[tabled(rename = "🥉")]
    bronze: String,
    #[tabled(rename = "Reg. Season Win Rate")]
    win_rate: String,
    #[tabled(rename = "Made Playoffs Rate")]
    playoffs_rate: String,
    #[tabled(rename = "Seasons Played")]
    seasons: u32,
}

/// Medal counts of zero are left blank.
fn medal(count: u32) -> String {
    if count == 0 {
        String::new()
    } else {
        count.to_string()
    }
}

impl From<&StandingsRow> for StandingsLine {
    fn from(row: &StandingsRow) -> Self {
        Self {
            manager: row.manager.clone(),
            gold: medal(row.gold),
            silver: medal(row.silver),
            bronze: medal(row.bronze),
            win_rate: format!("{:.3}", row.regular_season_win_rate),
            playoffs_rate: format!("{:.3}", row.made_playoffs_rate),
            seasons: row.seasons_played,
        }
    }
}

#[derive(Tabled)]
struct ScoreLine {
    #[tabled(rename = "Manager")]
    manager: String,
    #[tabled(rename = "Points")]
    points: String,
    #[tabled(rename = "Year")]
    season: String,
    #[tabled(rename = "Week")]
    week: u32,
}

impl From<&TopScore> for ScoreLine {
    fn from(score: &TopScore) -> Self {
        Self {
            manager: score.manager.clone(),
            points: format!("{:.2}", score.points),
            season: score.season.clone(),
            week: score.week,
        }
    }
}

/// Render standings as a text table.
#[must_use]
pub fn render_standings(rows: &[StandingsRow]) -> String {
    let lines: Vec<StandingsLine> = rows.iter().map(StandingsLine::from).collect();
    TextTable::new(lines).with(Style::rounded()).to_string()
}

/// Render top scores as a text table.
#[must_use]
pub fn render_scores(scores: &[TopScore]) -> String {
    let lines: Vec<ScoreLine> = scores.iter().map(ScoreLine::from).collect();
    TextTable::new(lines).with(Style::rounded()).to_string()
}

async fn collect(args: &LeagueArgs, verbose: u8, quiet: bool) -> Result<Vec<SeasonResults>> {
    let mut config = load_config(args.config.config.as_deref())?;
    apply_overrides(&mut config, args.league.as_deref(), verbose, quiet);
    config.init_logging();

    let league_id = config.league_id()?;
    let source = SleeperClient::new(&config.sleeper.base_url)?;
    let app = App::new(&config, &source).with_progress(output::season_progress(quiet));
    app.results(league_id).await
}

/// Execute the standings command.
pub async fn execute_standings(args: &LeagueArgs, verbose: u8, quiet: bool) -> Result<()> {
    let results = collect(args, verbose, quiet).await?;
    output::section("All Time Standings");
    println!("{}", render_standings(&all_time_standings(&results)));
    Ok(())
}

/// Execute the scores command.
pub async fn execute_scores(args: &ScoresArgs, verbose: u8, quiet: bool) -> Result<()> {
    let results = collect(&args.league, verbose, quiet).await?;
    output::section("Top Single Week Scores");
    println!("{}", render_scores(&top_single_week_scores(&results, args.top)));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn standings_table_blanks_zero_medals() {
        let rows = vec![StandingsRow {
            manager: "ann".into(),
            gold: 2,
            silver: 0,
            bronze: 1,
            regular_season_win_rate: dec!(0.615),
            made_playoffs_rate: dec!(0.75),
            seasons_played: 4,
        }];

        let text = render_standings(&rows);
        assert!(text.contains("ann"));
        assert!(text.contains("0.615"));
        assert!(text.contains("0.750"));
        assert!(text.contains("Seasons Played"));
        assert_eq!(medal(0), "");
    }

    #[test]
    fn scores_table_shows_two_decimals() {
        let scores = vec![TopScore {
            manager: "bo".into(),
            points: dec!(181.4),
            season: "2022".into(),
            week: 9,
        }];
        let text = render_scores(&scores);
        assert!(text.contains("181.40"));
        assert!(text.contains("2022"));
    }
}

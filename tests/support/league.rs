//! Two-season league fixture.
//!
//! 2023 (`L23`): weeks 1-4 scored, playoffs from week 3, median games on.
//! Week 2's median falls between two hundredths (65.025 before rounding).
//! Week 3 holds both semifinals, week 4 the title game and third-place game.
//!
//! 2022 (`L22`): only weeks 1-2 scored, median games off, so its bracket
//! round in week 3 has not been played.

use gridiron::app::Config;
use gridiron::testkit::domain::{
    bracket_entry, league_json, pick_json, roster_json, score, slot, user_json, LeagueShape,
};
use gridiron::testkit::league::ScriptedLeague;
use gridiron::domain::TeamSlot;

pub const LATEST: &str = "L23";
pub const PREVIOUS: &str = "L22";

fn people(league: ScriptedLeague, league_id: &str) -> ScriptedLeague {
    league
        .with_rosters(
            league_id,
            vec![
                roster_json(1, "u-ann"),
                roster_json(2, "u-bo"),
                roster_json(3, "u-cy"),
                roster_json(4, "u-di"),
            ],
        )
        .with_users(
            league_id,
            vec![
                user_json("u-ann", "ann"),
                user_json("u-bo", "bo"),
                user_json("u-cy", "cy"),
                user_json("u-di", "di"),
            ],
        )
}

/// Season 2023 scores and settings, without a bracket.
pub fn season_2023_without_bracket() -> ScriptedLeague {
    let league = ScriptedLeague::new()
        .with_league(league_json(LeagueShape {
            league_id: LATEST,
            season: "2023",
            previous_league_id: Some(PREVIOUS),
            start_week: 1,
            playoff_start_week: 3,
            last_completed_week: 4,
            median: true,
        }))
        .with_picks(
            "draft-L23",
            vec![pick_json(1, 1, 3, "4046"), pick_json(1, 2, 1, "6794")],
        )
        .with_week(
            LATEST,
            1,
            vec![
                score(1, Some(1), 100.0),
                score(2, Some(1), 80.0),
                score(3, Some(2), 90.0),
                score(4, Some(2), 70.0),
            ],
        )
        .with_week(
            LATEST,
            2,
            vec![
                score(1, Some(1), 60.01),
                score(3, Some(1), 70.04),
                score(2, Some(2), 75.555),
                score(4, Some(2), 50.0),
            ],
        )
        .with_week(
            LATEST,
            3,
            vec![
                score(1, Some(1), 110.0),
                score(4, Some(1), 90.0),
                score(2, Some(2), 100.0),
                score(3, Some(2), 95.0),
            ],
        )
        .with_week(
            LATEST,
            4,
            vec![
                score(1, Some(1), 120.0),
                score(2, Some(1), 115.0),
                score(4, Some(2), 80.0),
                score(3, Some(2), 85.0),
            ],
        );
    people(league, LATEST)
}

fn with_2022(league: ScriptedLeague) -> ScriptedLeague {
    let league = league
        .with_league(league_json(LeagueShape {
            league_id: PREVIOUS,
            season: "2022",
            previous_league_id: None,
            start_week: 1,
            playoff_start_week: 3,
            last_completed_week: 2,
            median: false,
        }))
        .with_picks("draft-L22", vec![pick_json(1, 1, 2, "1234")])
        .with_week(
            PREVIOUS,
            1,
            vec![
                score(1, Some(1), 101.0),
                score(2, Some(1), 99.0),
                score(3, Some(2), 88.0),
                score(4, Some(2), 77.0),
            ],
        )
        .with_week(
            PREVIOUS,
            2,
            vec![
                score(1, Some(1), 150.0),
                score(4, Some(1), 140.0),
                score(2, Some(2), 60.0),
                score(3, Some(2), 66.0),
            ],
        )
        .with_bracket(
            PREVIOUS,
            vec![bracket_entry(1, 1, slot(1), slot(2), Some(1))],
        );
    people(league, PREVIOUS)
}

/// The full two-season league.
pub fn two_seasons() -> ScriptedLeague {
    with_2022(season_2023_without_bracket()).with_bracket(
        LATEST,
        vec![
            bracket_entry(1, 1, slot(1), slot(4), None),
            bracket_entry(1, 2, slot(2), slot(3), None),
            bracket_entry(2, 3, slot(1), slot(2), Some(1)),
            bracket_entry(2, 4, slot(4), slot(3), Some(3)),
            bracket_entry(2, 5, TeamSlot::LoserOf(1), TeamSlot::LoserOf(2), Some(5)),
        ],
    )
}

/// Two seasons where the latest bracket request fails.
pub fn two_seasons_without_latest_bracket() -> ScriptedLeague {
    with_2022(season_2023_without_bracket())
}

pub fn config() -> Config {
    let mut config = Config::default();
    config.sleeper.league_id = Some(LATEST.to_string());
    config.extract.week_concurrency = 3;
    config
}

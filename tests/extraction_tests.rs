//! End-to-end extraction against a scripted two-season league.

mod support;

use gridiron::adapter::sink::JsonLinesSink;
use gridiron::app::{App, BRACKET_TABLE, DRAFT_PICKS_TABLE, H2H_TABLE, MEDIAN_TABLE, ROSTERS_TABLE};
use gridiron::domain::{LeagueId, Operation};
use gridiron::error::Error;
use gridiron::testkit::sink::MemorySink;
use serde_json::{json, Value};

use support::assertions::{column, rows_where};
use support::league::{self, LATEST};

#[tokio::test]
async fn writes_every_table_for_every_season() {
    let source = league::two_seasons();
    let config = league::config();
    let sink = MemorySink::new();

    let summaries = App::new(&config, &source)
        .extract(LeagueId::new(LATEST), &Operation::ALL, &sink)
        .await
        .unwrap();

    let seasons: Vec<_> = summaries.iter().map(|s| s.season.as_str()).collect();
    assert_eq!(seasons, vec!["2023", "2022"]);
    assert_eq!(summaries[0].last_completed_week, 4);

    let names: Vec<_> = summaries[0].tables.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "season",
            "rosters",
            "users",
            "draft_picks",
            "matchups_h2h",
            "matchups_median",
            "winners_bracket"
        ]
    );
    assert_eq!(sink.written().len(), 14);
}

#[tokio::test]
async fn labels_regular_season_and_bracket_games() {
    let source = league::two_seasons();
    let config = league::config();
    let sink = MemorySink::new();

    App::new(&config, &source)
        .extract(LeagueId::new(LATEST), &[Operation::Matchups], &sink)
        .await
        .unwrap();

    let h2h = sink.table("2023", H2H_TABLE).unwrap();
    assert_eq!(h2h.len(), 16);
    assert_eq!(rows_where(&h2h, "type", &json!("Regular Season")), 8);
    assert_eq!(rows_where(&h2h, "type", &json!("Round 1")), 4);
    assert_eq!(rows_where(&h2h, "type", &json!("Gold Medal Match")), 2);
    assert_eq!(rows_where(&h2h, "type", &json!("Bronze Medal Match")), 2);

    let first = &h2h.rows[0];
    assert_eq!(first["season"], json!("2023"));
    assert_eq!(first["league_id"], json!(LATEST));
    assert_eq!(first["week"], json!(1));
    assert_eq!(first["roster_id"], json!(1));
    assert_eq!(first["points"], json!(100.0));
    assert_eq!(first["roster_id_opp"], json!(2));
    assert_eq!(first["points_opp"], json!(80.0));

    let weeks: Vec<Value> = column(&h2h, "week");
    let mut sorted = weeks.clone();
    sorted.sort_by_key(|w| w.as_u64());
    assert_eq!(weeks, sorted);
}

#[tokio::test]
async fn median_rows_only_before_playoffs() {
    let source = league::two_seasons();
    let config = league::config();
    let sink = MemorySink::new();

    App::new(&config, &source)
        .extract(LeagueId::new(LATEST), &[Operation::Matchups], &sink)
        .await
        .unwrap();

    let median = sink.table("2023", MEDIAN_TABLE).unwrap();
    assert_eq!(median.len(), 8);
    assert_eq!(rows_where(&median, "week_median_points", &json!(85.0)), 4);
    assert_eq!(rows_where(&median, "week_median_points", &json!(65.03)), 4);
    assert_eq!(rows_where(&median, "points", &json!(75.56)), 1);

    let disabled = sink.table("2022", MEDIAN_TABLE).unwrap();
    assert!(disabled.is_empty());
    assert_eq!(sink.table("2022", H2H_TABLE).unwrap().len(), 8);
}

#[tokio::test]
async fn fetches_only_completed_weeks() {
    let source = league::two_seasons();
    let config = league::config();

    App::new(&config, &source)
        .extract(LeagueId::new(LATEST), &[Operation::Matchups], &MemorySink::new())
        .await
        .unwrap();

    let mut latest: Vec<u32> = source
        .requested_weeks()
        .into_iter()
        .filter(|(league, _)| league.as_str() == LATEST)
        .map(|(_, week)| week)
        .collect();
    latest.sort_unstable();
    assert_eq!(latest, vec![1, 2, 3, 4]);
    assert_eq!(source.requested_weeks().len(), 6);
}

#[tokio::test]
async fn missing_bracket_drops_playoff_weeks() {
    let source = league::two_seasons_without_latest_bracket();
    let config = league::config();
    let sink = MemorySink::new();

    App::new(&config, &source)
        .extract(LeagueId::new(LATEST), &[Operation::Matchups], &sink)
        .await
        .unwrap();

    let h2h = sink.table("2023", H2H_TABLE).unwrap();
    assert_eq!(h2h.len(), 8);
    assert_eq!(rows_where(&h2h, "type", &json!("Regular Season")), 8);
}

#[tokio::test]
async fn bracket_operation_without_bracket_fails() {
    let source = league::two_seasons_without_latest_bracket();
    let config = league::config();

    let err = App::new(&config, &source)
        .extract(LeagueId::new(LATEST), &[Operation::WinnersBracket], &MemorySink::new())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Api { status: 404, .. }));
}

#[tokio::test]
async fn rosters_carry_manager_names() {
    let source = league::two_seasons();
    let config = league::config();
    let sink = MemorySink::new();

    App::new(&config, &source)
        .extract(LeagueId::new(LATEST), &[Operation::Rosters, Operation::DraftPicks], &sink)
        .await
        .unwrap();

    let rosters = sink.table("2023", ROSTERS_TABLE).unwrap();
    assert_eq!(
        column(&rosters, "manager_display_name"),
        vec![json!("ann"), json!("bo"), json!("cy"), json!("di")]
    );

    let picks = sink.table("2023", DRAFT_PICKS_TABLE).unwrap();
    assert_eq!(column(&picks, "player_id"), vec![json!("4046"), json!("6794")]);
    assert_eq!(picks.rows[0]["position"], json!("RB"));
}

#[tokio::test]
async fn bracket_table_keeps_forward_references() {
    let source = league::two_seasons();
    let config = league::config();
    let sink = MemorySink::new();

    App::new(&config, &source)
        .extract(LeagueId::new(LATEST), &[Operation::WinnersBracket], &sink)
        .await
        .unwrap();

    let bracket = sink.table("2023", BRACKET_TABLE).unwrap();
    assert_eq!(bracket.len(), 5);
    let last = &bracket.rows[4];
    assert_eq!(last["t1"], json!("loser of match 1"));
    assert_eq!(last["type"], json!("Round 2"));
    assert_eq!(last["week"], json!(4));
    assert_eq!(bracket.rows[2]["type"], json!("Gold Medal Match"));
}

#[tokio::test]
async fn season_limit_stops_history_walk() {
    let source = league::two_seasons();
    let mut config = league::config();
    config.sleeper.max_seasons = 1;

    let summaries = App::new(&config, &source)
        .extract(LeagueId::new(LATEST), &[Operation::Season], &MemorySink::new())
        .await
        .unwrap();
    assert_eq!(summaries.len(), 1);
}

#[tokio::test]
async fn json_lines_sink_writes_one_file_per_table() {
    let source = league::two_seasons();
    let config = league::config();
    let dir = tempfile::tempdir().unwrap();
    let sink = JsonLinesSink::new(dir.path());

    App::new(&config, &source)
        .extract(LeagueId::new(LATEST), &[Operation::Users, Operation::Matchups], &sink)
        .await
        .unwrap();

    let users = std::fs::read_to_string(sink.table_path("2022", "users")).unwrap();
    assert_eq!(users.lines().count(), 4);
    let first: Value = serde_json::from_str(users.lines().next().unwrap()).unwrap();
    assert_eq!(first["season"], json!("2022"));
    assert_eq!(first["display_name"], json!("ann"));

    let median = std::fs::read_to_string(sink.table_path("2022", MEDIAN_TABLE)).unwrap();
    assert!(median.is_empty());
    assert!(sink.table_path("2023", H2H_TABLE).exists());
}

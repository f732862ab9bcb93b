//! CLI integration tests.

use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn gridiron() -> Command {
    let mut cmd = cargo_bin_cmd!("gridiron");
    cmd.env_remove("SLEEPER_LEAGUE_ID");
    cmd
}

fn write_config(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("gridiron.toml");
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn help_lists_commands() {
    gridiron()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("extract"))
        .stdout(predicate::str::contains("standings"))
        .stdout(predicate::str::contains("scores"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn version_names_the_binary() {
    gridiron()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("gridiron"));
}

#[test]
fn config_validate_accepts_a_good_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        "[sleeper]\nleague_id = \"784512\"\n\n[extract]\noperations = [\"matchups\"]\n",
    );

    gridiron()
        .args(["config", "validate", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"))
        .stdout(predicate::str::contains("784512"));
}

#[test]
fn config_validate_rejects_zero_concurrency() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[extract]\nweek_concurrency = 0\n");

    gridiron()
        .args(["config", "validate", "--config"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("week_concurrency"));
}

#[test]
fn config_validate_rejects_unknown_operation() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[extract]\noperations = [\"trades\"]\n");

    gridiron()
        .args(["config", "validate", "--config"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse config"));
}

#[test]
fn config_show_prints_effective_values() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[sleeper]\nmax_seasons = 3\n");

    gridiron()
        .args(["config", "show", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("max_seasons = 3"))
        .stdout(predicate::str::contains("https://api.sleeper.app/v1"))
        .stdout(predicate::str::contains("week_concurrency = 4"));
}

#[test]
fn extract_without_league_fails() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "");

    gridiron()
        .args(["extract", "--config"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("league_id"));
}

#[test]
fn unknown_only_operation_fails() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[sleeper]\nleague_id = \"1\"\n");

    gridiron()
        .args(["extract", "--only", "trades", "--config"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("trades"));
}

//! CLI Integration Tests
//!
//! Tests the command-line interface end-to-end.

use assert_cmd::Command;
use predicates::prelude::*;

/// Get the binary to test.
fn studioplan() -> Command {
    Command::cargo_bin("studioplan").unwrap()
}

// ============================================================================
// Help & Version Tests
// ============================================================================

#[test]
fn test_help_flag() {
    studioplan()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("AI project planner"));
}

#[test]
fn test_short_help_flag() {
    studioplan().arg("-h").assert().success().stdout(predicate::str::contains("Usage:"));
}

#[test]
fn test_version_flag() {
    studioplan()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_help_lists_subcommands() {
    studioplan()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("plan"))
        .stdout(predicate::str::contains("completions"));
}

// ============================================================================
// Plan Command Tests
// ============================================================================

#[test]
fn test_plan_command_help() {
    studioplan()
        .args(["plan", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("brief"));
}

#[test]
fn test_plan_requires_brief_argument() {
    studioplan().arg("plan").assert().failure();
}

#[test]
fn test_plan_with_missing_brief_file() {
    let dir = tempfile::tempdir().unwrap();
    studioplan()
        .current_dir(dir.path())
        .args(["plan", "no-such-brief.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read brief"));
}

#[test]
fn test_plan_with_malformed_brief_file() {
    let dir = tempfile::tempdir().unwrap();
    let brief = dir.path().join("brief.toml");
    std::fs::write(&brief, "this is not [valid toml").unwrap();

    studioplan()
        .current_dir(dir.path())
        .args(["plan", "brief.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid brief"));
}

#[test]
fn test_plan_rejects_brief_with_incomplete_member() {
    let dir = tempfile::tempdir().unwrap();
    let brief = dir.path().join("brief.toml");
    std::fs::write(
        &brief,
        r#"
name = "Launch"
start_date = "2024-01-01"
end_date = "2024-02-01"

[[team]]
name = "Jane"
"#,
    )
    .unwrap();

    studioplan()
        .current_dir(dir.path())
        .args(["plan", "brief.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("member role"));
}

// ============================================================================
// Config Command Tests
// ============================================================================

#[test]
fn test_config_path() {
    studioplan()
        .args(["config", "--path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn test_config_prints_defaults() {
    let dir = tempfile::tempdir().unwrap();
    studioplan()
        .current_dir(dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("[general]"))
        .stdout(predicate::str::contains("[inference]"));
}

#[test]
fn test_config_reads_local_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join(".studioplan.toml"),
        "[general]\ndefault_quantity = 25\n",
    )
    .unwrap();

    studioplan()
        .current_dir(dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("default_quantity = 25"));
}

// ============================================================================
// Completions Tests
// ============================================================================

#[test]
fn test_completions_bash() {
    studioplan()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("studioplan"));
}

#[test]
fn test_completions_rejects_unknown_shell() {
    studioplan().args(["completions", "tcsh"]).assert().failure();
}

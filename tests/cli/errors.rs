//! Tests for error handling and CLI flags.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_help() {
    let t = Test::new();

    t.cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_unknown_command_fails() {
    let t = Test::new();

    t.cmd().arg("unknown-command").assert().failure();
}

#[test]
fn test_invalid_id_reports_char_and_index() {
    let t = Test::new();

    t.cmd()
        .args(["path", "--id", "bad/id"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid character '/' at index 3"));
}

#[test]
fn test_empty_id_rejected() {
    let t = Test::new();

    t.cmd()
        .args(["path", "--id", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must not be empty"));
}

#[test]
fn test_missing_manifest_hints_at_id_flag() {
    let t = Test::new();

    t.cmd()
        .arg("path")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--id"));
}

#[test]
fn test_manifest_without_id() {
    let t = Test::new();
    std::fs::write(
        t.dir.path().join("Cargo.toml"),
        "[package]\nname = \"no-secrets\"\nversion = \"0.1.0\"\n",
    )
    .unwrap();

    t.cmd()
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no-secrets").and(predicate::str::contains("--id")));
}

#[test]
fn test_verbose_flag_logs_debug() {
    let t = Test::new();

    t.cmd()
        .args(["--verbose", "path", "--id", APP_ID])
        .assert()
        .success()
        .stderr(predicate::str::contains("DEBUG"));
}

#[test]
fn test_default_no_log_output() {
    let t = Test::new();

    t.cmd()
        .args(["path", "--id", APP_ID])
        .assert()
        .success()
        .stderr(predicate::str::contains("DEBUG").not())
        .stderr(predicate::str::contains("TRACE").not());
}

#[test]
fn test_log_env_var() {
    let t = Test::new();

    t.cmd()
        .env("USERSECRETS_LOG", "usersecrets=trace")
        .args(["path", "--id", APP_ID])
        .assert()
        .success()
        .stderr(predicate::str::contains("TRACE"));
}

#[test]
fn test_completions() {
    let t = Test::new();

    for shell in ["bash", "zsh", "fish", "powershell", "elvish"] {
        t.cmd()
            .args(["completions", shell])
            .assert()
            .success()
            .stdout(predicate::str::contains("usersecrets"));
    }
}

#[test]
fn test_completions_unknown_shell() {
    let t = Test::new();

    t.cmd().args(["completions", "tcsh"]).assert().failure();
}

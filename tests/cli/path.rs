//! Tests for `usersecrets path` command.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_path_base_only() {
    let t = Test::new();

    t.cmd()
        .args(["path", "--id", APP_ID])
        .assert()
        .success()
        .stdout(predicate::str::contains(APP_ID))
        .stdout(predicate::str::contains(".microsoft/usersecrets"))
        .stdout(predicate::str::contains("secrets.json"))
        .stdout(predicate::str::contains("environment").not());
}

#[test]
fn test_path_json_orders_base_first() {
    let t = Test::new();
    t.write_secrets(APP_ID, None, "{}");

    let output = t.path(&["--id", APP_ID, "--environment", "Staging", "--json"]);
    assert_success(&output);

    let json = stdout_json(&output);
    let entries = json.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["layer"], "base");
    assert_eq!(entries[0]["exists"], true);
    assert!(entries[0]["path"].as_str().unwrap().ends_with("secrets.json"));
    assert_eq!(entries[1]["layer"], "environment");
    assert_eq!(entries[1]["exists"], false);
    assert!(entries[1]["path"]
        .as_str()
        .unwrap()
        .ends_with("secrets.Staging.json"));
}

#[test]
fn test_path_environment_from_env_var() {
    let t = Test::new();

    let output = t
        .cmd()
        .env("APP_ENVIRONMENT", "Development")
        .args(["path", "--id", APP_ID])
        .output()
        .unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "secrets.Development.json");
}

#[test]
fn test_path_appdata_layout() {
    let t = Test::new();

    let output = t
        .cmd()
        .env("APPDATA", t.home.path())
        .args(["path", "--id", APP_ID])
        .output()
        .unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "UserSecrets");
    assert_stdout_contains(&output, "APPDATA");
}

#[test]
fn test_path_reads_id_from_manifest() {
    let t = Test::with_manifest("from-manifest");

    let output = t.path(&[]);
    assert_success(&output);
    assert_stdout_contains(&output, "from-manifest");
}

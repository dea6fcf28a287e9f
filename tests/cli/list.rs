//! Tests for `usersecrets list` command.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_list_base_secrets() {
    let t = Test::new();
    t.write_secrets(APP_ID, None, BASE_SECRETS);

    let output = t.list(&["--id", APP_ID]);
    assert_success(&output);
    assert_stdout_contains(&output, "ApiKey = base-key");
    assert_stdout_contains(&output, "Smtp:User = mailer");
}

#[test]
fn test_list_environment_overrides_base() {
    let t = Test::new();
    t.write_secrets(APP_ID, None, BASE_SECRETS);
    t.write_secrets(APP_ID, Some("Staging"), STAGING_SECRETS);

    let output = t.list(&["--id", APP_ID, "-e", "Staging", "--json"]);
    assert_success(&output);

    let json = stdout_json(&output);
    assert_eq!(json["ApiKey"], "staging-key");
    assert_eq!(
        json["ConnectionStrings:Default"],
        "Server=staging;Password=staging-pw"
    );
    assert_eq!(json["Smtp:Password"], "base-smtp");
}

#[test]
fn test_list_without_files() {
    let t = Test::new();

    let output = t.list(&["--id", APP_ID]);
    assert_success(&output);
    assert_stdout_contains(&output, "no secrets configured");
}

#[test]
fn test_list_malformed_file_fails() {
    let t = Test::new();
    t.write_secrets(APP_ID, None, "{ not json");

    t.cmd()
        .args(["list", "--id", APP_ID])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid JSON"));
}

#[test]
fn test_list_repeated_key_fails() {
    let t = Test::new();
    t.write_secrets(APP_ID, None, r#"{"ApiKey": "a", "ApiKey": "b"}"#);

    t.cmd()
        .args(["list", "--id", APP_ID])
        .assert()
        .failure()
        .stderr(predicate::str::contains("duplicate key 'ApiKey'"));
}

#[test]
fn test_list_manifest_and_environment_variable() {
    let t = Test::with_manifest(APP_ID);
    t.write_secrets(APP_ID, None, BASE_SECRETS);
    t.write_secrets(APP_ID, Some("Staging"), STAGING_SECRETS);

    t.cmd()
        .env("APP_ENVIRONMENT", "Staging")
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("ApiKey = staging-key"))
        .stdout(predicate::str::contains("Smtp:User = mailer"));
}

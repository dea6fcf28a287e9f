//! Tests for `usersecrets init` command.

use crate::support::*;
use predicates::prelude::*;
use std::fs;

#[test]
fn test_init_creates_secrets_file() {
    let t = Test::new();

    let output = t.init(&["--id", APP_ID]);
    assert_success(&output);
    assert_stdout_contains(&output, "created");

    let path = t.secrets_dir(APP_ID).join("secrets.json");
    assert!(path.exists(), "secrets.json should exist");
    assert_eq!(fs::read_to_string(&path).unwrap().trim(), "{}");
}

#[test]
fn test_init_environment_file() {
    let t = Test::new();

    t.cmd()
        .args(["init", "--id", APP_ID, "--environment", "Production"])
        .assert()
        .success()
        .stdout(predicate::str::contains("secrets.Production.json"));
    assert!(t.secrets_dir(APP_ID).join("secrets.Production.json").exists());
    assert!(!t.secrets_dir(APP_ID).join("secrets.json").exists());
}

#[test]
fn test_init_keeps_existing_file() {
    let t = Test::new();
    let path = t.write_secrets(APP_ID, None, BASE_SECRETS);

    let output = t.init(&["--id", APP_ID]);
    assert_success(&output);
    assert_stdout_contains(&output, "already exists");
    assert_eq!(fs::read_to_string(&path).unwrap(), BASE_SECRETS);
}

#[cfg(unix)]
#[test]
fn test_init_restricts_permissions() {
    use std::os::unix::fs::PermissionsExt;

    let t = Test::new();
    assert_success(&t.init(&["--id", APP_ID]));

    let path = t.secrets_dir(APP_ID).join("secrets.json");
    let mode = fs::metadata(path).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode, 0o600);
}

#[test]
fn test_init_then_list_is_empty() {
    let t = Test::with_manifest(APP_ID);

    assert_success(&t.init(&[]));
    let output = t.list(&[]);
    assert_success(&output);
    assert_stdout_contains(&output, "no secrets configured");
}

#[test]
fn test_init_under_appdata_root() {
    let t = Test::new();

    t.cmd()
        .env("APPDATA", t.home.path())
        .args(["init", "--id", APP_ID])
        .assert()
        .success();

    let path = t
        .home
        .path()
        .join("Microsoft")
        .join("UserSecrets")
        .join(APP_ID)
        .join("secrets.json");
    assert!(path.exists(), "secrets.json should exist under the APPDATA layout");
    assert!(!t.secrets_dir(APP_ID).exists());
}

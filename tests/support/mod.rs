//! Test support utilities for usersecrets integration tests.
//!
//! Provides reusable test environment setup and helper commands.

#![allow(dead_code)]

pub mod assertions;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// Test environment with isolated temp directories.
///
/// Each test gets its own temporary project dir and home dir.
/// No process-global state is mutated. Child processes get their
/// environment through `.env()` so tests can safely run in parallel.
pub struct Test {
    /// Temporary directory for the test project
    pub dir: TempDir,
    /// Temporary home directory
    pub home: TempDir,
}

impl Test {
    /// Create a new empty test environment.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let home = TempDir::new().expect("failed to create temp home");

        Self { dir, home }
    }

    /// Create a test environment whose project manifest declares `id`.
    pub fn with_manifest(id: &str) -> Self {
        let t = Self::new();
        fs::write(t.dir.path().join("Cargo.toml"), manifest(id)).expect("failed to write manifest");
        t
    }

    /// Secrets directory for `id` below the temporary home.
    pub fn secrets_dir(&self, id: &str) -> PathBuf {
        self.home
            .path()
            .join(".microsoft")
            .join("usersecrets")
            .join(id)
    }

    /// Write a secrets file, `env` selecting `secrets.<env>.json`.
    pub fn write_secrets(&self, id: &str, env: Option<&str>, json: &str) -> PathBuf {
        let dir = self.secrets_dir(id);
        fs::create_dir_all(&dir).expect("failed to create secrets dir");
        let name = match env {
            Some(env) => format!("secrets.{}.json", env),
            None => "secrets.json".to_string(),
        };
        let path = dir.join(name);
        fs::write(&path, json).expect("failed to write secrets");
        path
    }
}

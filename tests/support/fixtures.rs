//! Test fixtures and constants.

/// Secrets id used by most tests.
pub const APP_ID: &str = "webapp-2f6c1e";

/// Base secrets file with a nested section.
pub const BASE_SECRETS: &str = r#"{
  "ConnectionStrings": { "Default": "Server=base;Password=base-pw" },
  "Smtp": { "User": "mailer", "Password": "base-smtp" },
  "ApiKey": "base-key"
}"#;

/// Staging overrides for [`BASE_SECRETS`].
pub const STAGING_SECRETS: &str = r#"{
  "ConnectionStrings": { "Default": "Server=staging;Password=staging-pw" },
  "ApiKey": "staging-key"
}"#;

/// A Cargo manifest declaring `id` as its secrets id.
pub fn manifest(id: &str) -> String {
    format!(
        "[package]\nname = \"webapp\"\nversion = \"0.1.0\"\nedition = \"2021\"\n\n[package.metadata.user-secrets]\nid = \"{}\"\n",
        id
    )
}

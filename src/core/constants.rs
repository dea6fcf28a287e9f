//! Constants used throughout usersecrets.
//!
//! Centralizes file names, directory segments and environment variable names.

/// Base secrets file name, used when no environment is given.
pub const SECRETS_FILE: &str = "secrets.json";

/// Roaming application data variable (Windows convention).
pub const APPDATA_VAR: &str = "APPDATA";

/// Home directory variable (Unix convention).
pub const HOME_VAR: &str = "HOME";

/// Escape hatch for hosts that expose none of the usual locations.
pub const FALLBACK_DIR_VAR: &str = "USER_SECRETS_FALLBACK_DIR";

/// Environment name read by [`HostEnvironment::from_env`](crate::HostEnvironment::from_env)
/// and by the CLI.
pub const ENVIRONMENT_VAR: &str = "APP_ENVIRONMENT";

/// Log filter variable for the CLI.
pub const LOG_VAR: &str = "USERSECRETS_LOG";

/// Directory segments below a root taken from [`APPDATA_VAR`].
pub const ROAMING_SEGMENTS: [&str; 2] = ["Microsoft", "UserSecrets"];

/// Directory segments below any other root.
pub const HOME_SEGMENTS: [&str; 2] = [".microsoft", "usersecrets"];

/// Manifest file searched for a secrets id by default.
pub const MANIFEST_FILE: &str = "Cargo.toml";

/// Key separator in flattened configuration keys.
pub const KEY_DELIMITER: &str = ":";

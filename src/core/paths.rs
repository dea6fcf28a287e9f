//! Secrets file path resolution.
//!
//! A secrets file lives at
//! `<root>/<namespace>/<secrets id>/secrets[.<environment>].json`, where the
//! root comes from a fallback chain over environment variables and platform
//! special folders:
//!
//! 1. `APPDATA`
//! 2. `HOME`
//! 3. the application data special folder
//! 4. the user profile special folder
//! 5. `USER_SECRETS_FALLBACK_DIR`
//!
//! The first non-empty location wins. The namespace is `Microsoft/UserSecrets`
//! when the root came from `APPDATA` and `.microsoft/usersecrets` for every
//! other source. The order is the same on every platform.

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::core::constants::{
    APPDATA_VAR, FALLBACK_DIR_VAR, HOME_SEGMENTS, HOME_VAR, ROAMING_SEGMENTS, SECRETS_FILE,
};
use crate::core::env::{EnvLookup, ProcessEnv, SpecialFolder};
use crate::core::validation::validate_secrets_id;
use crate::error::{ResolveError, Result};

/// Which step of the fallback chain produced the root directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootSource {
    RoamingAppData,
    Home,
    ApplicationData,
    UserProfile,
    FallbackDir,
}

impl RootSource {
    /// Directory segments placed between the root and the secrets id.
    pub fn segments(self) -> [&'static str; 2] {
        match self {
            RootSource::RoamingAppData => ROAMING_SEGMENTS,
            _ => HOME_SEGMENTS,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RootSource::RoamingAppData => APPDATA_VAR,
            RootSource::Home => HOME_VAR,
            RootSource::ApplicationData => "application data folder",
            RootSource::UserProfile => "user profile folder",
            RootSource::FallbackDir => FALLBACK_DIR_VAR,
        }
    }
}

impl fmt::Display for RootSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// File name of the secrets file for an environment.
///
/// `None` or an empty name gives `secrets.json`; anything else is
/// substituted verbatim into `secrets.<env>.json`.
///
/// # Example
///
/// ```
/// use usersecrets::paths::secrets_file_name;
///
/// assert_eq!(secrets_file_name(None), "secrets.json");
/// assert_eq!(secrets_file_name(Some("")), "secrets.json");
/// assert_eq!(secrets_file_name(Some("Staging")), "secrets.Staging.json");
/// ```
pub fn secrets_file_name(environment: Option<&str>) -> String {
    match environment {
        Some(env) if !env.is_empty() => format!("secrets.{}.json", env),
        _ => SECRETS_FILE.to_string(),
    }
}

fn non_empty_var(lookup: &dyn EnvLookup, key: &str) -> Option<PathBuf> {
    lookup
        .var(key)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

fn non_empty_folder(lookup: &dyn EnvLookup, folder: SpecialFolder) -> Option<PathBuf> {
    lookup
        .special_folder(folder)
        .filter(|path| !path.as_os_str().is_empty())
}

/// Find the root directory for user secrets.
///
/// Returns the root together with the step that produced it, or `None` when
/// every step of the chain comes up empty.
pub fn root_dir(lookup: &dyn EnvLookup) -> Option<(PathBuf, RootSource)> {
    let found = non_empty_var(lookup, APPDATA_VAR)
        .map(|p| (p, RootSource::RoamingAppData))
        .or_else(|| non_empty_var(lookup, HOME_VAR).map(|p| (p, RootSource::Home)))
        .or_else(|| {
            non_empty_folder(lookup, SpecialFolder::ApplicationData)
                .map(|p| (p, RootSource::ApplicationData))
        })
        .or_else(|| {
            non_empty_folder(lookup, SpecialFolder::UserProfile)
                .map(|p| (p, RootSource::UserProfile))
        })
        .or_else(|| non_empty_var(lookup, FALLBACK_DIR_VAR).map(|p| (p, RootSource::FallbackDir)));

    match &found {
        Some((root, source)) => trace!(root = %root.display(), %source, "resolved user secrets root"),
        None => trace!("no user secrets root available"),
    }
    found
}

/// Resolve the path of a secrets file.
///
/// Returns `Ok(None)` when no root directory can be found and
/// `require_root` is false. The environment is read on every call.
///
/// # Errors
///
/// - `ResolveError::InvalidArgument` if `secrets_id` is empty.
/// - `ResolveError::InvalidIdentifier` if `secrets_id` contains a character
///   that cannot appear in a file name.
/// - `ResolveError::MissingRoot` if no root exists and `require_root` is set.
pub fn resolve_secrets_path(
    secrets_id: &str,
    environment: Option<&str>,
    require_root: bool,
    lookup: &dyn EnvLookup,
) -> Result<Option<PathBuf>> {
    validate_secrets_id(secrets_id)?;

    let Some((root, source)) = root_dir(lookup) else {
        if require_root {
            return Err(ResolveError::missing_root().into());
        }
        debug!(secrets_id, "no user secrets root; skipping");
        return Ok(None);
    };

    let [vendor, folder] = source.segments();
    let path = root
        .join(vendor)
        .join(folder)
        .join(secrets_id)
        .join(secrets_file_name(environment));

    debug!(path = %path.display(), %source, "resolved user secrets path");
    Ok(Some(path))
}

/// Path of the secrets file for `secrets_id` in the current process
/// environment.
///
/// # Errors
///
/// Same as [`resolve_secrets_path`] with `require_root` set.
pub fn secrets_path_from_id(secrets_id: &str, environment: Option<&str>) -> Result<PathBuf> {
    resolve_required(secrets_id, environment, &ProcessEnv)
}

/// Like [`secrets_path_from_id`] with an explicit environment lookup.
pub fn resolve_required(
    secrets_id: &str,
    environment: Option<&str>,
    lookup: &dyn EnvLookup,
) -> Result<PathBuf> {
    resolve_secrets_path(secrets_id, environment, true, lookup)?
        .ok_or_else(|| ResolveError::missing_root().into())
}

/// Directory holding every secrets file for `secrets_id`.
pub fn secrets_dir(secrets_id: &str, lookup: &dyn EnvLookup) -> Result<PathBuf> {
    let path = resolve_required(secrets_id, None, lookup)?;
    Ok(path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default())
}

//! Entry points that add user secrets to a configuration target.
//!
//! ```no_run
//! use usersecrets::{add_user_secrets, ConfigBuilder, HostEnvironment, ManifestId};
//!
//! # fn main() -> usersecrets::error::Result<()> {
//! let manifest = ManifestId::load("Cargo.toml")?;
//! let host = HostEnvironment::new("Development");
//!
//! let mut builder = ConfigBuilder::new();
//! builder.add_json_file("appsettings.json", true, false);
//! add_user_secrets(&mut builder, &manifest, Some(&host), true, false)?;
//!
//! let config = builder.build()?;
//! # Ok(())
//! # }
//! ```

use tracing::debug;

use crate::core::config::ConfigurationTarget;
use crate::core::constants::ENVIRONMENT_VAR;
use crate::core::env::{EnvLookup, ProcessEnv};
use crate::core::plan::MergePlan;
use crate::core::source::SecretsIdSource;
use crate::error::Result;

/// The environment an application runs in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostEnvironment {
    /// e.g. "Development", "Staging", "Production".
    pub environment_name: Option<String>,
}

impl HostEnvironment {
    pub fn new(environment_name: impl Into<String>) -> Self {
        Self {
            environment_name: Some(environment_name.into()),
        }
    }

    /// Environment name from `APP_ENVIRONMENT`.
    ///
    /// A value that is not valid unicode cannot name a secrets file and is
    /// treated as unset.
    pub fn from_env(lookup: &dyn EnvLookup) -> Self {
        Self {
            environment_name: lookup
                .var(ENVIRONMENT_VAR)
                .and_then(|v| v.into_string().ok())
                .filter(|v| !v.is_empty()),
        }
    }

    /// The environment name, treating an empty name as absent.
    pub fn environment_name(&self) -> Option<&str> {
        self.environment_name.as_deref().filter(|n| !n.is_empty())
    }
}

/// Add the user secrets of `source` to `target`.
///
/// Adds `secrets.json` and, when `host` names an environment,
/// `secrets.<environment>.json` after it.
///
/// # Errors
///
/// When `optional` is false: a missing secrets id, a missing root directory
/// and an invalid id are all errors. When `optional` is true only an invalid
/// id is, and nothing is added if the id or root is missing.
pub fn add_user_secrets<T: ConfigurationTarget + ?Sized>(
    target: &mut T,
    source: &dyn SecretsIdSource,
    host: Option<&HostEnvironment>,
    optional: bool,
    reload_on_change: bool,
) -> Result<()> {
    add_user_secrets_using(target, source, host, optional, reload_on_change, &ProcessEnv)
}

/// [`add_user_secrets`] with an explicit environment lookup.
pub fn add_user_secrets_using<T: ConfigurationTarget + ?Sized>(
    target: &mut T,
    source: &dyn SecretsIdSource,
    host: Option<&HostEnvironment>,
    optional: bool,
    reload_on_change: bool,
    lookup: &dyn EnvLookup,
) -> Result<()> {
    let secrets_id = match source.secrets_id() {
        Some(id) => id,
        None if optional => {
            debug!(unit = source.unit_name(), "no user secrets id; skipping");
            return Ok(());
        }
        None => source.require_secrets_id()?,
    };

    let environment = host.and_then(HostEnvironment::environment_name);
    add_secrets_files(target, secrets_id, environment, optional, reload_on_change, lookup)
}

/// Add user secrets with the environment name taken from a callback.
///
/// Always optional and never reloaded. A `None` from the callback means no
/// environment file.
pub fn add_user_secrets_with<T, F>(target: &mut T, source: &dyn SecretsIdSource, environment: F) -> Result<()>
where
    T: ConfigurationTarget + ?Sized,
    F: FnOnce() -> Option<String>,
{
    add_user_secrets_with_using(target, source, environment, &ProcessEnv)
}

fn add_user_secrets_with_using<T, F>(
    target: &mut T,
    source: &dyn SecretsIdSource,
    environment: F,
    lookup: &dyn EnvLookup,
) -> Result<()>
where
    T: ConfigurationTarget + ?Sized,
    F: FnOnce() -> Option<String>,
{
    let host = HostEnvironment {
        environment_name: environment(),
    };
    add_user_secrets_using(target, source, Some(&host), true, false, lookup)
}

/// Plan and add the secrets files of a known id.
///
/// Planning completes before anything is added, so a failure leaves
/// `target` untouched.
pub fn add_secrets_files<T: ConfigurationTarget + ?Sized>(
    target: &mut T,
    secrets_id: &str,
    environment: Option<&str>,
    optional: bool,
    reload_on_change: bool,
    lookup: &dyn EnvLookup,
) -> Result<()> {
    let plan = MergePlan::build(secrets_id, environment, optional, reload_on_change, lookup)?;
    plan.apply(target);
    Ok(())
}

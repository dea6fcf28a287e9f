//! Where secrets ids come from.
//!
//! A crate declares its id in its manifest:
//!
//! ```toml
//! [package.metadata.user-secrets]
//! id = "3f1e0c1d-7a2b-4d6e-9f10-2b8c4a5d6e7f"
//! ```
//!
//! or a type carries it through [`UserSecretsId`].

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::{Result, SourceError};

/// Supplies the secrets id for one unit (crate, binary, type).
pub trait SecretsIdSource {
    /// Name of the unit, used in error messages.
    fn unit_name(&self) -> &str;

    /// The id, if the unit declares one.
    fn secrets_id(&self) -> Option<&str>;

    /// The id, or `MissingIdentifierSource` naming the unit.
    fn require_secrets_id(&self) -> Result<&str> {
        self.secrets_id().ok_or_else(|| {
            SourceError::MissingIdentifierSource {
                unit: self.unit_name().to_string(),
            }
            .into()
        })
    }
}

/// Compile-time secrets id attached to a type.
///
/// ```
/// use usersecrets::{FixedId, SecretsIdSource, UserSecretsId};
///
/// struct App;
/// impl UserSecretsId for App {
///     const USER_SECRETS_ID: &'static str = "my-app-dev";
/// }
///
/// assert_eq!(FixedId::of::<App>().secrets_id(), Some("my-app-dev"));
/// ```
pub trait UserSecretsId {
    const USER_SECRETS_ID: &'static str;
}

/// A secrets id known up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedId {
    unit: String,
    id: Option<String>,
}

impl FixedId {
    pub fn new(unit: impl Into<String>, id: Option<String>) -> Self {
        Self {
            unit: unit.into(),
            id,
        }
    }

    /// The id declared by `T`.
    pub fn of<T: UserSecretsId>() -> Self {
        Self::new(
            std::any::type_name::<T>(),
            Some(T::USER_SECRETS_ID.to_string()),
        )
    }
}

impl SecretsIdSource for FixedId {
    fn unit_name(&self) -> &str {
        &self.unit
    }

    fn secrets_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

#[derive(Debug, Default, Deserialize)]
struct Manifest {
    #[serde(default)]
    package: Option<Package>,
}

#[derive(Debug, Default, Deserialize)]
struct Package {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    metadata: Option<Metadata>,
}

#[derive(Debug, Default, Deserialize)]
struct Metadata {
    #[serde(default, rename = "user-secrets")]
    user_secrets: Option<UserSecretsTable>,
}

#[derive(Debug, Default, Deserialize)]
struct UserSecretsTable {
    #[serde(default)]
    id: Option<String>,
}

/// The secrets id declared in a Cargo manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestId {
    unit: String,
    id: Option<String>,
}

impl ManifestId {
    /// Read `package.metadata.user-secrets.id` from the manifest at `path`.
    ///
    /// The unit name is the package name, or the manifest path when the
    /// manifest has no `[package]` name.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if the file cannot be read and
    /// `SourceError::Manifest` if it is not valid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let source = Self::parse(path, &contents)?;
        debug!(
            manifest = %path.display(),
            unit = %source.unit,
            found = source.id.is_some(),
            "read user secrets id from manifest"
        );
        Ok(source)
    }

    /// Parse manifest text as if read from `path`.
    pub fn parse(path: impl Into<PathBuf>, contents: &str) -> Result<Self> {
        let path = path.into();
        let manifest: Manifest = toml::from_str(contents).map_err(|e| SourceError::Manifest {
            path: path.clone(),
            message: e.message().to_string(),
        })?;

        let package = manifest.package.unwrap_or_default();
        let id = package
            .metadata
            .and_then(|m| m.user_secrets)
            .and_then(|t| t.id);
        let unit = package
            .name
            .unwrap_or_else(|| path.display().to_string());

        Ok(Self { unit, id })
    }
}

impl SecretsIdSource for ManifestId {
    fn unit_name(&self) -> &str {
        &self.unit
    }

    fn secrets_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

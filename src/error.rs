//! Error types for user secrets resolution and loading.
//!
//! Each concern has its own enum; [`Error`] wraps them so callers can
//! propagate everything with `?` and still match on the specific cause.

use std::path::PathBuf;

use thiserror::Error;

use crate::core::constants::FALLBACK_DIR_VAR;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failures while turning a secrets id into a file path.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("user secrets id must not be empty")]
    InvalidArgument,

    #[error("invalid character '{ch}' at index {index} in user secrets id")]
    InvalidIdentifier { ch: char, index: usize },

    #[error(
        "could not determine a location for user secrets; set {fallback_var} to a directory to use as the root"
    )]
    MissingRoot { fallback_var: &'static str },
}

impl ResolveError {
    /// The `MissingRoot` error naming the escape-hatch variable.
    pub fn missing_root() -> Self {
        ResolveError::MissingRoot {
            fallback_var: FALLBACK_DIR_VAR,
        }
    }
}

/// Failures while looking up the secrets id itself.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("no user secrets id found for '{unit}'; add [package.metadata.user-secrets] id = \"...\" to its manifest")]
    MissingIdentifierSource { unit: String },

    #[error("invalid manifest {}: {message}", path.display())]
    Manifest { path: PathBuf, message: String },
}

/// Failures reported by the configuration builder.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("configuration file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },
}

pub type Result<T> = std::result::Result<T, Error>;

//! Merge planning for secrets files.
//!
//! A plan lists the secrets files to load, base file first, so that values
//! in `secrets.<env>.json` override the same keys from `secrets.json` once
//! both are merged into one configuration.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::config::{ConfigurationTarget, FileProvider, FileSource};
use crate::core::env::EnvLookup;
use crate::core::paths::resolve_secrets_path;
use crate::error::Result;

/// Which layer a plan entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    Base,
    Environment,
}

impl Layer {
    pub fn as_str(self) -> &'static str {
        match self {
            Layer::Base => "base",
            Layer::Environment => "environment",
        }
    }
}

/// One secrets file to merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanEntry {
    pub layer: Layer,
    /// `None` when the plan was optional and no root directory exists.
    pub path: Option<PathBuf>,
    pub optional: bool,
    pub reload_on_change: bool,
}

/// Ordered secrets files for one secrets id.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MergePlan {
    entries: Vec<PlanEntry>,
}

impl MergePlan {
    /// Plan the secrets files for `secrets_id`.
    ///
    /// The base file is always planned. An environment file follows it when
    /// `environment` is present and non-empty. A root directory is required
    /// unless `optional` is set, in which case a missing root yields entries
    /// without a path.
    ///
    /// # Errors
    ///
    /// Any resolution error for the base or the environment file. An invalid
    /// id is always an error, even when `optional` is set.
    pub fn build(
        secrets_id: &str,
        environment: Option<&str>,
        optional: bool,
        reload_on_change: bool,
        lookup: &dyn EnvLookup,
    ) -> Result<Self> {
        let require_root = !optional;
        let entry = |layer: Layer, env: Option<&str>| -> Result<PlanEntry> {
            Ok(PlanEntry {
                layer,
                path: resolve_secrets_path(secrets_id, env, require_root, lookup)?,
                optional,
                reload_on_change,
            })
        };

        let mut entries = vec![entry(Layer::Base, None)?];
        if let Some(env) = environment.filter(|e| !e.is_empty()) {
            entries.push(entry(Layer::Environment, Some(env))?);
        }

        debug!(
            secrets_id,
            environment = environment.unwrap_or(""),
            entries = entries.len(),
            "planned user secrets"
        );
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[PlanEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Paths of the entries that resolved, in merge order.
    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.entries.iter().filter_map(|e| e.path.as_deref())
    }

    /// Submit every entry to `target`, in order.
    pub fn apply<T: ConfigurationTarget + ?Sized>(&self, target: &mut T) {
        for entry in &self.entries {
            apply_entry(target, entry);
        }
    }
}

/// Submit one entry to `target`.
///
/// An entry without a path is skipped. An entry whose directory does not
/// exist is still submitted, only without a [`FileProvider`], so a file that
/// appears later can still be loaded.
pub fn apply_entry<T: ConfigurationTarget + ?Sized>(target: &mut T, entry: &PlanEntry) {
    let Some(path) = entry.path.as_deref() else {
        return;
    };

    let provider = path.parent().and_then(FileProvider::new);
    if provider.is_none() {
        debug!(path = %path.display(), "secrets directory does not exist; not watching it");
    }

    target.add_file(FileSource {
        path: path.to_path_buf(),
        optional: entry.optional,
        reload_on_change: entry.reload_on_change,
        provider,
    });
}

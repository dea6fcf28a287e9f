//! File sources handed to a configuration target.

use std::path::{Path, PathBuf};

/// Existence checks rooted at a directory that existed when the source was
/// added.
///
/// Only constructed over an existing directory. A [`FileSource`] without one
/// still loads, it just cannot watch its directory for the file to change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileProvider {
    root: PathBuf,
}

impl FileProvider {
    /// A provider over `root`, or `None` if `root` is not an existing directory.
    pub fn new(root: impl Into<PathBuf>) -> Option<Self> {
        let root = root.into();
        root.is_dir().then_some(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Whether `file_name` currently exists below the root.
    pub fn exists(&self, file_name: &Path) -> bool {
        self.root.join(file_name).is_file()
    }
}

/// One JSON file to merge into the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSource {
    pub path: PathBuf,
    /// Missing file is not an error.
    pub optional: bool,
    /// Re-read the file on [`Configuration::reload`](super::Configuration::reload).
    pub reload_on_change: bool,
    pub provider: Option<FileProvider>,
}

impl FileSource {
    /// A source whose provider is derived from the file's directory.
    pub fn new(path: impl Into<PathBuf>, optional: bool, reload_on_change: bool) -> Self {
        let path = path.into();
        let provider = path.parent().and_then(FileProvider::new);
        Self {
            path,
            optional,
            reload_on_change,
            provider,
        }
    }

    /// Whether the file is present right now.
    pub fn exists(&self) -> bool {
        match (&self.provider, self.path.file_name()) {
            (Some(provider), Some(name)) => provider.exists(Path::new(name)),
            _ => self.path.is_file(),
        }
    }

    /// Attach a provider if the directory has appeared since the source was added.
    pub(crate) fn refresh_provider(&mut self) {
        if self.provider.is_none() {
            self.provider = self.path.parent().and_then(FileProvider::new);
        }
    }
}

/// Anything that can take file sources in order, later sources overriding
/// earlier ones.
pub trait ConfigurationTarget {
    fn add_file(&mut self, source: FileSource);
}

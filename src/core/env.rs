//! Read-only access to the host environment.
//!
//! Path resolution never touches `std::env` directly. It goes through
//! [`EnvLookup`], so tests can describe any platform state with a [`MapEnv`]
//! without mutating the real process environment.

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::path::PathBuf;

/// Platform special folders consulted when no variable names a root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SpecialFolder {
    /// Per-user application data (roaming AppData on Windows, XDG config elsewhere).
    ApplicationData,
    /// The user's profile / home directory.
    UserProfile,
}

/// Read-only key/value lookup over environment variables and special folders.
pub trait EnvLookup {
    /// Value of an environment variable, `None` when unset.
    ///
    /// Values need not be valid unicode; a set variable is never reported
    /// as missing.
    fn var(&self, key: &str) -> Option<OsString>;

    /// Location of a platform special folder, if the platform defines one.
    fn special_folder(&self, folder: SpecialFolder) -> Option<PathBuf>;
}

/// The real process environment.
///
/// Every call reads the current state; nothing is cached.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvLookup for ProcessEnv {
    fn var(&self, key: &str) -> Option<OsString> {
        std::env::var_os(key)
    }

    fn special_folder(&self, folder: SpecialFolder) -> Option<PathBuf> {
        match folder {
            SpecialFolder::ApplicationData => dirs::config_dir(),
            SpecialFolder::UserProfile => dirs::home_dir(),
        }
    }
}

/// An in-memory environment.
///
/// # Example
///
/// ```
/// use std::ffi::OsStr;
/// use usersecrets::{EnvLookup, MapEnv};
///
/// let env = MapEnv::new().with_var("HOME", "/home/u");
/// assert_eq!(env.var("HOME").as_deref(), Some(OsStr::new("/home/u")));
/// assert_eq!(env.var("APPDATA"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MapEnv {
    vars: BTreeMap<String, OsString>,
    folders: BTreeMap<SpecialFolder, PathBuf>,
}

impl MapEnv {
    /// An environment with no variables and no special folders.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a variable.
    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<OsString>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    /// Set a special folder location.
    pub fn with_folder(mut self, folder: SpecialFolder, path: impl Into<PathBuf>) -> Self {
        self.folders.insert(folder, path.into());
        self
    }

    /// Remove a variable.
    pub fn without_var(mut self, key: &str) -> Self {
        self.vars.remove(key);
        self
    }
}

impl EnvLookup for MapEnv {
    fn var(&self, key: &str) -> Option<OsString> {
        self.vars.get(key).cloned()
    }

    fn special_folder(&self, folder: SpecialFolder) -> Option<PathBuf> {
        self.folders.get(&folder).cloned()
    }
}

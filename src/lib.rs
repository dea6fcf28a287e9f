//! usersecrets - per-user secrets files layered into application configuration.
//!
//! Secrets live outside the source tree, in a directory derived from a
//! secrets id:
//!
//! ```text
//! %APPDATA%/Microsoft/UserSecrets/<id>/secrets.json           (APPDATA set)
//! $HOME/.microsoft/usersecrets/<id>/secrets.json              (otherwise)
//! .../<id>/secrets.<environment>.json                         (per environment)
//! ```
//!
//! The environment file is merged after the base file, so its values win.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── path          # Print the planned secrets files
//! │   ├── list          # Print the merged secrets
//! │   ├── init          # Create the secrets file
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── env           # Injectable environment lookup
//!     ├── validation    # Secrets id validation
//!     ├── paths         # Root fallback chain and path layout
//!     ├── plan          # Base/environment merge ordering
//!     ├── source        # Secrets id from manifests or types
//!     ├── config/       # JSON configuration builder
//!     └── host          # add_user_secrets entry points
//! ```
//!
//! # Example
//!
//! ```
//! use usersecrets::{add_secrets_files, ConfigBuilder, MapEnv};
//!
//! let env = MapEnv::new().with_var("HOME", "/nonexistent/home");
//! let mut builder = ConfigBuilder::new();
//! add_secrets_files(&mut builder, "my-app", Some("Development"), true, false, &env).unwrap();
//!
//! let files: Vec<_> = builder.file_sources().map(|s| s.path.clone()).collect();
//! assert_eq!(files.len(), 2);
//! assert!(files[0].ends_with("secrets.json"));
//! assert!(files[1].ends_with("secrets.Development.json"));
//! ```

pub mod cli;
pub mod core;
pub mod error;

pub use crate::core::config::{ConfigBuilder, Configuration, ConfigurationTarget, FileProvider, FileSource};
pub use crate::core::env::{EnvLookup, MapEnv, ProcessEnv, SpecialFolder};
pub use crate::core::host::{
    add_secrets_files, add_user_secrets, add_user_secrets_using, add_user_secrets_with,
    HostEnvironment,
};
pub use crate::core::paths;
pub use crate::core::plan::{apply_entry, Layer, MergePlan, PlanEntry};
pub use crate::core::source::{FixedId, ManifestId, SecretsIdSource, UserSecretsId};
pub use crate::error::{Error, Result};

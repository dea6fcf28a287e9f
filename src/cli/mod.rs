//! Command-line interface.

pub mod completions;
pub mod init;
pub mod list;
pub mod output;
pub mod path;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::core::constants::{ENVIRONMENT_VAR, MANIFEST_FILE};
use crate::core::host::HostEnvironment;
use crate::core::source::{FixedId, ManifestId, SecretsIdSource};
use crate::error::Result;

/// usersecrets - inspect and create per-user secrets files.
#[derive(Parser)]
#[command(
    name = "usersecrets",
    about = "Locate and inspect per-user secrets files",
    version
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Which secrets to operate on.
#[derive(Args, Debug, Clone)]
pub struct Target {
    /// Secrets id (defaults to [package.metadata.user-secrets] id in the manifest)
    #[arg(long)]
    pub id: Option<String>,

    /// Manifest to read the secrets id from
    #[arg(long, default_value = MANIFEST_FILE)]
    pub manifest: PathBuf,

    /// Environment name (e.g., Development)
    #[arg(short, long, env = ENVIRONMENT_VAR)]
    pub environment: Option<String>,
}

impl Target {
    /// Where the secrets id comes from: `--id`, or the manifest.
    pub fn source(&self) -> Result<Box<dyn SecretsIdSource>> {
        let source: Box<dyn SecretsIdSource> = match &self.id {
            Some(id) => Box::new(FixedId::new("--id", Some(id.clone()))),
            None => Box::new(ManifestId::load(&self.manifest)?),
        };
        Ok(source)
    }

    /// The secrets id, failing when the source declares none.
    pub fn secrets_id(&self) -> Result<String> {
        Ok(self.source()?.require_secrets_id()?.to_string())
    }

    pub fn environment(&self) -> Option<&str> {
        self.environment.as_deref().filter(|e| !e.is_empty())
    }

    pub fn host(&self) -> HostEnvironment {
        HostEnvironment {
            environment_name: self.environment().map(str::to_string),
        }
    }
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the secrets files that would be loaded, in merge order
    Path {
        #[command(flatten)]
        target: Target,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the merged secrets
    List {
        #[command(flatten)]
        target: Target,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create the secrets directory and an empty secrets file
    Init {
        #[command(flatten)]
        target: Target,
    },

    /// Print a shell completion script to stdout
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Execute a command.
pub fn execute(command: Command) -> Result<()> {
    use Command::*;

    match command {
        Path { target, json } => path::execute(&target, json),
        List { target, json } => list::execute(&target, json),
        Init { target } => init::execute(&target),
        Completions { shell } => {
            completions::print(shell);
            Ok(())
        }
    }
}

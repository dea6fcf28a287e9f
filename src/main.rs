//! usersecrets - inspect and create per-user secrets files.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use usersecrets::cli::output;
use usersecrets::cli::{execute, Cli};
use usersecrets::core::constants::LOG_VAR;
use usersecrets::error::{Error, ResolveError, SourceError};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(LOG_VAR).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("usersecrets=debug")
        } else {
            EnvFilter::new("usersecrets=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false).without_time())
        .init();

    if let Err(e) = execute(cli.command) {
        // Format error with suggestion if available
        let suggestion = match &e {
            Error::Resolve(ResolveError::MissingRoot { fallback_var }) => {
                Some(format!("set {} to a writable directory", fallback_var))
            }
            Error::Source(SourceError::MissingIdentifierSource { .. }) => {
                Some("pass --id <ID> or add an id to the manifest".to_string())
            }
            Error::Io(io) if io.kind() == std::io::ErrorKind::NotFound => {
                Some("pass --id <ID> or run from a crate directory".to_string())
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(&hint);
        }
        std::process::exit(1);
    }
}

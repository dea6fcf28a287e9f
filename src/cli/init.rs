//! Init command.
//!
//! Creates the secrets directory and an empty JSON object file.

use std::fs;

use tracing::info;

use crate::cli::{output, Target};
use crate::core::env::ProcessEnv;
use crate::core::paths;
use crate::error::Result;

/// Create the secrets file for the target if it does not exist yet.
pub fn execute(target: &Target) -> Result<()> {
    let id = target.secrets_id()?;
    info!("Initializing secrets for: {}", id);

    let path = paths::secrets_path_from_id(&id, target.environment())?;
    let display = path.display().to_string();

    if path.exists() {
        output::warn(&format!("already exists: {}", output::path(&display)));
        return Ok(());
    }

    fs::create_dir_all(paths::secrets_dir(&id, &ProcessEnv)?)?;
    fs::write(&path, "{}\n")?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&path, fs::Permissions::from_mode(0o600))?;
    }

    info!("Initialized successfully");
    output::success(&format!("created {}", output::path(&display)));
    Ok(())
}

//! Path command.
//!
//! Prints the secrets files for an id in the order they are merged.

use serde::Serialize;
use tracing::info;

use crate::cli::{output, Target};
use crate::core::env::ProcessEnv;
use crate::core::paths;
use crate::core::plan::MergePlan;
use crate::error::Result;

#[derive(Serialize)]
struct PathEntry {
    layer: &'static str,
    path: String,
    exists: bool,
}

/// Print the planned secrets files.
pub fn execute(target: &Target, json: bool) -> Result<()> {
    let id = target.secrets_id()?;
    info!("Planning secrets for: {}", id);

    let plan = MergePlan::build(&id, target.environment(), false, false, &ProcessEnv)?;
    let entries: Vec<PathEntry> = plan
        .entries()
        .iter()
        .filter_map(|entry| {
            entry.path.as_ref().map(|p| PathEntry {
                layer: entry.layer.as_str(),
                path: p.display().to_string(),
                exists: p.is_file(),
            })
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    output::kv("secrets id", &id);
    if let Some((root, source)) = paths::root_dir(&ProcessEnv) {
        output::kv("root      ", format!("{} ({})", root.display(), source));
    }
    for entry in &entries {
        output::file_entry(entry.layer, &entry.path, entry.exists);
    }
    Ok(())
}

//! List command.
//!
//! Loads the secrets files the way an application would and prints the
//! merged result.

use std::collections::BTreeMap;

use tracing::info;

use crate::cli::{output, Target};
use crate::core::config::ConfigBuilder;
use crate::core::host::add_user_secrets;
use crate::error::Result;

/// Print every merged secret as `key = value`.
pub fn execute(target: &Target, json: bool) -> Result<()> {
    let source = target.source()?;
    let id = source.require_secrets_id()?;
    info!("Listing secrets for: {}", id);

    let mut builder = ConfigBuilder::new();
    add_user_secrets(&mut builder, &*source, Some(&target.host()), true, false)?;
    let config = builder.build()?;

    if json {
        let map: BTreeMap<&str, &str> = config.iter().collect();
        println!("{}", serde_json::to_string_pretty(&map)?);
        return Ok(());
    }

    if config.is_empty() {
        output::warn("no secrets configured");
        return Ok(());
    }

    // Plain output for scripting
    for (key, value) in config.iter() {
        println!("{} = {}", key, value);
    }
    Ok(())
}

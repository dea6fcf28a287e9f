//! Core library components.
//!
//! Path resolution, merge planning and the configuration target the
//! planned files are merged into.

pub mod config;
pub mod constants;
pub mod env;
pub mod host;
pub mod paths;
pub mod plan;
pub mod source;
pub mod validation;

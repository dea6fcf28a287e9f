//! Configuration merge target.
//!
//! Secrets files are merged into a [`ConfigBuilder`] through the
//! [`ConfigurationTarget`] trait. JSON objects are flattened to
//! `section:key` pairs and later sources override earlier ones.

mod builder;
pub mod json;
mod source;

pub use builder::{ConfigBuilder, Configuration};
pub use source::{ConfigurationTarget, FileProvider, FileSource};

//! Layered configuration built from JSON files and in-memory pairs.

use std::collections::BTreeMap;
use std::path::PathBuf;

use tracing::{debug, trace};

use super::json;
use super::source::{ConfigurationTarget, FileSource};
use crate::error::{ConfigError, Result};

#[derive(Debug, Clone)]
enum Source {
    File(FileSource),
    Memory(Vec<(String, String)>),
}

/// Collects configuration sources in order.
///
/// Sources added later override keys from sources added earlier.
///
/// # Example
///
/// ```
/// use usersecrets::ConfigBuilder;
///
/// let config = ConfigBuilder::new()
///     .add_in_memory([("Logging:Level", "Info")])
///     .add_in_memory([("logging:level", "Debug")])
///     .build()
///     .unwrap();
///
/// assert_eq!(config.get("Logging:Level"), Some("Debug"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    sources: Vec<Source>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a JSON file.
    pub fn add_json_file(
        &mut self,
        path: impl Into<PathBuf>,
        optional: bool,
        reload_on_change: bool,
    ) -> &mut Self {
        self.add_file(FileSource::new(path, optional, reload_on_change));
        self
    }

    /// Add fixed key/value pairs.
    pub fn add_in_memory<I, K, V>(&mut self, pairs: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let pairs = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self.sources.push(Source::Memory(pairs));
        self
    }

    /// File sources in the order they were added.
    pub fn file_sources(&self) -> impl Iterator<Item = &FileSource> {
        self.sources.iter().filter_map(|source| match source {
            Source::File(file) => Some(file),
            Source::Memory(_) => None,
        })
    }

    /// Load every source and merge them.
    ///
    /// # Errors
    ///
    /// - `ConfigError::FileNotFound` for a missing required file.
    /// - `ConfigError::Read` if a file exists but cannot be read.
    /// - `ConfigError::Parse` for malformed JSON, even in an optional file.
    pub fn build(&self) -> Result<Configuration> {
        let layers = self
            .sources
            .iter()
            .map(|source| -> Result<Layer> {
                let values = load(source)?;
                Ok(Layer {
                    source: source.clone(),
                    values,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let mut config = Configuration {
            layers,
            data: BTreeMap::new(),
        };
        config.merge();
        Ok(config)
    }
}

impl ConfigurationTarget for ConfigBuilder {
    fn add_file(&mut self, source: FileSource) {
        trace!(path = %source.path.display(), optional = source.optional, "adding json file source");
        self.sources.push(Source::File(source));
    }
}

#[derive(Debug, Clone)]
struct Layer {
    source: Source,
    values: Vec<(String, String)>,
}

/// The merged view over all sources of a [`ConfigBuilder`].
///
/// Keys compare case-insensitively.
#[derive(Debug, Clone)]
pub struct Configuration {
    layers: Vec<Layer>,
    // lowercased key -> (key as last written, value)
    data: BTreeMap<String, (String, String)>,
}

impl Configuration {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.data
            .get(&key.to_lowercase())
            .map(|(_, value)| value.as_str())
    }

    /// All pairs, ordered by key.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.data
            .values()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Re-read file sources marked `reload_on_change`.
    ///
    /// A file that did not exist at build time is picked up if it exists
    /// now. On error nothing changes.
    pub fn reload(&mut self) -> Result<()> {
        let mut fresh = Vec::new();
        for (index, layer) in self.layers.iter().enumerate() {
            let Source::File(file) = &layer.source else {
                continue;
            };
            if !file.reload_on_change {
                continue;
            }
            let mut file = file.clone();
            file.refresh_provider();
            let values = load_file(&file)?;
            fresh.push((index, file, values));
        }

        for (index, file, values) in fresh {
            debug!(path = %file.path.display(), keys = values.len(), "reloaded json file source");
            self.layers[index] = Layer {
                source: Source::File(file),
                values,
            };
        }
        self.merge();
        Ok(())
    }

    fn merge(&mut self) {
        self.data.clear();
        for layer in &self.layers {
            for (key, value) in &layer.values {
                self.data
                    .insert(key.to_lowercase(), (key.clone(), value.clone()));
            }
        }
    }
}

fn load(source: &Source) -> Result<Vec<(String, String)>> {
    match source {
        Source::File(file) => load_file(file),
        Source::Memory(pairs) => Ok(pairs.clone()),
    }
}

fn load_file(source: &FileSource) -> Result<Vec<(String, String)>> {
    if !source.exists() {
        if source.optional {
            trace!(path = %source.path.display(), "optional json file missing");
            return Ok(Vec::new());
        }
        return Err(ConfigError::FileNotFound {
            path: source.path.clone(),
        }
        .into());
    }

    let text = std::fs::read_to_string(&source.path).map_err(|e| ConfigError::Read {
        path: source.path.clone(),
        source: e,
    })?;

    // An empty file contributes nothing rather than failing to parse.
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }

    json::parse(&text).map_err(|message| {
        ConfigError::Parse {
            path: source.path.clone(),
            message,
        }
        .into()
    })
}

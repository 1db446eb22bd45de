//! RON configuration file for the `wordtree` binary.
//!
//! Every field is optional; missing sections fall back to library defaults.

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use wordtree_core::{CountOptions, NullPolicy, DEFAULT_MAX_DEPTH};
use wordtree_engine::PruneOptions;
use wordtree_logging::LevelFilter;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CountSection {
    pub keep_nulls: bool,
    pub max_depth: usize,
}

impl Default for CountSection {
    fn default() -> Self {
        Self {
            keep_nulls: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl CountSection {
    pub fn to_options(&self) -> CountOptions {
        CountOptions {
            null_policy: if self.keep_nulls {
                NullPolicy::Placeholder
            } else {
                NullPolicy::Omit
            },
            max_depth: self.max_depth,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PruneSection {
    pub enabled: bool,
    pub drop_keys: Vec<String>,
    pub length_keys: Vec<String>,
}

impl Default for PruneSection {
    fn default() -> Self {
        let defaults = PruneOptions::default();
        Self {
            enabled: false,
            drop_keys: defaults.drop_keys,
            length_keys: defaults.length_keys,
        }
    }
}

impl PruneSection {
    pub fn to_options(&self) -> PruneOptions {
        PruneOptions {
            drop_keys: self.drop_keys.clone(),
            length_keys: self.length_keys.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub count: CountSection,
    pub prune: PruneSection,
    /// One of `off`, `error`, `warn`, `info`, `debug`, `trace`.
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            count: CountSection::default(),
            prune: PruneSection::default(),
            log_level: "warn".to_string(),
        }
    }
}

impl AppConfig {
    pub fn level(&self) -> anyhow::Result<LevelFilter> {
        self.log_level
            .parse()
            .with_context(|| format!("invalid log level {:?}", self.log_level))
    }
}

/// Loads a config file. Returns `Ok(None)` when the file does not exist.
pub fn load_config(path: &Path) -> anyhow::Result<Option<AppConfig>> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(err) => {
            return Err(err).with_context(|| format!("failed to read config {:?}", path));
        }
    };
    let config = ron::from_str(&content)
        .with_context(|| format!("failed to parse config {:?}", path))?;
    Ok(Some(config))
}

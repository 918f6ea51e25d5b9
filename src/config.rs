//! Dataset configuration, read from the same JSON files the training runs use.
//!
//! Only `file_name` and the split keys are consulted; every other key in the
//! file is ignored.

use crate::{
    core::splitter::validate_fractions,
    error::{PrepError, Result},
    types::{RoleRange, SplitBounds},
};
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    file_name: Option<String>,
    split_bounds: Option<RawSplitBounds>,
    split_fractions: Option<[f64; 3]>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawSplitBounds {
    train: Option<RoleRange>,
    test: Option<RoleRange>,
    val: Option<RoleRange>,
}

impl RawSplitBounds {
    fn is_empty(&self) -> bool {
        self.train.is_none() && self.test.is_none() && self.val.is_none()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PrepConfig {
    /// Base name of the six output files.
    pub file_name: String,
    pub split_bounds: SplitBounds,
}

impl PrepConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: RawConfig =
            serde_json::from_str(json).map_err(|e| PrepError::Config(e.to_string()))?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawConfig) -> Result<Self> {
        let file_name = match raw.file_name {
            Some(name) if !name.is_empty() => name,
            _ => {
                return Err(PrepError::Config(
                    "config file doesn't have file_name defined".into(),
                ))
            }
        };

        // An empty `split_bounds` object counts as absent.
        let absolute = raw.split_bounds.filter(|b| !b.is_empty());

        let split_bounds = match (absolute, raw.split_fractions) {
            (Some(_), Some(_)) => {
                return Err(PrepError::Config(
                    "split_bounds and split_fractions are mutually exclusive".into(),
                ))
            }
            (Some(b), None) => SplitBounds::Absolute {
                train: b.train.unwrap_or_default(),
                test: b.test.unwrap_or_default(),
                val: b.val.unwrap_or_default(),
            },
            (None, Some([train, test, val])) => {
                validate_fractions(train, test, val)?;
                SplitBounds::Fractional { train, test, val }
            }
            (None, None) => {
                log::info!("No dataset split points configured, using 70/15/15");
                SplitBounds::default()
            }
        };

        Ok(Self {
            file_name,
            split_bounds,
        })
    }
}

/// Path of config `name` inside `location`, with `.json` appended when missing.
pub fn config_path(name: &str, location: &Path) -> PathBuf {
    let file = if name.ends_with(".json") {
        name.to_string()
    } else {
        format!("{name}.json")
    };
    location.join(file)
}

pub fn load_config(name: &str, location: &Path) -> Result<PrepConfig> {
    let path = config_path(name, location);
    log::info!("Using config file {}", path.display());

    let text = fs::read_to_string(&path).map_err(|e| PrepError::io(&path, e))?;
    let raw: RawConfig = serde_json::from_str(&text).map_err(|e| PrepError::from_json(&path, e))?;
    PrepConfig::from_raw(raw)
}

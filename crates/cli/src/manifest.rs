// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `rmk.toml` manifest parsing

use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Errors reading or validating a manifest
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("manifest declares no rules")]
    Empty,
    #[error("duplicate target: {0}")]
    DuplicateTarget(String),
}

/// A parsed `rmk.toml`
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Delay between watch ticks.
    #[serde(default, with = "humantime_serde::option")]
    pub interval: Option<Duration>,
    /// Delay before the next tick after a failed one.
    #[serde(default, with = "humantime_serde::option")]
    pub interval_on_error: Option<Duration>,
    /// Rules, evaluated in declaration order.
    #[serde(default, rename = "rule")]
    pub rules: Vec<RuleDef>,
}

/// One `[[rule]]` entry
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleDef {
    /// File the rule produces.
    pub target: String,
    /// Files or directories the target is built from. A directory
    /// stands for every regular file under it.
    #[serde(default)]
    pub deps: Vec<String>,
    /// Shell command that (re)builds the target.
    pub run: String,
}

impl Manifest {
    /// Load and validate the manifest at `path`.
    pub fn load(path: &Path) -> Result<Manifest, ManifestError> {
        let content = std::fs::read_to_string(path).map_err(|source| ManifestError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let manifest = Self::parse(&content).map_err(|source| ManifestError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Parse manifest TOML.
    pub fn parse(content: &str) -> Result<Manifest, toml::de::Error> {
        toml::from_str(content)
    }

    /// Rule producing `target`, if declared.
    pub fn rule(&self, target: &str) -> Option<&RuleDef> {
        self.rules.iter().find(|rule| rule.target == target)
    }

    fn validate(&self) -> Result<(), ManifestError> {
        if self.rules.is_empty() {
            return Err(ManifestError::Empty);
        }
        let mut seen = HashSet::new();
        for rule in &self.rules {
            if !seen.insert(rule.target.as_str()) {
                return Err(ManifestError::DuplicateTarget(rule.target.clone()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "manifest_tests.rs"]
mod tests;

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Filesystem probe: modification times and recursive listing

use crate::error::RuleError;
use crate::stamp::{Stamp, FAR_PAST};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Where modification times come from.
///
/// During evaluation the engine asks the filesystem exactly one
/// question: "when did this path last change, if it exists at all."
/// Alternative storage backends implement this trait; [`FakeProbe`] is
/// the in-memory one the tests use.
#[async_trait]
pub trait FileProbe: Send + Sync {
    /// Modification time of `path`, or [`FAR_PAST`] if it does not
    /// exist. "Not found" is not an error; any other I/O failure is.
    async fn mtime(&self, path: &Path) -> Result<Stamp, RuleError>;
}

/// Probe backed by the real filesystem.
#[derive(Debug, Clone, Default)]
pub struct SystemProbe;

impl SystemProbe {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl FileProbe for SystemProbe {
    async fn mtime(&self, path: &Path) -> Result<Stamp, RuleError> {
        match tokio::fs::metadata(path).await {
            Ok(meta) => {
                let modified = meta.modified().map_err(|source| io_error(path, source))?;
                Ok(Stamp::At(modified))
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(FAR_PAST),
            Err(source) => Err(io_error(path, source)),
        }
    }
}

/// In-memory probe for testing: paths resolve to whatever stamps were
/// planted, everything else reads as absent.
#[derive(Clone, Default)]
pub struct FakeProbe {
    stamps: Arc<Mutex<BTreeMap<PathBuf, Stamp>>>,
}

impl FakeProbe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Plant a stamp for `path`.
    pub fn set(&self, path: impl Into<PathBuf>, stamp: Stamp) {
        self.stamps
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(path.into(), stamp);
    }

    /// Forget `path`, making it absent again.
    pub fn remove(&self, path: &Path) {
        self.stamps
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .remove(path);
    }
}

#[async_trait]
impl FileProbe for FakeProbe {
    async fn mtime(&self, path: &Path) -> Result<Stamp, RuleError> {
        Ok(self
            .stamps
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(path)
            .copied()
            .unwrap_or(FAR_PAST))
    }
}

/// Every regular file at or under `path`, depth-first in directory-entry
/// order. A non-directory `path` yields just itself.
///
/// Synchronous: listings happen while a graph is being constructed, not
/// on the evaluation path. A missing or unreadable `path` is an error
/// here, unlike in [`FileProbe::mtime`].
pub fn list_files(path: impl AsRef<Path>) -> Result<Vec<PathBuf>, RuleError> {
    let mut files = Vec::new();
    walk(path.as_ref(), &mut files)?;
    Ok(files)
}

fn walk(path: &Path, files: &mut Vec<PathBuf>) -> Result<(), RuleError> {
    let meta = std::fs::metadata(path).map_err(|source| io_error(path, source))?;
    if !meta.is_dir() {
        files.push(path.to_path_buf());
        return Ok(());
    }
    for entry in std::fs::read_dir(path).map_err(|source| io_error(path, source))? {
        let entry = entry.map_err(|source| io_error(path, source))?;
        walk(&entry.path(), files)?;
    }
    Ok(())
}

fn io_error(path: &Path, source: io::Error) -> RuleError {
    RuleError::Io {
        path: path.to_path_buf(),
        source,
    }
}

#[cfg(test)]
#[path = "probe_tests.rs"]
mod tests;

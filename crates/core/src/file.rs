// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! File-producing rules and their staleness decision

use crate::dep::{eval, Dep};
use crate::error::{BoxError, RuleError};
use crate::probe::{FileProbe, SystemProbe};
use crate::rule::{Rule, RuleInfo};
use crate::stamp::Stamp;
use async_trait::async_trait;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use std::sync::Arc;

type Action = Box<
    dyn Fn(PathBuf, Vec<Dep>) -> Pin<Box<dyn Future<Output = Result<(), BoxError>> + Send>>
        + Send
        + Sync,
>;

/// Build a rule that keeps `target` at least as fresh as its
/// prerequisites.
///
/// On invocation the prerequisites are evaluated sequentially in
/// declaration order; if the target's own modification time is strictly
/// newer than all of them the action is skipped and the on-disk time is
/// returned. Otherwise (absent target, tie, or older) `execute` runs
/// with the target path and the declared prerequisites, and the target
/// is re-probed for its fresh time. Equality counts as stale.
///
/// `prereqs` may be `None` for "stale only while the target is absent".
pub fn file<F, Fut>(
    target: impl Into<PathBuf>,
    prereqs: impl Into<Option<Vec<Dep>>>,
    execute: F,
) -> FileRule
where
    F: Fn(PathBuf, Vec<Dep>) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<(), BoxError>> + Send + 'static,
{
    FileRule {
        target: target.into(),
        prereqs: prereqs.into().unwrap_or_default(),
        execute: Box::new(move |target, prereqs| Box::pin(execute(target, prereqs))),
        probe: Arc::new(SystemProbe),
    }
}

/// See [`file`].
pub struct FileRule {
    target: PathBuf,
    prereqs: Vec<Dep>,
    execute: Action,
    probe: Arc<dyn FileProbe>,
}

impl FileRule {
    /// Swap the filesystem backend the rule probes.
    pub fn with_probe(mut self, probe: Arc<dyn FileProbe>) -> Self {
        self.probe = probe;
        self
    }

    /// The path this rule produces.
    pub fn target(&self) -> &Path {
        &self.target
    }

    /// Snapshot of the prerequisite list as declared. Mutating the
    /// returned value does not touch the rule.
    pub fn prereqs(&self) -> Vec<Dep> {
        self.prereqs.clone()
    }
}

#[async_trait]
impl Rule for FileRule {
    async fn invoke(&self) -> Result<Stamp, RuleError> {
        let mut stamps = Vec::with_capacity(self.prereqs.len());
        for dep in &self.prereqs {
            stamps.push(eval(dep, &*self.probe).await?);
        }
        let prereq_time = Stamp::max_of(stamps);
        let target_time = self.probe.mtime(&self.target).await?;

        // Strictly newer or it rebuilds.
        if target_time > prereq_time {
            tracing::debug!(target = %self.target.display(), "up to date");
            return Ok(target_time);
        }

        tracing::info!(target = %self.target.display(), "building");
        (self.execute)(self.target.clone(), self.prereqs.clone())
            .await
            .map_err(RuleError::Action)?;
        self.probe.mtime(&self.target).await
    }

    fn describe(&self) -> Option<RuleInfo> {
        Some(RuleInfo {
            target: self.target.clone(),
            prereqs: self.prereqs.clone(),
        })
    }
}

#[cfg(test)]
#[path = "file_tests.rs"]
mod tests;

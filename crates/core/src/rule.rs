// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The rule abstraction and the always-stale wrapper

use crate::dep::Dep;
use crate::error::{BoxError, RuleError};
use crate::stamp::{Stamp, FAR_PAST};
use async_trait::async_trait;
use std::future::Future;
use std::path::PathBuf;

/// A build rule: invoked with no arguments, asynchronously reports how
/// fresh the thing it stands for is right now.
///
/// Rules hold no engine-side state between invocations; whatever side
/// effects happen are the underlying action's own. Identity is
/// invocation behavior, composed rather than inherited.
#[async_trait]
pub trait Rule: Send + Sync {
    /// Evaluate the rule, producing its current freshness stamp.
    async fn invoke(&self) -> Result<Stamp, RuleError>;

    /// Metadata projection for graph tooling. The engine itself never
    /// reads this.
    fn describe(&self) -> Option<RuleInfo> {
        None
    }
}

/// Introspection data exposed by rules that have it.
#[derive(Debug, Clone)]
pub struct RuleInfo {
    /// Path the rule produces.
    pub target: PathBuf,
    /// Prerequisites as declared, before any normalization.
    pub prereqs: Vec<Dep>,
}

/// Adapt a closure into a [`Rule`].
pub fn rule<F, Fut>(f: F) -> FnRule<F>
where
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = Result<Stamp, RuleError>> + Send,
{
    FnRule(f)
}

/// A rule backed by a plain closure. See [`rule`].
pub struct FnRule<F>(F);

#[async_trait]
impl<F, Fut> Rule for FnRule<F>
where
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = Result<Stamp, RuleError>> + Send,
{
    async fn invoke(&self) -> Result<Stamp, RuleError> {
        (self.0)().await
    }
}

/// Wrap a side-effecting action as a rule that is never fresh.
///
/// The action runs on every evaluation of whatever graph contains it
/// and the result is always [`FAR_PAST`], the one stamp that can never
/// win a freshness comparison. An action failure propagates instead of
/// yielding a stamp.
pub fn always<F, Fut>(action: F) -> Always<F>
where
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = Result<(), BoxError>> + Send,
{
    Always { action }
}

/// See [`always`].
pub struct Always<F> {
    action: F,
}

#[async_trait]
impl<F, Fut> Rule for Always<F>
where
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = Result<(), BoxError>> + Send,
{
    async fn invoke(&self) -> Result<Stamp, RuleError> {
        (self.action)().await.map_err(RuleError::Action)?;
        Ok(FAR_PAST)
    }
}

#[cfg(test)]
#[path = "rule_tests.rs"]
mod tests;

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Dependency shapes, the polymorphic dispatcher, and grouping

use crate::error::RuleError;
use crate::probe::{FileProbe, SystemProbe};
use crate::rule::Rule;
use crate::stamp::Stamp;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::fmt;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use std::sync::Arc;

/// One prerequisite in a dependency graph.
///
/// A closed set of shapes; evaluation pattern-matches on the variant
/// rather than inspecting anything at runtime. Cloning is cheap, rules
/// are shared behind `Arc`.
#[derive(Clone)]
pub enum Dep {
    /// A path on disk, as fresh as its modification time (far past when
    /// absent).
    Path(PathBuf),
    /// An already-constructed rule.
    Rule(Arc<dyn Rule>),
    /// Ordered sub-dependencies, evaluated one after another.
    Seq(Vec<Dep>),
    /// Named sub-dependencies, evaluated in key order. Names exist for
    /// grouping and lookup only; they carry no evaluation semantics.
    Map(BTreeMap<String, Dep>),
}

impl Dep {
    /// Wrap a rule value.
    pub fn rule(rule: impl Rule + 'static) -> Dep {
        Dep::Rule(Arc::new(rule))
    }

    /// Build a sequence from anything dep-convertible.
    pub fn seq<I, D>(deps: I) -> Dep
    where
        I: IntoIterator<Item = D>,
        D: Into<Dep>,
    {
        Dep::Seq(deps.into_iter().map(Into::into).collect())
    }

    /// Build a named mapping from anything dep-convertible.
    pub fn map<I, K, D>(entries: I) -> Dep
    where
        I: IntoIterator<Item = (K, D)>,
        K: Into<String>,
        D: Into<Dep>,
    {
        Dep::Map(
            entries
                .into_iter()
                .map(|(k, d)| (k.into(), d.into()))
                .collect(),
        )
    }
}

impl fmt::Debug for Dep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dep::Path(path) => f.debug_tuple("Path").field(path).finish(),
            Dep::Rule(_) => f.write_str("Rule(..)"),
            Dep::Seq(deps) => f.debug_tuple("Seq").field(deps).finish(),
            Dep::Map(deps) => f.debug_tuple("Map").field(deps).finish(),
        }
    }
}

impl From<&str> for Dep {
    fn from(path: &str) -> Dep {
        Dep::Path(PathBuf::from(path))
    }
}

impl From<String> for Dep {
    fn from(path: String) -> Dep {
        Dep::Path(PathBuf::from(path))
    }
}

impl From<&Path> for Dep {
    fn from(path: &Path) -> Dep {
        Dep::Path(path.to_path_buf())
    }
}

impl From<PathBuf> for Dep {
    fn from(path: PathBuf) -> Dep {
        Dep::Path(path)
    }
}

impl From<Arc<dyn Rule>> for Dep {
    fn from(rule: Arc<dyn Rule>) -> Dep {
        Dep::Rule(rule)
    }
}

impl From<Vec<Dep>> for Dep {
    fn from(deps: Vec<Dep>) -> Dep {
        Dep::Seq(deps)
    }
}

impl From<BTreeMap<String, Dep>> for Dep {
    fn from(deps: BTreeMap<String, Dep>) -> Dep {
        Dep::Map(deps)
    }
}

/// Evaluate any dependency shape down to a single stamp, resolving bare
/// paths through the real filesystem.
///
/// Sequences and mappings settle strictly one element at a time, in
/// order; the newest stamp wins. Empty collections yield the far-past
/// sentinel.
pub async fn run(dep: &Dep) -> Result<Stamp, RuleError> {
    eval(dep, &SystemProbe).await
}

/// Recursive evaluator behind [`run`]. Boxed for async recursion.
pub(crate) fn eval<'a>(
    dep: &'a Dep,
    probe: &'a dyn FileProbe,
) -> Pin<Box<dyn Future<Output = Result<Stamp, RuleError>> + Send + 'a>> {
    Box::pin(async move {
        match dep {
            Dep::Path(path) => probe.mtime(path).await,
            Dep::Rule(rule) => rule.invoke().await,
            Dep::Seq(deps) => eval_all(deps.iter(), probe).await,
            Dep::Map(deps) => eval_all(deps.values(), probe).await,
        }
    })
}

async fn eval_all<'a, I>(deps: I, probe: &'a dyn FileProbe) -> Result<Stamp, RuleError>
where
    I: Iterator<Item = &'a Dep> + Send,
{
    let mut stamps = Vec::new();
    for dep in deps {
        stamps.push(eval(dep, probe).await?);
    }
    Ok(Stamp::max_of(stamps))
}

/// Treat a collection of dependencies as one composite rule.
///
/// A map-backed group keeps read access to its named members so a
/// caller can both depend on the whole group and reference a single
/// sub-rule elsewhere. Member lookups hand back the stored dependency
/// as-is; invoking one re-evaluates it independently of the group,
/// results are never memoized.
pub fn group(deps: impl Into<Dep>) -> Group {
    Group {
        deps: deps.into(),
        probe: Arc::new(SystemProbe),
    }
}

/// See [`group`].
pub struct Group {
    deps: Dep,
    probe: Arc<dyn FileProbe>,
}

impl Group {
    /// Swap the filesystem backend used to resolve path members.
    pub fn with_probe(mut self, probe: Arc<dyn FileProbe>) -> Self {
        self.probe = probe;
        self
    }

    /// Named member of a map-backed group.
    pub fn member(&self, name: &str) -> Option<&Dep> {
        match &self.deps {
            Dep::Map(deps) => deps.get(name),
            _ => None,
        }
    }

    /// The wrapped dependency collection.
    pub fn deps(&self) -> &Dep {
        &self.deps
    }
}

#[async_trait]
impl Rule for Group {
    async fn invoke(&self) -> Result<Stamp, RuleError> {
        eval(&self.deps, &*self.probe).await
    }
}

#[cfg(test)]
#[path = "dep_tests.rs"]
mod tests;

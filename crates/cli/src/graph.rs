// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Manifest rules turned into an executable graph

use crate::manifest::{Manifest, RuleDef};
use rmk_core::{file, list_files, BoxError, Dep, FileRule, RuleError};
use std::path::Path;
use tokio::process::Command;

/// Dependency list for one rule. An existing path is expanded through
/// the recursive listing (a directory stands for every regular file
/// under it); a missing path is kept as-is and reads as far past until
/// something produces it.
pub fn resolve_deps(def: &RuleDef) -> Result<Vec<Dep>, RuleError> {
    let mut deps = Vec::new();
    for dep in &def.deps {
        let path = Path::new(dep);
        if path.exists() {
            for found in list_files(path)? {
                deps.push(Dep::Path(found));
            }
        } else {
            deps.push(Dep::Path(path.to_path_buf()));
        }
    }
    Ok(deps)
}

/// One manifest rule as a file rule that shells out to its command.
pub fn file_rule(def: &RuleDef) -> Result<FileRule, RuleError> {
    let deps = resolve_deps(def)?;
    let command = def.run.clone();
    Ok(file(&def.target, deps, move |_target, _prereqs| {
        let command = command.clone();
        async move { run_command(&command).await }
    }))
}

/// The whole manifest as one ordered dependency.
pub fn build_graph(manifest: &Manifest) -> Result<Dep, RuleError> {
    let mut rules = Vec::with_capacity(manifest.rules.len());
    for def in &manifest.rules {
        rules.push(Dep::rule(file_rule(def)?));
    }
    Ok(Dep::Seq(rules))
}

async fn run_command(command: &str) -> Result<(), BoxError> {
    tracing::debug!(command, "running");
    let status = Command::new("sh").args(["-c", command]).status().await?;
    if !status.success() {
        return Err(format!("command failed ({status}): {command}").into());
    }
    Ok(())
}

#[cfg(test)]
#[path = "graph_tests.rs"]
mod tests;

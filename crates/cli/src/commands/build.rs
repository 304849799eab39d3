// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `rmk build`: one pass over the graph

use crate::graph;
use crate::manifest::Manifest;
use anyhow::{anyhow, Result};
use clap::Args;
use rmk_core::{run, Dep};

#[derive(Args)]
pub struct BuildArgs {
    /// Build only this target (default: every rule, in manifest order)
    pub target: Option<String>,
}

pub async fn build(manifest: &Manifest, args: BuildArgs) -> Result<()> {
    let dep = select_graph(manifest, args.target.as_deref())?;
    run(&dep).await?;
    Ok(())
}

/// The whole graph, or the single rule producing `target`.
pub(crate) fn select_graph(manifest: &Manifest, target: Option<&str>) -> Result<Dep> {
    match target {
        Some(name) => {
            let def = manifest
                .rule(name)
                .ok_or_else(|| anyhow!("unknown target: {name}"))?;
            Ok(Dep::rule(graph::file_rule(def)?))
        }
        None => Ok(graph::build_graph(manifest)?),
    }
}

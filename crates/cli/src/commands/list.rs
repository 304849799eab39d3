// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `rmk list`: graph introspection via rule metadata

use crate::graph;
use crate::manifest::Manifest;
use anyhow::Result;
use rmk_core::{Dep, Rule};

pub fn list(manifest: &Manifest) -> Result<()> {
    for def in &manifest.rules {
        let rule = graph::file_rule(def)?;
        let Some(info) = rule.describe() else {
            continue;
        };
        println!("{}", info.target.display());
        for dep in info.prereqs {
            if let Dep::Path(path) = dep {
                println!("  {}", path.display());
            }
        }
    }
    Ok(())
}

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `rmk watch`: hand the graph to the perpetual driver

use crate::manifest::Manifest;
use anyhow::Result;
use clap::Args;
use rmk_core::Driver;
use std::time::Duration;

#[derive(Args)]
pub struct WatchArgs {
    /// Watch only this target (default: every rule, in manifest order)
    pub target: Option<String>,

    /// Delay between ticks (e.g. 200ms)
    #[arg(long, value_parser = humantime::parse_duration)]
    interval: Option<Duration>,

    /// Delay before the next tick after a failure (e.g. 5s)
    #[arg(long, value_parser = humantime::parse_duration)]
    interval_on_error: Option<Duration>,
}

pub async fn watch(manifest: &Manifest, args: WatchArgs) -> Result<()> {
    let dep = super::build::select_graph(manifest, args.target.as_deref())?;

    // Flags beat the manifest, the manifest beats the defaults.
    let mut driver = Driver::new();
    if let Some(interval) = args.interval.or(manifest.interval) {
        driver = driver.interval(interval);
    }
    if let Some(interval) = args.interval_on_error.or(manifest.interval_on_error) {
        driver = driver.interval_on_error(interval);
    }

    tracing::info!("watching");
    match driver.run_forever(&dep).await {}
}

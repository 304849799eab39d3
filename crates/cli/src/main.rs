// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! rmk - mtime-keyed incremental rebuilds

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod commands;
mod graph;
mod manifest;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{build, list, watch};
use std::path::PathBuf;

use crate::manifest::Manifest;

#[derive(Parser)]
#[command(name = "rmk", version, about = "Minimal mtime-keyed rebuilds")]
struct Cli {
    /// Manifest path
    #[arg(long, global = true, default_value = "rmk.toml")]
    manifest: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate the rule graph once
    Build(build::BuildArgs),
    /// Re-evaluate the rule graph forever
    Watch(watch::WatchArgs),
    /// Show each target and its resolved prerequisites
    List,
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_logging();
    let cli = Cli::parse();

    let manifest = Manifest::load(&cli.manifest)?;

    match cli.command {
        Commands::Build(args) => build::build(&manifest, args).await,
        Commands::Watch(args) => watch::watch(&manifest, args).await,
        Commands::List => list::list(&manifest),
    }
}

fn setup_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

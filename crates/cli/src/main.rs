//! Sakura CLI - the interactive store terminal.
//!
//! # Usage
//!
//! ```bash
//! # Run against ./data (or $SAKURA_DATA_DIR)
//! sakura
//!
//! # Run against an explicit data directory
//! sakura --data-dir /srv/sakura
//! ```
//!
//! The binary opens the store (seeding the default catalog and admin
//! account on first run) and drops into the main menu:
//! login / register / exit.

#![cfg_attr(not(test), forbid(unsafe_code))]
// The whole point of this crate is talking to the operator on stdout.
#![allow(clippy::print_stdout)]

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use sakura_store::{Store, config::StoreConfig};

mod screens;
mod shell;
mod ui;

#[derive(Parser)]
#[command(name = "sakura")]
#[command(author, version, about = "Sakura store terminal")]
struct Cli {
    /// Data directory holding the store's JSON files
    /// (overrides SAKURA_DATA_DIR).
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

fn main() {
    // Diagnostics go to stderr so they never interleave with the menus.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Session failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = cli
        .data_dir
        .map_or_else(StoreConfig::from_env, StoreConfig::with_data_dir);

    let store = Store::open(&config)?;
    shell::Shell::new(store).run()?;
    Ok(())
}

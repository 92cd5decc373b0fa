mod config;
mod shell;

use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use std::process;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::shell::Shell;
use calorie_core::service::Tracker;

#[derive(Parser)]
#[command(
    name = "calorie",
    version,
    about = "A simple interactive calorie counter",
    long_about = "A simple interactive calorie counter.\n\n\
        Pick actions from the numbered menu to log meals, review a day's totals \
        against your goals, and manage your food list. Data lives in the \
        platform data directory, or in $CALORIE_DATA_DIR when set."
)]
struct Cli {}

fn main() {
    let _cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = Config::load()?;
    tracing::debug!(data_dir = %config.data_dir.display(), "loaded config");

    let tracker = Tracker::open(&config.paths).context("Failed to open data files")?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(tracker, stdin.lock(), stdout.lock());
    shell.run()
}

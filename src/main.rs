//! Bridge Crossing - command-line entry point.

use anyhow::Result;
use bridge_crossing::{Cli, run_console};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    initialize_tracing();

    let cli = Cli::parse();
    let config = cli.resolve_config()?;

    let end = run_console(&config)?;
    info!(?end, "Exiting");
    Ok(())
}

/// Logs go to stderr so they never interleave with the game on stdout.
fn initialize_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

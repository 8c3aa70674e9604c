//! Command-line interface for bridge_crossing.

use crate::config::{ConfigError, GameConfig, OutputFormat};
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, instrument};

/// Bridge Crossing - guess the safe lane across a glass bridge
#[derive(Parser, Debug)]
#[command(name = "bridge_crossing")]
#[command(about = "Cross a bridge one lane guess at a time", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (ignored if missing)
    #[arg(short, long, default_value = "bridge_crossing.toml")]
    pub config: PathBuf,

    /// Seed for bridge generation (overrides config)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output format (overrides config)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

impl Cli {
    /// Loads the config file and applies command-line overrides.
    #[instrument(skip(self), fields(config_path = %self.config.display()))]
    pub fn resolve_config(&self) -> Result<GameConfig, ConfigError> {
        let mut config = GameConfig::load_or_default(&self.config)?;

        if let Some(seed) = self.seed {
            info!(seed, "Overriding seed");
            config = config.with_seed(Some(seed));
        }
        if let Some(format) = self.format {
            info!(?format, "Overriding output format");
            config = config.with_format(format);
        }

        Ok(config)
    }
}

//! Bridge Crossing - a terminal guessing game
//!
//! The player picks the upper or lower lane for each segment of a randomly
//! generated bridge. A wrong pick ends the attempt; the player may retry from
//! the start or quit.
//!
//! # Architecture
//!
//! - **Game logic**: the [`bridge_game`] crate (no I/O)
//! - **Controller**: [`GameController`] drives a game from raw input lines
//! - **Collaborators**: [`InputSource`] and [`OutputSink`], with console
//!   implementations in [`ConsoleInput`], [`TextOutput`] and [`JsonOutput`]
//! - **Config**: [`GameConfig`] from TOML plus [`Cli`] overrides
//!
//! # Example
//!
//! ```no_run
//! use bridge_crossing::{GameConfig, run_console};
//!
//! # fn example() -> anyhow::Result<()> {
//! let end = run_console(&GameConfig::default())?;
//! println!("{end:?}");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod console;
mod controller;
mod io;

pub use cli::Cli;
pub use config::{ConfigError, GameConfig, OutputFormat};
pub use console::{ConsoleInput, JsonOutput, TextOutput};
pub use controller::{GameController, SessionEnd};
pub use io::{GameEvent, InputSource, OutputSink, Prompt};

use anyhow::Result;
use bridge_game::{LaneGenerator, RandomLaneGenerator};
use tracing::{info, instrument};

/// Plays one session on stdin/stdout using `config`.
#[instrument(skip(config), fields(seed = ?config.seed(), format = ?config.format()))]
pub fn run_console(config: &GameConfig) -> Result<SessionEnd> {
    let generator = match config.seed() {
        Some(seed) => RandomLaneGenerator::seeded(*seed),
        None => RandomLaneGenerator::from_entropy(),
    };

    let stdin = std::io::stdin().lock();

    match config.format() {
        OutputFormat::Text => play(
            ConsoleInput::new(stdin, std::io::stdout()),
            TextOutput::new(std::io::stdout()),
            generator,
        ),
        OutputFormat::Json => play(
            ConsoleInput::new(stdin, std::io::sink()),
            JsonOutput::new(std::io::stdout()),
            generator,
        ),
    }
}

fn play<I, O, G>(input: I, output: O, generator: G) -> Result<SessionEnd>
where
    I: InputSource,
    O: OutputSink,
    G: LaneGenerator,
{
    info!("Launching controller");
    GameController::new(input, output, generator).run()
}

//! Seams between the controller and the outside world.
//!
//! The controller never formats text: it asks an [`InputSource`] for raw
//! lines and hands structured [`GameEvent`]s to an [`OutputSink`].

use bridge_game::{CrossingMap, GameOutcome};
use serde::Serialize;
use std::io;

/// Which input the controller is waiting for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Prompt {
    /// Length of the bridge.
    BridgeSize,
    /// Lane for the next step.
    Direction,
    /// Retry or quit after a fall.
    Command,
}

impl Prompt {
    /// Question shown to a human player.
    pub fn text(self) -> &'static str {
        match self {
            Prompt::BridgeSize => "Enter the bridge length.",
            Prompt::Direction => "Choose a lane to move to. (Up: U, Down: D)",
            Prompt::Command => "Retry the game? (Retry: R, Quit: Q)",
        }
    }
}

/// Supplies one raw line per request.
pub trait InputSource {
    /// Blocks until a line is available.
    ///
    /// Returns `Ok(None)` once input is exhausted.
    fn request(&mut self, prompt: Prompt) -> io::Result<Option<String>>;
}

/// Everything the controller asks to have rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    /// The game has started.
    Started,
    /// Crossing map after a step, or the final map.
    Map(CrossingMap),
    /// The game is over; `is_fail` selects the banner layout.
    Finished {
        /// Whether the final attempt fell through.
        is_fail: bool,
    },
    /// Success flag and attempt count.
    Result(GameOutcome),
    /// An input was rejected and will be asked for again.
    InvalidInput {
        /// Human-readable rule violation.
        message: String,
    },
}

/// Consumes game events.
pub trait OutputSink {
    /// Renders one event.
    fn emit(&mut self, event: &GameEvent) -> io::Result<()>;

    /// Flushes and closes the sink. Emitting afterwards is an error.
    fn close(&mut self) -> io::Result<()>;
}

impl<T: OutputSink + ?Sized> OutputSink for Box<T> {
    fn emit(&mut self, event: &GameEvent) -> io::Result<()> {
        (**self).emit(event)
    }

    fn close(&mut self) -> io::Result<()> {
        (**self).close()
    }
}

/// Error returned by a sink that has already been closed.
pub(crate) fn closed_error() -> io::Error {
    io::Error::new(io::ErrorKind::BrokenPipe, "output already closed")
}

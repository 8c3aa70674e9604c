//! Core domain types for bridge crossing.

use derive_new::new;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// One of the two lanes of a bridge segment.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Lane {
    /// Upper lane (token `U`).
    Up,
    /// Lower lane (token `D`).
    Down,
}

impl Lane {
    /// Input token that selects this lane.
    pub fn token(self) -> &'static str {
        match self {
            Lane::Up => "U",
            Lane::Down => "D",
        }
    }

    /// Parses an exact lane token (`U` or `D`).
    #[instrument]
    pub fn from_token(raw: &str) -> Option<Self> {
        Lane::iter().find(|lane| lane.token() == raw)
    }

    /// Maps a generator draw onto a lane: `1` is up, anything else is down.
    #[instrument]
    pub fn from_number(n: u8) -> Self {
        if n == 1 { Lane::Up } else { Lane::Down }
    }
}

impl std::fmt::Display for Lane {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// Whether a single guess matched the bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StepOutcome {
    /// The guessed lane was the safe one.
    Correct,
    /// The guessed lane collapsed.
    Wrong,
}

impl StepOutcome {
    /// Compares a guess against the safe lane.
    pub fn judge(guess: Lane, safe: Lane) -> Self {
        if guess == safe {
            StepOutcome::Correct
        } else {
            StepOutcome::Wrong
        }
    }
}

/// A guess paired with its outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Step {
    /// Lane the player chose.
    pub lane: Lane,
    /// Result of the choice.
    pub outcome: StepOutcome,
}

/// One rendered square of the crossing map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Lane chosen and safe.
    Correct,
    /// Lane chosen and fell through.
    Wrong,
    /// Lane not chosen at this position.
    Blank,
}

impl Cell {
    /// Single-character symbol for this cell.
    pub fn symbol(self) -> char {
        match self {
            Cell::Correct => 'O',
            Cell::Wrong => 'X',
            Cell::Blank => ' ',
        }
    }
}

impl From<StepOutcome> for Cell {
    fn from(outcome: StepOutcome) -> Self {
        match outcome {
            StepOutcome::Correct => Cell::Correct,
            StepOutcome::Wrong => Cell::Wrong,
        }
    }
}

//! Validation of raw user input.
//!
//! Each check is pure: it either returns the parsed value or an
//! [`InvalidInput`] naming the violated rule. Whitespace trimming is the
//! input collector's job, so `" 5"` is rejected here.

use crate::bridge::BridgeSize;
use crate::error::InvalidInput;
use crate::types::Lane;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// What to do after a failed attempt.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Command {
    /// Start a fresh attempt on the same bridge (token `R`).
    Retry,
    /// End the game (token `Q`).
    Quit,
}

impl Command {
    /// Input token that selects this command.
    pub fn token(self) -> &'static str {
        match self {
            Command::Retry => "R",
            Command::Quit => "Q",
        }
    }

    /// Parses an exact command token (`R` or `Q`).
    #[instrument]
    pub fn from_token(raw: &str) -> Option<Self> {
        Command::iter().find(|command| command.token() == raw)
    }
}

/// Accepts a decimal integer in `[BridgeSize::MIN, BridgeSize::MAX]`.
///
/// A leading `-` followed by digits is an integer (out of range); anything
/// else that is not all ASCII digits is not a number.
#[instrument]
pub fn check_bridge_size(raw: &str) -> Result<BridgeSize, InvalidInput> {
    let digits = raw.strip_prefix('-').unwrap_or(raw);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        debug!("Bridge size is not a number");
        return Err(InvalidInput::NotANumber {
            raw: raw.to_string(),
        });
    }

    let out_of_range = || InvalidInput::SizeOutOfRange {
        raw: raw.to_string(),
    };
    if raw.starts_with('-') {
        return Err(out_of_range());
    }
    // Digits that overflow usize are still integers, just far too large.
    let size: usize = raw.parse().map_err(|_| out_of_range())?;
    BridgeSize::new(size).map_err(|_| out_of_range())
}

/// Accepts exactly `U` or `D`.
#[instrument]
pub fn check_direction(raw: &str) -> Result<Lane, InvalidInput> {
    Lane::from_token(raw).ok_or_else(|| InvalidInput::UnknownDirection {
        raw: raw.to_string(),
    })
}

/// Accepts exactly `R` or `Q`.
#[instrument]
pub fn check_command_option(raw: &str) -> Result<Command, InvalidInput> {
    Command::from_token(raw).ok_or_else(|| InvalidInput::UnknownCommand {
        raw: raw.to_string(),
    })
}

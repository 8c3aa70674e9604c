//! Error types for bridge crossing.

use crate::bridge::BridgeSize;

/// Rejected user input.
///
/// This is an expected outcome of validation, not a fault: the caller reports
/// the message and asks for the same input again.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum InvalidInput {
    /// Bridge size was not a decimal integer.
    #[display("[ERROR] Bridge length must be a number, got {raw:?}.")]
    NotANumber {
        /// The rejected input.
        raw: String,
    },

    /// Bridge size was an integer outside the accepted range.
    #[display(
        "[ERROR] Bridge length must be between {} and {}, got {raw}.",
        BridgeSize::MIN,
        BridgeSize::MAX
    )]
    SizeOutOfRange {
        /// The rejected input.
        raw: String,
    },

    /// Direction was not one of the lane tokens.
    #[display("[ERROR] Direction must be U (up) or D (down), got {raw:?}.")]
    UnknownDirection {
        /// The rejected input.
        raw: String,
    },

    /// Command was not one of the restart/quit tokens.
    #[display("[ERROR] Command must be R (retry) or Q (quit), got {raw:?}.")]
    UnknownCommand {
        /// The rejected input.
        raw: String,
    },
}

impl std::error::Error for InvalidInput {}

/// Misuse of the game state machine.
///
/// Callers that gate on [`crate::BridgeGame::is_fail`] and
/// [`crate::BridgeGame::is_last`] never see these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// A move was made after the current attempt already ended.
    #[display("Attempt is already over")]
    AttemptOver,

    /// Retry was requested while the current attempt has not failed.
    #[display("Retry is only allowed after a failed attempt")]
    NotFailed,
}

impl std::error::Error for GameError {}

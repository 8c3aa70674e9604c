//! Pure bridge crossing game logic.
//!
//! The player crosses a bridge of glass panes one segment at a time, guessing
//! whether the upper or lower lane is safe. A wrong guess ends the attempt;
//! the player may then retry from the start or quit.
//!
//! # Architecture
//!
//! - **Generator**: [`LaneGenerator`] draws one lane per segment
//! - **Builder**: [`BridgeBuilder`] turns a validated [`BridgeSize`] into a [`Bridge`]
//! - **Game**: [`BridgeGame`] tracks steps, position and attempts
//! - **Validation**: `check_*` functions turn raw input into typed values
//!
//! This crate performs no I/O.
//!
//! # Example
//!
//! ```
//! use bridge_game::{BridgeBuilder, BridgeGame, Lane, ScriptedLanes, check_bridge_size};
//!
//! let size = check_bridge_size("3").unwrap();
//! let lanes = ScriptedLanes::from_tokens("UDU").unwrap();
//! let mut game = BridgeGame::new(BridgeBuilder::build(size, lanes));
//!
//! game.make_move(Lane::Up).unwrap();
//! game.make_move(Lane::Down).unwrap();
//! game.make_move(Lane::Up).unwrap();
//! assert!(game.is_last());
//! assert_eq!(game.outcome().attempt_count(), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod bridge;
mod error;
mod game;
mod generator;
mod invariants;
mod types;
mod validation;

pub use bridge::{Bridge, BridgeBuilder, BridgeSize};
pub use error::{GameError, InvalidInput};
pub use game::{AttemptState, BridgeGame, CrossingMap, GameOutcome, MoveReport};
pub use generator::{LaneGenerator, RandomLaneGenerator, ScriptedLanes};
pub use invariants::{
    AttemptCountPositive, BridgeGameInvariants, Invariant, InvariantSet, InvariantViolation,
    PositionMatchesSteps, PositionWithinBridge, StateMatchesSteps,
};
pub use types::{Cell, Lane, Step, StepOutcome};
pub use validation::{Command, check_bridge_size, check_command_option, check_direction};

//! First-class invariants for the attempt state machine.
//!
//! Each invariant is a logical property of [`BridgeGame`] that holds after
//! every transition. They are checked in debug builds and tested directly.

use crate::game::{AttemptState, BridgeGame};
use crate::types::StepOutcome;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

impl<S, I1, I2, I3, I4> InvariantSet<S> for (I1, I2, I3, I4)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
    I4: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        check::<S, I3>(state, &mut violations);
        check::<S, I4>(state, &mut violations);

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: the position is exactly the number of steps taken this attempt.
pub struct PositionMatchesSteps;

impl Invariant<BridgeGame> for PositionMatchesSteps {
    fn holds(game: &BridgeGame) -> bool {
        game.position() == game.steps().len()
    }

    fn description() -> &'static str {
        "Position equals the number of steps in the current attempt"
    }
}

/// Invariant: the player never walks past the end of the bridge.
pub struct PositionWithinBridge;

impl Invariant<BridgeGame> for PositionWithinBridge {
    fn holds(game: &BridgeGame) -> bool {
        game.position() <= game.bridge().len()
    }

    fn description() -> &'static str {
        "Position never exceeds bridge length"
    }
}

/// Invariant: there is always at least one attempt.
pub struct AttemptCountPositive;

impl Invariant<BridgeGame> for AttemptCountPositive {
    fn holds(game: &BridgeGame) -> bool {
        game.attempt_count() >= 1
    }

    fn description() -> &'static str {
        "Attempt count is at least one"
    }
}

/// Invariant: the attempt state agrees with the recorded steps.
///
/// - `Failed` iff the last step is wrong (and no earlier one is)
/// - `Succeeded` iff every segment was crossed correctly
/// - `AwaitingMove` otherwise
pub struct StateMatchesSteps;

impl Invariant<BridgeGame> for StateMatchesSteps {
    fn holds(game: &BridgeGame) -> bool {
        let steps = game.steps();
        let wrong = steps
            .iter()
            .filter(|s| s.outcome == StepOutcome::Wrong)
            .count();
        let last_wrong = steps
            .last()
            .is_some_and(|s| s.outcome == StepOutcome::Wrong);

        match game.state() {
            AttemptState::Failed => wrong == 1 && last_wrong,
            AttemptState::Succeeded => wrong == 0 && steps.len() == game.bridge().len(),
            AttemptState::AwaitingMove => wrong == 0 && steps.len() < game.bridge().len(),
        }
    }

    fn description() -> &'static str {
        "Attempt state agrees with step outcomes"
    }
}

/// Every invariant of the bridge game.
pub type BridgeGameInvariants = (
    PositionMatchesSteps,
    PositionWithinBridge,
    AttemptCountPositive,
    StateMatchesSteps,
);

//! Attempt state machine for bridge crossing.
//!
//! A [`BridgeGame`] owns the bridge, the steps of the current attempt and the
//! attempt count. All mutation goes through [`BridgeGame::make_move`] and
//! [`BridgeGame::retry`]; everything else is a read-only query.

use crate::bridge::Bridge;
use crate::error::GameError;
use crate::invariants::{BridgeGameInvariants, InvariantSet};
use crate::types::{Cell, Lane, Step, StepOutcome};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Phase of the current attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttemptState {
    /// The player is on the bridge and must choose the next lane.
    AwaitingMove,
    /// The last step was wrong; the player may retry or quit.
    Failed,
    /// Every segment was crossed correctly.
    Succeeded,
}

/// Two parallel lane renderings for the current attempt.
///
/// Both lanes always have the same length: one cell per step taken.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Getters)]
pub struct CrossingMap {
    /// Upper lane cells.
    upper: Vec<Cell>,
    /// Lower lane cells.
    lower: Vec<Cell>,
}

impl CrossingMap {
    /// Renders a sequence of steps: the chosen lane gets the outcome, the other a blank.
    #[instrument]
    pub fn from_steps(steps: &[Step]) -> Self {
        let mut map = Self::default();
        for step in steps {
            let chosen = Cell::from(step.outcome);
            let (upper, lower) = match step.lane {
                Lane::Up => (chosen, Cell::Blank),
                Lane::Down => (Cell::Blank, chosen),
            };
            map.upper.push(upper);
            map.lower.push(lower);
        }
        map
    }

    /// Number of positions rendered.
    pub fn len(&self) -> usize {
        self.upper.len()
    }

    /// True before the first step of an attempt.
    pub fn is_empty(&self) -> bool {
        self.upper.is_empty()
    }
}

/// Final summary of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameOutcome {
    is_success: bool,
    attempt_count: u32,
}

impl GameOutcome {
    /// Whether the final attempt crossed the whole bridge.
    pub fn is_success(&self) -> bool {
        self.is_success
    }

    /// Total attempts, including the final one.
    pub fn attempt_count(&self) -> u32 {
        self.attempt_count
    }
}

/// What a single move produced.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct MoveReport {
    /// The step just recorded.
    step: Step,
    /// Attempt phase after the step.
    state: AttemptState,
    /// Crossing map including the step.
    map: CrossingMap,
}

/// The bridge crossing game.
#[derive(Debug, Clone)]
pub struct BridgeGame {
    pub(crate) bridge: Bridge,
    pub(crate) steps: Vec<Step>,
    pub(crate) position: usize,
    pub(crate) attempt_count: u32,
    pub(crate) state: AttemptState,
}

impl BridgeGame {
    /// Starts the first attempt at position 0.
    #[instrument(skip(bridge), fields(length = bridge.len()))]
    pub fn new(bridge: Bridge) -> Self {
        info!("Bridge game created");
        Self {
            bridge,
            steps: Vec::new(),
            position: 0,
            attempt_count: 1,
            state: AttemptState::AwaitingMove,
        }
    }

    /// Steps onto `lane` at the current position.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::AttemptOver`] if the current attempt has already
    /// failed or succeeded.
    #[instrument(skip(self), fields(position = self.position, attempt = self.attempt_count))]
    pub fn make_move(&mut self, lane: Lane) -> Result<MoveReport, GameError> {
        if self.state != AttemptState::AwaitingMove {
            warn!(state = ?self.state, "Move rejected");
            return Err(GameError::AttemptOver);
        }
        let Some(safe) = self.bridge.get(self.position) else {
            return Err(GameError::AttemptOver);
        };

        let step = Step::new(lane, StepOutcome::judge(lane, safe));
        self.steps.push(step);
        self.position += 1;

        self.state = match step.outcome {
            StepOutcome::Wrong => AttemptState::Failed,
            StepOutcome::Correct if self.position == self.bridge.len() => AttemptState::Succeeded,
            StepOutcome::Correct => AttemptState::AwaitingMove,
        };
        debug!(?step, state = ?self.state, "Step recorded");

        self.assert_invariants();

        Ok(MoveReport {
            step,
            state: self.state,
            map: self.crossing_map(),
        })
    }

    /// Clears the failed attempt and starts the next one at position 0.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NotFailed`] unless the current attempt failed.
    #[instrument(skip(self), fields(attempt = self.attempt_count))]
    pub fn retry(&mut self) -> Result<(), GameError> {
        if self.state != AttemptState::Failed {
            warn!(state = ?self.state, "Retry rejected");
            return Err(GameError::NotFailed);
        }

        self.steps.clear();
        self.position = 0;
        self.attempt_count += 1;
        self.state = AttemptState::AwaitingMove;
        info!(attempt = self.attempt_count, "Attempt restarted");

        self.assert_invariants();
        Ok(())
    }

    /// True iff the current attempt fell through.
    pub fn is_fail(&self) -> bool {
        self.state == AttemptState::Failed
    }

    /// True iff the current attempt reached the far side.
    pub fn is_last(&self) -> bool {
        self.state == AttemptState::Succeeded
    }

    /// Crossing map of the current attempt only.
    #[instrument(skip(self))]
    pub fn crossing_map(&self) -> CrossingMap {
        CrossingMap::from_steps(&self.steps)
    }

    /// Success flag of the current attempt and total attempts so far.
    #[instrument(skip(self))]
    pub fn outcome(&self) -> GameOutcome {
        GameOutcome {
            is_success: self.is_last(),
            attempt_count: self.attempt_count,
        }
    }

    /// The bridge being crossed.
    pub fn bridge(&self) -> &Bridge {
        &self.bridge
    }

    /// Steps taken in the current attempt.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Index of the next segment to step onto.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Attempts started so far, including the current one.
    pub fn attempt_count(&self) -> u32 {
        self.attempt_count
    }

    /// Phase of the current attempt.
    pub fn state(&self) -> AttemptState {
        self.state
    }

    fn assert_invariants(&self) {
        if !cfg!(debug_assertions) {
            return;
        }
        if let Err(violations) = BridgeGameInvariants::check_all(self) {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            panic!("Invariant violation: {descriptions}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::{BridgeBuilder, BridgeSize};
    use crate::generator::ScriptedLanes;

    fn udu() -> BridgeGame {
        let script = ScriptedLanes::from_tokens("UDU").unwrap();
        BridgeGame::new(BridgeBuilder::build(BridgeSize::new(3).unwrap(), script))
    }

    #[test]
    fn test_initial_state() {
        let game = udu();
        assert_eq!(game.state(), AttemptState::AwaitingMove);
        assert_eq!(game.position(), 0);
        assert_eq!(game.attempt_count(), 1);
        assert!(game.crossing_map().is_empty());
    }

    #[test]
    fn test_correct_move_advances() {
        let mut game = udu();
        let report = game.make_move(Lane::Up).unwrap();
        assert_eq!(report.step().outcome, StepOutcome::Correct);
        assert_eq!(*report.state(), AttemptState::AwaitingMove);
        assert_eq!(report.map().upper(), &vec![Cell::Correct]);
        assert_eq!(report.map().lower(), &vec![Cell::Blank]);
        assert_eq!(game.position(), 1);
    }

    #[test]
    fn test_wrong_move_fails_attempt() {
        let mut game = udu();
        game.make_move(Lane::Up).unwrap();
        let report = game.make_move(Lane::Up).unwrap();
        assert_eq!(*report.state(), AttemptState::Failed);
        assert!(game.is_fail());
        assert!(!game.is_last());
        assert_eq!(game.crossing_map().upper(), &vec![Cell::Correct, Cell::Wrong]);
        assert_eq!(game.crossing_map().lower(), &vec![Cell::Blank, Cell::Blank]);
    }

    #[test]
    fn test_move_after_failure_rejected() {
        let mut game = udu();
        game.make_move(Lane::Down).unwrap();
        assert_eq!(game.make_move(Lane::Up), Err(GameError::AttemptOver));
        assert_eq!(game.position(), 1);
    }

    #[test]
    fn test_move_after_success_rejected() {
        let mut game = udu();
        for lane in [Lane::Up, Lane::Down, Lane::Up] {
            game.make_move(lane).unwrap();
        }
        assert!(game.is_last());
        assert_eq!(game.make_move(Lane::Up), Err(GameError::AttemptOver));
    }

    #[test]
    fn test_retry_requires_failure() {
        let mut game = udu();
        assert_eq!(game.retry(), Err(GameError::NotFailed));
        assert_eq!(game.attempt_count(), 1);
    }

    #[test]
    fn test_outcome_while_failed() {
        let mut game = udu();
        game.make_move(Lane::Down).unwrap();
        let outcome = game.outcome();
        assert!(!outcome.is_success());
        assert_eq!(outcome.attempt_count(), 1);
    }
}

//! Contract-based validation for plays.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::MoveError;
use super::invariants::{InvariantSet, TimelineInvariants};
use super::timeline::Timeline;
use super::Position;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Play Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The displayed snapshot has no winner.
pub struct GameNotOver;

impl GameNotOver {
    /// Rejects plays on a won snapshot.
    #[instrument(skip(timeline))]
    pub fn check(timeline: &Timeline) -> Result<(), MoveError> {
        if timeline.status().winner().is_some() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: The square at the target position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects plays on an occupied square.
    #[instrument(skip(timeline))]
    pub fn check(position: Position, timeline: &Timeline) -> Result<(), MoveError> {
        if timeline.current().is_empty(position) {
            Ok(())
        } else {
            Err(MoveError::SquareOccupied(position))
        }
    }
}

/// Composite precondition: a play is legal if the game is open and the square is free.
pub struct LegalPlay;

impl LegalPlay {
    /// Validates all preconditions for a play.
    #[instrument(skip(timeline))]
    pub fn check(position: Position, timeline: &Timeline) -> Result<(), MoveError> {
        GameNotOver::check(timeline)?;
        SquareIsEmpty::check(position, timeline)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Play Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for [`Timeline::play_at`].
///
/// Preconditions:
/// - Displayed snapshot is not won
/// - Target square is empty
///
/// Postconditions:
/// - History was cut at the old step and grew by exactly one snapshot
/// - The new step is the last one
/// - Every timeline invariant still holds
pub struct PlayContract;

impl Contract<Timeline, Position> for PlayContract {
    fn pre(timeline: &Timeline, position: &Position) -> Result<(), MoveError> {
        LegalPlay::check(*position, timeline)
    }

    fn post(before: &Timeline, after: &Timeline) -> Result<(), MoveError> {
        let expected_len = before.current_step().index() + 2;
        if after.history().len() != expected_len {
            warn!(
                expected_len,
                actual = after.history().len(),
                "History length after play is wrong"
            );
            return Err(MoveError::InvariantViolation(format!(
                "Postcondition failed: history length {} (expected {})",
                after.history().len(),
                expected_len
            )));
        }

        if after.current_step() != after.last_step() {
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: play must land on the latest step".to_string(),
            ));
        }

        if after.history()[..expected_len - 1] != before.history()[..expected_len - 1] {
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: kept history was modified".to_string(),
            ));
        }

        TimelineInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. A [`Move`] is recovered from
//! any pair of adjacent snapshots, which is how the move list and the
//! invariants reason about history without storing it twice.

use super::{Player, Position};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Reason a play was rejected.
///
/// A rejected play leaves the timeline untouched. Front ends treat it as a
/// silent no-op.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] Position),

    /// The displayed snapshot already has a winner.
    #[display("Game is already over")]
    GameOver,

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(#[error(not(source))] String),
}

/// Reason a jump was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum JumpError {
    /// The step came from a longer history that has since been truncated.
    #[display("Step {} is outside a history of {} snapshots", step, len)]
    StaleStep {
        /// The requested step index.
        step: usize,
        /// Current history length.
        len: usize,
    },
}

//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single [`Board`] snapshot. Rules are kept apart from
//! history management so the timeline and the presentation layer can both
//! derive status from any snapshot without touching engine state.

pub mod diff;
pub mod draw;
pub mod win;

pub use diff::{changed_cells, diff};
pub use draw::is_full;
pub use win::{LINES, WinningLine, winning_line};

use super::{Board, Player};
use serde::Serialize;
use tracing::instrument;

/// Status derived from one snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameStatus {
    /// Empty squares remain and nobody has three in a row.
    InProgress,
    /// Board is full with no winning line.
    Draw,
    /// `mark` owns every cell of `line`.
    Won {
        /// The first winning line in enumeration order.
        line: WinningLine,
        /// The winning player's mark.
        mark: Player,
    },
}

impl GameStatus {
    /// Returns true once the snapshot is won or drawn.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the winner, if any.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won { mark, .. } => Some(*mark),
            _ => None,
        }
    }
}

/// Evaluates a snapshot.
///
/// Lines are checked rows top-to-bottom, then columns left-to-right, then
/// the two diagonals; the first complete line is reported.
#[instrument(level = "trace", skip(board), ret)]
pub fn evaluate(board: &Board) -> GameStatus {
    if let Some((line, mark)) = winning_line(board) {
        return GameStatus::Won { line, mark };
    }

    if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}

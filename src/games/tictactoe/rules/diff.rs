//! Snapshot diffing.
//!
//! The active square for any step is recovered by comparing the snapshot
//! with its predecessor, so it stays correct however far a jump goes.

use super::super::{Board, Position};
use strum::IntoEnumIterator;

/// Returns the first cell that differs between two snapshots.
pub fn diff(before: &Board, after: &Board) -> Option<Position> {
    Position::iter().find(|pos| before.get(*pos) != after.get(*pos))
}

/// Returns every cell that differs between two snapshots.
pub fn changed_cells(before: &Board, after: &Board) -> Vec<Position> {
    Position::iter()
        .filter(|pos| before.get(*pos) != after.get(*pos))
        .collect()
}

//! Single-cell delta invariant: each snapshot adds exactly one mark.

use super::super::rules::changed_cells;
use super::super::{Square, Timeline};
use super::Invariant;

/// Invariant: `history[n]` differs from `history[n-1]` in exactly one cell,
/// and that cell went from empty to occupied.
///
/// Also requires the first snapshot to be the empty board.
pub struct SingleCellDeltaInvariant;

impl Invariant<Timeline> for SingleCellDeltaInvariant {
    fn holds(timeline: &Timeline) -> bool {
        let history = timeline.history();

        match history.first() {
            Some(first) if first.occupied() == 0 => {}
            _ => return false,
        }

        history.windows(2).all(|pair| {
            let changed = changed_cells(&pair[0], &pair[1]);
            match changed.as_slice() {
                [pos] => pair[0].get(*pos) == Square::Empty && pair[1].get(*pos) != Square::Empty,
                _ => false,
            }
        })
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one mark to its predecessor"
    }
}

//! Step invariant: the displayed step exists and its active square is right.

use super::super::Timeline;
use super::Invariant;

/// Invariant: `0 <= step < history.len()`, and the active square is the
/// cell played to reach the displayed step (none at game start).
pub struct StepInBoundsInvariant;

impl Invariant<Timeline> for StepInBoundsInvariant {
    fn holds(timeline: &Timeline) -> bool {
        if timeline.step >= timeline.history.len() {
            return false;
        }

        let expected = timeline
            .move_at(timeline.current_step())
            .map(|mov| mov.position);
        timeline.active_square() == expected
    }

    fn description() -> &'static str {
        "Displayed step is within history and its active square matches the move played"
    }
}

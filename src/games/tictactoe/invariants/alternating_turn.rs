//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{Player, Timeline};
use super::Invariant;

/// Invariant: Players alternate turns.
///
/// The mark placed on move n is X for odd n and O for even n, and the
/// player to move matches the parity of the displayed step.
pub struct AlternatingTurnInvariant;

impl Invariant<Timeline> for AlternatingTurnInvariant {
    fn holds(timeline: &Timeline) -> bool {
        let marks_alternate = timeline
            .moves()
            .iter()
            .enumerate()
            .all(|(i, mov)| mov.player == Player::to_move_at(i));

        marks_alternate && timeline.to_move() == Player::to_move_at(timeline.current_step().index())
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Position, Square};

    #[test]
    fn test_empty_game_holds() {
        assert!(AlternatingTurnInvariant::holds(&Timeline::new()));
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let timeline = Timeline::replay(&[
            Position::TopLeft,
            Position::Center,
            Position::TopRight,
            Position::BottomLeft,
            Position::BottomRight,
        ])
        .unwrap();
        assert!(AlternatingTurnInvariant::holds(&timeline));
        assert_eq!(timeline.to_move(), Player::O);
    }

    #[test]
    fn test_holds_after_jump() {
        let mut timeline =
            Timeline::replay(&[Position::TopLeft, Position::Center, Position::TopRight]).unwrap();
        timeline.jump_to(timeline.step(2).unwrap()).unwrap();
        assert!(AlternatingTurnInvariant::holds(&timeline));
        assert_eq!(timeline.to_move(), Player::X);
    }

    #[test]
    fn test_same_player_twice_violates() {
        let mut timeline = Timeline::replay(&[Position::TopLeft]).unwrap();
        let mut next = timeline.history[1].clone();
        next.set(Position::Center, Square::Occupied(Player::X));
        timeline.history.push(next);
        timeline.step = 2;
        timeline.to_move = Player::X;
        assert!(!AlternatingTurnInvariant::holds(&timeline));
    }

    #[test]
    fn test_stale_turn_indicator_violates() {
        let mut timeline = Timeline::replay(&[Position::TopLeft]).unwrap();
        timeline.to_move = Player::X;
        assert!(!AlternatingTurnInvariant::holds(&timeline));
    }
}

//! Game timeline: the linear history of snapshots and the step being shown.
//!
//! A [`Timeline`] owns every board configuration from the empty start up to
//! the latest move. Playing from an earlier step discards the moves after it;
//! jumping only moves the step pointer and never touches history.

use super::action::{JumpError, Move, MoveError};
use super::contracts::{Contract, PlayContract};
use super::rules::{self, GameStatus};
use super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Index of a snapshot in a [`Timeline`].
///
/// Steps are handed out by the timeline itself, so a caller never builds one
/// from an arbitrary integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Step(usize);

impl Step {
    /// The empty starting board.
    pub const START: Step = Step(0);

    /// Raw index into history.
    pub fn index(self) -> usize {
        self.0
    }

    /// Returns true for the starting board.
    pub fn is_start(self) -> bool {
        self.0 == 0
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Display order of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Game start first.
    #[default]
    Ascending,
    /// Latest move first.
    Descending,
}

impl SortOrder {
    /// Returns the display label for this option.
    pub fn label(self) -> &'static str {
        match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        }
    }

    /// Toggles between `Ascending` and `Descending`.
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Tic-tac-toe game state with time travel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timeline {
    pub(crate) history: Vec<Board>,
    pub(crate) step: usize,
    pub(crate) to_move: Player,
    pub(crate) active_square: Option<Position>,
    pub(crate) sort_order: SortOrder,
}

impl Timeline {
    /// Creates a fresh game: one empty snapshot, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self::with_sort_order(SortOrder::default())
    }

    /// Creates a fresh game with the given move-list order.
    #[instrument]
    pub fn with_sort_order(sort_order: SortOrder) -> Self {
        Self {
            history: vec![Board::new()],
            step: 0,
            to_move: Player::X,
            active_square: None,
            sort_order,
        }
    }

    /// Builds a timeline by playing `positions` in order.
    ///
    /// # Errors
    ///
    /// Returns the first rejected play's error.
    #[instrument]
    pub fn replay(positions: &[Position]) -> Result<Self, MoveError> {
        let mut timeline = Self::new();
        for pos in positions {
            timeline.play_at(*pos)?;
        }
        Ok(timeline)
    }

    /// Plays the current player's mark at `position`.
    ///
    /// Any moves after the displayed step are discarded first. On error
    /// nothing changes.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the displayed snapshot is already won
    /// - [`MoveError::SquareOccupied`] if the square is taken
    /// - [`MoveError::InvariantViolation`] if a debug-build postcondition fails
    #[instrument(skip(self), fields(step = self.step, player = %self.to_move))]
    pub fn play_at(&mut self, position: Position) -> Result<(), MoveError> {
        if let Err(e) = PlayContract::pre(self, &position) {
            debug!(error = %e, "Play ignored");
            return Err(e);
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        let mut next = self.current().clone();
        next.set(position, Square::Occupied(self.to_move));

        let discarded = self.history.len() - (self.step + 1);
        self.history.truncate(self.step + 1);
        self.history.push(next);
        self.step = self.history.len() - 1;
        self.to_move = self.to_move.opponent();
        self.active_square = Some(position);

        info!(new_step = self.step, discarded, "Move played");

        #[cfg(debug_assertions)]
        if let Err(e) = PlayContract::post(&before, self) {
            tracing::warn!(error = %e, "Play rolled back");
            *self = before;
            return Err(e);
        }

        Ok(())
    }

    /// Displays the snapshot at `step`.
    ///
    /// The turn and the active square are recomputed from history; history
    /// itself is left alone.
    ///
    /// # Errors
    ///
    /// Returns [`JumpError::StaleStep`] if `step` was taken from a longer
    /// history that has since been truncated.
    #[instrument(skip(self), fields(from = self.step))]
    pub fn jump_to(&mut self, step: Step) -> Result<(), JumpError> {
        if step.0 >= self.history.len() {
            return Err(JumpError::StaleStep {
                step: step.0,
                len: self.history.len(),
            });
        }

        self.step = step.0;
        self.to_move = Player::to_move_at(step.0);
        self.active_square = self.move_at(step).map(|m| m.position);

        debug!(to = self.step, active = ?self.active_square, "Jumped");
        Ok(())
    }

    /// Flips the move-list order.
    #[instrument(skip(self))]
    pub fn toggle_sort(&mut self) {
        self.sort_order = self.sort_order.toggle();
        debug!(sort_order = self.sort_order.label(), "Sort order toggled");
    }

    /// Starts over with an empty board, keeping the sort order.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!(discarded = self.history.len() - 1, "Restarting game");
        *self = Self::with_sort_order(self.sort_order);
    }

    /// Every snapshot from game start to the latest move.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// The displayed snapshot.
    pub fn current(&self) -> &Board {
        &self.history[self.step]
    }

    /// The displayed step.
    pub fn current_step(&self) -> Step {
        Step(self.step)
    }

    /// The latest step in history.
    pub fn last_step(&self) -> Step {
        Step(self.history.len() - 1)
    }

    /// Returns the step with index `n`, if it exists.
    pub fn step(&self, n: usize) -> Option<Step> {
        (n < self.history.len()).then_some(Step(n))
    }

    /// All steps in history order.
    pub fn steps(&self) -> impl DoubleEndedIterator<Item = Step> + ExactSizeIterator + use<> {
        (0..self.history.len()).map(Step)
    }

    /// The player due to move at the displayed step.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// The square played to reach the displayed step.
    pub fn active_square(&self) -> Option<Position> {
        self.active_square
    }

    /// Current move-list order.
    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// Status of the displayed snapshot.
    pub fn status(&self) -> GameStatus {
        rules::evaluate(self.current())
    }

    /// The move that produced the snapshot at `step`.
    ///
    /// Returns `None` for the starting board.
    pub fn move_at(&self, step: Step) -> Option<Move> {
        let index = step.0.checked_sub(1)?;
        let before = self.history.get(index)?;
        let after = self.history.get(step.0)?;
        let position = rules::diff(before, after)?;
        let player = after.get(position).player()?;
        Some(Move::new(player, position))
    }

    /// Every move in history, in play order.
    pub fn moves(&self) -> Vec<Move> {
        self.steps().filter_map(|step| self.move_at(step)).collect()
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Position::*;

    #[test]
    fn test_new_timeline_has_single_empty_snapshot() {
        let timeline = Timeline::new();
        assert_eq!(timeline.history().len(), 1);
        assert_eq!(timeline.current(), &Board::new());
        assert_eq!(timeline.current_step(), Step::START);
        assert_eq!(timeline.to_move(), Player::X);
        assert_eq!(timeline.active_square(), None);
    }

    #[test]
    fn test_play_advances_step_and_turn() {
        let mut timeline = Timeline::new();
        timeline.play_at(Center).unwrap();

        assert_eq!(timeline.history().len(), 2);
        assert_eq!(timeline.current_step().index(), 1);
        assert_eq!(timeline.to_move(), Player::O);
        assert_eq!(timeline.active_square(), Some(Center));
        assert_eq!(timeline.current().get(Center), Square::Occupied(Player::X));
    }

    #[test]
    fn test_play_does_not_mutate_earlier_snapshots() {
        let mut timeline = Timeline::new();
        timeline.play_at(TopLeft).unwrap();
        timeline.play_at(Center).unwrap();

        assert_eq!(timeline.history()[0], Board::new());
        assert!(timeline.history()[1].is_empty(Center));
    }

    #[test]
    fn test_occupied_square_is_rejected_without_change() {
        let mut timeline = Timeline::replay(&[Center]).unwrap();
        let before = timeline.clone();

        assert_eq!(
            timeline.play_at(Center),
            Err(MoveError::SquareOccupied(Center))
        );
        assert_eq!(timeline, before);
    }

    #[test]
    fn test_play_after_win_is_rejected() {
        let mut timeline =
            Timeline::replay(&[TopLeft, MiddleLeft, TopCenter, Center, TopRight]).unwrap();
        let before = timeline.clone();

        assert_eq!(timeline.play_at(BottomRight), Err(MoveError::GameOver));
        assert_eq!(timeline, before);
    }

    #[test]
    fn test_jump_recomputes_turn_and_active_square() {
        let mut timeline = Timeline::replay(&[Center, TopLeft, BottomRight]).unwrap();

        timeline.jump_to(timeline.step(1).unwrap()).unwrap();
        assert_eq!(timeline.to_move(), Player::O);
        assert_eq!(timeline.active_square(), Some(Center));

        timeline.jump_to(timeline.step(2).unwrap()).unwrap();
        assert_eq!(timeline.to_move(), Player::X);
        assert_eq!(timeline.active_square(), Some(TopLeft));

        timeline.jump_to(Step::START).unwrap();
        assert_eq!(timeline.to_move(), Player::X);
        assert_eq!(timeline.active_square(), None);
        assert_eq!(timeline.history().len(), 4);
    }

    #[test]
    fn test_stale_step_is_rejected() {
        let mut timeline = Timeline::replay(&[Center, TopLeft, BottomRight]).unwrap();
        let stale = timeline.last_step();

        timeline.jump_to(Step::START).unwrap();
        timeline.play_at(TopRight).unwrap();

        assert_eq!(
            timeline.jump_to(stale),
            Err(JumpError::StaleStep { step: 3, len: 2 })
        );
        assert_eq!(timeline.current_step().index(), 1);
    }

    #[test]
    fn test_restart_keeps_sort_order() {
        let mut timeline = Timeline::replay(&[Center, TopLeft]).unwrap();
        timeline.toggle_sort();
        timeline.restart();

        assert_eq!(timeline.history().len(), 1);
        assert_eq!(timeline.to_move(), Player::X);
        assert_eq!(timeline.sort_order(), SortOrder::Descending);
    }

    #[test]
    fn test_moves_recovered_from_snapshots() {
        let timeline = Timeline::replay(&[Center, TopLeft, BottomRight]).unwrap();
        assert_eq!(
            timeline.moves(),
            vec![
                Move::new(Player::X, Center),
                Move::new(Player::O, TopLeft),
                Move::new(Player::X, BottomRight),
            ]
        );
        assert_eq!(timeline.move_at(Step::START), None);
    }

    #[cfg(debug_assertions)]
    #[test]
    fn test_failed_postcondition_rolls_back() {
        let mut timeline = Timeline::new();
        // O to move at step 0 breaks turn alternation once the mark lands.
        timeline.to_move = Player::O;
        let before = timeline.clone();

        assert!(matches!(
            timeline.play_at(Center),
            Err(MoveError::InvariantViolation(_))
        ));
        assert_eq!(timeline, before);
    }

    #[test]
    fn test_sort_order_deserializes_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            order: SortOrder,
        }
        let parsed: Wrapper = toml::from_str("order = \"descending\"").unwrap();
        assert_eq!(parsed.order, SortOrder::Descending);
    }
}

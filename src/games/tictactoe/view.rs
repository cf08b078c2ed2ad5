//! Render-ready view of a [`Timeline`].
//!
//! Front ends draw from these values only: the status line, the cells to
//! highlight and the labelled, ordered move list. Nothing here mutates the
//! timeline.

use super::action::Move;
use super::rules::GameStatus;
use super::timeline::{SortOrder, Step, Timeline};
use super::{Player, Position};
use derive_getters::Getters;
use serde::Serialize;
use tracing::instrument;

/// The status line shown under the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StatusLine {
    /// The displayed snapshot is won.
    Won(Player),
    /// The displayed snapshot is a full board with no winner.
    Draw,
    /// The game continues with this player.
    NextMove(Player),
}

impl StatusLine {
    /// Derives the status line for the displayed step.
    pub fn of(timeline: &Timeline) -> Self {
        match timeline.status() {
            GameStatus::Won { mark, .. } => StatusLine::Won(mark),
            GameStatus::Draw => StatusLine::Draw,
            GameStatus::InProgress => StatusLine::NextMove(timeline.to_move()),
        }
    }
}

impl std::fmt::Display for StatusLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusLine::Won(player) => write!(f, "Won: {}", player),
            StatusLine::Draw => write!(f, "Draw"),
            StatusLine::NextMove(player) => write!(f, "Next move: {}", player),
        }
    }
}

/// One row of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct MoveEntry {
    /// Step this entry jumps to.
    step: Step,
    /// Button text.
    label: String,
    /// True for the displayed step.
    current: bool,
}

/// Label for the move-list entry at `step`.
///
/// `Game start` for step 0, else `Go to move #n (row,col)` with 1-indexed
/// coordinates of the cell played on that move.
pub fn move_label(step: Step, mov: Option<Move>) -> String {
    match mov {
        Some(mov) if !step.is_start() => {
            let (row, col) = mov.position.coordinates();
            format!("Go to move #{} ({},{})", step.index(), row, col)
        }
        _ => "Game start".to_string(),
    }
}

/// The move list, one entry per snapshot, in the timeline's sort order.
#[instrument(skip(timeline), fields(sort_order = timeline.sort_order().label()))]
pub fn move_list(timeline: &Timeline) -> Vec<MoveEntry> {
    let current = timeline.current_step();
    let entry = |step: Step| MoveEntry {
        step,
        label: move_label(step, timeline.move_at(step)),
        current: step == current,
    };

    match timeline.sort_order() {
        SortOrder::Ascending => timeline.steps().map(entry).collect(),
        SortOrder::Descending => timeline.steps().rev().map(entry).collect(),
    }
}

/// Cells to highlight, indexed by board position.
///
/// A won snapshot highlights its winning line; otherwise only the square
/// played to reach the displayed step is lit.
pub fn highlights(timeline: &Timeline) -> [bool; 9] {
    let mut lit = [false; 9];
    match timeline.status() {
        GameStatus::Won { line, .. } => {
            for pos in line.positions() {
                lit[pos.to_index()] = true;
            }
        }
        _ => {
            if let Some(pos) = timeline.active_square() {
                lit[pos.to_index()] = true;
            }
        }
    }
    lit
}

/// Everything a front end needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct GameView {
    /// Marks in row-major order, `None` for empty.
    cells: [Option<Player>; 9],
    /// Cells to highlight.
    highlights: [bool; 9],
    /// Status line text.
    status: String,
    /// Displayed step.
    step: Step,
    /// Move-list order.
    sort_order: SortOrder,
    /// Ordered move list.
    moves: Vec<MoveEntry>,
}

impl GameView {
    /// Builds the view of the displayed step.
    #[instrument(skip(timeline))]
    pub fn of(timeline: &Timeline) -> Self {
        let board = timeline.current();
        Self {
            cells: Position::ALL.map(|pos| board.get(pos).player()),
            highlights: highlights(timeline),
            status: StatusLine::of(timeline).to_string(),
            step: timeline.current_step(),
            sort_order: timeline.sort_order(),
            moves: move_list(timeline),
        }
    }
}

/// Renders a view as plain text.
///
/// Highlighted cells are bracketed; the displayed step is marked with `>`.
pub fn render_text(view: &GameView) -> String {
    let mut out = String::new();
    for row in 0..3 {
        let cells: Vec<String> = (0..3)
            .map(|col| {
                let index = row * 3 + col;
                let mark = view.cells[index].map_or(" ".to_string(), |p| p.to_string());
                if view.highlights[index] {
                    format!("[{}]", mark)
                } else {
                    format!(" {} ", mark)
                }
            })
            .collect();
        out.push_str(&cells.join("|"));
        out.push('\n');
        if row < 2 {
            out.push_str("---+---+---\n");
        }
    }

    out.push('\n');
    out.push_str(&view.status);
    out.push_str("\n\n");
    out.push_str(&format!("Moves ({}):\n", view.sort_order.label()));
    for entry in &view.moves {
        let marker = if entry.current { ">" } else { " " };
        out.push_str(&format!("{} {}\n", marker, entry.label));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use Position::*;

    #[test]
    fn test_status_line_text() {
        assert_eq!(StatusLine::Won(Player::O).to_string(), "Won: O");
        assert_eq!(StatusLine::Draw.to_string(), "Draw");
        assert_eq!(StatusLine::NextMove(Player::X).to_string(), "Next move: X");
    }

    #[test]
    fn test_move_labels_use_one_indexed_coordinates() {
        let timeline = Timeline::replay(&[Center, BottomLeft, TopRight]).unwrap();
        let labels: Vec<String> = move_list(&timeline)
            .into_iter()
            .map(|e| e.label)
            .collect();
        assert_eq!(
            labels,
            vec![
                "Game start",
                "Go to move #1 (2,2)",
                "Go to move #2 (3,1)",
                "Go to move #3 (1,3)",
            ]
        );
    }

    #[test]
    fn test_descending_order_reverses_entries() {
        let mut timeline = Timeline::replay(&[Center, BottomLeft]).unwrap();
        timeline.toggle_sort();
        let steps: Vec<usize> = move_list(&timeline)
            .iter()
            .map(|e| e.step().index())
            .collect();
        assert_eq!(steps, vec![2, 1, 0]);
    }

    #[test]
    fn test_current_entry_follows_jumps() {
        let mut timeline = Timeline::replay(&[Center, BottomLeft]).unwrap();
        timeline.jump_to(timeline.step(1).unwrap()).unwrap();
        let current: Vec<bool> = move_list(&timeline).iter().map(|e| e.current).collect();
        assert_eq!(current, vec![false, true, false]);
    }

    #[test]
    fn test_highlight_active_square_in_progress() {
        let timeline = Timeline::replay(&[Center, BottomLeft]).unwrap();
        let lit = highlights(&timeline);
        assert!(lit[BottomLeft.to_index()]);
        assert_eq!(lit.iter().filter(|l| **l).count(), 1);
    }

    #[test]
    fn test_highlight_nothing_at_start() {
        assert_eq!(highlights(&Timeline::new()), [false; 9]);
    }

    #[test]
    fn test_highlight_winning_line_only() {
        let timeline =
            Timeline::replay(&[TopLeft, MiddleLeft, TopCenter, Center, TopRight]).unwrap();
        let lit = highlights(&timeline);
        assert_eq!(
            lit,
            [true, true, true, false, false, false, false, false, false]
        );
    }

    #[test]
    fn test_render_text() {
        let timeline = Timeline::replay(&[Center, TopLeft]).unwrap();
        let text = render_text(&GameView::of(&timeline));
        let expected = [
            "[O]|   |   ",
            "---+---+---",
            "   | X |   ",
            "---+---+---",
            "   |   |   ",
            "",
            "Next move: X",
            "",
            "Moves (ascending):",
            "  Game start",
            "  Go to move #1 (2,2)",
            "> Go to move #2 (1,1)",
        ]
        .join("\n")
            + "\n";
        assert_eq!(text, expected);
    }
}

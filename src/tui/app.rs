//! Application state and key handling.

use super::input::{digit_to_position, move_cursor};
use crate::games::tictactoe::{Position, SortOrder, Timeline, view};
use crossterm::event::{KeyCode, KeyEvent};
use tracing::{debug, info, instrument};

/// Which panel receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Arrow keys move the move-list selection.
    Moves,
}

impl Focus {
    /// Toggles between `Board` and `Moves`.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::Moves,
            Self::Moves => Self::Board,
        }
    }
}

/// What the event loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Keep running.
    Continue,
    /// Leave the UI.
    Quit,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    timeline: Timeline,
    cursor: Position,
    focus: Focus,
    selected: usize,
}

impl App {
    /// Creates a new application with a fresh game.
    #[instrument]
    pub fn new(sort_order: SortOrder) -> Self {
        let mut app = Self {
            timeline: Timeline::with_sort_order(sort_order),
            cursor: Position::Center,
            focus: Focus::default(),
            selected: 0,
        };
        app.sync_selection();
        app
    }

    /// The game being shown.
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused panel.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Selected row of the move list, in display order.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Handles one key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                info!("User quit");
                return AppAction::Quit;
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = self.focus.toggle();
                self.sync_selection();
            }
            KeyCode::Char('s') | KeyCode::Char('S') => {
                self.timeline.toggle_sort();
                self.sync_selection();
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.timeline.restart();
                self.cursor = Position::Center;
                self.sync_selection();
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(pos) = digit_to_position(c) {
                    self.cursor = pos;
                    self.play(pos);
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => match self.focus {
                Focus::Board => self.play(self.cursor),
                Focus::Moves => self.jump_to_selected(),
            },
            code @ (KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right) => {
                match self.focus {
                    Focus::Board => self.cursor = move_cursor(self.cursor, code),
                    Focus::Moves => self.move_selection(code),
                }
            }
            _ => {}
        }
        AppAction::Continue
    }

    fn play(&mut self, pos: Position) {
        // Rejected plays are silent; the board simply does not change.
        if let Err(e) = self.timeline.play_at(pos) {
            debug!(error = %e, "Play ignored");
        }
        self.sync_selection();
    }

    fn jump_to_selected(&mut self) {
        let entries = view::move_list(&self.timeline);
        if let Some(entry) = entries.get(self.selected)
            && let Err(e) = self.timeline.jump_to(*entry.step())
        {
            debug!(error = %e, "Jump ignored");
        }
    }

    fn move_selection(&mut self, code: KeyCode) {
        let last = self.timeline.history().len() - 1;
        self.selected = match code {
            KeyCode::Up | KeyCode::Left => self.selected.saturating_sub(1),
            _ => (self.selected + 1).min(last),
        };
    }

    /// Points the move-list selection at the displayed step.
    fn sync_selection(&mut self) {
        self.selected = view::move_list(&self.timeline)
            .iter()
            .position(|entry| *entry.current())
            .unwrap_or(0);
    }
}

//! Tic-tac-toe with move history and time travel.
//!
//! Every move appends an immutable snapshot of the board to a [`Timeline`].
//! Any earlier snapshot can be displayed again; playing from it discards the
//! moves that came after.
//!
//! # Architecture
//!
//! - **Games**: board types, rules, the timeline and its contracts
//! - **View**: render-ready status line, highlights and move list
//! - **Replay**: headless scripted play
//! - **TUI**: interactive terminal front end
//!
//! # Example
//!
//! ```
//! use tictactoe_timeline::{Position, Timeline};
//!
//! let mut timeline = Timeline::new();
//! timeline.play_at(Position::Center).unwrap();
//! timeline.play_at(Position::TopLeft).unwrap();
//!
//! let start = timeline.step(0).unwrap();
//! timeline.jump_to(start).unwrap();
//! assert_eq!(timeline.history().len(), 3);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod games;
mod replay;
mod tui;

pub mod cli;

// Crate-level exports - Game types
pub use games::tictactoe::{
    Board, BoardParseError, Contract, GameNotOver, GameStatus, GameView, JumpError, LegalPlay,
    Move, MoveEntry, MoveError, PlayContract, Player, Position, SortOrder, Square,
    SquareIsEmpty, StatusLine, Step, Timeline, WinningLine, evaluate,
};

// Crate-level exports - Rules, invariants and view helpers
pub use games::tictactoe::{invariants, rules, view};

// Crate-level exports - Settings
pub use config::{ConfigError, DEFAULT_CONFIG_PATH, Settings};

// Crate-level exports - Scripted play
pub use replay::{OutputFormat, ReplayError, ReplayOp, apply, run_script};

// Crate-level exports - Terminal UI
pub use tui::{App, AppAction, Focus, run_tui};

//! Tic-tac-toe with move history and time travel.

mod action;
mod contracts;
pub mod invariants;
mod position;
pub mod rules;
mod timeline;
mod types;
pub mod view;

pub use action::{JumpError, Move, MoveError};
pub use contracts::{Contract, GameNotOver, LegalPlay, PlayContract, SquareIsEmpty};
pub use position::Position;
pub use rules::{GameStatus, WinningLine, evaluate};
pub use timeline::{SortOrder, Step, Timeline};
pub use types::{Board, BoardParseError, Player, Square};
pub use view::{GameView, MoveEntry, StatusLine};

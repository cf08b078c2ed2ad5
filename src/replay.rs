//! Scripted, headless play.
//!
//! A script is a list of operations applied to a [`Timeline`] in order, the
//! same way the terminal UI forwards key presses.

use crate::games::tictactoe::{GameView, Position, SortOrder, Timeline, view};
use clap::ValueEnum;
use derive_more::{Display, Error};
use std::str::FromStr;
use tracing::{debug, instrument};

/// Output format for a replayed game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Plain-text board, status and move list
    #[default]
    Text,
    /// JSON view
    Json,
}

/// One scripted operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayOp {
    /// Play at a board index (`0`-`8`).
    Play(Position),
    /// Jump to a step (`@n`).
    Jump(usize),
    /// Toggle the move-list order (`sort`).
    ToggleSort,
}

/// Error parsing or running a script.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ReplayError {
    /// Token is not a square index, `@step` or `sort`.
    #[display("invalid operation {:?} (expected 0-8, @step or sort)", _0)]
    InvalidOp(#[error(not(source))] String),
    /// Jump target is past the end of history.
    #[display("cannot jump to step {}: history has {} snapshots", step, len)]
    JumpOutOfRange {
        /// Requested step.
        step: usize,
        /// History length at the time of the jump.
        len: usize,
    },
    /// The view could not be encoded as JSON.
    #[display("failed to encode view: {}", _0)]
    Encode(#[error(not(source))] String),
}

impl FromStr for ReplayOp {
    type Err = ReplayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        let invalid = || ReplayError::InvalidOp(token.to_string());

        if token.eq_ignore_ascii_case("sort") {
            return Ok(ReplayOp::ToggleSort);
        }

        if let Some(step) = token.strip_prefix('@') {
            return step.parse().map(ReplayOp::Jump).map_err(|_| invalid());
        }

        token
            .parse::<usize>()
            .ok()
            .and_then(Position::from_index)
            .map(ReplayOp::Play)
            .ok_or_else(invalid)
    }
}

/// Applies `ops` to `timeline` in order.
///
/// Rejected plays are skipped as they would be in the UI.
///
/// # Errors
///
/// Returns [`ReplayError::JumpOutOfRange`] for a jump past the end of
/// history; operations before it stay applied.
#[instrument(skip(timeline))]
pub fn apply(timeline: &mut Timeline, ops: &[ReplayOp]) -> Result<(), ReplayError> {
    for op in ops {
        match *op {
            ReplayOp::Play(pos) => {
                if let Err(e) = timeline.play_at(pos) {
                    debug!(error = %e, position = %pos, "Scripted play ignored");
                }
            }
            ReplayOp::Jump(n) => {
                let step = timeline.step(n).ok_or(ReplayError::JumpOutOfRange {
                    step: n,
                    len: timeline.history().len(),
                })?;
                // Step was just handed out by this timeline, so it cannot be stale.
                if let Err(e) = timeline.jump_to(step) {
                    debug!(error = %e, "Scripted jump ignored");
                }
            }
            ReplayOp::ToggleSort => timeline.toggle_sort(),
        }
    }
    Ok(())
}

/// Plays a script on a fresh game and renders the final view.
///
/// # Errors
///
/// Fails on a jump past the end of history, or if JSON encoding fails.
#[instrument(skip(ops), fields(ops = ops.len()))]
pub fn run_script(
    sort_order: SortOrder,
    format: OutputFormat,
    ops: &[ReplayOp],
) -> Result<String, ReplayError> {
    let mut timeline = Timeline::with_sort_order(sort_order);
    apply(&mut timeline, ops)?;

    let game_view = GameView::of(&timeline);
    match format {
        OutputFormat::Text => Ok(view::render_text(&game_view)),
        OutputFormat::Json => serde_json::to_string_pretty(&game_view)
            .map(|json| json + "\n")
            .map_err(|e| ReplayError::Encode(e.to_string())),
    }
}

//! Tests for scripted replay.

use tictactoe_timeline::{Player, ReplayError, ReplayOp, SortOrder, Timeline, apply, view};

fn ops(tokens: &[&str]) -> Vec<ReplayOp> {
    tokens.iter().map(|t| t.parse().unwrap()).collect()
}

#[test]
fn test_parse_tokens() {
    assert_eq!("sort".parse::<ReplayOp>(), Ok(ReplayOp::ToggleSort));
    assert_eq!("@3".parse::<ReplayOp>(), Ok(ReplayOp::Jump(3)));
    assert!(matches!("4".parse::<ReplayOp>(), Ok(ReplayOp::Play(_))));
    assert!(matches!(
        "9".parse::<ReplayOp>(),
        Err(ReplayError::InvalidOp(_))
    ));
    assert!(matches!(
        "@x".parse::<ReplayOp>(),
        Err(ReplayError::InvalidOp(_))
    ));
}

#[test]
fn test_replay_with_jump_and_branch() {
    let mut timeline = Timeline::new();
    apply(&mut timeline, &ops(&["4", "0", "8", "@1", "2"])).unwrap();

    assert_eq!(timeline.history().len(), 3);
    assert_eq!(timeline.to_move(), Player::X);
}

#[test]
fn test_replay_skips_rejected_plays() {
    let mut timeline = Timeline::new();
    apply(&mut timeline, &ops(&["4", "4", "0"])).unwrap();

    assert_eq!(timeline.history().len(), 3);
    assert_eq!(timeline.moves()[1].player(), Player::O);
}

#[test]
fn test_replay_jump_out_of_range() {
    let mut timeline = Timeline::new();
    let result = apply(&mut timeline, &ops(&["4", "@5"]));

    assert_eq!(
        result,
        Err(ReplayError::JumpOutOfRange { step: 5, len: 2 })
    );
    assert_eq!(timeline.history().len(), 2);
}

#[test]
fn test_replay_sort_toggle_renders_descending() {
    let mut timeline = Timeline::new();
    apply(&mut timeline, &ops(&["4", "sort"])).unwrap();

    assert_eq!(timeline.sort_order(), SortOrder::Descending);
    let text = view::render_text(&tictactoe_timeline::GameView::of(&timeline));
    assert!(text.contains("Moves (descending):\n> Go to move #1 (2,2)\n  Game start\n"));
}

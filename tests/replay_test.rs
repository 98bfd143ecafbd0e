//! Tests for scripted replay output.

use funzone::{Mark, Outcome, Snapshot, render_json, render_text, replay};

#[test]
fn test_top_row_replay() {
    let game = replay(&[0, 3, 1, 4, 2]);
    assert_eq!(game.outcome(), Outcome::Won(Mark::X));
    assert_eq!(render_text(&game), "Winner: X\n\nX|X|X\n-+-+-\nO|O|6\n-+-+-\n7|8|9");
}

#[test]
fn test_ignored_moves_do_not_count() {
    // Repeat, off-board index, then a move after X wins column 0-3-6.
    let game = replay(&[0, 0, 42, 1, 3, 4, 6, 7]);
    assert_eq!(game.outcome(), Outcome::Won(Mark::X));
    assert_eq!(game.board().count(Mark::O), 2);
    assert!(game.cell(7).is_some_and(|c| c.is_empty()));
}

#[test]
fn test_snapshot_fields() {
    let game = replay(&[4, 0]);
    let snapshot = Snapshot::from(&game);
    assert_eq!(snapshot.to_move, Mark::X);
    assert_eq!(snapshot.outcome, Outcome::InProgress);
    assert_eq!(snapshot.status, "Next player: X");
    assert_eq!(snapshot.board[4], Some(Mark::X));
    assert_eq!(snapshot.board[0], Some(Mark::O));
    assert_eq!(snapshot.board[8], None);
}

#[test]
fn test_json_output() {
    let game = replay(&[0, 4, 8, 1, 7, 6, 2, 5, 3]);
    let json: serde_json::Value = serde_json::from_str(&render_json(&game).unwrap()).unwrap();
    assert_eq!(json["outcome"], "Draw");
    assert_eq!(json["status"], "It's a Draw!");
    assert_eq!(json["board"].as_array().map(Vec::len), Some(9));
    assert_eq!(json["board"][0], "X");
}

#[test]
fn test_won_outcome_json_shape() {
    let game = replay(&[0, 3, 1, 4, 8, 5]);
    let json: serde_json::Value = serde_json::from_str(&render_json(&game).unwrap()).unwrap();
    assert_eq!(json["outcome"]["Won"], "O");
}

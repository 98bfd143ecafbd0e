//! Turn-balance invariant for tic-tac-toe.
//!
//! Accepted moves alternate starting with X, so X leads O by at most one mark
//! and X is to move exactly when the counts are level. Checked in debug builds
//! after every accepted move.

use crate::{Board, Mark};
use tracing::{instrument, warn};

/// Whether the mark counts on `board` agree with `to_move`.
#[instrument(skip(board))]
pub fn turn_balanced(board: &Board, to_move: Mark) -> bool {
    let x_count = board.count(Mark::X);
    let o_count = board.count(Mark::O);

    let valid = match to_move {
        Mark::X => x_count == o_count,
        Mark::O => x_count == o_count + 1,
    };
    if !valid {
        warn!(x_count, o_count, %to_move, "Turn balance violated");
    }
    valid
}

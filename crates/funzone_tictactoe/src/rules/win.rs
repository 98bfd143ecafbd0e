//! Win detection logic for tic-tac-toe.

use crate::{Board, Cell, Mark, Position};
use tracing::instrument;

/// The 8 winning lines in scan order: rows top to bottom, columns left to
/// right, then the two diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the mark holding the first complete line, if any.
#[instrument(skip(board))]
pub fn winner(board: &Board) -> Option<Mark> {
    let cells = board.cells();
    LINES.iter().find_map(|[a, b, c]| {
        match (cells[a.to_index()], cells[b.to_index()], cells[c.to_index()]) {
            (Cell::Marked(m1), Cell::Marked(m2), Cell::Marked(m3)) if m1 == m2 && m2 == m3 => {
                Some(m1)
            }
            _ => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(marks: &[(usize, Mark)]) -> Board {
        let mut board = Board::new();
        for &(index, mark) in marks {
            board.place(index, mark);
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(winner(&Board::new()), None);
    }

    #[test]
    fn test_every_line_wins() {
        for line in LINES {
            let marks: Vec<_> = line.iter().map(|p| (p.to_index(), Mark::O)).collect();
            assert_eq!(winner(&board_with(&marks)), Some(Mark::O), "line {line:?}");
        }
    }

    #[test]
    fn test_mixed_line_does_not_win() {
        let board = board_with(&[(0, Mark::X), (1, Mark::O), (2, Mark::X)]);
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(&[(0, Mark::X), (1, Mark::X)]);
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_scan_order_prefers_rows() {
        // Not reachable in play; pins the deterministic scan order.
        let board = board_with(&[
            (6, Mark::O),
            (7, Mark::O),
            (8, Mark::O),
            (0, Mark::X),
            (1, Mark::X),
            (2, Mark::X),
        ]);
        assert_eq!(winner(&board), Some(Mark::X));
    }
}

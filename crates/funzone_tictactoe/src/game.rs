//! Tic-tac-toe game engine.
//!
//! The engine holds only the board and the mark to move. The outcome is
//! recomputed from the board on every query. Illegal input never produces an
//! error: moves on occupied cells, off the board, or after the game has ended
//! leave the state untouched.

use super::invariants::turn_balanced;
use super::rules;
use super::types::{Board, Cell, Mark};
use super::Position;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Game status derived from the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No line is complete and at least one cell is empty.
    InProgress,
    /// A mark holds a complete line.
    Won(Mark),
    /// Every cell is occupied and no line is complete.
    Draw,
}

impl Outcome {
    /// Whether no further moves are accepted.
    pub fn is_terminal(self) -> bool {
        self != Outcome::InProgress
    }
}

/// Tic-tac-toe game engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    to_move: Mark,
}

impl Game {
    /// Creates a game with an empty board and X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Mark::X,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark that plays next.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Returns the cell at `index`, `None` outside 0-8.
    pub fn cell(&self, index: usize) -> Option<Cell> {
        self.board.get(index)
    }

    /// Places the current mark at `index` (0-8) and passes the turn.
    ///
    /// Ignored when the cell is occupied, the index is off the board, or the
    /// game is already won or drawn. The return value reports whether the
    /// move was taken and carries no error meaning.
    #[instrument(skip(self), fields(to_move = %self.to_move))]
    pub fn apply_move(&mut self, index: usize) -> bool {
        if self.outcome().is_terminal() {
            debug!("Move ignored, game is over");
            return false;
        }
        if !self.board.is_empty_at(index) {
            debug!("Move ignored, cell is occupied or off the board");
            return false;
        }

        self.board.place(index, self.to_move);
        self.to_move = self.to_move.opponent();
        debug_assert!(turn_balanced(&self.board, self.to_move));

        match self.outcome() {
            Outcome::InProgress => debug!("Move accepted"),
            outcome => info!(?outcome, "Game over"),
        }
        true
    }

    /// Places the current mark at `position`. See [`Game::apply_move`].
    pub fn apply_position(&mut self, position: Position) -> bool {
        self.apply_move(position.to_index())
    }

    /// Computes the outcome from the current board.
    pub fn outcome(&self) -> Outcome {
        if let Some(mark) = rules::winner(&self.board) {
            Outcome::Won(mark)
        } else if rules::is_full(&self.board) {
            Outcome::Draw
        } else {
            Outcome::InProgress
        }
    }

    /// Status line for display above the board.
    pub fn status(&self) -> String {
        match self.outcome() {
            Outcome::Won(mark) => format!("Winner: {mark}"),
            Outcome::Draw => "It's a Draw!".to_string(),
            Outcome::InProgress => format!("Next player: {}", self.to_move),
        }
    }

    /// Empty positions, in index order.
    pub fn open_positions(&self) -> Vec<Position> {
        Position::open(&self.board)
    }

    /// Clears the board and gives the move back to X.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!("Resetting game");
        *self = Self::new();
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

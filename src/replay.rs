//! Non-interactive play: apply a scripted list of moves and report the result.

use funzone_tictactoe::{Game, Mark, Outcome};
use serde::Serialize;
use tracing::{debug, info, instrument};

/// Serializable view of a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    /// Cells in row-major order, `null` when empty.
    pub board: Vec<Option<Mark>>,
    /// Mark that plays next.
    pub to_move: Mark,
    /// Derived outcome.
    pub outcome: Outcome,
    /// Status line as shown in the UI.
    pub status: String,
}

impl From<&Game> for Snapshot {
    fn from(game: &Game) -> Self {
        Self {
            board: game.board().cells().iter().map(|cell| cell.mark()).collect(),
            to_move: game.to_move(),
            outcome: game.outcome(),
            status: game.status(),
        }
    }
}

/// Applies `moves` to a fresh game in order.
#[instrument(skip(moves), fields(count = moves.len()))]
pub fn replay(moves: &[usize]) -> Game {
    let mut game = Game::new();
    let mut ignored = 0usize;
    for &index in moves {
        if !game.apply_move(index) {
            debug!(index, "Move had no effect");
            ignored += 1;
        }
    }
    info!(ignored, outcome = ?game.outcome(), "Replay finished");
    game
}

/// Status line followed by the board.
pub fn render_text(game: &Game) -> String {
    format!("{}\n\n{}", game.status(), game.board().display())
}

/// Pretty JSON snapshot of `game`.
pub fn render_json(game: &Game) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&Snapshot::from(game))
}

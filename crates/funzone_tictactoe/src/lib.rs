//! Tic-tac-toe engine for the portfolio Fun Zone.
//!
//! A [`Game`] owns a 3x3 [`Board`] and the [`Mark`] to move. Hosts forward
//! cell indices into [`Game::apply_move`], read the derived [`Outcome`], and
//! call [`Game::reset`] to start over. Invalid moves are ignored rather than
//! reported.
//!
//! ```
//! use funzone_tictactoe::{Game, Mark, Outcome};
//!
//! let mut game = Game::new();
//! for index in [0, 3, 1, 4, 2] {
//!     game.apply_move(index);
//! }
//! assert_eq!(game.outcome(), Outcome::Won(Mark::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod game;
mod invariants;
mod position;
pub mod rules;
mod types;

pub use game::{Game, Outcome};
pub use invariants::turn_balanced;
pub use position::Position;
pub use types::{Board, Cell, Mark};

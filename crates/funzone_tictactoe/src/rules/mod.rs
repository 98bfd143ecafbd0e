//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). The engine derives its
//! outcome from these on every query instead of storing it.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, winner};

//! Funzone - the portfolio's tic-tac-toe diversion, in the terminal.
//!
//! # Architecture
//!
//! - **Engine**: [`funzone_tictactoe`], pure game logic
//! - **TUI**: interactive host that renders the board and forwards input
//! - **Replay**: scripted host that applies a move list and reports the result
//! - **Config**: optional TOML settings for the hosts

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod replay;
mod tui;

// Crate-level exports - Command line
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{ConfigError, FunzoneConfig, LogConfig, UiConfig};

// Crate-level exports - Hosts
pub use replay::{Snapshot, render_json, render_text, replay};
pub use tui::{App, AppAction, draw, run_tui};

// Crate-level exports - Game types
pub use funzone_tictactoe::{Board, Cell, Game, Mark, Outcome, Position};

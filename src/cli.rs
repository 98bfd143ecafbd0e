//! Command-line interface for funzone.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Funzone - tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "funzone")]
#[command(about = "Take a break and play a game of Tic-Tac-Toe", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults apply if it does not exist)
    #[arg(short, long, default_value = "funzone.toml")]
    pub config: PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play interactively in the terminal
    Play,

    /// Apply a list of moves and print the resulting game
    Replay {
        /// Cell indices 0-8, comma separated (e.g. 0,3,1,4,2)
        #[arg(short, long, value_delimiter = ',', required = true)]
        moves: Vec<usize>,

        /// Print a JSON snapshot instead of text
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// The subcommand to run, `play` when none was given.
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Play)
    }
}

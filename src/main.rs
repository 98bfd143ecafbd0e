//! Funzone - unified CLI

use anyhow::{Context, Result};
use clap::Parser;
use funzone::{Cli, Command, FunzoneConfig, render_json, render_text, replay, run_tui};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = FunzoneConfig::load(&cli.config)?;

    match cli.command() {
        Command::Play => run_play(&config),
        Command::Replay { moves, json } => run_replay(&config, &moves, json),
    }
}

fn env_filter(config: &FunzoneConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log().filter()))
}

/// Run the interactive UI, logging to a file so the screen stays clean
fn run_play(config: &FunzoneConfig) -> Result<()> {
    let log_path = config.log().file();
    let log_file = std::fs::File::create(log_path)
        .with_context(|| format!("Failed to create log file {}", log_path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    run_tui(*config.ui().show_hints())
}

/// Apply scripted moves and print the result
fn run_replay(config: &FunzoneConfig, moves: &[usize], json: bool) -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::io::stderr)
        .try_init();

    info!(?moves, "Replaying moves");
    let game = replay(moves);

    let output = if json {
        render_json(&game).context("Failed to serialize game")?
    } else {
        render_text(&game)
    };
    println!("{output}");
    Ok(())
}

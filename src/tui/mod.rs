//! Terminal UI hosting the tic-tac-toe engine.

mod app;
mod input;
mod ui;

pub use app::{App, AppAction};
pub use ui::draw;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{debug, error, info, instrument};

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Restores the terminal when dropped, including on early returns.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<(Tui, Self)> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
            let _ = disable_raw_mode();
            return Err(e.into());
        }
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok((terminal, Self))
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        debug!("Restoring terminal");
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
    }
}

/// Runs the interactive UI until the user quits.
#[instrument]
pub fn run_tui(show_hints: bool) -> Result<()> {
    info!("Starting Fun Zone TUI");

    let (mut terminal, guard) = TerminalGuard::enter()?;
    let res = run_app(&mut terminal, App::new(show_hints));
    let _ = terminal.show_cursor();
    drop(guard);

    if let Err(err) = &res {
        error!(error = ?err, "UI loop error");
    }
    info!("Fun Zone TUI closed");
    res
}

fn run_app(terminal: &mut Tui, mut app: App) -> Result<()> {
    loop {
        let frame = terminal.draw(|f| ui::draw(f, &app))?;
        app.set_viewport(frame.area);

        if !event::poll(Duration::from_millis(250))? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if app.handle_key(key.code) == AppAction::Quit {
                    info!("User quit");
                    return Ok(());
                }
            }
            Event::Mouse(mouse) => app.handle_mouse(mouse),
            _ => {}
        }
    }
}

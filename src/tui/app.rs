//! Application state and input handling.

use super::input::{digit_index, move_cursor};
use super::ui;
use crossterm::event::{KeyCode, MouseButton, MouseEvent, MouseEventKind};
use funzone_tictactoe::{Game, Position};
use ratatui::layout::Rect;
use tracing::{debug, instrument};

/// What the event loop should do after an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Keep running.
    Continue,
    /// Leave the UI.
    Quit,
}

/// Main application state.
#[derive(Debug, Clone)]
pub struct App {
    game: Game,
    cursor: Position,
    show_hints: bool,
    viewport: Rect,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new(show_hints: bool) -> Self {
        Self {
            game: Game::new(),
            cursor: Position::Center,
            show_hints,
            viewport: Rect::default(),
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Cell highlighted for keyboard play.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Whether empty cells show their number.
    pub fn show_hints(&self) -> bool {
        self.show_hints
    }

    /// Records the area of the last drawn frame, used to hit-test clicks.
    pub fn set_viewport(&mut self, area: Rect) {
        self.viewport = area;
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, code: KeyCode) -> AppAction {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return AppAction::Quit,
            KeyCode::Char('r') => self.restart(),
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor.to_index()),
            KeyCode::Char(c) => {
                if let Some(index) = digit_index(c) {
                    self.play(index);
                }
            }
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, code);
            }
            _ => {}
        }
        AppAction::Continue
    }

    /// Handles a mouse event; a left click on a cell plays there.
    #[instrument(skip(self))]
    pub fn handle_mouse(&mut self, event: MouseEvent) {
        if event.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        if let Some(index) = ui::cell_at(self.viewport, event.column, event.row) {
            if let Some(position) = Position::from_index(index) {
                self.cursor = position;
            }
            self.play(index);
        }
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.game.reset();
        self.cursor = Position::Center;
    }

    fn play(&mut self, index: usize) {
        let accepted = self.game.apply_move(index);
        debug!(index, accepted, "Move forwarded to engine");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use funzone_tictactoe::{Cell, Mark, Outcome};

    const VIEWPORT: Rect = Rect {
        x: 0,
        y: 0,
        width: 80,
        height: 30,
    };

    fn point_on(index: usize) -> (u16, u16) {
        (0..VIEWPORT.height)
            .flat_map(|row| (0..VIEWPORT.width).map(move |col| (col, row)))
            .find(|&(col, row)| ui::cell_at(VIEWPORT, col, row) == Some(index))
            .expect("cell is on screen")
    }

    fn click(app: &mut App, column: u16, row: u16) {
        app.handle_mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        });
    }

    #[test]
    fn test_digits_play() {
        let mut app = App::new(true);
        for c in ['1', '4', '2', '5', '3'] {
            assert_eq!(app.handle_key(KeyCode::Char(c)), AppAction::Continue);
        }
        assert_eq!(app.game().outcome(), Outcome::Won(Mark::X));
    }

    #[test]
    fn test_cursor_and_enter() {
        let mut app = App::new(true);
        app.handle_key(KeyCode::Up);
        app.handle_key(KeyCode::Left);
        assert_eq!(app.cursor(), Position::TopLeft);
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.game().cell(0), Some(Cell::Marked(Mark::X)));
        app.handle_key(KeyCode::Char(' '));
        assert_eq!(app.game().to_move(), Mark::O);
    }

    #[test]
    fn test_restart_and_quit() {
        let mut app = App::new(false);
        app.handle_key(KeyCode::Char('5'));
        app.handle_key(KeyCode::Char('r'));
        assert_eq!(app.game(), &Game::new());
        assert_eq!(app.handle_key(KeyCode::Char('q')), AppAction::Quit);
        assert_eq!(app.handle_key(KeyCode::Esc), AppAction::Quit);
    }

    #[test]
    fn test_click_plays_cell() {
        let mut app = App::new(true);
        app.set_viewport(VIEWPORT);
        let (col, row) = point_on(8);
        click(&mut app, col, row);
        assert_eq!(app.game().cell(8), Some(Cell::Marked(Mark::X)));
        assert_eq!(app.cursor(), Position::BottomRight);
    }

    #[test]
    fn test_click_outside_board_ignored() {
        let mut app = App::new(true);
        app.set_viewport(VIEWPORT);
        click(&mut app, 0, 0);
        assert_eq!(app.game(), &Game::new());
    }

    #[test]
    fn test_click_before_first_draw_ignored() {
        let mut app = App::new(true);
        click(&mut app, 10, 10);
        assert_eq!(app.game(), &Game::new());
    }
}

//! Stateless rendering for the Fun Zone screen.

use super::app::App;
use funzone_tictactoe::{Cell, Mark, Outcome, Position};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const CELL_WIDTH: u16 = 9;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Screen regions, top to bottom.
struct Screen {
    title: Rect,
    tagline: Rect,
    status: Rect,
    board: Rect,
    help: Rect,
}

fn screen(area: Rect) -> Screen {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Title
            Constraint::Length(1),            // Tagline
            Constraint::Length(3),            // Status
            Constraint::Min(BOARD_HEIGHT),    // Board
            Constraint::Length(3),            // Help
        ])
        .split(area);

    Screen {
        title: chunks[0],
        tagline: chunks[1],
        status: chunks[2],
        board: chunks[3],
        help: chunks[4],
    }
}

/// Draws the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let layout = screen(frame.area());
    let game = app.game();

    let title = Paragraph::new("Fun Zone")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, layout.title);

    let tagline = Paragraph::new("Take a break and play a game of Tic-Tac-Toe!")
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);
    frame.render_widget(tagline, layout.tagline);

    let status_color = match game.outcome() {
        Outcome::InProgress => Color::White,
        _ => Color::Yellow,
    };
    let status = Paragraph::new(game.status())
        .style(Style::default().fg(status_color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, layout.status);

    draw_board(frame, layout.board, app);

    let help = Paragraph::new("1-9, arrows + Enter, or click to move | R: Restart | Q: Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, layout.help);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let origin = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);
    let separator = Style::default().fg(Color::DarkGray);

    for row in 1..3u16 {
        let y = origin.y + row * (CELL_HEIGHT + 1) - 1;
        let line = Rect::new(origin.x, y, BOARD_WIDTH, 1).intersection(area);
        let text = vec!["─".repeat(CELL_WIDTH as usize); 3].join("┼");
        frame.render_widget(Paragraph::new(text).style(separator), line);
    }
    for col in 1..3u16 {
        let x = origin.x + col * (CELL_WIDTH + 1) - 1;
        for row in 0..3u16 {
            let y = origin.y + row * (CELL_HEIGHT + 1);
            let bar = Rect::new(x, y, 1, CELL_HEIGHT).intersection(area);
            frame.render_widget(Paragraph::new("│\n│\n│").style(separator), bar);
        }
    }

    for (index, rect) in cell_rects(area).into_iter().enumerate() {
        draw_cell(frame, rect, app, index);
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, index: usize) {
    let (symbol, style) = match app.game().cell(index) {
        Some(Cell::Marked(Mark::X)) => (
            "X".to_string(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Some(Cell::Marked(Mark::O)) => (
            "O".to_string(),
            Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
        ),
        _ if app.show_hints() => ((index + 1).to_string(), Style::default().fg(Color::DarkGray)),
        _ => (String::new(), Style::default()),
    };

    let background = if app.cursor() == Position::ALL[index] {
        Style::default().bg(Color::White).fg(Color::Black)
    } else {
        Style::default()
    };

    let paragraph = Paragraph::new(vec![Line::default(), Line::from(Span::styled(symbol, style))])
        .style(background)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

/// Rectangles of the 9 cells inside the board region, in index order.
fn cell_rects(board: Rect) -> [Rect; 9] {
    let origin = center_rect(board, BOARD_WIDTH, BOARD_HEIGHT);
    std::array::from_fn(|index| {
        let position = Position::ALL[index];
        let x = origin.x + position.col() as u16 * (CELL_WIDTH + 1);
        let y = origin.y + position.row() as u16 * (CELL_HEIGHT + 1);
        Rect::new(x, y, CELL_WIDTH, CELL_HEIGHT).intersection(board)
    })
}

/// Board index under the terminal coordinate (`column`, `row`) for a frame of
/// size `viewport`.
pub fn cell_at(viewport: Rect, column: u16, row: u16) -> Option<usize> {
    let board = screen(viewport).board;
    cell_rects(board).iter().position(|rect| {
        column >= rect.x
            && column < rect.x + rect.width
            && row >= rect.y
            && row < rect.y + rect.height
    })
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    Rect::new(
        area.x + area.width.saturating_sub(width) / 2,
        area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    )
}

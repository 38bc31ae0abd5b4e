//! Stateless UI rendering for tic-tac-toe.

use super::app::{App, animated_symbol};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_engine::{Player, Position, RandomSource, Square};
use tokio::time::Instant;

const CELL_WIDTH: u16 = 12;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Renders the whole screen.
pub fn draw<R: RandomSource>(frame: &mut Frame, app: &App<R>, now: Instant) {
    let chunks = screen_layout(frame.area());

    let title = Paragraph::new("Tic-Tac-Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let mut status_lines = vec![Line::from(app.status())];
    if app.is_computer_thinking() {
        status_lines.push(Line::from(Span::styled(
            "Computer is thinking...",
            Style::default().fg(Color::Magenta).add_modifier(Modifier::ITALIC),
        )));
    }
    let status = Paragraph::new(status_lines)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center);
    frame.render_widget(status, chunks[1]);

    draw_board(frame, chunks[2], app, now);

    let stats = app.stats();
    let footer = Paragraph::new(vec![
        Line::from(format!(
            "You {}  Computer {}  Draws {}",
            stats.x_wins, stats.o_wins, stats.draws
        )),
        Line::from("Arrows + Enter or 1-9 to move, click a square, 'r' restart, 'q' quit"),
    ])
    .style(Style::default().fg(Color::Gray))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, chunks[3]);
}

fn screen_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),           // Title
            Constraint::Length(2),           // Status
            Constraint::Min(BOARD_HEIGHT),   // Board
            Constraint::Length(4),           // Footer
        ])
        .split(area)
        .to_vec()
}

/// Screen rectangles of the nine cells, in row-major order.
pub fn cell_areas(screen: Rect) -> [Rect; 9] {
    let board = center_rect(screen_layout(screen)[2], BOARD_WIDTH, BOARD_HEIGHT);
    let mut cells = [Rect::default(); 9];
    for pos in Position::ALL {
        let x = board.x + pos.col() as u16 * (CELL_WIDTH + 1);
        let y = board.y + pos.row() as u16 * (CELL_HEIGHT + 1);
        cells[pos.to_index()] = Rect::new(x, y, CELL_WIDTH, CELL_HEIGHT).intersection(screen);
    }
    cells
}

/// The cell under a mouse click, if any.
pub fn cell_at(screen: Rect, column: u16, row: u16) -> Option<Position> {
    let hit = Rect::new(column, row, 1, 1);
    cell_areas(screen)
        .iter()
        .position(|cell| cell.intersects(hit))
        .and_then(Position::from_index)
}

fn draw_board<R: RandomSource>(frame: &mut Frame, area: Rect, app: &App<R>, now: Instant) {
    let board_area = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);
    let cells = cell_areas(frame.area());

    let grid = Style::default().fg(Color::DarkGray);
    for i in 1..3 {
        let y = board_area.y + i * (CELL_HEIGHT + 1) - 1;
        let x = board_area.x + i * (CELL_WIDTH + 1) - 1;
        let horizontal = Rect::new(board_area.x, y, board_area.width, 1).intersection(area);
        frame.render_widget(
            Paragraph::new("─".repeat(board_area.width as usize)).style(grid),
            horizontal,
        );
        for row in 0..3 {
            let vertical = Rect::new(x, board_area.y + row * (CELL_HEIGHT + 1), 1, CELL_HEIGHT)
                .intersection(area);
            frame.render_widget(Paragraph::new("│\n│\n│").style(grid), vertical);
        }
    }

    for pos in Position::ALL {
        draw_cell(frame, cells[pos.to_index()], app, pos, now);
    }
}

fn draw_cell<R: RandomSource>(
    frame: &mut Frame,
    area: Rect,
    app: &App<R>,
    pos: Position,
    now: Instant,
) {
    let controller = app.controller();
    let index = pos.to_index();
    let square = controller.board().get(index).unwrap_or_default();
    let winning = controller.result().line().is_some_and(|l| l.contains(index));

    let (symbol, mut style) = match square {
        Square::Empty => ((index + 1).to_string(), Style::default().fg(Color::DarkGray)),
        Square::Occupied(player) => {
            let progress = app.placement_progress(index, now);
            let color = match player {
                Player::X => Color::Blue,
                Player::O => Color::Red,
            };
            (
                animated_symbol(player, progress).to_string(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )
        }
    };

    if winning {
        style = style.bg(Color::Green).fg(Color::Black);
    }
    if controller.is_fading() && square != Square::Empty {
        style = style.fg(Color::DarkGray).add_modifier(Modifier::DIM);
    }
    if pos == app.cursor() {
        style = style.bg(Color::White).fg(Color::Black);
    }

    let lines = vec![Line::from(""), Line::from(Span::styled(symbol, style))];
    let paragraph = Paragraph::new(lines)
        .style(style)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}

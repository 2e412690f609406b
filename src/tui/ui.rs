//! UI rendering using ratatui.
//!
//! Pure presentation: everything drawn here is derived from the session,
//! and the only state written back is the hit-test areas on the app.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_replay::{GameSession, GameStatus, Player, Position, Square};

use super::app::{App, Focus};

/// Draws the main UI and records clickable areas on the app.
pub fn draw(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new("Tic-Tac-Toe with Time Travel")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_board(f, panes[0], app);
    render_moves(f, panes[1], app);
    render_status(f, chunks[2], app.session());

    let help =
        Paragraph::new("1-9 or click: play | arrows+Enter: play | Tab: move list | Q: quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[3]);
}

/// Renders the status line: winner, draw, or whose turn it is.
fn render_status(f: &mut Frame, area: Rect, session: &GameSession) {
    let text = match session.status() {
        GameStatus::Won(player) => format!("Winner: {player}"),
        GameStatus::Draw => "It's a draw".to_string(),
        GameStatus::InProgress => format!("Next player: {}", session.next_player()),
    };
    let status = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(status, area);
}

/// Renders the 3x3 grid.
fn render_board(f: &mut Frame, area: Rect, app: &mut App) {
    let board_area = center_rect(area, 40, 12);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    render_row(f, rows[0], app, 0);
    render_separator(f, rows[1]);
    render_row(f, rows[2], app, 3);
    render_separator(f, rows[3]);
    render_row(f, rows[4], app, 6);
}

fn render_row(f: &mut Frame, area: Rect, app: &mut App, start: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(34),
        ])
        .split(area);

    render_square(f, cols[0], app, Position::ALL[start]);
    render_vertical_sep(f, cols[1]);
    render_square(f, cols[2], app, Position::ALL[start + 1]);
    render_vertical_sep(f, cols[3]);
    render_square(f, cols[4], app, Position::ALL[start + 2]);
}

fn render_square(f: &mut Frame, area: Rect, app: &mut App, pos: Position) {
    app.record_cell_area(pos, area);

    let square = app.session().board().get(pos);
    let winning = app
        .session()
        .board()
        .winner()
        .is_some_and(|win| win.line.contains(&pos));
    let under_cursor = app.focus() == Focus::Board && app.cursor() == pos;

    let (text, mut style) = match square {
        Square::Empty => (
            format!("{}", pos.to_index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };
    if winning {
        style = Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD);
    }
    if under_cursor {
        style = style.add_modifier(Modifier::REVERSED);
    }
    let paragraph = Paragraph::new(text).style(style).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

/// Renders the move list: one entry per snapshot, the viewed move marked
/// as non-interactive, every other entry a jump target.
fn render_moves(f: &mut Frame, area: Rect, app: &mut App) {
    let block = Block::default().borders(Borders::ALL).title("Moves");
    app.record_move_list_area(block.inner(area));

    let current = app.session().current_move();
    let mut lines = Vec::with_capacity(app.session().len());
    for mv in 0..app.session().len() {
        let (text, mut style) = if mv == current {
            (
                format!("You are at move #{mv}"),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )
        } else {
            (GameSession::describe_move(mv), Style::default())
        };
        if app.focus() == Focus::Moves && mv == app.selected_move() {
            style = style.add_modifier(Modifier::REVERSED);
        }
        lines.push(Line::styled(text, style));
    }
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_separator(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}

fn render_vertical_sep(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let [area] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    area
}

//! Application state for the terminal front end.
//!
//! The app owns one [`GameSession`] plus view-only concerns: the board
//! cursor, which pane has focus, and the screen areas recorded during the
//! last draw for mouse hit-testing. All game decisions live in the session;
//! rejected plays and jumps are silently discarded here.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position as ScreenPosition, Rect};
use tictactoe_replay::{GameSession, Position};

use super::input;

/// Which pane receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The 3x3 grid.
    Board,
    /// The move history list.
    Moves,
}

/// Main application state.
pub struct App {
    session: GameSession,
    cursor: Position,
    focus: Focus,
    selected_move: usize,
    cell_areas: [Rect; 9],
    move_list_area: Rect,
    should_quit: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new() -> Self {
        Self {
            session: GameSession::new(),
            cursor: Position::Center,
            focus: Focus::Board,
            selected_move: 0,
            cell_areas: [Rect::default(); 9],
            move_list_area: Rect::default(),
            should_quit: false,
        }
    }

    /// The game session being viewed.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Board cell under the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Pane that currently has focus.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Move-list entry under the keyboard cursor.
    pub fn selected_move(&self) -> usize {
        self.selected_move
    }

    /// True once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Records where a cell was drawn, for mouse hit-testing.
    pub fn record_cell_area(&mut self, pos: Position, area: Rect) {
        self.cell_areas[pos.to_index()] = area;
    }

    /// Records where the move list was drawn, for mouse hit-testing.
    pub fn record_move_list_area(&mut self, area: Rect) {
        self.move_list_area = area;
    }

    /// Handles a keyboard event.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.toggle_focus(),
            KeyCode::Char(c @ '1'..='9') => {
                self.play(Position::ALL[c as usize - '1' as usize]);
            }
            KeyCode::Enter | KeyCode::Char(' ') => match self.focus {
                Focus::Board => self.play(self.cursor),
                Focus::Moves => self.jump(self.selected_move),
            },
            KeyCode::Up | KeyCode::Down if self.focus == Focus::Moves => {
                self.move_selection(key.code);
            }
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = input::move_cursor(self.cursor, key.code);
            }
            _ => {}
        }
    }

    /// Handles a mouse event: clicks on cells play, clicks on the move
    /// list jump.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
            return;
        }
        let at = ScreenPosition::new(mouse.column, mouse.row);

        if let Some(pos) = Position::ALL
            .into_iter()
            .find(|p| self.cell_areas[p.to_index()].contains(at))
        {
            self.focus = Focus::Board;
            self.cursor = pos;
            self.play(pos);
        } else if self.move_list_area.contains(at) {
            let mv = (mouse.row - self.move_list_area.y) as usize;
            self.focus = Focus::Moves;
            self.selected_move = mv.min(self.session.len() - 1);
            self.jump(mv);
        }
    }

    /// Forwards a cell selection to the session. Rejections (occupied
    /// square, finished game) are no-ops; the session logs them.
    fn play(&mut self, pos: Position) {
        if self.session.play(pos).is_ok() {
            self.selected_move = self.session.current_move();
        }
    }

    fn jump(&mut self, mv: usize) {
        let _ = self.session.jump_to(mv);
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Board => {
                self.selected_move = self.session.current_move();
                Focus::Moves
            }
            Focus::Moves => Focus::Board,
        };
    }

    fn move_selection(&mut self, key: KeyCode) {
        let last = self.session.len() - 1;
        self.selected_move = match key {
            KeyCode::Up => self.selected_move.saturating_sub(1),
            KeyCode::Down => (self.selected_move + 1).min(last),
            _ => self.selected_move,
        };
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

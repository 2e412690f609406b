//! Winner detection and pure move application.

use super::position::Position;
use super::types::{Board, GameStatus, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The 8 winning lines, in the fixed order they are checked: rows
/// top-to-bottom, columns left-to-right, then the two diagonals.
///
/// The order only matters for deterministic reporting if several lines
/// complete at once, which cannot happen under legal play.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// A completed winning line: who won and the exact three cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Win {
    /// The player holding all three cells.
    pub player: Player,
    /// The winning line's cells.
    pub line: [Position; 3],
}

/// Error that can occur when applying a move or navigating history.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game is already over on the snapshot being played into.
    #[display("Game is already over")]
    GameOver,

    /// The requested move index is outside the game's history.
    #[display("No move #{} in this game's history", _0)]
    NoSuchMove(usize),
}

impl std::error::Error for MoveError {}

impl Board {
    /// Checks for a winner on the board.
    ///
    /// Returns the first line of [`LINES`] whose three cells hold the same
    /// mark, or `None`. A full board with no winner is a draw; callers
    /// detect it with [`Board::is_full`].
    pub fn winner(&self) -> Option<Win> {
        for line in LINES {
            let [a, b, c] = line;
            if let Square::Occupied(player) = self.get(a)
                && self.get(b) == Square::Occupied(player)
                && self.get(c) == Square::Occupied(player)
            {
                return Some(Win { player, line });
            }
        }
        None
    }

    /// Status of this snapshot: won, drawn, or still in progress.
    pub fn status(&self) -> GameStatus {
        match self.winner() {
            Some(win) => GameStatus::Won(win.player),
            None if self.is_full() => GameStatus::Draw,
            None => GameStatus::InProgress,
        }
    }

    /// Returns a new board with `player`'s mark at `pos`.
    ///
    /// `self` is never mutated; two calls with the same inputs yield equal
    /// outputs.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] if a winner already exists on this
    /// snapshot, or [`MoveError::SquareOccupied`] if the square holds a mark.
    #[instrument(skip(self))]
    pub fn place(&self, pos: Position, player: Player) -> Result<Board, MoveError> {
        if self.winner().is_some() {
            return Err(MoveError::GameOver);
        }
        if self.is_occupied(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }
        let mut next = self.clone();
        next.set(pos, Square::Occupied(player));
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(moves: &[(Position, Player)]) -> Board {
        let mut board = Board::new();
        for (pos, player) in moves {
            board = board.place(*pos, *player).unwrap();
        }
        board
    }

    #[test]
    fn no_winner_on_empty_board() {
        assert_eq!(Board::new().winner(), None);
        assert_eq!(Board::new().status(), GameStatus::InProgress);
    }

    #[test]
    fn two_in_a_row_is_not_a_win() {
        let board = board_with(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::X),
        ]);
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn mixed_line_is_not_a_win() {
        let board = board_with(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::O),
            (Position::TopRight, Player::X),
        ]);
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn line_order_is_rows_then_columns_then_diagonals() {
        // Left column and top row both belong to X; the row is reported
        // because rows are enumerated first.
        let board = board_with(&[
            (Position::MiddleLeft, Player::X),
            (Position::BottomLeft, Player::X),
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::X),
            (Position::TopRight, Player::X),
        ]);
        let win = board.winner().unwrap();
        assert_eq!(win.player, Player::X);
        assert_eq!(
            win.line,
            [Position::TopLeft, Position::TopCenter, Position::TopRight]
        );
    }
}

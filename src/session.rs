//! Game session management: move history and time travel.

use crate::game::{Board, GameStatus, Mark, MoveError, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// One game's history of board snapshots plus the currently viewed move.
///
/// Snapshot 0 is the empty board and snapshot `k` derives from snapshot
/// `k-1` by exactly one move, so the history is never empty. Playing while
/// viewing an earlier snapshot discards the abandoned forward history before
/// the new snapshot is appended, effectively forking a new continuation.
///
/// A session is owned by its caller and constructed fresh per game; there
/// are no process-wide singletons and nothing is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    history: Vec<Board>,
    current: usize,
}

impl GameSession {
    /// Creates a new session holding a single empty board.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating new game session");
        Self {
            history: vec![Board::new()],
            current: 0,
        }
    }

    /// The board snapshot currently being viewed.
    pub fn board(&self) -> &Board {
        &self.history[self.current]
    }

    /// Index of the move currently being viewed (0 = game start).
    pub fn current_move(&self) -> usize {
        self.current
    }

    /// Number of snapshots: moves played so far plus the initial board.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// All snapshots from game start through the latest move.
    pub fn snapshots(&self) -> impl Iterator<Item = &Board> {
        self.history.iter()
    }

    /// The mark that moves next from the viewed snapshot: X on even move
    /// numbers, O on odd.
    pub fn next_player(&self) -> Mark {
        if self.current % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    /// Status of the viewed snapshot.
    pub fn status(&self) -> GameStatus {
        self.board().status()
    }

    /// Plays the next mark at `pos` on the viewed snapshot.
    ///
    /// On success, history past the viewed move is truncated, the derived
    /// snapshot is appended, and the view advances to it.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] or [`MoveError::SquareOccupied`]
    /// without any state change. Rejection is idempotent: replaying a
    /// rejected move any number of times leaves the session untouched.
    #[instrument(skip(self), fields(move_number = self.current))]
    pub fn play(&mut self, pos: Position) -> Result<(), MoveError> {
        let next = self
            .board()
            .place(pos, self.next_player())
            .inspect_err(|error| debug!(%pos, %error, "Move rejected"))?;
        self.history.truncate(self.current + 1);
        self.history.push(next);
        self.current = self.history.len() - 1;
        debug!(move_number = self.current, "Move recorded");
        Ok(())
    }

    /// Repositions the view to an existing move without touching history.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::NoSuchMove`] if `mv` is outside the history,
    /// leaving the session unchanged. A well-behaved front end only offers
    /// existing moves, so this is a defensive rejection, never a panic.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, mv: usize) -> Result<(), MoveError> {
        if mv >= self.history.len() {
            warn!(mv, len = self.history.len(), "Jump target outside history");
            return Err(MoveError::NoSuchMove(mv));
        }
        self.current = mv;
        Ok(())
    }

    /// Label for the move-list entry that jumps to `mv`.
    pub fn describe_move(mv: usize) -> String {
        if mv == 0 {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{mv}")
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

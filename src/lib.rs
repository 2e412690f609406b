//! Tic-tac-toe rules engine with move history and time travel.
//!
//! The crate exposes a UI-framework-agnostic core in two layers:
//!
//! - **Rules**: pure functions on a [`Board`] snapshot: move validation,
//!   winner detection ([`Board::winner`]) and copy-on-write move application
//!   ([`Board::place`]).
//! - **Session**: a [`GameSession`] owns the sequence of board snapshots
//!   (one per move, index 0 = empty board) and the currently viewed move,
//!   with navigation via [`GameSession::play`] and [`GameSession::jump_to`].
//!
//! Any front end (terminal, web view, test harness) drives the game by
//! forwarding cell selections into the session and rendering from it.
//!
//! # Example
//!
//! ```
//! use tictactoe_replay::{GameSession, Player, Position};
//!
//! let mut session = GameSession::new();
//! session.play(Position::Center)?;
//! session.play(Position::TopLeft)?;
//! assert_eq!(session.next_player(), Player::X);
//!
//! // Time travel: view the position after the first move.
//! session.jump_to(1)?;
//! assert!(session.board().is_occupied(Position::Center));
//! assert!(session.board().is_empty(Position::TopLeft));
//! # Ok::<(), tictactoe_replay::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod game;
mod session;

pub use game::{Board, GameStatus, LINES, Mark, MoveError, Player, Position, Square, Win};
pub use session::GameSession;

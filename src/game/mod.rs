mod position;
mod rules;
mod types;

pub use position::Position;
pub use rules::{LINES, MoveError, Win};
pub use types::{Board, GameStatus, Player, Square};

/// Alias for clarity in session management.
pub type Mark = Player;

//! Tests for history navigation and time travel.

use tictactoe_replay::{GameSession, GameStatus, MoveError, Player, Position, Square};

#[test]
fn first_move_in_the_center() {
    let mut session = GameSession::new();
    session.play(Position::Center).unwrap();

    let board = session.board();
    assert_eq!(board.get(Position::Center), Square::Occupied(Player::X));
    for pos in Position::ALL {
        if pos != Position::Center {
            assert!(board.is_empty(pos));
        }
    }
    assert_eq!(session.next_player(), Player::O);
}

#[test]
fn marks_alternate_with_the_move_pointer() {
    let mut session = GameSession::new();
    assert_eq!(session.next_player(), Player::X);
    session.play(Position::TopLeft).unwrap();
    assert_eq!(session.next_player(), Player::O);
    session.play(Position::Center).unwrap();
    assert_eq!(session.next_player(), Player::X);

    // The pointer, not the play count, decides whose turn it is.
    session.jump_to(1).unwrap();
    assert_eq!(session.next_player(), Player::O);
}

#[test]
fn winning_the_top_row_ends_the_game() {
    let mut session = GameSession::new();
    for pos in [
        Position::TopLeft,    // X
        Position::MiddleLeft, // O
        Position::TopCenter,  // X
        Position::Center,     // O
        Position::TopRight,   // X wins
    ] {
        session.play(pos).unwrap();
    }

    let win = session.board().winner().unwrap();
    assert_eq!(win.player, Player::X);
    assert_eq!(
        win.line,
        [Position::TopLeft, Position::TopCenter, Position::TopRight]
    );
    assert_eq!(session.status(), GameStatus::Won(Player::X));

    // No more moves on the finished snapshot.
    let before = session.clone();
    assert_eq!(session.play(Position::BottomRight), Err(MoveError::GameOver));
    assert_eq!(session, before);
}

#[test]
fn playing_from_the_past_truncates_and_appends() {
    let mut session = GameSession::new();
    session.play(Position::TopLeft).unwrap();
    session.play(Position::Center).unwrap();
    session.play(Position::BottomRight).unwrap();
    assert_eq!(session.len(), 4);

    session.jump_to(1).unwrap();
    session.play(Position::MiddleRight).unwrap();

    assert_eq!(session.len(), 3);
    assert_eq!(session.current_move(), 2);
    assert!(session.board().is_occupied(Position::TopLeft));
    assert!(session.board().is_occupied(Position::MiddleRight));
    assert!(session.board().is_empty(Position::Center));
    assert!(session.board().is_empty(Position::BottomRight));
}

#[test]
fn out_of_bounds_jumps_are_rejected() {
    let mut session = GameSession::new();
    session.play(Position::TopLeft).unwrap();
    session.play(Position::Center).unwrap();
    assert_eq!(session.len(), 3);

    let before = session.clone();
    assert_eq!(session.jump_to(99), Err(MoveError::NoSuchMove(99)));
    assert_eq!(session.jump_to(3), Err(MoveError::NoSuchMove(3)));
    assert_eq!(session, before);

    // The last existing move is a valid target.
    session.jump_to(2).unwrap();
    assert_eq!(session.current_move(), 2);
}

#[test]
fn rejected_plays_are_idempotent() {
    let mut session = GameSession::new();
    session.play(Position::Center).unwrap();

    let before = session.clone();
    for _ in 0..5 {
        assert_eq!(
            session.play(Position::Center),
            Err(MoveError::SquareOccupied(Position::Center))
        );
    }
    assert_eq!(session, before);
}

#[test]
fn a_full_game_to_a_draw() {
    let mut session = GameSession::new();
    for pos in [
        Position::TopLeft,      // X
        Position::TopCenter,    // O
        Position::TopRight,     // X
        Position::Center,       // O
        Position::MiddleLeft,   // X
        Position::MiddleRight,  // O
        Position::BottomCenter, // X
        Position::BottomLeft,   // O
        Position::BottomRight,  // X
    ] {
        session.play(pos).unwrap();
    }

    assert_eq!(session.len(), 10);
    assert!(session.board().is_full());
    assert_eq!(session.status(), GameStatus::Draw);
    assert_eq!(session.play(Position::Center), Err(MoveError::SquareOccupied(Position::Center)));
}

#[test]
fn jumping_back_and_replaying_forks_the_game() {
    let mut session = GameSession::new();
    for pos in [
        Position::TopLeft,    // X
        Position::MiddleLeft, // O
        Position::TopCenter,  // X
        Position::Center,     // O
        Position::TopRight,   // X wins
    ] {
        session.play(pos).unwrap();
    }
    assert_eq!(session.status(), GameStatus::Won(Player::X));

    // Rewind to before the winning move and play differently.
    session.jump_to(4).unwrap();
    assert_eq!(session.status(), GameStatus::InProgress);
    session.play(Position::BottomRight).unwrap();

    assert_eq!(session.len(), 6);
    assert_eq!(session.status(), GameStatus::InProgress);
    assert!(session.board().is_empty(Position::TopRight));
}

#[test]
fn sessions_serialize_with_their_full_history() {
    let mut session = GameSession::new();
    session.play(Position::Center).unwrap();
    session.play(Position::TopLeft).unwrap();
    session.jump_to(1).unwrap();

    let json = serde_json::to_string(&session).unwrap();
    let restored: GameSession = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, session);
    assert_eq!(restored.current_move(), 1);
    assert_eq!(restored.len(), 3);
}

//! The game session state machine.

use thiserror::Error;

use chess_model::{Camp, MoveError, Position};

use crate::board::Board;
use crate::snapshot::BoardSnapshot;

/// Error type for session operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SessionError {
    /// The session is still in the ready state.
    #[error("the game has not been started")]
    NotStarted,

    /// `start` was issued while a game is already in progress.
    #[error("the game has already been started")]
    AlreadyStarted,

    /// The game has reached its terminal state.
    #[error("the game has already ended")]
    GameOver,

    /// Input did not name a known command.
    #[error("unknown command: '{0}'")]
    UnknownCommand(String),

    /// The board rejected the move.
    #[error(transparent)]
    Move(#[from] MoveError),
}

/// Lifecycle stage of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// No board yet; only `start` and `end` are meaningful.
    Ready,
    /// A game is in progress.
    Playing,
    /// Terminal: a king fell or an explicit end arrived.
    Finished,
}

/// A thin stateful wrapper around one [`Board`] and a turn marker.
///
/// Lifecycle is Ready -> Playing -> Finished. The session owns turn
/// alternation and stage enforcement; all chess legality lives in the
/// board. Finished is terminal, whether reached by king capture or by
/// an explicit [`end`](Session::end).
#[derive(Debug)]
pub struct Session {
    board: Option<Board>,
    turn: Camp,
    stage: Stage,
}

impl Session {
    /// Creates a session in the ready state.
    pub fn new() -> Self {
        Session {
            board: None,
            turn: Camp::White,
            stage: Stage::Ready,
        }
    }

    /// Resumes a session from a persisted board and turn.
    ///
    /// A board that is already finished resumes straight into the
    /// finished stage.
    pub fn resume(board: Board, turn: Camp) -> Self {
        let stage = if board.is_finished() {
            Stage::Finished
        } else {
            Stage::Playing
        };
        Session {
            board: Some(board),
            turn,
            stage,
        }
    }

    /// Starts a fresh game; valid only from the ready state.
    pub fn start(&mut self) -> Result<(), SessionError> {
        match self.stage {
            Stage::Ready => {
                self.board = Some(Board::new());
                self.turn = Camp::White;
                self.stage = Stage::Playing;
                Ok(())
            }
            Stage::Playing => Err(SessionError::AlreadyStarted),
            Stage::Finished => Err(SessionError::GameOver),
        }
    }

    /// Moves the current camp's piece and alternates the turn.
    ///
    /// Only valid while playing. When the board reports a captured king
    /// the session transitions to finished and stays there.
    pub fn play(&mut self, from: Position, to: Position) -> Result<BoardSnapshot, SessionError> {
        match self.stage {
            Stage::Ready => return Err(SessionError::NotStarted),
            Stage::Finished => return Err(SessionError::GameOver),
            Stage::Playing => {}
        }
        let Some(board) = self.board.as_mut() else {
            return Err(SessionError::NotStarted);
        };

        let snapshot = board.move_piece(from, to, self.turn)?;
        self.turn = self.turn.opposite();
        if board.is_finished() {
            self.stage = Stage::Finished;
        }
        Ok(snapshot)
    }

    /// Returns both camps' scores; valid while playing or finished.
    pub fn status(&self) -> Result<[(Camp, f64); 2], SessionError> {
        if self.stage == Stage::Ready {
            return Err(SessionError::NotStarted);
        }
        self.board
            .as_ref()
            .map(Board::calculate_score)
            .ok_or(SessionError::NotStarted)
    }

    /// Returns a snapshot of the current board.
    pub fn snapshot(&self) -> Result<BoardSnapshot, SessionError> {
        if self.stage == Stage::Ready {
            return Err(SessionError::NotStarted);
        }
        self.board
            .as_ref()
            .map(Board::snapshot)
            .ok_or(SessionError::NotStarted)
    }

    /// Ends the session; valid from any state, terminal.
    pub fn end(&mut self) {
        self.stage = Stage::Finished;
    }

    /// Returns the current lifecycle stage.
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Returns the camp to move, while a game is in progress.
    pub fn turn(&self) -> Option<Camp> {
        match self.stage {
            Stage::Playing => Some(self.turn),
            _ => None,
        }
    }

    /// Returns true once the session reached its terminal state.
    pub fn is_finished(&self) -> bool {
        self.stage == Stage::Finished
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    use chess_model::{Piece, PieceKind};

    fn pos(s: &str) -> Position {
        Position::from_algebraic(s).unwrap()
    }

    fn king_hunt_board() -> Board {
        let mut pieces = HashMap::new();
        pieces.insert(pos("b1"), Piece::new(PieceKind::King, Camp::Black));
        pieces.insert(pos("a1"), Piece::new(PieceKind::Queen, Camp::White));
        pieces.insert(pos("h8"), Piece::new(PieceKind::King, Camp::White));
        Board::from_pieces(pieces)
    }

    #[test]
    fn ready_session_rejects_moves_and_status() {
        let mut session = Session::new();
        assert_eq!(session.stage(), Stage::Ready);
        assert_eq!(
            session.play(pos("e2"), pos("e4")),
            Err(SessionError::NotStarted)
        );
        assert_eq!(session.status(), Err(SessionError::NotStarted));
        assert_eq!(session.turn(), None);
    }

    #[test]
    fn start_enters_playing_with_white_to_move() {
        let mut session = Session::new();
        session.start().unwrap();
        assert_eq!(session.stage(), Stage::Playing);
        assert_eq!(session.turn(), Some(Camp::White));
        assert_eq!(session.start(), Err(SessionError::AlreadyStarted));
    }

    #[test]
    fn turns_alternate_on_success_only() {
        let mut session = Session::new();
        session.start().unwrap();

        session.play(pos("e2"), pos("e4")).unwrap();
        assert_eq!(session.turn(), Some(Camp::Black));

        // A rejected move leaves the turn untouched.
        let err = session.play(pos("d2"), pos("d4")).unwrap_err();
        assert_eq!(err, SessionError::Move(MoveError::WrongTurn(Camp::Black)));
        assert_eq!(session.turn(), Some(Camp::Black));

        session.play(pos("e7"), pos("e5")).unwrap();
        assert_eq!(session.turn(), Some(Camp::White));
    }

    #[test]
    fn king_capture_finishes_the_session() {
        let mut session = Session::resume(king_hunt_board(), Camp::White);
        session.play(pos("a1"), pos("b1")).unwrap();
        assert!(session.is_finished());
        assert_eq!(
            session.play(pos("b1"), pos("b2")),
            Err(SessionError::GameOver)
        );
    }

    #[test]
    fn status_remains_queryable_after_the_game_ends() {
        let mut session = Session::resume(king_hunt_board(), Camp::White);
        session.play(pos("a1"), pos("b1")).unwrap();

        let scores = session.status().unwrap();
        assert!(scores.contains(&(Camp::White, 9.0)));
        assert!(scores.contains(&(Camp::Black, 0.0)));
    }

    #[test]
    fn resume_restores_the_persisted_turn() {
        let session = Session::resume(king_hunt_board(), Camp::Black);
        assert_eq!(session.stage(), Stage::Playing);
        assert_eq!(session.turn(), Some(Camp::Black));
    }

    #[test]
    fn end_is_terminal_from_any_state() {
        let mut session = Session::new();
        session.end();
        assert!(session.is_finished());
        assert_eq!(session.start(), Err(SessionError::GameOver));

        let mut session = Session::new();
        session.start().unwrap();
        session.end();
        assert_eq!(
            session.play(pos("e2"), pos("e4")),
            Err(SessionError::GameOver)
        );
        // The board survives, so the score stays queryable.
        assert!(session.status().is_ok());
    }
}

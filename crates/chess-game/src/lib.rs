//! Turn-based chess board with a session state machine.
//!
//! This crate provides:
//! - [`Board`] - position-to-piece occupancy with the move protocol,
//!   king-capture game end, and material scoring
//! - [`BoardSnapshot`] - immutable, serializable copies of occupancy
//!   for display and persistence collaborators
//! - [`Session`] - the Ready/Playing/Finished lifecycle wrapper that
//!   owns turn alternation
//! - [`Command`] - the textual boundary an input loop feeds the session
//!
//! All chess legality (shape, obstruction, destination, turn ownership)
//! is validated by [`Board::move_piece`]; rejected moves come back as
//! [`chess_model::MoveError`] values, never panics. Capturing a king is
//! not an error: it finishes the board, and the session latches into
//! its terminal stage.
//!
//! # Example
//!
//! ```
//! use chess_game::{Command, Session};
//!
//! let mut session = Session::new();
//! session.start().unwrap();
//!
//! if let Command::Move { from, to } = Command::parse("move b2 b4").unwrap() {
//!     let snapshot = session.play(from, to).unwrap();
//!     assert_eq!(snapshot.len(), 32);
//! }
//!
//! let scores = session.status().unwrap();
//! assert_eq!(scores[0].1, scores[1].1); // nothing captured yet
//! ```

mod board;
mod command;
mod session;
mod snapshot;

pub use board::{Board, KING_LOST_SCORE};
pub use command::Command;
pub use session::{Session, SessionError, Stage};
pub use snapshot::{BoardSnapshot, PieceSnapshot};

//! Validation failures surfaced by the move protocol.

use thiserror::Error;

use crate::{Camp, PieceKind, Position};

/// Errors that reject a candidate move or malformed coordinate input.
///
/// Every variant is a synchronous validation failure reported to the
/// caller; none are retried or silently corrected. A captured king is
/// not an error, it ends the game through the board's finished flag.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MoveError {
    #[error("invalid coordinate: '{0}' is not a square from a1 to h8")]
    InvalidCoordinate(String),

    #[error("illegal shape: {kind} {detail}")]
    IllegalShape {
        kind: PieceKind,
        detail: &'static str,
    },

    #[error("it is {0}'s turn and the source square holds no {0} piece")]
    WrongTurn(Camp),

    #[error("path blocked: another piece occupies {0}")]
    PathBlocked(Position),

    #[error("destination {0} already holds a friendly piece")]
    FriendlyOccupied(Position),

    #[error("illegal pawn move: {0}")]
    IllegalPawnMove(&'static str),
}

impl MoveError {
    /// Convenience constructor for shape rejections.
    pub(crate) const fn shape(kind: PieceKind, detail: &'static str) -> Self {
        MoveError::IllegalShape { kind, detail }
    }
}

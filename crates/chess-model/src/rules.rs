//! Geometric move rules, one per piece archetype.
//!
//! [`compute_path`] answers a single question: is the displacement from
//! one square to another a legal shape for this archetype, and if so,
//! which squares lie strictly between the two? It carries no board
//! knowledge at all. Whether those squares (or the destination) are
//! occupied is decided by the board's move protocol, which keeps the
//! rules pure and testable without a board.

use crate::{Camp, MoveError, PieceKind, Position};

/// Computes the travel path for a candidate move, or rejects the shape.
///
/// The returned positions are the squares strictly between `from` and
/// `to`, in travel order; empty for single-step and jumping pieces.
/// Zero displacement is an illegal shape for every archetype.
pub fn compute_path(
    kind: PieceKind,
    camp: Camp,
    from: Position,
    to: Position,
) -> Result<Vec<Position>, MoveError> {
    match kind {
        PieceKind::Rook => rook_path(from, to),
        PieceKind::Bishop => bishop_path(from, to),
        PieceKind::Queen => queen_path(from, to),
        PieceKind::Knight => knight_path(from, to),
        PieceKind::King => king_path(from, to),
        PieceKind::Pawn => pawn_path(camp, from, to),
    }
}

/// Enumerates the squares strictly between two aligned positions.
///
/// Only called for positions on a shared file, rank, or diagonal, where
/// stepping one square toward the target on each axis walks the line.
fn squares_between(from: Position, to: Position) -> Vec<Position> {
    let mut path = Vec::new();
    let mut cursor = from.toward(to);
    while cursor != to {
        path.push(cursor);
        cursor = cursor.toward(to);
    }
    path
}

fn rook_path(from: Position, to: Position) -> Result<Vec<Position>, MoveError> {
    if !from.is_straight_to(to) {
        return Err(MoveError::shape(
            PieceKind::Rook,
            "moves only along a file or a rank",
        ));
    }
    Ok(squares_between(from, to))
}

fn bishop_path(from: Position, to: Position) -> Result<Vec<Position>, MoveError> {
    if !from.is_diagonal_to(to) {
        return Err(MoveError::shape(
            PieceKind::Bishop,
            "moves only along diagonals",
        ));
    }
    Ok(squares_between(from, to))
}

fn queen_path(from: Position, to: Position) -> Result<Vec<Position>, MoveError> {
    if !from.is_straight_to(to) && !from.is_diagonal_to(to) {
        return Err(MoveError::shape(
            PieceKind::Queen,
            "moves only along files, ranks, or diagonals",
        ));
    }
    Ok(squares_between(from, to))
}

fn knight_path(from: Position, to: Position) -> Result<Vec<Position>, MoveError> {
    let file_d = from.file().distance(to.file());
    let rank_d = from.rank().distance(to.rank());
    if !matches!((file_d, rank_d), (1, 2) | (2, 1)) {
        return Err(MoveError::shape(
            PieceKind::Knight,
            "moves only in an L shape",
        ));
    }
    // Knights jump: no intermediate squares to report.
    Ok(Vec::new())
}

fn king_path(from: Position, to: Position) -> Result<Vec<Position>, MoveError> {
    if from.chebyshev_distance(to) != 1 {
        return Err(MoveError::shape(
            PieceKind::King,
            "moves exactly one square in any direction",
        ));
    }
    Ok(Vec::new())
}

/// Pawn shapes, relative to the camp's forward direction: one square
/// straight, two squares straight from the camp's pawn rank (the single
/// intervening square is the path), or one square diagonally.
///
/// Whether a diagonal step captures or a straight step lands on an empty
/// square is destination legality, checked by the board.
fn pawn_path(camp: Camp, from: Position, to: Position) -> Result<Vec<Position>, MoveError> {
    let file_d = from.file().distance(to.file());
    let rank_d = from.rank().delta(to.rank());
    let forward = camp.forward();

    if file_d == 0 {
        if rank_d == forward {
            return Ok(Vec::new());
        }
        if rank_d == 2 * forward && from.rank() == camp.pawn_rank() {
            return Ok(vec![from.offset_rank(forward)]);
        }
        if rank_d.unsigned_abs() >= 2 {
            return Err(MoveError::shape(
                PieceKind::Pawn,
                "cannot reach that square from its current position",
            ));
        }
        return Err(MoveError::shape(
            PieceKind::Pawn,
            "cannot move in that direction for its camp",
        ));
    }
    if file_d == 1 && rank_d == forward {
        return Ok(Vec::new());
    }
    Err(MoveError::shape(
        PieceKind::Pawn,
        "cannot move in that direction for its camp",
    ))
}

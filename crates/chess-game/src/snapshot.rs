//! Read-only board snapshots for display and persistence.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use chess_model::{Camp, Piece, PieceKind, Position};

/// A display descriptor for a single piece: its camp and archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceSnapshot {
    pub camp: Camp,
    pub kind: PieceKind,
}

impl From<Piece> for PieceSnapshot {
    fn from(piece: Piece) -> Self {
        PieceSnapshot {
            camp: piece.camp(),
            kind: piece.kind(),
        }
    }
}

impl PieceSnapshot {
    /// Reconstructs the domain piece this snapshot describes.
    pub fn to_piece(self) -> Piece {
        Piece::new(self.kind, self.camp)
    }
}

/// An immutable point-in-time copy of board occupancy.
///
/// Snapshots never alias the board's internal storage; two snapshots
/// taken with no move in between compare equal. The backing map is
/// ordered so iteration (and serialized output) is deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoardSnapshot {
    pieces: BTreeMap<Position, PieceSnapshot>,
}

impl BoardSnapshot {
    /// Returns the descriptor at a position, if any piece stands there.
    pub fn piece_at(&self, position: Position) -> Option<PieceSnapshot> {
        self.pieces.get(&position).copied()
    }

    /// Iterates over occupied positions in file-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, PieceSnapshot)> + '_ {
        self.pieces.iter().map(|(&position, &piece)| (position, piece))
    }

    /// Returns the number of pieces on the board.
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    /// Returns true if no pieces are on the board.
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }
}

impl FromIterator<(Position, PieceSnapshot)> for BoardSnapshot {
    fn from_iter<I: IntoIterator<Item = (Position, PieceSnapshot)>>(iter: I) -> Self {
        BoardSnapshot {
            pieces: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(s: &str) -> Position {
        Position::from_algebraic(s).unwrap()
    }

    #[test]
    fn lookup_and_iteration_order() {
        let snapshot: BoardSnapshot = [
            (pos("h8"), Piece::new(PieceKind::King, Camp::Black).into()),
            (pos("a1"), Piece::new(PieceKind::Rook, Camp::White).into()),
        ]
        .into_iter()
        .collect();

        assert_eq!(snapshot.len(), 2);
        assert_eq!(
            snapshot.piece_at(pos("a1")),
            Some(PieceSnapshot {
                camp: Camp::White,
                kind: PieceKind::Rook,
            })
        );
        assert_eq!(snapshot.piece_at(pos("e4")), None);

        let positions: Vec<Position> = snapshot.iter().map(|(p, _)| p).collect();
        assert_eq!(positions, vec![pos("a1"), pos("h8")]);
    }

    #[test]
    fn serializes_as_a_flat_map() {
        let snapshot: BoardSnapshot = [(pos("e1"), Piece::new(PieceKind::King, Camp::White).into())]
            .into_iter()
            .collect();
        let json = serde_json::to_string(&snapshot).unwrap();
        assert_eq!(json, r#"{"e1":{"camp":"white","kind":"king"}}"#);

        let back: BoardSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }
}

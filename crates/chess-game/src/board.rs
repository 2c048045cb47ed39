//! Board occupancy and the move protocol.

use std::collections::HashMap;

use chess_model::{Camp, File, MoveError, Piece, PieceKind, Position};

use crate::snapshot::BoardSnapshot;

/// Score reported for a camp whose king has been captured, in place of
/// its material sum.
pub const KING_LOST_SCORE: f64 = 0.0;

/// Back-rank piece order, file A through H.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// The single source of truth for occupancy.
///
/// A board maps positions to pieces; an absent key is an empty square.
/// All mutation goes through [`Board::move_piece`], which enforces the
/// turn, the piece's move geometry, destination legality, and path
/// obstruction, in that order. Capturing a king latches the `finished`
/// flag, which never resets.
#[derive(Debug, Clone)]
pub struct Board {
    pieces: HashMap<Position, Piece>,
    finished: bool,
}

impl Board {
    /// Creates a board with the standard starting layout.
    pub fn new() -> Self {
        let mut pieces = HashMap::new();
        for camp in Camp::ALL {
            for file in File::ALL {
                pieces.insert(
                    Position::new(file, camp.pawn_rank()),
                    Piece::new(PieceKind::Pawn, camp),
                );
            }
            for (file, kind) in File::ALL.into_iter().zip(BACK_RANK) {
                pieces.insert(Position::new(file, camp.back_rank()), Piece::new(kind, camp));
            }
        }
        Board {
            pieces,
            finished: false,
        }
    }

    /// Reconstructs a board from a persisted position-to-piece mapping.
    ///
    /// A camp that arrives without a king is treated as already beaten,
    /// so the board starts out finished.
    pub fn from_pieces(pieces: HashMap<Position, Piece>) -> Self {
        let finished = Camp::ALL
            .into_iter()
            .any(|camp| !pieces.values().any(|p| p.is_camp(camp) && p.is_king()));
        Board { pieces, finished }
    }

    /// Returns the piece at a position, if the square is occupied.
    pub fn occupant(&self, position: Position) -> Option<Piece> {
        self.pieces.get(&position).copied()
    }

    /// Returns true once a king has been captured.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Validates and applies a move for the acting camp.
    ///
    /// Checks run in a fixed order: turn ownership first (a wrong-turn
    /// attempt learns nothing about path legality), then the piece's
    /// move geometry, then destination legality, then path obstruction.
    /// On success the occupancy is updated, a captured king latches the
    /// finished flag, and a fresh snapshot is returned.
    pub fn move_piece(
        &mut self,
        from: Position,
        to: Position,
        acting: Camp,
    ) -> Result<BoardSnapshot, MoveError> {
        let piece = match self.occupant(from) {
            Some(piece) if piece.is_camp(acting) => piece,
            _ => return Err(MoveError::WrongTurn(acting)),
        };

        let path = piece.compute_path(from, to)?;

        let destination = self.occupant(to);
        if piece.is_pawn() {
            check_pawn_destination(piece, from, to, destination)?;
        } else if let Some(occupant) = destination {
            if piece.is_friendly(&occupant) {
                return Err(MoveError::FriendlyOccupied(to));
            }
        }

        if let Some(&blocked) = path.iter().find(|p| self.pieces.contains_key(*p)) {
            return Err(MoveError::PathBlocked(blocked));
        }

        self.pieces.remove(&from);
        let captured = self.pieces.insert(to, piece);
        if captured.is_some_and(|p| p.is_king()) {
            self.finished = true;
        }

        Ok(self.snapshot())
    }

    /// Computes the material score for both camps.
    ///
    /// A camp scores the sum of its surviving pieces, minus half a point
    /// per pawn on any file holding two or more of its pawns. A camp
    /// whose king is gone scores [`KING_LOST_SCORE`] instead.
    pub fn calculate_score(&self) -> [(Camp, f64); 2] {
        Camp::ALL.map(|camp| (camp, self.camp_score(camp)))
    }

    /// Returns an immutable point-in-time copy of the occupancy.
    pub fn snapshot(&self) -> BoardSnapshot {
        self.pieces
            .iter()
            .map(|(&position, &piece)| (position, piece.into()))
            .collect()
    }

    fn camp_score(&self, camp: Camp) -> f64 {
        if !self.has_king(camp) {
            return KING_LOST_SCORE;
        }
        let material: f64 = self
            .pieces
            .values()
            .filter(|piece| piece.is_camp(camp))
            .map(|piece| piece.score())
            .sum();
        material - self.stacked_pawn_penalty(camp)
    }

    fn has_king(&self, camp: Camp) -> bool {
        self.pieces
            .values()
            .any(|piece| piece.is_camp(camp) && piece.is_king())
    }

    // Every pawn on a file with two or more same-camp pawns costs 0.5,
    // including the first one on that file.
    fn stacked_pawn_penalty(&self, camp: Camp) -> f64 {
        File::ALL
            .into_iter()
            .map(|file| {
                let pawns = self
                    .pieces
                    .iter()
                    .filter(|(position, piece)| {
                        position.file() == file && piece.is_camp(camp) && piece.is_pawn()
                    })
                    .count();
                if pawns >= 2 {
                    0.5 * pawns as f64
                } else {
                    0.0
                }
            })
            .sum()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

fn check_pawn_destination(
    pawn: Piece,
    from: Position,
    to: Position,
    destination: Option<Piece>,
) -> Result<(), MoveError> {
    if from.is_diagonal_to(to) {
        return match destination {
            Some(occupant) if pawn.is_opponent(&occupant) => Ok(()),
            _ => Err(MoveError::IllegalPawnMove(
                "a diagonal step must capture an opposing piece",
            )),
        };
    }
    match destination {
        None => Ok(()),
        Some(_) => Err(MoveError::IllegalPawnMove(
            "a straight step needs an empty destination square",
        )),
    }
}

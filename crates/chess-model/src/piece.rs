//! Piece archetypes and camp-owned pieces.

use serde::{Deserialize, Serialize};

use crate::{rules, Camp, MoveError, Position};

/// The six piece archetypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum PieceKind {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}

impl PieceKind {
    /// All archetypes in order.
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Returns the material value of this archetype.
    ///
    /// The king scores zero: it is excluded from material sums, losing
    /// it ends the game instead.
    #[inline]
    pub const fn score(self) -> f64 {
        match self {
            PieceKind::Pawn => 1.0,
            PieceKind::Knight => 2.5,
            PieceKind::Bishop => 3.0,
            PieceKind::Rook => 5.0,
            PieceKind::Queen => 9.0,
            PieceKind::King => 0.0,
        }
    }

    /// Returns the persisted name of this archetype.
    pub const fn name(self) -> &'static str {
        match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Rook => "rook",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        }
    }

    /// Looks up an archetype by its persisted name, case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        PieceKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
    }
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PieceKind::Pawn => "Pawn",
            PieceKind::Knight => "Knight",
            PieceKind::Bishop => "Bishop",
            PieceKind::Rook => "Rook",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
        };
        write!(f, "{}", name)
    }
}

/// A piece on the board: an archetype owned by a camp.
///
/// Two pieces of the same kind and camp are interchangeable, so `Piece`
/// is a plain `Copy` value with derived equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    camp: Camp,
}

impl Piece {
    /// Creates a piece of the given kind for the given camp.
    #[inline]
    pub const fn new(kind: PieceKind, camp: Camp) -> Self {
        Piece { kind, camp }
    }

    /// Returns the archetype of this piece.
    #[inline]
    pub const fn kind(self) -> PieceKind {
        self.kind
    }

    /// Returns the camp that owns this piece.
    #[inline]
    pub const fn camp(self) -> Camp {
        self.camp
    }

    /// Returns true if this piece is a pawn.
    #[inline]
    pub const fn is_pawn(self) -> bool {
        matches!(self.kind, PieceKind::Pawn)
    }

    /// Returns true if this piece is a king.
    #[inline]
    pub const fn is_king(self) -> bool {
        matches!(self.kind, PieceKind::King)
    }

    /// Returns true if this piece belongs to the given camp.
    #[inline]
    pub fn is_camp(self, camp: Camp) -> bool {
        self.camp == camp
    }

    /// Returns true if the other piece belongs to the same camp.
    #[inline]
    pub fn is_friendly(self, other: &Piece) -> bool {
        self.camp == other.camp
    }

    /// Returns true if the other piece belongs to the opposing camp.
    #[inline]
    pub fn is_opponent(self, other: &Piece) -> bool {
        self.camp != other.camp
    }

    /// Returns the material value of this piece.
    #[inline]
    pub const fn score(self) -> f64 {
        self.kind.score()
    }

    /// Computes the geometric path for moving this piece from `from` to
    /// `to`: the squares strictly between the two, in travel order.
    ///
    /// Shape legality only; occupancy is the board's concern.
    pub fn compute_path(self, from: Position, to: Position) -> Result<Vec<Position>, MoveError> {
        rules::compute_path(self.kind, self.camp, from, to)
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.camp, self.kind)
    }
}

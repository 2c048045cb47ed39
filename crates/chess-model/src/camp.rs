//! The two playing camps.

use serde::{Deserialize, Serialize};

use crate::Rank;

/// A player's side. White moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Camp {
    White = 0,
    Black = 1,
}

impl Camp {
    /// Both camps in order.
    pub const ALL: [Camp; 2] = [Camp::White, Camp::Black];

    /// Returns the opposing camp.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Camp::White => Camp::Black,
            Camp::Black => Camp::White,
        }
    }

    /// Returns the index (0 for White, 1 for Black).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the pawn direction for this camp (+1 for White, -1 for Black).
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Camp::White => 1,
            Camp::Black => -1,
        }
    }

    /// Returns the rank this camp's pawns start on.
    #[inline]
    pub const fn pawn_rank(self) -> Rank {
        match self {
            Camp::White => Rank::R2,
            Camp::Black => Rank::R7,
        }
    }

    /// Returns the back rank for this camp.
    #[inline]
    pub const fn back_rank(self) -> Rank {
        match self {
            Camp::White => Rank::R1,
            Camp::Black => Rank::R8,
        }
    }

    /// Returns the persisted name of this camp.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Camp::White => "white",
            Camp::Black => "black",
        }
    }

    /// Looks up a camp by its persisted name, case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        Camp::ALL
            .into_iter()
            .find(|camp| camp.name().eq_ignore_ascii_case(name))
    }
}

impl std::fmt::Display for Camp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Camp::White => write!(f, "White"),
            Camp::Black => write!(f, "Black"),
        }
    }
}

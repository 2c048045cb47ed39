//! Board coordinates: files, ranks, and positions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::MoveError;

/// A file (column) on the chess board, from A to H.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum File {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
    E = 4,
    F = 5,
    G = 6,
    H = 7,
}

impl File {
    /// All files in order.
    pub const ALL: [File; 8] = [
        File::A,
        File::B,
        File::C,
        File::D,
        File::E,
        File::F,
        File::G,
        File::H,
    ];

    /// Creates a file from index (0-7).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(File::A),
            1 => Some(File::B),
            2 => Some(File::C),
            3 => Some(File::D),
            4 => Some(File::E),
            5 => Some(File::F),
            6 => Some(File::G),
            7 => Some(File::H),
            _ => None,
        }
    }

    /// Creates a file from a character ('a'-'h' or 'A'-'H').
    #[inline]
    pub const fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'a' => Some(File::A),
            'b' => Some(File::B),
            'c' => Some(File::C),
            'd' => Some(File::D),
            'e' => Some(File::E),
            'f' => Some(File::F),
            'g' => Some(File::G),
            'h' => Some(File::H),
            _ => None,
        }
    }

    /// Returns the index (0-7).
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Returns the character representation.
    #[inline]
    pub const fn to_char(self) -> char {
        (b'a' + self as u8) as char
    }

    /// Returns the absolute distance to another file.
    #[inline]
    pub const fn distance(self, other: File) -> u8 {
        (self as i8 - other as i8).unsigned_abs()
    }

    /// Returns the file one step toward another file (identity when equal).
    pub fn toward(self, other: File) -> File {
        let shifted = match (other as u8).cmp(&(self as u8)) {
            std::cmp::Ordering::Greater => self as u8 + 1,
            std::cmp::Ordering::Less => self as u8 - 1,
            std::cmp::Ordering::Equal => self as u8,
        };
        // one step from a valid file is still on the board
        match File::from_index(shifted) {
            Some(f) => f,
            None => unreachable!(),
        }
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A rank (row) on the chess board, from 1 to 8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    R1 = 0,
    R2 = 1,
    R3 = 2,
    R4 = 3,
    R5 = 4,
    R6 = 5,
    R7 = 6,
    R8 = 7,
}

impl Rank {
    /// All ranks in order.
    pub const ALL: [Rank; 8] = [
        Rank::R1,
        Rank::R2,
        Rank::R3,
        Rank::R4,
        Rank::R5,
        Rank::R6,
        Rank::R7,
        Rank::R8,
    ];

    /// Creates a rank from index (0-7).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Rank::R1),
            1 => Some(Rank::R2),
            2 => Some(Rank::R3),
            3 => Some(Rank::R4),
            4 => Some(Rank::R5),
            5 => Some(Rank::R6),
            6 => Some(Rank::R7),
            7 => Some(Rank::R8),
            _ => None,
        }
    }

    /// Creates a rank from a character ('1'-'8').
    #[inline]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '1' => Some(Rank::R1),
            '2' => Some(Rank::R2),
            '3' => Some(Rank::R3),
            '4' => Some(Rank::R4),
            '5' => Some(Rank::R5),
            '6' => Some(Rank::R6),
            '7' => Some(Rank::R7),
            '8' => Some(Rank::R8),
            _ => None,
        }
    }

    /// Returns the index (0-7).
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Returns the character representation.
    #[inline]
    pub const fn to_char(self) -> char {
        (b'1' + self as u8) as char
    }

    /// Returns the absolute distance to another rank.
    #[inline]
    pub const fn distance(self, other: Rank) -> u8 {
        (self as i8 - other as i8).unsigned_abs()
    }

    /// Returns the signed delta from this rank to another (positive toward R8).
    #[inline]
    pub const fn delta(self, other: Rank) -> i8 {
        other as i8 - self as i8
    }

    /// Returns the rank shifted by `distance`, clamped to the board edges.
    ///
    /// Callers only invoke this for in-range deltas (the pawn double-step
    /// intermediate square), so clamping never silently changes a result
    /// they depend on.
    pub fn offset(self, distance: i8) -> Rank {
        let shifted = self as i8 + distance;
        let clamped = if shifted < 0 {
            0
        } else if shifted > 7 {
            7
        } else {
            shifted
        };
        match Rank::from_index(clamped as u8) {
            Some(r) => r,
            None => unreachable!(),
        }
    }

    /// Returns the rank one step toward another rank (identity when equal).
    pub fn toward(self, other: Rank) -> Rank {
        match other.cmp(&self) {
            std::cmp::Ordering::Greater => self.offset(1),
            std::cmp::Ordering::Less => self.offset(-1),
            std::cmp::Ordering::Equal => self,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A position on the chess board: a file paired with a rank.
///
/// Positions are immutable values. The `Ord` implementation is file-major
/// so that position-keyed maps iterate deterministically (a1, a2, ..., h8).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    file: File,
    rank: Rank,
}

impl Position {
    /// Creates a position from file and rank.
    #[inline]
    pub const fn new(file: File, rank: Rank) -> Self {
        Position { file, rank }
    }

    /// Parses a position from algebraic notation (e.g., "e4").
    pub const fn from_algebraic(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let file = match File::from_char(bytes[0] as char) {
            Some(f) => f,
            None => return None,
        };
        let rank = match Rank::from_char(bytes[1] as char) {
            Some(r) => r,
            None => return None,
        };
        Some(Position::new(file, rank))
    }

    /// Returns the file of this position.
    #[inline]
    pub const fn file(self) -> File {
        self.file
    }

    /// Returns the rank of this position.
    #[inline]
    pub const fn rank(self) -> Rank {
        self.rank
    }

    /// Returns true if the two positions share a file or a rank but are
    /// not the same square.
    #[inline]
    pub fn is_straight_to(self, other: Position) -> bool {
        self != other && (self.file == other.file || self.rank == other.rank)
    }

    /// Returns true if the two positions lie on a common diagonal but are
    /// not the same square.
    #[inline]
    pub fn is_diagonal_to(self, other: Position) -> bool {
        self != other && self.file.distance(other.file) == self.rank.distance(other.rank)
    }

    /// Returns true if the two positions share a file.
    #[inline]
    pub fn is_same_file(self, other: Position) -> bool {
        self.file == other.file
    }

    /// Returns the Chebyshev (king-move) distance to another position.
    #[inline]
    pub fn chebyshev_distance(self, other: Position) -> u8 {
        self.file.distance(other.file).max(self.rank.distance(other.rank))
    }

    /// Returns the position shifted `distance` ranks on the same file,
    /// clamped to the board edges.
    #[inline]
    pub fn offset_rank(self, distance: i8) -> Position {
        Position::new(self.file, self.rank.offset(distance))
    }

    /// Returns the position one step toward another position, moving at
    /// most one square on each axis.
    ///
    /// For positions on a shared line or diagonal this walks the squares
    /// between them, which is how slider paths are enumerated.
    #[inline]
    pub fn toward(self, other: Position) -> Position {
        Position::new(self.file.toward(other.file), self.rank.toward(other.rank))
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position({}{})", self.file, self.rank)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file, self.rank)
    }
}

impl FromStr for Position {
    type Err = MoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::from_algebraic(s).ok_or_else(|| MoveError::InvalidCoordinate(s.to_string()))
    }
}

// Positions serialize as their algebraic notation so that
// position-keyed maps become plain string-keyed JSON objects.
impl Serialize for Position {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Position {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(s: &str) -> Position {
        Position::from_algebraic(s).unwrap()
    }

    #[test]
    fn from_algebraic() {
        assert_eq!(
            Position::from_algebraic("a1"),
            Some(Position::new(File::A, Rank::R1))
        );
        assert_eq!(
            Position::from_algebraic("e4"),
            Some(Position::new(File::E, Rank::R4))
        );
        assert_eq!(Position::from_algebraic("i1"), None);
        assert_eq!(Position::from_algebraic("a9"), None);
        assert_eq!(Position::from_algebraic(""), None);
        assert_eq!(Position::from_algebraic("a10"), None);
    }

    #[test]
    fn parse_reports_invalid_coordinate() {
        let err = "z9".parse::<Position>().unwrap_err();
        assert_eq!(err, MoveError::InvalidCoordinate("z9".to_string()));
    }

    #[test]
    fn display_is_algebraic() {
        assert_eq!(pos("a1").to_string(), "a1");
        assert_eq!(pos("h8").to_string(), "h8");
        assert_eq!(pos("e4").to_string(), "e4");
    }

    #[test]
    fn straight_predicate() {
        assert!(pos("a1").is_straight_to(pos("a8")));
        assert!(pos("a1").is_straight_to(pos("h1")));
        assert!(!pos("a1").is_straight_to(pos("b2")));
        assert!(!pos("a1").is_straight_to(pos("a1")));
    }

    #[test]
    fn diagonal_predicate() {
        assert!(pos("a1").is_diagonal_to(pos("h8")));
        assert!(pos("c5").is_diagonal_to(pos("a3")));
        assert!(!pos("a1").is_diagonal_to(pos("a2")));
        assert!(!pos("d4").is_diagonal_to(pos("d4")));
    }

    #[test]
    fn chebyshev() {
        assert_eq!(pos("e4").chebyshev_distance(pos("e5")), 1);
        assert_eq!(pos("e4").chebyshev_distance(pos("d5")), 1);
        assert_eq!(pos("a1").chebyshev_distance(pos("h8")), 7);
        assert_eq!(pos("a1").chebyshev_distance(pos("a1")), 0);
    }

    #[test]
    fn rank_offset_clamps_at_edges() {
        assert_eq!(Rank::R1.offset(-1), Rank::R1);
        assert_eq!(Rank::R8.offset(2), Rank::R8);
        assert_eq!(Rank::R7.offset(-1), Rank::R6);
        assert_eq!(pos("a7").offset_rank(-1), pos("a6"));
    }

    #[test]
    fn toward_steps_one_square() {
        assert_eq!(pos("a1").toward(pos("a4")), pos("a2"));
        assert_eq!(pos("d4").toward(pos("a1")), pos("c3"));
        assert_eq!(pos("h5").toward(pos("h5")), pos("h5"));
    }

    #[test]
    fn ordering_is_file_major() {
        assert!(pos("a8") < pos("b1"));
        assert!(pos("c2") < pos("c3"));
    }

    #[test]
    fn serde_uses_algebraic_notation() {
        let json = serde_json::to_string(&pos("e4")).unwrap();
        assert_eq!(json, "\"e4\"");
        let back: Position = serde_json::from_str("\"b7\"").unwrap();
        assert_eq!(back, pos("b7"));
    }
}

//! Domain types for a turn-based chess rules engine.
//!
//! This crate provides the leaf types the engine is built from:
//! - [`File`], [`Rank`], and [`Position`] for board coordinates
//! - [`Camp`] for the two playing sides
//! - [`PieceKind`] and [`Piece`] for piece representation
//! - [`rules::compute_path`] for per-archetype move geometry
//! - [`MoveError`] for the validation-failure taxonomy
//!
//! Move rules here are purely geometric: they decide whether a
//! displacement is a legal shape for an archetype and which squares lie
//! on the way. Occupancy, turn order, and game end live in the board
//! crate that consumes these types.

mod camp;
mod error;
mod piece;
mod position;
pub mod rules;

pub use camp::Camp;
pub use error::MoveError;
pub use piece::{Piece, PieceKind};
pub use position::{File, Position, Rank};

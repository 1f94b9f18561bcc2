//! Core chess types.
//!
//! This module contains the value types used throughout the engine:
//! - `Piece` and `Color` - piece kinds and sides
//! - `Square` - (row, col) board coordinate
//! - `Move` and `MoveList` - move representation
//! - `CastleRights` - castling state

mod castling;
mod moves;
mod piece;
mod square;

pub use castling::CastleRights;
pub use moves::{Move, MoveList};
pub use piece::{Color, Piece};
pub use square::Square;

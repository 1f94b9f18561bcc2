//! Chess rules and a fixed-depth negamax player.
//!
//! The [`board`] module holds the position model (apply/undo, legal move
//! generation, terminal detection), the evaluator and the search.

pub mod board;

pub use board::{find_best_move, Color, GameStatus, Move, Piece, Position, Square};

//! Chess position representation, rules and search.
//!
//! An 8x8 mailbox board with in-place apply/undo, a two-phase legal move
//! generator, a static evaluator and a fixed-depth negamax search.
//!
//! # Example
//! ```
//! use mailbox_chess::board::{find_best_move, Position};
//!
//! let mut position = Position::new();
//! let moves = position.legal_moves();
//! assert_eq!(moves.len(), 20);
//!
//! let reply = find_best_move(&mut position, &moves).unwrap();
//! assert!(moves.contains(&reply));
//! ```

mod error;
mod eval;
mod fen;
mod make_unmake;
mod movegen;
mod notation;
mod perft;
pub mod prelude;
mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use error::{FenError, MoveParseError, SquareError};
pub use eval::{score_to_pawns, CHECKMATE, STALEMATE};
pub use state::{Cell, GameStatus, Position};
pub use types::{CastleRights, Color, Move, MoveList, Piece, Square};

pub use search::{find_best_move, SearchParams, SearchResult, Searcher, DEFAULT_DEPTH};

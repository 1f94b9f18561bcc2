//! Prelude module for convenient imports.
//!
//! # Example
//! ```
//! use mailbox_chess::board::prelude::*;
//!
//! let position = Position::new();
//! assert_eq!(position.side_to_move(), Color::White);
//! ```

pub use super::{
    find_best_move, CastleRights, Color, FenError, GameStatus, Move, MoveList, MoveParseError,
    Piece, Position, SearchParams, Searcher, Square,
};

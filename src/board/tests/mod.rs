//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `make_unmake.rs` - Apply/undo correctness
//! - `movegen.rs` - Move rules, castling gating, en passant, terminal states
//! - `perft.rs` - Node counts on standard positions
//! - `eval.rs` - Evaluator constants and heuristics
//! - `search.rs` - Search results and soundness
//! - `proptest.rs` - Property-based tests

mod perft;
mod proptest;

use crate::board::{CastleRights, Color, Move, Position, Square};

pub(super) const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
pub(super) const KIWIPETE: &str =
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
pub(super) const CASTLING_FEN: &str = "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1";

pub(super) fn position(fen: &str) -> Position {
    Position::from_fen(fen).unwrap_or_else(|e| panic!("bad test FEN {fen}: {e}"))
}

pub(super) fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

/// Parse and apply each coordinate move in turn.
pub(super) fn play(position: &mut Position, moves: &[&str]) -> Vec<Move> {
    moves
        .iter()
        .map(|text| {
            let mv = position
                .parse_move(text)
                .unwrap_or_else(|e| panic!("{text} rejected: {e}"));
            position.apply_move(mv);
            mv
        })
        .collect()
}

/// Everything apply/undo must restore.
#[derive(Debug, PartialEq, Eq)]
pub(super) struct Snapshot {
    fen: String,
    side: Color,
    white_king: Square,
    black_king: Square,
    en_passant: Option<Square>,
    rights: CastleRights,
    log_len: usize,
}

pub(super) fn snapshot(position: &Position) -> Snapshot {
    Snapshot {
        fen: position.to_fen(),
        side: position.side_to_move(),
        white_king: position.king_square(Color::White),
        black_king: position.king_square(Color::Black),
        en_passant: position.en_passant_target(),
        rights: position.castle_rights(),
        log_len: position.move_log().len(),
    }
}

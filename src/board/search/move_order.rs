//! Move ordering for alpha-beta.
//!
//! Non-checking captures first (most valuable victim, then least valuable
//! attacker), then checking moves, then everything else. The sort is stable
//! so earlier list order (e.g. the root shuffle) breaks ties.

use crate::board::eval::piece_value;
use crate::board::{Move, MoveList, Piece, Position};

const CAPTURE_BUCKET: u8 = 0;
const CHECK_BUCKET: u8 = 1;
const QUIET_BUCKET: u8 = 2;

pub(super) fn order_moves(position: &mut Position, moves: MoveList) -> MoveList {
    let mut keyed: Vec<((u8, i32), Move)> = moves
        .into_iter()
        .map(|mv| (ordering_key(position, mv), mv))
        .collect();
    keyed.sort_by_key(|(key, _)| *key);
    keyed.into_iter().map(|(_, mv)| mv).collect()
}

fn ordering_key(position: &mut Position, mv: Move) -> (u8, i32) {
    position.apply_move(mv);
    let gives_check = position.in_check();
    position.undo_last_move();

    if gives_check {
        (CHECK_BUCKET, 0)
    } else if let Some((_, victim)) = mv.captured() {
        (CAPTURE_BUCKET, -mvv_lva(victim, mv.piece()))
    } else {
        (QUIET_BUCKET, 0)
    }
}

#[inline]
fn mvv_lva(victim: Piece, attacker: Piece) -> i32 {
    piece_value(victim) * 10 - piece_value(attacker) / 100
}

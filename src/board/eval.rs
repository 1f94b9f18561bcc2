//! Static evaluation.
//!
//! Scores are from White's point of view and expressed in ten-thousandths
//! of a nominal unit, so a pawn is worth 100 000 and checkmate 10 000 000.

use super::{Color, Piece, Position};

/// Score of a won position (side to move is mated: Black to move => +, White => -)
pub const CHECKMATE: i32 = 10_000_000;

/// Score of a stalemate
pub const STALEMATE: i32 = 0;

/// Bound wider than any reachable score; used as the root search window.
pub(crate) const SCORE_INFINITY: i32 = 2 * CHECKMATE;

const SCORE_SCALE: f64 = 10_000.0;

/// Weight of one positional-table point (0.0003 nominal).
const POSITIONAL_WEIGHT: i32 = 3;

const REPETITION_PENALTY: i32 = 50_000;
const REPETITION_MIN_HISTORY: usize = 8;

const RECENT_CAPTURE_BONUS: i32 = 2_000;

/// Material value (nominal value x 10). The bishop is a hair above the knight
/// so the two never tie.
#[inline]
#[must_use]
pub(crate) const fn piece_value(piece: Piece) -> i32 {
    match piece {
        Piece::Pawn => 100_000,
        Piece::Knight => 300_000,
        Piece::Bishop => 301_000,
        Piece::Rook => 500_000,
        Piece::Queen => 900_000,
        Piece::King => 0,
    }
}

// Tables are written from White's side: row 0 is rank 8.
#[rustfmt::skip]
const PAWN_TABLE: [[i32; 8]; 8] = [
    [ 0,  0,   0,   0,   0,   0,  0,  0],
    [50, 50,  50,  50,  50,  50, 50, 50],
    [10, 10,  20,  30,  30,  20, 10, 10],
    [ 5,  5,  10,  25,  25,  10,  5,  5],
    [ 0,  0,   0,  20,  20,   0,  0,  0],
    [ 5, -5, -10,   0,   0, -10, -5,  5],
    [ 5, 10,  10, -20, -20,  10, 10,  5],
    [ 0,  0,   0,   0,   0,   0,  0,  0],
];

#[rustfmt::skip]
const KING_TABLE: [[i32; 8]; 8] = [
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-20, -30, -30, -40, -40, -30, -30, -20],
    [-10, -20, -20, -20, -20, -20, -20, -10],
    [ 20,  20,   0,   0,   0,   0,  20,  20],
    [ 20,  40,  10,   0,   0,  10,  30,  20],
];

/// Convert an internal score to the nominal scale (pawn = 10.0).
#[must_use]
pub fn score_to_pawns(score: i32) -> f64 {
    f64::from(score) / SCORE_SCALE
}

impl Position {
    /// Static score of the position, positive when White is better.
    ///
    /// Checkmate and stalemate are read from the flags set by the last
    /// `legal_moves` call on this position, so call that first when the
    /// position may be terminal.
    #[must_use]
    pub fn evaluate(&self) -> i32 {
        if self.in_checkmate {
            return match self.side_to_move {
                Color::White => -CHECKMATE,
                Color::Black => CHECKMATE,
            };
        }
        if self.in_stalemate {
            return STALEMATE;
        }

        let mut score = 0;
        for (sq, color, piece) in self.pieces() {
            let table_sq = match color {
                Color::White => sq,
                Color::Black => sq.flip_vertical(),
            };
            let positional = match piece {
                Piece::Pawn => PAWN_TABLE[table_sq.row()][table_sq.col()],
                Piece::King => KING_TABLE[table_sq.row()][table_sq.col()],
                _ => 0,
            };
            score += color.sign() * (piece_value(piece) + positional * POSITIONAL_WEIGHT);
        }

        score + self.history_adjustment()
    }

    /// Repetition penalty and recent-capture bonus, both read from the move log.
    fn history_adjustment(&self) -> i32 {
        let log = &self.move_log;
        let mut adjustment = 0;

        // Same side, two full turns back.
        if log.len() >= REPETITION_MIN_HISTORY {
            let last = log[log.len() - 1];
            let earlier = log[log.len() - 5];
            if last.from() == earlier.from() && last.to() == earlier.to() {
                adjustment -= REPETITION_PENALTY;
            }
        }

        if let Some(last) = log.last() {
            if last.is_capture() {
                adjustment += last.color().sign() * RECENT_CAPTURE_BONUS;
            }
        }

        adjustment
    }
}

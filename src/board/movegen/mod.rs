//! Move generation.
//!
//! Two phases: per-kind pseudo-legal rules (`pawns`, `knights`, `sliders`,
//! `kings`) plus castling candidates, then a filter that plays each candidate
//! and discards it if the mover's king is left attacked.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::{Color, GameStatus, Move, MoveList, Piece, Position, Square};

use sliders::{BISHOP_DIRECTIONS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS};

impl Position {
    /// All legal moves for the side to move.
    ///
    /// Also refreshes `in_checkmate` / `in_stalemate`: exactly one of them is
    /// set when the returned list is empty.
    pub fn legal_moves(&mut self) -> MoveList {
        self.in_checkmate = false;
        self.in_stalemate = false;

        let saved_en_passant = self.en_passant_target;
        let saved_rights = self.castle_rights;

        let mover = self.side_to_move;
        let mut moves = self.pseudo_legal_moves(mover);
        self.generate_castle_moves(mover, &mut moves);

        moves.retain(|&mv| self.keeps_king_safe(mv));

        self.en_passant_target = saved_en_passant;
        self.castle_rights = saved_rights;

        if moves.is_empty() {
            if self.in_check() {
                self.in_checkmate = true;
            } else {
                self.in_stalemate = true;
            }
        }
        moves
    }

    /// Play `mv`, test the mover's king, take it back.
    fn keeps_king_safe(&mut self, mv: Move) -> bool {
        let mover = mv.color();
        self.apply_move(mv);
        let safe = !self.is_square_attacked(self.king_square(mover), mover.opponent());
        self.undo_last_move();
        safe
    }

    /// True iff the side to move's king is attacked.
    #[must_use]
    pub fn in_check(&self) -> bool {
        let side = self.side_to_move;
        self.is_square_attacked(self.king_square(side), side.opponent())
    }

    /// True iff any piece of `by` attacks `square`.
    ///
    /// Uses pseudo-legal generation only (never the legality filter), with
    /// pawns contributing their diagonal attack squares.
    #[must_use]
    pub fn is_square_attacked(&self, square: Square, by: Color) -> bool {
        let mut scratch = MoveList::with_capacity(32);
        for (from, color, piece) in self.pieces() {
            if color != by {
                continue;
            }
            if piece == Piece::Pawn {
                if pawns::attack_squares(from, color).any(|sq| sq == square) {
                    return true;
                }
                continue;
            }
            scratch.clear();
            self.generate_piece_moves(from, color, piece, &mut scratch);
            if scratch.iter().any(|mv| mv.to() == square) {
                return true;
            }
        }
        false
    }

    /// Pseudo-legal moves for `color`, castling excluded.
    pub(crate) fn pseudo_legal_moves(&self, color: Color) -> MoveList {
        let mut moves = MoveList::with_capacity(64);
        for (from, owner, piece) in self.pieces() {
            if owner == color {
                self.generate_piece_moves(from, color, piece, &mut moves);
            }
        }
        moves
    }

    fn generate_piece_moves(&self, from: Square, color: Color, piece: Piece, moves: &mut MoveList) {
        match piece {
            Piece::Pawn => self.generate_pawn_moves(from, color, moves),
            Piece::Knight => self.generate_knight_moves(from, color, moves),
            Piece::Bishop => {
                self.generate_sliding_moves(from, (color, piece), &BISHOP_DIRECTIONS, moves)
            }
            Piece::Rook => self.generate_sliding_moves(from, (color, piece), &ROOK_DIRECTIONS, moves),
            Piece::Queen => {
                self.generate_sliding_moves(from, (color, piece), &QUEEN_DIRECTIONS, moves)
            }
            Piece::King => self.generate_king_moves(from, color, moves),
        }
    }

    /// Push a move onto `to` unless a friendly piece stands there.
    /// Returns true when `to` was empty, so rays may continue past it.
    #[inline]
    fn push_unless_friendly(
        &self,
        from: Square,
        to: Square,
        moved: (Color, Piece),
        moves: &mut MoveList,
    ) -> bool {
        match self.piece_at(to) {
            None => {
                moves.push(Move::new(from, to, moved, None));
                true
            }
            Some((owner, _)) if owner == moved.0 => false,
            captured => {
                moves.push(Move::new(from, to, moved, captured));
                false
            }
        }
    }

    /// Checkmate, stalemate or still in play, for the side to move.
    ///
    /// Reads the flags left by the most recent `legal_moves` call.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.in_checkmate {
            GameStatus::Checkmate {
                winner: self.side_to_move.opponent(),
            }
        } else if self.in_stalemate {
            GameStatus::Stalemate
        } else {
            GameStatus::Ongoing
        }
    }
}

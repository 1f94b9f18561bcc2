use super::{CastleRights, Move, Piece, Position, Square};

/// Rook origin and destination for a castling move.
#[inline]
pub(crate) fn castle_rook_squares(mv: Move) -> (Square, Square) {
    let row = mv.to().row();
    if mv.is_castle_kingside() {
        (Square(row, 7), Square(row, 5))
    } else {
        (Square(row, 0), Square(row, 3))
    }
}

/// Square of the pawn removed by an en passant capture.
#[inline]
pub(crate) fn en_passant_victim(mv: Move) -> Square {
    Square(mv.from().row(), mv.to().col())
}

impl Position {
    /// Apply a move produced by `legal_moves` for this position.
    ///
    /// Handles queen promotion, the rook half of castling and the pawn removed
    /// by en passant, then records everything `undo_last_move` needs and passes
    /// the turn.
    pub fn apply_move(&mut self, mv: Move) {
        let (color, piece) = mv.moved();

        self.set(mv.from(), None);
        let placed = if mv.is_promotion() {
            (color, Piece::Queen)
        } else {
            mv.moved()
        };
        self.set(mv.to(), Some(placed));

        if piece == Piece::King {
            self.set_king_square(color, mv.to());
        }

        if mv.is_castling() {
            let (rook_from, rook_to) = castle_rook_squares(mv);
            let rook = self.piece_at(rook_from);
            self.set(rook_to, rook);
            self.set(rook_from, None);
        }

        if mv.is_en_passant() {
            self.set(en_passant_victim(mv), None);
        }

        self.en_passant_target =
            if piece == Piece::Pawn && mv.from().row().abs_diff(mv.to().row()) == 2 {
                Some(Square(
                    (mv.from().row() + mv.to().row()) / 2,
                    mv.from().col(),
                ))
            } else {
                None
            };

        self.update_castle_rights(mv);
        self.castle_rights_log.push(self.castle_rights);
        self.en_passant_log.push(self.en_passant_target);
        self.move_log.push(mv);
        self.side_to_move = color.opponent();

        debug_assert!(self.king_cache_consistent(), "king cache out of sync after {mv:?}");
    }

    /// Take back the most recent move. Returns `None` (and changes nothing)
    /// when no move has been applied.
    pub fn undo_last_move(&mut self) -> Option<Move> {
        let mv = self.move_log.pop()?;
        let (color, piece) = mv.moved();

        self.set(mv.from(), Some(mv.moved()));
        self.set(mv.to(), mv.captured());
        self.side_to_move = color;

        if piece == Piece::King {
            self.set_king_square(color, mv.from());
        }

        if mv.is_en_passant() {
            self.set(mv.to(), None);
            self.set(en_passant_victim(mv), mv.captured());
        }

        self.en_passant_log.pop();
        self.en_passant_target = self.en_passant_log.last().copied().flatten();

        self.castle_rights_log.pop();
        self.castle_rights = match self.castle_rights_log.last() {
            Some(rights) => *rights,
            None => {
                // Only reachable if the history was corrupted.
                log::warn!("castle rights history empty while undoing {mv:?}; granting all rights");
                CastleRights::all()
            }
        };

        if mv.is_castling() {
            let (rook_from, rook_to) = castle_rook_squares(mv);
            let rook = self.piece_at(rook_to);
            self.set(rook_from, rook);
            self.set(rook_to, None);
        }

        self.in_checkmate = false;
        self.in_stalemate = false;

        debug_assert!(self.king_cache_consistent(), "king cache out of sync undoing {mv:?}");
        Some(mv)
    }

    fn update_castle_rights(&mut self, mv: Move) {
        let (color, piece) = mv.moved();
        match piece {
            Piece::King => self.castle_rights.remove_color(color),
            Piece::Rook if mv.from().row() == color.back_row() => match mv.from().col() {
                0 => self.castle_rights.remove(color, false),
                7 => self.castle_rights.remove(color, true),
                _ => {}
            },
            _ => {}
        }

        if let Some((victim, Piece::Rook)) = mv.captured() {
            if mv.to().row() == victim.back_row() {
                match mv.to().col() {
                    0 => self.castle_rights.remove(victim, false),
                    7 => self.castle_rights.remove(victim, true),
                    _ => {}
                }
            }
        }
    }
}

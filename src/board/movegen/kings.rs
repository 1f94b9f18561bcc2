use super::super::{Color, Move, MoveList, Piece, Position, Square};

pub(super) const KING_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

impl Position {
    pub(super) fn generate_king_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        for &(dr, dc) in &KING_OFFSETS {
            if let Some(to) = from.offset(dr, dc) {
                self.push_unless_friendly(from, to, (color, Piece::King), moves);
            }
        }
    }

    /// Append castling candidates for `color`.
    ///
    /// Requires the matching right, the rook at home, empty squares between
    /// king and rook, and the king's start, transit and destination squares
    /// all unattacked.
    pub(super) fn generate_castle_moves(&self, color: Color, moves: &mut MoveList) {
        let row = color.back_row();
        let king = self.king_square(color);
        if king != Square(row, 4) {
            return;
        }
        let enemy = color.opponent();
        if self.is_square_attacked(king, enemy) {
            return;
        }
        let rook = Some((color, Piece::Rook));

        if self.castle_rights.has(color, true)
            && self.piece_at(Square(row, 7)) == rook
            && self.is_empty(Square(row, 5))
            && self.is_empty(Square(row, 6))
            && !self.is_square_attacked(Square(row, 5), enemy)
            && !self.is_square_attacked(Square(row, 6), enemy)
        {
            moves.push(Move::castle(king, Square(row, 6), color));
        }

        if self.castle_rights.has(color, false)
            && self.piece_at(Square(row, 0)) == rook
            && self.is_empty(Square(row, 1))
            && self.is_empty(Square(row, 2))
            && self.is_empty(Square(row, 3))
            && !self.is_square_attacked(Square(row, 3), enemy)
            && !self.is_square_attacked(Square(row, 2), enemy)
        {
            moves.push(Move::castle(king, Square(row, 2), color));
        }
    }
}

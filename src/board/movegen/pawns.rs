use super::super::{Color, Move, MoveList, Piece, Position, Square};

/// Squares a pawn of `color` on `from` attacks diagonally.
pub(super) fn attack_squares(from: Square, color: Color) -> impl Iterator<Item = Square> {
    let dr = color.pawn_direction();
    [-1, 1].into_iter().filter_map(move |dc| from.offset(dr, dc))
}

impl Position {
    pub(super) fn generate_pawn_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        let dir = color.pawn_direction();

        if let Some(one) = from.offset(dir, 0) {
            if self.is_empty(one) {
                moves.push(Move::new(from, one, (color, Piece::Pawn), None));
                if from.row() == color.pawn_start_row() {
                    if let Some(two) = one.offset(dir, 0) {
                        if self.is_empty(two) {
                            moves.push(Move::new(from, two, (color, Piece::Pawn), None));
                        }
                    }
                }
            }
        }

        for target in attack_squares(from, color) {
            match self.piece_at(target) {
                captured @ Some((owner, _)) if owner != color => {
                    moves.push(Move::new(from, target, (color, Piece::Pawn), captured));
                }
                None if self.en_passant_target == Some(target) => {
                    moves.push(Move::en_passant(from, target, color));
                }
                _ => {}
            }
        }
    }
}

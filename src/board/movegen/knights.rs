use super::super::{Color, MoveList, Piece, Position, Square};

pub(super) const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

impl Position {
    pub(super) fn generate_knight_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        for &(dr, dc) in &KNIGHT_OFFSETS {
            if let Some(to) = from.offset(dr, dc) {
                self.push_unless_friendly(from, to, (color, Piece::Knight), moves);
            }
        }
    }
}

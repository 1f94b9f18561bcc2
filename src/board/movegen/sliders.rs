use super::super::{Color, MoveList, Piece, Position, Square};

pub(super) const ROOK_DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

pub(super) const BISHOP_DIRECTIONS: [(isize, isize); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

pub(super) const QUEEN_DIRECTIONS: [(isize, isize); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

impl Position {
    /// Cast a ray per direction, stopping at the first occupied square
    /// (included when it holds an enemy piece).
    pub(super) fn generate_sliding_moves(
        &self,
        from: Square,
        moved: (Color, Piece),
        directions: &[(isize, isize)],
        moves: &mut MoveList,
    ) {
        for &(dr, dc) in directions {
            let mut current = from;
            while let Some(to) = current.offset(dr, dc) {
                if !self.push_unless_friendly(from, to, moved, moves) {
                    break;
                }
                current = to;
            }
        }
    }
}

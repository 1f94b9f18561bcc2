//! Move type and move list.

use std::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{Color, Piece};
use super::square::Square;

/// Moves returned by generation.
pub type MoveList = Vec<Move>;

/// One ply: origin, destination, the piece moved, the piece captured and flags.
///
/// Identity is (from, to, promotion): two moves compare equal iff these match.
/// The captured piece and special flags are recorded but ignored by `==`.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    from: Square,
    to: Square,
    moved: (Color, Piece),
    captured: Option<(Color, Piece)>,
    is_en_passant: bool,
    is_castling: bool,
    is_promotion: bool,
}

impl Move {
    /// Create an ordinary move or capture. The promotion flag is derived from
    /// a pawn reaching its last row.
    #[must_use]
    pub fn new(
        from: Square,
        to: Square,
        moved: (Color, Piece),
        captured: Option<(Color, Piece)>,
    ) -> Self {
        let (color, piece) = moved;
        Move {
            from,
            to,
            moved,
            captured,
            is_en_passant: false,
            is_castling: false,
            is_promotion: piece == Piece::Pawn && to.row() == color.promotion_row(),
        }
    }

    /// Create an en passant capture; the captured pawn sits beside `from`,
    /// not on `to`.
    #[must_use]
    pub fn en_passant(from: Square, to: Square, color: Color) -> Self {
        Move {
            from,
            to,
            moved: (color, Piece::Pawn),
            captured: Some((color.opponent(), Piece::Pawn)),
            is_en_passant: true,
            is_castling: false,
            is_promotion: false,
        }
    }

    /// Create a castling move, described by the king's two squares.
    #[must_use]
    pub fn castle(from: Square, to: Square, color: Color) -> Self {
        Move {
            from,
            to,
            moved: (color, Piece::King),
            captured: None,
            is_en_passant: false,
            is_castling: true,
            is_promotion: false,
        }
    }

    #[inline]
    #[must_use]
    pub const fn from(self) -> Square {
        self.from
    }

    #[inline]
    #[must_use]
    pub const fn to(self) -> Square {
        self.to
    }

    /// Color and kind of the moving piece
    #[inline]
    #[must_use]
    pub const fn moved(self) -> (Color, Piece) {
        self.moved
    }

    #[inline]
    #[must_use]
    pub const fn piece(self) -> Piece {
        self.moved.1
    }

    #[inline]
    #[must_use]
    pub const fn color(self) -> Color {
        self.moved.0
    }

    /// Color and kind of the captured piece, if any
    #[inline]
    #[must_use]
    pub const fn captured(self) -> Option<(Color, Piece)> {
        self.captured
    }

    #[inline]
    #[must_use]
    pub const fn is_capture(self) -> bool {
        self.captured.is_some()
    }

    #[inline]
    #[must_use]
    pub const fn is_en_passant(self) -> bool {
        self.is_en_passant
    }

    #[inline]
    #[must_use]
    pub const fn is_castling(self) -> bool {
        self.is_castling
    }

    #[inline]
    #[must_use]
    pub const fn is_castle_kingside(self) -> bool {
        self.is_castling && self.to.1 > self.from.1
    }

    /// Pawn reaching its last row. Promotion is always to a queen.
    #[inline]
    #[must_use]
    pub const fn is_promotion(self) -> bool {
        self.is_promotion
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from && self.to == other.to && self.is_promotion == other.is_promotion
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.from.hash(state);
        self.to.hash(state);
        self.is_promotion.hash(state);
    }
}

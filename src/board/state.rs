use super::{CastleRights, Color, Move, Piece, Square};

/// Contents of one board square; `None` is the empty marker.
pub type Cell = Option<(Color, Piece)>;

/// Outcome of the position for the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Checkmate { winner: Color },
    Stalemate,
}

/// Board, side to move and the auxiliary state needed for exact undo.
///
/// A single `Position` is walked in place by search: every `apply_move` must
/// be paired with an `undo_last_move` before the caller returns. It is not
/// safe to share one instance between concurrent searches; clone it instead.
#[derive(Clone, Debug)]
pub struct Position {
    pub(crate) squares: [[Cell; 8]; 8],
    pub(crate) side_to_move: Color,
    pub(crate) white_king: Square,
    pub(crate) black_king: Square,
    pub(crate) en_passant_target: Option<Square>,
    /// One entry per applied move plus the starting value.
    pub(crate) en_passant_log: Vec<Option<Square>>,
    pub(crate) castle_rights: CastleRights,
    /// One snapshot per applied move plus the starting value.
    pub(crate) castle_rights_log: Vec<CastleRights>,
    pub(crate) move_log: Vec<Move>,
    pub(crate) in_checkmate: bool,
    pub(crate) in_stalemate: bool,
}

impl Position {
    /// The standard starting arrangement, White to move.
    #[must_use]
    pub fn new() -> Self {
        let mut position = Position::empty();
        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for (col, piece) in back_rank.iter().enumerate() {
            position.squares[0][col] = Some((Color::Black, *piece));
            position.squares[1][col] = Some((Color::Black, Piece::Pawn));
            position.squares[6][col] = Some((Color::White, Piece::Pawn));
            position.squares[7][col] = Some((Color::White, *piece));
        }
        position.white_king = Square(7, 4);
        position.black_king = Square(0, 4);
        position.castle_rights = CastleRights::all();
        position.reset_history();
        position
    }

    pub(crate) fn empty() -> Self {
        Position {
            squares: [[None; 8]; 8],
            side_to_move: Color::White,
            white_king: Square(7, 4),
            black_king: Square(0, 4),
            en_passant_target: None,
            en_passant_log: vec![None],
            castle_rights: CastleRights::none(),
            castle_rights_log: vec![CastleRights::none()],
            move_log: Vec::new(),
            in_checkmate: false,
            in_stalemate: false,
        }
    }

    /// Restart the undo history from the current state.
    pub(crate) fn reset_history(&mut self) {
        self.en_passant_log = vec![self.en_passant_target];
        self.castle_rights_log = vec![self.castle_rights];
        self.move_log.clear();
        self.in_checkmate = false;
        self.in_stalemate = false;
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Cell {
        self.squares[sq.0][sq.1]
    }

    #[inline]
    pub(crate) fn set(&mut self, sq: Square, cell: Cell) {
        self.squares[sq.0][sq.1] = cell;
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.squares[sq.0][sq.1].is_none()
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    #[must_use]
    pub fn white_to_move(&self) -> bool {
        self.side_to_move == Color::White
    }

    /// Cached king location for a color
    #[inline]
    #[must_use]
    pub fn king_square(&self, color: Color) -> Square {
        match color {
            Color::White => self.white_king,
            Color::Black => self.black_king,
        }
    }

    #[inline]
    pub(crate) fn set_king_square(&mut self, color: Color, sq: Square) {
        match color {
            Color::White => self.white_king = sq,
            Color::Black => self.black_king = sq,
        }
    }

    #[inline]
    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    #[inline]
    #[must_use]
    pub fn castle_rights(&self) -> CastleRights {
        self.castle_rights
    }

    /// Moves applied so far, oldest first
    #[inline]
    #[must_use]
    pub fn move_log(&self) -> &[Move] {
        &self.move_log
    }

    #[inline]
    #[must_use]
    pub fn last_move(&self) -> Option<Move> {
        self.move_log.last().copied()
    }

    /// Set by the most recent `legal_moves` call; cleared by undo.
    #[inline]
    #[must_use]
    pub fn in_checkmate(&self) -> bool {
        self.in_checkmate
    }

    /// Set by the most recent `legal_moves` call; cleared by undo.
    #[inline]
    #[must_use]
    pub fn in_stalemate(&self) -> bool {
        self.in_stalemate
    }

    /// Iterate over every occupied square with its piece
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Color, Piece)> + '_ {
        (0..8).flat_map(move |row| {
            (0..8).filter_map(move |col| {
                self.squares[row][col].map(|(color, piece)| (Square(row, col), color, piece))
            })
        })
    }

    /// True when both cached king squares hold the matching king.
    #[must_use]
    pub fn king_cache_consistent(&self) -> bool {
        Color::BOTH
            .iter()
            .all(|&color| self.piece_at(self.king_square(color)) == Some((color, Piece::King)))
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::new()
    }
}

use std::str::FromStr;

use super::error::FenError;
use super::{CastleRights, Color, Piece, Position, Square};

impl Position {
    /// Parse a position from FEN notation.
    ///
    /// Only the first four fields are interpreted; the move counters are
    /// accepted and ignored. Castling flags whose king or rook is not on its
    /// home square are dropped.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let mut position = Position::empty();
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.len() < 4 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        // Piece placement: first rank listed is rank 8, which is row 0.
        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::WrongRankCount { found: ranks.len() });
        }
        let mut kings = [Vec::new(), Vec::new()];
        for (row, rank_str) in ranks.iter().enumerate() {
            let mut col = 0;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    col += skip as usize;
                    continue;
                }
                let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                let color = if c.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                if col >= 8 {
                    return Err(FenError::WrongFileCount {
                        rank: 8 - row,
                        files: col + 1,
                    });
                }
                let sq = Square(row, col);
                if piece == Piece::King {
                    kings[usize::from(color == Color::Black)].push(sq);
                }
                position.set(sq, Some((color, piece)));
                col += 1;
            }
            if col != 8 {
                return Err(FenError::WrongFileCount {
                    rank: 8 - row,
                    files: col,
                });
            }
        }

        for color in Color::BOTH {
            let found = &kings[usize::from(color == Color::Black)];
            if found.len() != 1 {
                return Err(FenError::KingCount {
                    color,
                    found: found.len(),
                });
            }
            position.set_king_square(color, found[0]);
        }

        position.side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        let mut rights = CastleRights::none();
        for c in parts[2].chars() {
            match c {
                'K' => rights.set(Color::White, true),
                'Q' => rights.set(Color::White, false),
                'k' => rights.set(Color::Black, true),
                'q' => rights.set(Color::Black, false),
                '-' => {}
                _ => return Err(FenError::InvalidCastling { char: c }),
            }
        }
        position.castle_rights = position.sanitize_castle_rights(rights);

        position.en_passant_target = if parts[3] == "-" {
            None
        } else {
            let invalid = || FenError::InvalidEnPassant {
                found: parts[3].to_string(),
            };
            let sq: Square = parts[3].parse().map_err(|_| invalid())?;
            let expected_row = match position.side_to_move {
                Color::White => 2,
                Color::Black => 5,
            };
            // The pawn that just double-stepped sits one row past the target.
            let pusher = position.side_to_move.opponent();
            let victim = sq.offset(-position.side_to_move.pawn_direction(), 0);
            if sq.row() != expected_row
                || !position.is_empty(sq)
                || victim.and_then(|v| position.piece_at(v)) != Some((pusher, Piece::Pawn))
            {
                return Err(invalid());
            }
            Some(sq)
        };

        let waiting = position.side_to_move.opponent();
        if position.is_square_attacked(position.king_square(waiting), position.side_to_move) {
            return Err(FenError::OpponentInCheck { color: waiting });
        }

        position.reset_history();
        Ok(position)
    }

    fn sanitize_castle_rights(&self, mut rights: CastleRights) -> CastleRights {
        for color in Color::BOTH {
            let row = color.back_row();
            let king_home = self.piece_at(Square(row, 4)) == Some((color, Piece::King));
            for (kingside, rook_col) in [(true, 7), (false, 0)] {
                let rook_home = self.piece_at(Square(row, rook_col)) == Some((color, Piece::Rook));
                if !(king_home && rook_home) {
                    rights.remove(color, kingside);
                }
            }
        }
        rights
    }

    /// Convert the position to FEN notation.
    ///
    /// The halfmove clock is always 0; the fullmove number counts from the
    /// position the move log started at.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for row in 0..8 {
            let mut text = String::new();
            let mut empty = 0;
            for col in 0..8 {
                if let Some((color, piece)) = self.piece_at(Square(row, col)) {
                    if empty > 0 {
                        text.push_str(&empty.to_string());
                        empty = 0;
                    }
                    text.push(piece.to_fen_char(color));
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                text.push_str(&empty.to_string());
            }
            rows.push(text);
        }

        let active = if self.white_to_move() { "w" } else { "b" };
        let mut castling = String::new();
        for (color, kingside, c) in [
            (Color::White, true, 'K'),
            (Color::White, false, 'Q'),
            (Color::Black, true, 'k'),
            (Color::Black, false, 'q'),
        ] {
            if self.castle_rights.has(color, kingside) {
                castling.push(c);
            }
        }
        if castling.is_empty() {
            castling.push('-');
        }
        let ep = self
            .en_passant_target
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{} {} {} {} 0 {}",
            rows.join("/"),
            active,
            castling,
            ep,
            self.move_log.len() / 2 + 1
        )
    }
}

impl FromStr for Position {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::from_fen(s)
    }
}

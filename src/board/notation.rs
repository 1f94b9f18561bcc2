//! Move notation and text rendering.
//!
//! Display notation is informational only: piece letter plus destination,
//! "x" for captures, pawn captures prefixed by their file, "O-O"/"O-O-O" for
//! castling. No disambiguation or check markers. Input uses coordinate
//! notation ("e2e4").

use std::fmt;

use super::error::MoveParseError;
use super::{Move, Piece, Position, Square};

impl Move {
    /// Origin and destination squares, e.g. "g1f3".
    #[must_use]
    pub fn coordinate_notation(&self) -> String {
        format!("{}{}", self.from(), self.to())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_castling() {
            return f.write_str(if self.is_castle_kingside() {
                "O-O"
            } else {
                "O-O-O"
            });
        }

        if self.piece() == Piece::Pawn {
            return if self.is_capture() {
                write!(f, "{}x{}", self.from().file_char(), self.to())
            } else {
                write!(f, "{}", self.to())
            };
        }

        let letter = self.piece().to_char().to_ascii_uppercase();
        if self.is_capture() {
            write!(f, "{letter}x{}", self.to())
        } else {
            write!(f, "{letter}{}", self.to())
        }
    }
}

impl Position {
    /// The legal move from `from` to `to`, if there is one.
    ///
    /// External moves must go through this (or `parse_move`) before being
    /// applied: equality against the legal list is the only validation.
    pub fn find_legal_move(&mut self, from: Square, to: Square) -> Option<Move> {
        self.legal_moves()
            .into_iter()
            .find(|mv| mv.from() == from && mv.to() == to)
    }

    /// Parse a coordinate move ("e2e4") and validate it against the legal moves.
    ///
    /// # Example
    /// ```
    /// use mailbox_chess::board::Position;
    ///
    /// let mut position = Position::new();
    /// let mv = position.parse_move("g1f3").unwrap();
    /// assert_eq!(mv.to_string(), "Nf3");
    /// assert!(position.parse_move("e2e5").is_err());
    /// ```
    pub fn parse_move(&mut self, text: &str) -> Result<Move, MoveParseError> {
        let text = text.trim();
        if text.len() != 4 {
            return Err(MoveParseError::InvalidLength { len: text.len() });
        }
        let invalid = || MoveParseError::InvalidSquare {
            notation: text.to_string(),
        };
        let from: Square = text.get(0..2).ok_or_else(invalid)?.parse().map_err(|_| invalid())?;
        let to: Square = text.get(2..4).ok_or_else(invalid)?.parse().map_err(|_| invalid())?;

        self.find_legal_move(from, to)
            .ok_or_else(|| MoveParseError::IllegalMove {
                notation: text.to_string(),
            })
    }
}

impl fmt::Display for Position {
    /// ASCII board, rank 8 on top, White in uppercase.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..8 {
            write!(f, "{} ", 8 - row)?;
            for col in 0..8 {
                let c = self
                    .piece_at(Square(row, col))
                    .map_or('.', |(color, piece)| piece.to_fen_char(color));
                write!(f, " {c}")?;
            }
            writeln!(f)?;
        }
        writeln!(f, "   a b c d e f g h")
    }
}

use std::str::FromStr;

use super::error::{FenError, MoveParseError};
use super::{Board, CastlingRights, Color, Move, Piece, Square};

impl Board {
    /// Parse a board position from FEN notation.
    ///
    /// The half-move clock and full-move number are optional and default to
    /// 0 and 1. Returns an error if the FEN string is invalid; no partially
    /// decoded board is ever returned.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let mut board = Board::empty();
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.len() < 4 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }
        if parts.len() > 6 {
            return Err(FenError::TooManyParts { found: parts.len() });
        }

        // Piece placement, rank 8 first
        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::WrongRankCount { found: ranks.len() });
        }
        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - rank_idx;
            let mut file = 0;
            for c in rank_str.chars() {
                match c {
                    '1'..='8' => file += c as usize - '0' as usize,
                    _ => {
                        let (color, piece) =
                            Piece::from_fen_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                        if let Some(sq) = Square::new(rank, file) {
                            board.set_piece(sq, color, piece);
                        }
                        file += 1;
                    }
                }
            }
            if file != 8 {
                return Err(FenError::BadRankLength {
                    rank: rank + 1,
                    squares: file,
                });
            }
        }

        board.side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        board.castling_rights = CastlingRights::from_fen_field(parts[2])
            .map_err(|c| FenError::InvalidCastling { char: c })?;

        board.en_passant_target = match parts[3] {
            "-" => None,
            field => Some(field.parse().map_err(|_| FenError::InvalidEnPassant {
                found: field.to_string(),
            })?),
        };

        if let Some(field) = parts.get(4) {
            board.halfmove_clock = parse_counter(field, "half-move clock")?;
        }
        if let Some(field) = parts.get(5) {
            board.fullmove_number = parse_counter(field, "full-move number")?;
        }

        Ok(board)
    }

    /// Convert the board position to FEN notation, all six fields.
    #[must_use]
    pub fn to_fen(&self) -> String {
        format!(
            "{} {} {} {} {} {}",
            self.placement_fen(),
            self.side_to_move.fen_char(),
            self.castling_rights,
            self.en_passant_target
                .map_or_else(|| "-".to_string(), |sq| sq.to_string()),
            self.halfmove_clock,
            self.fullmove_number
        )
    }

    /// First FEN field only.
    #[must_use]
    pub fn placement_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                if let Some((color, piece)) = self.piece_at(Square::at(rank, file)) {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(piece.to_fen_char(color));
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }
        rows.join("/")
    }

    /// Position identity for repetition counting: the first four FEN fields.
    #[must_use]
    pub fn position_key(&self) -> String {
        let fen = self.to_fen();
        fen.split(' ').take(4).collect::<Vec<_>>().join(" ")
    }

    /// Parse move text (e.g., "e2e4", "e7e8q") and resolve it against the
    /// legal moves of this position.
    ///
    /// # Example
    /// ```
    /// use chess_rules::board::Board;
    ///
    /// let board = Board::new();
    /// let mv = board.parse_move("e2e4").unwrap();
    /// assert_eq!(mv.to_string(), "e2e4");
    /// ```
    pub fn parse_move(&self, text: &str) -> Result<Move, MoveParseError> {
        let candidate: Move = text.parse()?;
        if self.generate_legal_moves().contains(candidate) {
            Ok(candidate)
        } else {
            Err(MoveParseError::IllegalMove {
                notation: text.to_string(),
            })
        }
    }

    /// Parse move text and make it on the board in one call.
    ///
    /// The board is untouched when the text is malformed or the move is illegal.
    ///
    /// # Example
    /// ```
    /// use chess_rules::board::Board;
    ///
    /// let mut board = Board::new();
    /// board.make_move_str("e2e4").unwrap();
    /// board.make_move_str("e7e5").unwrap();
    /// ```
    pub fn make_move_str(&mut self, text: &str) -> Result<Move, MoveParseError> {
        let mv = self.parse_move(text)?;
        self.make_move(mv);
        Ok(mv)
    }
}

fn parse_counter(field: &str, name: &'static str) -> Result<u32, FenError> {
    field.parse().map_err(|_| FenError::InvalidCounter {
        field: name,
        found: field.to_string(),
    })
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::try_from_fen(s)
    }
}

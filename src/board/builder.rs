//! Fluent builder for constructing chess positions.
//!
//! Places pieces one by one instead of going through FEN text.
//!
//! # Example
//! ```
//! use chess_rules::board::{BoardBuilder, CastleSide, Color, Piece, Square};
//!
//! let e1: Square = "e1".parse().unwrap();
//! let h1: Square = "h1".parse().unwrap();
//! let e8: Square = "e8".parse().unwrap();
//! let board = BoardBuilder::new()
//!     .piece(e1, Color::White, Piece::King)
//!     .piece(h1, Color::White, Piece::Rook)
//!     .piece(e8, Color::Black, Piece::King)
//!     .castle(Color::White, CastleSide::Kingside)
//!     .build();
//! assert_eq!(board.to_fen(), "4k3/8/8/8/8/8/8/4K2R w K - 0 1");
//! ```

use super::{Board, CastleSide, CastlingRights, Color, Piece, Square};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    board: Board,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Start from an empty board, White to move.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            board: Board::empty(),
        }
    }

    /// Start from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        BoardBuilder {
            board: Board::new(),
        }
    }

    /// Start from an existing position.
    #[must_use]
    pub fn from_board(board: Board) -> Self {
        BoardBuilder { board }
    }

    /// Place a piece, replacing anything already on the square.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        self.board.set_piece(square, color, piece);
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.board.clear_square(square);
        self
    }

    #[must_use]
    pub fn side_to_move(mut self, color: Color) -> Self {
        self.board.set_side_to_move(color);
        self
    }

    /// Replace all castling rights.
    #[must_use]
    pub fn castling(mut self, rights: CastlingRights) -> Self {
        self.board.set_castling_rights(rights);
        self
    }

    /// Grant one castling right.
    #[must_use]
    pub fn castle(mut self, color: Color, side: CastleSide) -> Self {
        let mut rights = self.board.castling_rights();
        rights.set(color, side);
        self.board.set_castling_rights(rights);
        self
    }

    #[must_use]
    pub fn no_castling_rights(self) -> Self {
        self.castling(CastlingRights::none())
    }

    #[must_use]
    pub fn en_passant(mut self, target: Square) -> Self {
        self.board.set_en_passant_target(Some(target));
        self
    }

    /// Set the half-move clock (for the fifty-move rule).
    #[must_use]
    pub fn halfmove_clock(mut self, clock: u32) -> Self {
        let fullmove = self.board.fullmove_number();
        self.board.set_counters(clock, fullmove);
        self
    }

    #[must_use]
    pub fn fullmove_number(mut self, number: u32) -> Self {
        let clock = self.board.halfmove_clock();
        self.board.set_counters(clock, number);
        self
    }

    #[must_use]
    pub fn build(self) -> Board {
        self.board
    }
}

//! Prelude module for convenient imports.
//!
//! # Example
//! ```
//! use chess_rules::board::prelude::*;
//!
//! let board = Board::new();
//! assert_eq!(board.side_to_move(), Color::White);
//! ```

pub use super::{
    Board, BoardBuilder, CastleSide, CastlingRights, Color, FenError, Move, MoveList,
    MoveParseError, Piece, Square, SquareError,
};

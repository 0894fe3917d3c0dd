//! Chess board representation and rules.
//!
//! Mailbox board with FEN conversion, attack detection, make/unmake and legal
//! move generation. Supports full chess rules including castling, en passant,
//! and promotions.
//!
//! # Example
//! ```
//! use chess_rules::board::Board;
//!
//! let mut board = Board::new();
//! let moves = board.generate_legal_moves();
//! println!("Starting position has {} legal moves", moves.len());
//! board.make_move(moves[0]);
//! ```

mod attacks;
mod builder;
mod error;
mod fen;
mod make_unmake;
mod movegen;
pub mod prelude;
mod state;
mod tables;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{FenError, MoveParseError, SquareError};
pub use state::{Board, BoardSnapshot, UnmakeInfo, START_FEN};
pub use types::{
    CastleSide, CastlingRights, Color, Move, MoveList, MoveListIntoIter, Piece, Square,
    PROMOTION_PIECES,
};

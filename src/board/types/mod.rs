//! Core chess types.
//!
//! - `Piece` and `Color` - piece kinds and sides
//! - `Square` - an on-board (rank, file) coordinate
//! - `Move` and `MoveList` - move representation
//! - `CastlingRights` and `CastleSide` - castling state

mod castling;
mod moves;
mod piece;
mod square;

pub use castling::{CastleSide, CastlingRights};
pub use moves::{Move, MoveList, MoveListIntoIter};
pub use piece::{Color, Piece, PROMOTION_PIECES};
pub use square::Square;

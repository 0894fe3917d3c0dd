//! Chess rules engine: board state, legal move generation, game sessions
//! with move advisors, and a line-oriented text protocol.

pub mod board;
pub mod game;
pub mod protocol;

pub use board::{Board, Color, Move, Piece, Square};
pub use game::{Game, GameConfig, GameStatus};

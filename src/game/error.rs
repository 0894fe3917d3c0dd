//! Error types for the game session layer.

use std::fmt;

use super::config::GameMode;
use crate::board::MoveParseError;

/// Failure reported by a [`MoveAdvisor`](super::MoveAdvisor).
///
/// Never fatal to a game: the session falls back to its own move choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdvisorError {
    /// The advisor is not set up (missing credentials, no endpoint, ...)
    Unavailable { reason: String },
    /// The advisor was reached but failed to answer
    Failed { reason: String },
}

impl fmt::Display for AdvisorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdvisorError::Unavailable { reason } => write!(f, "Advisor unavailable: {reason}"),
            AdvisorError::Failed { reason } => write!(f, "Advisor failed: {reason}"),
        }
    }
}

impl std::error::Error for AdvisorError {}

/// Error type for game session operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// A move was requested in a position with no legal moves
    NoLegalMoves,
    /// Move text was malformed or not legal here
    Move(MoveParseError),
    /// A human move was offered while the advisor drives both sides
    HumanMovesDisabled { mode: GameMode },
    /// `setoption` named an option that does not exist
    UnknownOption { name: String },
    /// `setoption` value could not be used for the named option
    InvalidOptionValue { name: String, value: String },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::NoLegalMoves => write!(f, "No legal moves in this position"),
            GameError::Move(e) => write!(f, "{e}"),
            GameError::HumanMovesDisabled { mode } => {
                write!(f, "Human moves are not accepted in {mode} mode")
            }
            GameError::UnknownOption { name } => write!(f, "Unknown option '{name}'"),
            GameError::InvalidOptionValue { name, value } => {
                write!(f, "Invalid value '{value}' for option '{name}'")
            }
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Move(e) => Some(e),
            _ => None,
        }
    }
}

impl From<MoveParseError> for GameError {
    fn from(e: MoveParseError) -> Self {
        GameError::Move(e)
    }
}

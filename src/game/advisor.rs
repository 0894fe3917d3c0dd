//! The boundary to an external move advisor, such as a language model.
//!
//! The advisor sees the position as FEN plus the legal moves as text and
//! answers with free text. [`resolve_response`] turns that text back into one
//! of the legal moves, or reports that it names none.

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{AdvisorError, FallbackPolicy};

/// Everything an advisor is told about the position.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveRequest {
    pub fen: String,
    pub legal_moves: Vec<String>,
    pub personality: String,
}

impl MoveRequest {
    /// Instruction text for a language-model advisor.
    #[must_use]
    pub fn prompt(&self) -> String {
        format!(
            "You are a chess engine. Personality: {}. Current FEN: {}. \
             List of legal moves: {}. Choose the best move from the list for the current turn. \
             If promoting a pawn, select a move with the promotion suffix \
             (e.g. 'e7e8q' for Queen, 'e7e8r' for Rook). \
             Reply only with the exact move string (e.g. 'e2e4' or 'a7a8q').",
            self.personality,
            self.fen,
            self.legal_moves.join(", ")
        )
    }
}

/// Something that suggests a move for the side to move.
///
/// Implementations that talk to a remote service block until it answers;
/// any async transport stays inside the implementor.
pub trait MoveAdvisor {
    fn suggest(&mut self, request: &MoveRequest) -> Result<String, AdvisorError>;
}

impl<F> MoveAdvisor for F
where
    F: FnMut(&MoveRequest) -> Result<String, AdvisorError>,
{
    fn suggest(&mut self, request: &MoveRequest) -> Result<String, AdvisorError> {
        self(request)
    }
}

/// Picks a uniformly random legal move. Stands in for a real advisor.
#[derive(Clone, Debug)]
pub struct RandomAdvisor {
    rng: StdRng,
}

impl RandomAdvisor {
    #[must_use]
    pub fn new(seed: Option<u64>) -> Self {
        RandomAdvisor {
            rng: seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64),
        }
    }
}

impl MoveAdvisor for RandomAdvisor {
    fn suggest(&mut self, request: &MoveRequest) -> Result<String, AdvisorError> {
        if request.legal_moves.is_empty() {
            return Err(AdvisorError::Failed {
                reason: "no legal moves offered".to_string(),
            });
        }
        let idx = self.rng.gen_range(0..request.legal_moves.len());
        Ok(request.legal_moves[idx].clone())
    }
}

/// How a played move was arrived at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Resolution {
    /// The cleaned response was exactly a legal move
    Exact,
    /// A legal move appeared inside the cleaned response
    Substring,
    /// The response named no legal move; the fallback policy chose
    Fallback,
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resolution::Exact => f.write_str("exact"),
            Resolution::Substring => f.write_str("substring"),
            Resolution::Fallback => f.write_str("fallback"),
        }
    }
}

/// Trim, then drop every `"`, `'` and `.`.
#[must_use]
pub fn clean_response(response: &str) -> String {
    response
        .trim()
        .chars()
        .filter(|c| !matches!(c, '"' | '\'' | '.'))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Index of the legal move the response names, if any.
///
/// Exact match on the cleaned text wins; otherwise the first legal move (in
/// list order) that occurs inside the cleaned text.
#[must_use]
pub fn resolve_response(response: &str, legal_moves: &[String]) -> Option<(usize, Resolution)> {
    let cleaned = clean_response(response);
    if cleaned.is_empty() {
        return None;
    }
    if let Some(idx) = legal_moves.iter().position(|m| *m == cleaned) {
        return Some((idx, Resolution::Exact));
    }
    legal_moves
        .iter()
        .position(|m| cleaned.contains(m.as_str()))
        .map(|idx| (idx, Resolution::Substring))
}

impl FallbackPolicy {
    /// Index into a legal move list of length `len`; `None` when it is empty.
    pub fn choose<R: Rng + ?Sized>(self, rng: &mut R, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        match self {
            FallbackPolicy::Random => Some(rng.gen_range(0..len)),
            FallbackPolicy::First => Some(0),
        }
    }
}

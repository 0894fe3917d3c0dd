//! One game session: a board, its legal moves and its history.
//!
//! The session owns its [`Board`] exclusively. It caches the legal moves of
//! the current position, records every position reached so repetitions can be
//! counted, and turns human square picks or advisor text into moves.
//!
//! # Example
//! ```
//! use chess_rules::game::{Game, GameConfig, GameStatus};
//!
//! let mut game = Game::new(GameConfig::default());
//! for mv in ["f2f3", "e7e5", "g2g4", "d8h4"] {
//!     game.play_str(mv).unwrap();
//! }
//! assert_eq!(game.status().to_string(), "checkmate black");
//! ```

pub mod advisor;
mod config;
mod error;

use std::collections::HashMap;
use std::fmt;

use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{Board, BoardSnapshot, Color, Move, MoveList, MoveParseError, Piece, Square};

pub use advisor::{
    clean_response, resolve_response, MoveAdvisor, MoveRequest, RandomAdvisor, Resolution,
};
pub use config::{
    parse_setoption, FallbackPolicy, GameConfig, GameMode, DEFAULT_BLACK_PERSONALITY,
    DEFAULT_WHITE_PERSONALITY,
};
pub use error::{AdvisorError, GameError};

/// Half-moves without pawn move or capture after which the game is drawn.
pub const FIFTY_MOVE_HALFMOVES: u32 = 100;

/// Occurrences of one position after which the game is drawn.
pub const REPETITION_LIMIT: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    Ongoing,
    Checkmate { winner: Color },
    Stalemate,
    FiftyMoveRule,
    Repetition,
}

impl GameStatus {
    #[must_use]
    pub fn is_over(self) -> bool {
        self != GameStatus::Ongoing
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Ongoing => f.write_str("ongoing"),
            GameStatus::Checkmate {
                winner: Color::White,
            } => f.write_str("checkmate white"),
            GameStatus::Checkmate {
                winner: Color::Black,
            } => f.write_str("checkmate black"),
            GameStatus::Stalemate => f.write_str("stalemate"),
            GameStatus::FiftyMoveRule => f.write_str("fifty-move"),
            GameStatus::Repetition => f.write_str("repetition"),
        }
    }
}

pub struct Game {
    board: Board,
    legal_moves: MoveList,
    played: Vec<Move>,
    repetitions: HashMap<String, usize>,
    config: GameConfig,
    rng: StdRng,
}

impl Game {
    /// Start a game from the standard position.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Game::from_board(Board::new(), config)
    }

    /// Start a game from an arbitrary position.
    #[must_use]
    pub fn from_board(board: Board, config: GameConfig) -> Self {
        let rng = seeded_rng(config.seed);
        let mut game = Game {
            legal_moves: MoveList::new(),
            board,
            played: Vec::new(),
            repetitions: HashMap::new(),
            config,
            rng,
        };
        game.reset_to(game.board.clone());
        game
    }

    /// Replace the position and forget the history; the config is kept.
    pub fn reset_to(&mut self, board: Board) {
        self.board = board;
        self.played.clear();
        self.repetitions.clear();
        self.record_position();
        debug!("game reset to {}", self.board.to_fen());
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Legal moves of the current position, computed once per position.
    #[must_use]
    pub fn legal_moves(&self) -> &MoveList {
        &self.legal_moves
    }

    /// Moves played since the last reset, in order.
    #[must_use]
    pub fn played(&self) -> &[Move] {
        &self.played
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Apply one `setoption`; a new seed reseeds the fallback RNG at once.
    pub fn set_option(&mut self, name: &str, value: Option<&str>) -> Result<(), GameError> {
        if self.config.apply_option(name, value)? {
            self.rng = seeded_rng(self.config.seed);
        }
        debug!("option {name} set");
        Ok(())
    }

    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        self.board.snapshot()
    }

    #[must_use]
    pub fn is_in_check(&self) -> bool {
        self.board.is_in_check(self.board.side_to_move())
    }

    /// Checkmate and stalemate first, then the fifty-move rule, then threefold repetition.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        let mover = self.board.side_to_move();
        if self.legal_moves.is_empty() {
            return if self.board.is_in_check(mover) {
                GameStatus::Checkmate {
                    winner: mover.opponent(),
                }
            } else {
                GameStatus::Stalemate
            };
        }
        if self.board.halfmove_clock() >= FIFTY_MOVE_HALFMOVES {
            return GameStatus::FiftyMoveRule;
        }
        if self.repetition_count() >= REPETITION_LIMIT {
            return GameStatus::Repetition;
        }
        GameStatus::Ongoing
    }

    /// How many times the current position has occurred since the last reset.
    #[must_use]
    pub fn repetition_count(&self) -> usize {
        self.repetitions
            .get(&self.board.position_key())
            .copied()
            .unwrap_or(0)
    }

    /// Play a human move, which must be one of the current legal moves.
    ///
    /// Rejected in [`GameMode::AiVsAi`], where only the advisor moves.
    pub fn play(&mut self, mv: Move) -> Result<(), GameError> {
        self.check_human_move()?;
        if !self.legal_moves.contains(mv) {
            return Err(GameError::Move(MoveParseError::IllegalMove {
                notation: mv.to_string(),
            }));
        }
        self.apply(mv);
        Ok(())
    }

    /// Parse move text and play it as a human move.
    pub fn play_str(&mut self, text: &str) -> Result<Move, GameError> {
        self.check_human_move()?;
        let mv: Move = text.parse()?;
        if !self.legal_moves.contains(mv) {
            return Err(GameError::Move(MoveParseError::IllegalMove {
                notation: text.to_string(),
            }));
        }
        self.apply(mv);
        Ok(mv)
    }

    fn check_human_move(&self) -> Result<(), GameError> {
        if !self.config.mode.accepts_human_moves() {
            return Err(GameError::HumanMovesDisabled {
                mode: self.config.mode,
            });
        }
        if self.legal_moves.is_empty() {
            return Err(GameError::NoLegalMoves);
        }
        Ok(())
    }

    /// The legal move from `from` to `to`, preferring the Queen when it promotes.
    #[must_use]
    pub fn select_move(&self, from: Square, to: Square) -> Option<Move> {
        let mut candidates = self
            .legal_moves
            .iter()
            .filter(|m| m.from() == from && m.to() == to);
        let first = candidates.next().copied()?;
        if first.promotion().is_none() {
            return Some(first);
        }
        std::iter::once(&first)
            .chain(candidates)
            .find(|m| m.promotion() == Some(Piece::Queen))
            .copied()
            .or(Some(first))
    }

    /// What the advisor for the side to move is asked.
    #[must_use]
    pub fn request(&self) -> MoveRequest {
        MoveRequest {
            fen: self.board.to_fen(),
            legal_moves: self.legal_moves.to_strings(),
            personality: self
                .config
                .personality(self.board.side_to_move())
                .to_string(),
        }
    }

    /// Turn an advisor answer into a played move.
    ///
    /// Unusable answers and advisor errors fall back to the configured policy,
    /// so a move is always played while one exists.
    pub fn apply_response(
        &mut self,
        response: Result<String, AdvisorError>,
    ) -> Result<(Move, Resolution), GameError> {
        if self.legal_moves.is_empty() {
            return Err(GameError::NoLegalMoves);
        }

        let resolved = match &response {
            Ok(text) => {
                let found = resolve_response(text, &self.legal_moves.to_strings());
                if found.is_none() {
                    warn!("advisor suggested no legal move: {text:?}");
                }
                found
            }
            Err(e) => {
                warn!("advisor error: {e}");
                None
            }
        };

        let (idx, how) = match resolved {
            Some(found) => found,
            None => {
                let idx = self
                    .config
                    .fallback
                    .choose(&mut self.rng, self.legal_moves.len())
                    .ok_or(GameError::NoLegalMoves)?;
                warn!("falling back to {} move", self.config.fallback);
                (idx, Resolution::Fallback)
            }
        };

        let mv = self.legal_moves.get(idx).ok_or(GameError::NoLegalMoves)?;
        self.apply(mv);
        Ok((mv, how))
    }

    /// Ask `advisor` for a move and play whatever it resolves to.
    pub fn advise(
        &mut self,
        advisor: &mut dyn MoveAdvisor,
    ) -> Result<(Move, Resolution), GameError> {
        if self.legal_moves.is_empty() {
            return Err(GameError::NoLegalMoves);
        }
        let request = self.request();
        debug!("asking {} advisor", request.personality);
        let response = advisor.suggest(&request);
        self.apply_response(response)
    }

    /// Let `advisor` play both sides until the game ends or `max_plies` moves are made.
    pub fn autoplay(
        &mut self,
        advisor: &mut dyn MoveAdvisor,
        max_plies: usize,
    ) -> Vec<(Move, Resolution)> {
        let mut steps = Vec::new();
        while steps.len() < max_plies && !self.status().is_over() {
            match self.advise(advisor) {
                Ok(step) => steps.push(step),
                Err(_) => break,
            }
        }
        steps
    }

    fn apply(&mut self, mv: Move) {
        self.board.make_move(mv);
        self.played.push(mv);
        self.record_position();
        debug!("played {mv}, now {}", self.board.to_fen());

        let status = self.status();
        if status.is_over() {
            info!("game over: {status}");
        }
    }

    fn record_position(&mut self) {
        self.legal_moves = self.board.generate_legal_moves();
        *self
            .repetitions
            .entry(self.board.position_key())
            .or_insert(0) += 1;
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new(GameConfig::default())
    }
}

fn seeded_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    fn seeded() -> GameConfig {
        GameConfig {
            seed: Some(5),
            ..GameConfig::default()
        }
    }

    #[test]
    fn test_new_game_is_ongoing() {
        let game = Game::default();
        assert_eq!(game.legal_moves().len(), 20);
        assert_eq!(game.status(), GameStatus::Ongoing);
        assert_eq!(game.repetition_count(), 1);
        assert!(!game.is_in_check());
    }

    #[test]
    fn test_fools_mate() {
        let mut game = Game::new(seeded());
        for mv in ["f2f3", "e7e5", "g2g4", "d8h4"] {
            game.play_str(mv).unwrap();
        }
        assert_eq!(
            game.status(),
            GameStatus::Checkmate {
                winner: Color::Black
            }
        );
        assert!(game.is_in_check());
        assert_eq!(game.play_str("e2e4"), Err(GameError::NoLegalMoves));
        assert_eq!(
            game.apply_response(Ok("e2e4".to_string())),
            Err(GameError::NoLegalMoves)
        );
    }

    #[test]
    fn test_ai_vs_ai_rejects_human_moves() {
        let config = GameConfig {
            mode: GameMode::AiVsAi,
            seed: Some(3),
            ..GameConfig::default()
        };
        let mut game = Game::new(config);
        assert_eq!(
            game.play_str("e2e4"),
            Err(GameError::HumanMovesDisabled {
                mode: GameMode::AiVsAi
            })
        );
        assert!(game.play(Move::new(sq("e2"), sq("e4"))).is_err());
        assert!(game.played().is_empty());

        let (mv, how) = game.apply_response(Ok("e2e4".to_string())).unwrap();
        assert_eq!((mv.to_string(), how), ("e2e4".to_string(), Resolution::Exact));

        game.set_option("mode", Some("human-vs-human")).unwrap();
        assert!(game.play_str("e7e5").is_ok());
    }

    #[test]
    fn test_play_str_rejects_malformed_text() {
        let mut game = Game::default();
        assert!(matches!(
            game.play_str("e2"),
            Err(GameError::Move(MoveParseError::InvalidLength { len: 2 }))
        ));
        assert!(matches!(
            game.play_str("e7e8q"),
            Err(GameError::Move(MoveParseError::IllegalMove { .. }))
        ));
    }

    #[test]
    fn test_illegal_move_leaves_game_unchanged() {
        let mut game = Game::default();
        let err = game.play_str("e2e5").unwrap_err();
        assert!(matches!(err, GameError::Move(_)));
        assert!(game.play(Move::new(sq("a1"), sq("a5"))).is_err());
        assert_eq!(game.board(), &Board::new());
        assert!(game.played().is_empty());
    }

    #[test]
    fn test_stalemate_status() {
        let board = Board::try_from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
        let game = Game::from_board(board, seeded());
        assert_eq!(game.status(), GameStatus::Stalemate);
    }

    #[test]
    fn test_fifty_move_status() {
        let board = Board::try_from_fen("4k3/8/8/8/8/8/8/4K2R w - - 99 80").unwrap();
        let mut game = Game::from_board(board, seeded());
        assert_eq!(game.status(), GameStatus::Ongoing);
        game.play_str("h1h2").unwrap();
        assert_eq!(game.status(), GameStatus::FiftyMoveRule);
    }

    #[test]
    fn test_threefold_repetition() {
        let mut game = Game::default();
        for _ in 0..2 {
            for mv in ["g1f3", "g8f6", "f3g1", "f6g8"] {
                game.play_str(mv).unwrap();
            }
        }
        assert_eq!(game.repetition_count(), 3);
        assert_eq!(game.status(), GameStatus::Repetition);
    }

    #[test]
    fn test_select_move_defaults_to_queen() {
        let board = Board::try_from_fen("8/4P3/8/8/8/8/8/K1k5 w - - 0 1").unwrap();
        let game = Game::from_board(board, seeded());
        let mv = game.select_move(sq("e7"), sq("e8")).unwrap();
        assert_eq!(mv.promotion(), Some(Piece::Queen));
        assert_eq!(
            game.select_move(sq("a1"), sq("a2")),
            Some(Move::new(sq("a1"), sq("a2")))
        );
        assert_eq!(game.select_move(sq("e7"), sq("d8")), None);
    }

    #[test]
    fn test_apply_response_exact_and_substring() {
        let mut game = Game::new(seeded());
        let (mv, how) = game.apply_response(Ok("'e2e4'.".to_string())).unwrap();
        assert_eq!(mv.to_string(), "e2e4");
        assert_eq!(how, Resolution::Exact);

        let (mv, how) = game
            .apply_response(Ok("I think c7c5 is best".to_string()))
            .unwrap();
        assert_eq!(mv.to_string(), "c7c5");
        assert_eq!(how, Resolution::Substring);
    }

    #[test]
    fn test_apply_response_falls_back() {
        let config = GameConfig {
            fallback: FallbackPolicy::First,
            ..seeded()
        };
        let mut game = Game::new(config);
        let first = game.legal_moves()[0];
        let (mv, how) = game.apply_response(Ok("resign".to_string())).unwrap();
        assert_eq!(mv, first);
        assert_eq!(how, Resolution::Fallback);

        let (_, how) = game
            .apply_response(Err(AdvisorError::Unavailable {
                reason: "no key".to_string(),
            }))
            .unwrap();
        assert_eq!(how, Resolution::Fallback);
        assert_eq!(game.played().len(), 2);
    }

    #[test]
    fn test_random_fallback_is_seeded() {
        let play = |seed| {
            let mut game = Game::new(GameConfig {
                seed: Some(seed),
                ..GameConfig::default()
            });
            (0..4)
                .map(|_| game.apply_response(Ok(String::new())).unwrap().0)
                .collect::<Vec<_>>()
        };
        assert_eq!(play(9), play(9));
    }

    #[test]
    fn test_request_uses_side_personality() {
        let mut game = Game::default();
        assert_eq!(game.request().personality, DEFAULT_WHITE_PERSONALITY);
        game.play_str("e2e4").unwrap();
        let request = game.request();
        assert_eq!(request.personality, DEFAULT_BLACK_PERSONALITY);
        assert_eq!(request.legal_moves.len(), 20);
        assert_eq!(request.fen, game.board().to_fen());
    }

    #[test]
    fn test_autoplay_stops_at_limit_or_game_end() {
        let mut game = Game::new(seeded());
        let mut advisor = RandomAdvisor::new(Some(1));
        let log = game.autoplay(&mut advisor, 30);
        assert!(log.len() <= 30);
        assert_eq!(game.played().len(), log.len());
        assert!(log.iter().all(|(_, how)| *how == Resolution::Exact));
        if log.len() < 30 {
            assert!(game.status().is_over());
        }
    }

    #[test]
    fn test_set_option_reseeds() {
        let mut game = Game::default();
        game.set_option("Seed", Some("17")).unwrap();
        assert_eq!(game.config().seed, Some(17));
        assert!(game.set_option("Bogus", Some("1")).is_err());
    }
}

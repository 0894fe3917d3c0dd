//! Game session configuration.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::GameError;
use crate::board::Color;

pub const DEFAULT_WHITE_PERSONALITY: &str = "Aggressive Grandmaster";
pub const DEFAULT_BLACK_PERSONALITY: &str = "Cautious Beginner";

/// Who drives each side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameMode {
    #[default]
    HumanVsHuman,
    AiVsAi,
}

impl GameMode {
    /// Whether moves typed by a person may be played.
    #[must_use]
    pub fn accepts_human_moves(self) -> bool {
        self == GameMode::HumanVsHuman
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameMode::HumanVsHuman => f.write_str("human-vs-human"),
            GameMode::AiVsAi => f.write_str("ai-vs-ai"),
        }
    }
}

impl FromStr for GameMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "human-vs-human" | "humanvshuman" | "human" => Ok(GameMode::HumanVsHuman),
            "ai-vs-ai" | "aivsai" | "ai" => Ok(GameMode::AiVsAi),
            _ => Err(()),
        }
    }
}

/// What to play when an advisor's answer names no legal move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FallbackPolicy {
    /// Uniformly random legal move
    #[default]
    Random,
    /// First legal move in generation order
    First,
}

impl fmt::Display for FallbackPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FallbackPolicy::Random => f.write_str("random"),
            FallbackPolicy::First => f.write_str("first"),
        }
    }
}

impl FromStr for FallbackPolicy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(FallbackPolicy::Random),
            "first" => Ok(FallbackPolicy::First),
            _ => Err(()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameConfig {
    pub mode: GameMode,
    pub white_personality: String,
    pub black_personality: String,
    pub fallback: FallbackPolicy,
    /// Fixed seed for the fallback RNG; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            mode: GameMode::default(),
            white_personality: DEFAULT_WHITE_PERSONALITY.to_string(),
            black_personality: DEFAULT_BLACK_PERSONALITY.to_string(),
            fallback: FallbackPolicy::default(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Personality handed to the advisor when `color` is to move.
    #[must_use]
    pub fn personality(&self, color: Color) -> &str {
        match color {
            Color::White => &self.white_personality,
            Color::Black => &self.black_personality,
        }
    }

    /// Apply a `setoption name <name> value <value>` pair. Names are case-insensitive.
    ///
    /// Returns `true` when the RNG seed changed.
    pub fn apply_option(&mut self, name: &str, value: Option<&str>) -> Result<bool, GameError> {
        let normalized = name.trim().to_ascii_lowercase();
        let invalid = || GameError::InvalidOptionValue {
            name: name.to_string(),
            value: value.unwrap_or_default().to_string(),
        };

        match normalized.as_str() {
            "mode" => {
                self.mode = value.ok_or_else(invalid)?.parse().map_err(|()| invalid())?;
            }
            "white personality" => {
                self.white_personality = value.ok_or_else(invalid)?.to_string();
            }
            "black personality" => {
                self.black_personality = value.ok_or_else(invalid)?.to_string();
            }
            "fallback" => {
                self.fallback = value.ok_or_else(invalid)?.parse().map_err(|()| invalid())?;
            }
            "seed" => {
                self.seed = match value.map(str::trim) {
                    None | Some("" | "none") => None,
                    Some(v) => Some(v.parse::<u64>().map_err(|_| invalid())?),
                };
                return Ok(true);
            }
            _ => {
                return Err(GameError::UnknownOption {
                    name: name.to_string(),
                })
            }
        }
        Ok(false)
    }

    /// One `option name ...` line per setting, in `setoption` spelling.
    #[must_use]
    pub fn describe(&self) -> Vec<String> {
        vec![
            format!("option name Mode value {}", self.mode),
            format!("option name White Personality value {}", self.white_personality),
            format!("option name Black Personality value {}", self.black_personality),
            format!("option name Fallback value {}", self.fallback),
            format!(
                "option name Seed value {}",
                self.seed.map_or_else(|| "none".to_string(), |s| s.to_string())
            ),
        ]
    }
}

/// Split `setoption name <words> value <words>` into its name and value.
#[must_use]
pub fn parse_setoption(parts: &[&str]) -> Option<(String, Option<String>)> {
    if parts.first() != Some(&"setoption") {
        return None;
    }

    let mut name_parts: Vec<&str> = Vec::new();
    let mut value_parts: Vec<&str> = Vec::new();
    let mut in_value = None;

    for part in parts.iter().skip(1) {
        match *part {
            "name" if in_value.is_none() => in_value = Some(false),
            "value" if in_value == Some(false) => in_value = Some(true),
            _ => match in_value {
                Some(false) => name_parts.push(part),
                Some(true) => value_parts.push(part),
                None => {}
            },
        }
    }

    if name_parts.is_empty() {
        return None;
    }

    let value = if value_parts.is_empty() {
        None
    } else {
        Some(value_parts.join(" "))
    };
    Some((name_parts.join(" "), value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.mode, GameMode::HumanVsHuman);
        assert_eq!(config.personality(Color::White), "Aggressive Grandmaster");
        assert_eq!(config.personality(Color::Black), "Cautious Beginner");
        assert_eq!(config.fallback, FallbackPolicy::Random);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_apply_options() {
        let mut config = GameConfig::default();
        assert_eq!(config.apply_option("Mode", Some("ai-vs-ai")), Ok(false));
        assert_eq!(config.apply_option("white personality", Some("Calm Club Player")), Ok(false));
        assert_eq!(config.apply_option("FALLBACK", Some("first")), Ok(false));
        assert_eq!(config.apply_option("Seed", Some("42")), Ok(true));

        assert_eq!(config.mode, GameMode::AiVsAi);
        assert_eq!(config.personality(Color::White), "Calm Club Player");
        assert_eq!(config.fallback, FallbackPolicy::First);
        assert_eq!(config.seed, Some(42));

        assert_eq!(config.apply_option("Seed", Some("none")), Ok(true));
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_apply_option_errors() {
        let mut config = GameConfig::default();
        assert!(matches!(
            config.apply_option("Hash", Some("64")),
            Err(GameError::UnknownOption { .. })
        ));
        assert!(matches!(
            config.apply_option("Seed", Some("abc")),
            Err(GameError::InvalidOptionValue { .. })
        ));
        assert!(matches!(
            config.apply_option("Mode", None),
            Err(GameError::InvalidOptionValue { .. })
        ));
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_parse_setoption() {
        let parts = ["setoption", "name", "White", "Personality", "value", "Bold", "Attacker"];
        assert_eq!(
            parse_setoption(&parts),
            Some((
                "White Personality".to_string(),
                Some("Bold Attacker".to_string())
            ))
        );
        assert_eq!(
            parse_setoption(&["setoption", "name", "Seed"]),
            Some(("Seed".to_string(), None))
        );
        assert_eq!(parse_setoption(&["setoption", "value", "3"]), None);
        assert_eq!(parse_setoption(&["position"]), None);
    }

    #[test]
    fn test_describe_lists_every_option() {
        let lines = GameConfig::default().describe();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].ends_with("human-vs-human"));
        assert!(lines[4].ends_with("none"));
    }
}

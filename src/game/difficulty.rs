//! Difficulty Presets
//!
//! Each preset fixes the attempt budget of a session.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Deserialize};
use thiserror::Error;

/// Attempt budget on Easy.
pub const MAX_ATTEMPTS_EASY: u32 = 15;
/// Attempt budget on Medium.
pub const MAX_ATTEMPTS_MEDIUM: u32 = 10;
/// Attempt budget on Hard.
pub const MAX_ATTEMPTS_HARD: u32 = 7;

/// Named difficulty preset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    /// 15 attempts
    Easy,
    /// 10 attempts
    #[default]
    Medium,
    /// 7 attempts
    Hard,
}

impl Difficulty {
    /// All presets, easiest first.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Maximum number of guesses allowed.
    #[inline]
    pub fn max_attempts(self) -> u32 {
        match self {
            Difficulty::Easy => MAX_ATTEMPTS_EASY,
            Difficulty::Medium => MAX_ATTEMPTS_MEDIUM,
            Difficulty::Hard => MAX_ATTEMPTS_HARD,
        }
    }

    /// Lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        };
        f.write_str(name)
    }
}

/// Unknown difficulty name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown difficulty '{0}' (expected easy, medium or hard)")]
pub struct ParseDifficultyError(pub String);

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" | "e" => Ok(Difficulty::Easy),
            "medium" | "m" => Ok(Difficulty::Medium),
            "hard" | "h" => Ok(Difficulty::Hard),
            _ => Err(ParseDifficultyError(s.trim().to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attempt_budgets() {
        assert_eq!(Difficulty::Easy.max_attempts(), 15);
        assert_eq!(Difficulty::Medium.max_attempts(), 10);
        assert_eq!(Difficulty::Hard.max_attempts(), 7);
    }

    #[test]
    fn test_default_is_medium() {
        assert_eq!(Difficulty::default(), Difficulty::Medium);
    }

    #[test]
    fn test_parse() {
        assert_eq!("Easy".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert_eq!(" HARD ".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert_eq!("m".parse::<Difficulty>(), Ok(Difficulty::Medium));
        assert!("nightmare".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for difficulty in Difficulty::ALL {
            assert_eq!(difficulty.to_string().parse::<Difficulty>(), Ok(difficulty));
        }
    }
}

//! Guess Outcomes
//!
//! Values returned to the shell for every submitted guess.
//! Rejections are errors; everything that advances the game is an outcome.

use serde::{Serialize, Deserialize};
use thiserror::Error;

/// Result of a guess that was accepted by the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GuessOutcome {
    /// Guess was below the secret; lower bound moved up.
    TooLow,
    /// Guess was above the secret; upper bound moved down.
    TooHigh,
    /// Secret found.
    Won {
        /// Attempts used, including the winning one
        attempts: u32,
    },
    /// Attempt budget exhausted.
    Lost {
        /// The secret, revealed
        secret: i32,
    },
}

impl GuessOutcome {
    /// Whether this outcome ends the session.
    #[inline]
    pub fn ends_game(&self) -> bool {
        matches!(self, GuessOutcome::Won { .. } | GuessOutcome::Lost { .. })
    }
}

/// A guess that was rejected. None of these consume an attempt.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GuessError {
    /// Raw input is not an integer.
    #[error("invalid input: {raw:?}")]
    InvalidInput {
        /// Text as submitted
        raw: String,
    },

    /// Guess lies outside the current bounds.
    #[error("guess outside range {lower}..={upper}")]
    OutOfRange {
        /// Current lower bound
        lower: i32,
        /// Current upper bound
        upper: i32,
    },

    /// The session already ended.
    #[error("game is already over")]
    AlreadyOver,
}

/// Parse raw guess text.
///
/// Surrounding whitespace is ignored; anything that is not an `i32`
/// (including overflow) is `InvalidInput`.
pub fn parse_guess(raw: &str) -> Result<i32, GuessError> {
    raw.trim()
        .parse::<i32>()
        .map_err(|_| GuessError::InvalidInput { raw: raw.to_string() })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_guess() {
        assert_eq!(parse_guess("42"), Ok(42));
        assert_eq!(parse_guess("  7\n"), Ok(7));
        assert_eq!(parse_guess("+5"), Ok(5));
        assert_eq!(parse_guess("-3"), Ok(-3));
    }

    #[test]
    fn test_parse_guess_rejects() {
        for raw in ["", "abc", "4.2", "1 2", "99999999999"] {
            assert_eq!(
                parse_guess(raw),
                Err(GuessError::InvalidInput { raw: raw.to_string() }),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_ends_game() {
        assert!(!GuessOutcome::TooLow.ends_game());
        assert!(!GuessOutcome::TooHigh.ends_game());
        assert!(GuessOutcome::Won { attempts: 1 }.ends_game());
        assert!(GuessOutcome::Lost { secret: 1 }.ends_game());
    }

    #[test]
    fn test_outcome_json_is_tagged() {
        let json = serde_json::to_string(&GuessOutcome::Won { attempts: 3 }).unwrap();
        assert_eq!(json, r#"{"type":"won","attempts":3}"#);

        let json = serde_json::to_string(&GuessError::OutOfRange { lower: 21, upper: 49 }).unwrap();
        assert_eq!(json, r#"{"type":"out_of_range","lower":21,"upper":49}"#);
    }
}

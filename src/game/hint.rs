//! Hint Engine
//!
//! Pure function of session state. Asking for a hint never consumes an
//! attempt and never mutates the session.

use std::fmt;

use serde::{Serialize, Deserialize};

use crate::game::session::GameSession;

/// Spans up to this width disclose the bounds.
pub const NARROW_SPAN: i32 = 10;

/// Spans up to this width disclose parity.
pub const PARITY_SPAN: i32 = 20;

/// Parity of the secret.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Parity {
    /// Divisible by two
    Even,
    /// Not divisible by two
    Odd,
}

impl Parity {
    /// Parity of `value`.
    pub fn of(value: i32) -> Self {
        if value.rem_euclid(2) == 0 {
            Parity::Even
        } else {
            Parity::Odd
        }
    }
}

/// Which half of the current bounds holds the secret.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Half {
    /// `[lower, mid]`
    Lower,
    /// `(mid, upper]`
    Upper,
}

/// A hint for the current session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Hint {
    /// Session has ended.
    StartNewGame,
    /// No guesses yet.
    GuessMiddle,
    /// Bounds are narrow; disclose them.
    Narrow {
        /// Lower bound
        lower: i32,
        /// Upper bound
        upper: i32,
    },
    /// Parity of the secret.
    Parity {
        /// Even or odd
        parity: Parity,
    },
    /// Half of the bounds containing the secret.
    Half {
        /// Which half
        half: Half,
        /// `floor((lower + upper) / 2)`
        mid: i32,
    },
}

/// Compute the hint for a session.
pub fn hint(session: &GameSession) -> Hint {
    if session.is_over() {
        return Hint::StartNewGame;
    }
    if session.attempts() == 0 {
        return Hint::GuessMiddle;
    }

    let lower = session.lower_bound();
    let upper = session.upper_bound();
    let span = upper - lower;

    if span <= NARROW_SPAN {
        Hint::Narrow { lower, upper }
    } else if span <= PARITY_SPAN {
        Hint::Parity { parity: Parity::of(session.secret()) }
    } else {
        let mid = (lower + upper).div_euclid(2);
        let half = if session.secret() <= mid { Half::Lower } else { Half::Upper };
        Hint::Half { half, mid }
    }
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Hint::StartNewGame => write!(f, "Start a new game to get hints!"),
            Hint::GuessMiddle => write!(f, "Try guessing a number in the middle of the range!"),
            Hint::Narrow { lower, upper } => {
                write!(f, "You're getting close! The number is between {} and {}", lower, upper)
            }
            Hint::Parity { parity: Parity::Even } => write!(f, "The number is even"),
            Hint::Parity { parity: Parity::Odd } => write!(f, "The number is odd"),
            Hint::Half { half: Half::Lower, .. } => {
                write!(f, "The number is in the lower half of the range")
            }
            Hint::Half { half: Half::Upper, .. } => {
                write!(f, "The number is in the upper half of the range")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::difficulty::Difficulty;

    fn session(secret: i32) -> GameSession {
        GameSession::new([0; 16], Difficulty::Easy, secret)
    }

    #[test]
    fn test_no_guesses_suggests_middle() {
        for secret in [1, 42, 100] {
            assert_eq!(hint(&session(secret)), Hint::GuessMiddle);
        }
    }

    #[test]
    fn test_over_suggests_new_game() {
        let mut s = session(42);
        s.guess(42).unwrap();
        assert_eq!(hint(&s), Hint::StartNewGame);
    }

    #[test]
    fn test_wide_span_gives_half() {
        let mut s = session(42);
        s.guess(90).unwrap(); // [1, 89], mid 45
        assert_eq!(hint(&s), Hint::Half { half: Half::Lower, mid: 45 });

        let mut s = session(46);
        s.guess(90).unwrap();
        assert_eq!(hint(&s), Hint::Half { half: Half::Upper, mid: 45 });
    }

    #[test]
    fn test_secret_on_mid_is_lower_half() {
        let mut s = session(45);
        s.guess(90).unwrap();
        assert_eq!(hint(&s), Hint::Half { half: Half::Lower, mid: 45 });
    }

    #[test]
    fn test_medium_span_gives_parity() {
        let mut s = session(42);
        s.guess(30).unwrap(); // [31, 100]
        s.guess(50).unwrap(); // [31, 49], span 18
        assert_eq!(hint(&s), Hint::Parity { parity: Parity::Even });

        let mut s = session(43);
        s.guess(30).unwrap();
        s.guess(50).unwrap();
        assert_eq!(hint(&s), Hint::Parity { parity: Parity::Odd });
    }

    #[test]
    fn test_span_boundaries() {
        // span 20 -> parity
        let mut s = session(42);
        s.guess(29).unwrap(); // [30, 100]
        s.guess(51).unwrap(); // [30, 50]
        assert_eq!(hint(&s), Hint::Parity { parity: Parity::Even });

        // span 10 -> bounds
        s.guess(41).unwrap(); // [42, 50], span 8
        assert_eq!(hint(&s), Hint::Narrow { lower: 42, upper: 50 });

        // span exactly 10
        let mut s = session(42);
        s.guess(34).unwrap(); // [35, 100]
        s.guess(46).unwrap(); // [35, 45]
        assert_eq!(hint(&s), Hint::Narrow { lower: 35, upper: 45 });

        // span 21 -> half
        let mut s = session(42);
        s.guess(29).unwrap(); // [30, 100]
        s.guess(52).unwrap(); // [30, 51]
        assert_eq!(hint(&s), Hint::Half { half: Half::Upper, mid: 40 });
    }

    #[test]
    fn test_hint_has_no_side_effects() {
        let mut s = session(42);
        s.guess(50).unwrap();
        let before = s.view();
        for _ in 0..5 {
            hint(&s);
        }
        assert_eq!(s.view(), before);
    }

    #[test]
    fn test_hint_text() {
        assert_eq!(Hint::Narrow { lower: 3, upper: 9 }.to_string(),
                   "You're getting close! The number is between 3 and 9");
        assert_eq!(Hint::Parity { parity: Parity::Odd }.to_string(), "The number is odd");
    }
}

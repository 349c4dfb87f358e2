//! Game Session
//!
//! One play-through: a secret, the bounds known to contain it, and the
//! attempt budget. Mutated only through [`GameSession::guess`].

use serde::{Serialize, Deserialize};

use crate::core::rng::SecretRng;
use crate::game::difficulty::Difficulty;
use crate::game::outcome::{GuessOutcome, GuessError};
use crate::{RANGE_MAX, RANGE_MIN};

/// Session identifier (UUID bytes).
pub type SessionId = [u8; 16];

/// State of a single game.
#[derive(Clone, Debug, Serialize)]
pub struct GameSession {
    /// Unique session id
    id: SessionId,

    /// Secret number; fixed for the lifetime of the session
    secret: i32,

    /// Smallest value the secret can still be
    lower_bound: i32,

    /// Largest value the secret can still be
    upper_bound: i32,

    /// Valid guesses made so far
    attempts: u32,

    /// Attempt budget
    max_attempts: u32,

    /// Preset the budget came from
    difficulty: Difficulty,

    /// Set once the secret is found or the budget runs out
    is_over: bool,
}

/// Snapshot of the session as the shell may display it.
///
/// Never carries the secret.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionView {
    /// Current lower bound
    pub lower_bound: i32,
    /// Current upper bound
    pub upper_bound: i32,
    /// Attempts used
    pub attempts: u32,
    /// Attempt budget
    pub max_attempts: u32,
    /// Difficulty preset
    pub difficulty: Difficulty,
    /// Whether the session has ended
    pub is_over: bool,
}

impl GameSession {
    /// Start a session with a known secret.
    ///
    /// The secret is clamped into the full range so the bounds invariant
    /// holds from the start.
    pub fn new(id: SessionId, difficulty: Difficulty, secret: i32) -> Self {
        Self {
            id,
            secret: secret.clamp(RANGE_MIN, RANGE_MAX),
            lower_bound: RANGE_MIN,
            upper_bound: RANGE_MAX,
            attempts: 0,
            max_attempts: difficulty.max_attempts(),
            difficulty,
            is_over: false,
        }
    }

    /// Start a session with a secret drawn from `rng`.
    pub fn start(id: SessionId, difficulty: Difficulty, rng: &mut SecretRng) -> Self {
        let secret = rng.next_int_range(RANGE_MIN, RANGE_MAX);
        Self::new(id, difficulty, secret)
    }

    /// Evaluate a guess.
    ///
    /// Order of checks:
    /// 1. an ended session rejects with `AlreadyOver` and is left untouched
    /// 2. an exhausted budget ends the session as `Lost`
    /// 3. values outside the bounds reject with `OutOfRange`, no attempt used
    /// 4. the attempt is counted and the bounds narrowed; the budget is
    ///    checked after narrowing, so a wrong final guess is `Lost`
    pub fn guess(&mut self, value: i32) -> Result<GuessOutcome, GuessError> {
        if self.is_over {
            return Err(GuessError::AlreadyOver);
        }

        if self.attempts >= self.max_attempts {
            self.is_over = true;
            return Ok(GuessOutcome::Lost { secret: self.secret });
        }

        if !self.in_bounds(value) {
            return Err(GuessError::OutOfRange {
                lower: self.lower_bound,
                upper: self.upper_bound,
            });
        }

        self.attempts += 1;

        let miss = if value < self.secret {
            self.lower_bound = value + 1;
            GuessOutcome::TooLow
        } else if value > self.secret {
            self.upper_bound = value - 1;
            GuessOutcome::TooHigh
        } else {
            self.is_over = true;
            return Ok(GuessOutcome::Won { attempts: self.attempts });
        };

        if self.attempts >= self.max_attempts {
            self.is_over = true;
            return Ok(GuessOutcome::Lost { secret: self.secret });
        }

        Ok(miss)
    }

    /// Whether `value` lies inside the current bounds.
    #[inline]
    pub fn in_bounds(&self, value: i32) -> bool {
        (self.lower_bound..=self.upper_bound).contains(&value)
    }

    /// Displayable snapshot.
    pub fn view(&self) -> SessionView {
        SessionView {
            lower_bound: self.lower_bound,
            upper_bound: self.upper_bound,
            attempts: self.attempts,
            max_attempts: self.max_attempts,
            difficulty: self.difficulty,
            is_over: self.is_over,
        }
    }

    /// Session id.
    pub fn id(&self) -> &SessionId {
        &self.id
    }

    /// The secret. Only the hint engine and tests should look at this.
    pub fn secret(&self) -> i32 {
        self.secret
    }

    /// Current lower bound.
    pub fn lower_bound(&self) -> i32 {
        self.lower_bound
    }

    /// Current upper bound.
    pub fn upper_bound(&self) -> i32 {
        self.upper_bound
    }

    /// Attempts used.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Attempt budget.
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Attempts left before the session is lost.
    pub fn attempts_remaining(&self) -> u32 {
        self.max_attempts.saturating_sub(self.attempts)
    }

    /// Difficulty preset.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Whether the session has ended.
    pub fn is_over(&self) -> bool {
        self.is_over
    }
}

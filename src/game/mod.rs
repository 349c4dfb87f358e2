//! Game Logic Module
//!
//! Everything that decides the game. No I/O, no logging.
//!
//! ## Module Structure
//!
//! - `difficulty`: Presets and attempt budgets
//! - `session`: Secret, bounds, attempt counting
//! - `outcome`: Guess outcomes and rejections
//! - `hint`: Hint heuristic
//! - `stats`: Aggregates over won games

pub mod difficulty;
pub mod session;
pub mod outcome;
pub mod hint;
pub mod stats;

// Re-export key types
pub use difficulty::Difficulty;
pub use session::{GameSession, SessionId, SessionView};
pub use outcome::{GuessOutcome, GuessError, parse_guess};
pub use hint::{hint, Hint, Half, Parity};
pub use stats::{StatsTracker, StatsSummary, GameRecord};

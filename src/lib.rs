//! # Guess Game
//!
//! Number guessing game: find a secret in `[1, 100]` within a
//! difficulty-dependent number of attempts.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        GUESS GAME                            │
//! ├─────────────────────────────────────────────────────────────┤
//! │  core/            - Primitives                               │
//! │  └── rng.rs       - Xorshift128+ PRNG, seed derivation       │
//! │                                                              │
//! │  game/            - Game logic (no I/O)                      │
//! │  ├── difficulty.rs- Presets and attempt budgets              │
//! │  ├── session.rs   - Secret, bounds, guess evaluation         │
//! │  ├── outcome.rs   - Outcomes and rejections                  │
//! │  ├── hint.rs      - Hint heuristic                           │
//! │  └── stats.rs     - Aggregates over won games                │
//! │                                                              │
//! │  controller.rs    - Boundary the presentation layer calls    │
//! │                                                              │
//! │  shell/           - Terminal presentation                    │
//! │  ├── command.rs   - Input line parsing                       │
//! │  └── message.rs   - Text and JSON rendering                  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//!
//! - The secret always lies within the session's bounds.
//! - Only valid, in-range guesses consume an attempt.
//! - A session ends exactly once, on a match or when the budget runs out.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod core;
pub mod game;
pub mod controller;
pub mod shell;

// Re-export commonly used types
pub use crate::core::rng::SecretRng;
pub use game::{Difficulty, GameSession, SessionView, GuessOutcome, GuessError, Hint, StatsSummary};
pub use controller::{ControllerConfig, GameController};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Smallest possible secret
pub const RANGE_MIN: i32 = 1;

/// Largest possible secret
pub const RANGE_MAX: i32 = 100;

//! Shell Messages
//!
//! Everything the shell prints. Rendered as text for a terminal or as one
//! JSON object per line for a driving program.

use std::fmt;

use serde::Serialize;

use crate::game::hint::Hint;
use crate::game::outcome::{GuessError, GuessOutcome};
use crate::game::session::SessionView;
use crate::game::stats::StatsSummary;
use crate::shell::command::HELP;
use crate::{RANGE_MAX, RANGE_MIN};

/// A message from the shell to the player.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ShellMessage {
    /// A new session began.
    SessionStarted {
        /// Fresh session state
        view: SessionView,
    },

    /// A guess was evaluated.
    Guess {
        /// What happened
        outcome: GuessOutcome,
        /// State after the guess
        view: SessionView,
    },

    /// A guess was rejected.
    Rejected {
        /// Why
        error: GuessError,
    },

    /// Hint for the current session.
    Hint {
        /// Structured hint
        hint: Hint,
        /// Hint as a sentence
        text: String,
    },

    /// Statistics.
    Stats {
        /// Aggregates
        stats: StatsSummary,
    },

    /// Current range and attempts.
    Status {
        /// Session state
        view: SessionView,
    },

    /// Command list.
    Help,

    /// Malformed command.
    Error {
        /// Description
        message: String,
    },

    /// Shell is exiting.
    Goodbye,
}

impl ShellMessage {
    /// Build a hint message.
    pub fn hint(hint: Hint) -> Self {
        ShellMessage::Hint { text: hint.to_string(), hint }
    }

    /// Serialize to JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

fn write_view(f: &mut fmt::Formatter<'_>, view: &SessionView) -> fmt::Result {
    writeln!(f, "Range: {} - {}", view.lower_bound, view.upper_bound)?;
    write!(f, "Attempts: {}/{}", view.attempts, view.max_attempts)
}

fn write_outcome(f: &mut fmt::Formatter<'_>, outcome: &GuessOutcome) -> fmt::Result {
    match outcome {
        GuessOutcome::TooLow => write!(f, "Too low! Try a higher number."),
        GuessOutcome::TooHigh => write!(f, "Too high! Try a lower number."),
        GuessOutcome::Won { attempts } => write!(
            f,
            "Congratulations! You guessed the number in {} attempts!",
            attempts
        ),
        GuessOutcome::Lost { secret } => write!(f, "Game Over! The number was {}", secret),
    }
}

fn write_rejection(f: &mut fmt::Formatter<'_>, error: &GuessError) -> fmt::Result {
    match error {
        GuessError::InvalidInput { .. } => write!(f, "Please enter a valid number"),
        GuessError::OutOfRange { lower, upper } => {
            write!(f, "Please enter a number between {} and {}", lower, upper)
        }
        GuessError::AlreadyOver => write!(f, "Game Over! Start a new game."),
    }
}

fn write_stats(f: &mut fmt::Formatter<'_>, stats: &StatsSummary) -> fmt::Result {
    writeln!(f, "Statistics")?;
    match stats.best_score {
        Some(best) => writeln!(f, "Best Score: {}", best)?,
        None => writeln!(f, "Best Score: -")?,
    }
    match stats.average_attempts {
        Some(avg) => writeln!(f, "Average Attempts: {:.1}", avg)?,
        None => writeln!(f, "Average Attempts: -")?,
    }
    write!(f, "Games Played: {}", stats.games_played)
}

impl fmt::Display for ShellMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShellMessage::SessionStarted { view } => {
                writeln!(
                    f,
                    "New game ({}): guess a number between {} and {}.",
                    view.difficulty, RANGE_MIN, RANGE_MAX
                )?;
                write_view(f, view)
            }
            ShellMessage::Guess { outcome, view } => {
                write_outcome(f, outcome)?;
                writeln!(f)?;
                write_view(f, view)
            }
            ShellMessage::Rejected { error } => write_rejection(f, error),
            ShellMessage::Hint { text, .. } => write!(f, "Hint: {}", text),
            ShellMessage::Stats { stats } => write_stats(f, stats),
            ShellMessage::Status { view } => {
                write_view(f, view)?;
                if view.is_over {
                    write!(f, "\nGame over.")?;
                }
                Ok(())
            }
            ShellMessage::Help => f.write_str(HELP),
            ShellMessage::Error { message } => write!(f, "Error: {}", message),
            ShellMessage::Goodbye => f.write_str("Goodbye!"),
        }
    }
}

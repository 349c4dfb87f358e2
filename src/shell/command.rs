//! Shell Commands
//!
//! One command per input line. Unrecognized text is passed on as a raw
//! guess so the core decides whether it is a number.

use thiserror::Error;

use crate::game::difficulty::{Difficulty, ParseDifficultyError};

/// Parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Raw guess text.
    Guess(String),
    /// Ask for a hint.
    Hint,
    /// Start over, optionally on another difficulty.
    NewGame(Option<Difficulty>),
    /// Change difficulty (starts over).
    SetDifficulty(Difficulty),
    /// Show statistics.
    Stats,
    /// Show the current range and attempts.
    Status,
    /// List commands.
    Help,
    /// Leave.
    Quit,
}

/// Malformed command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// Command needs an argument.
    #[error("'{0}' needs an argument")]
    MissingArgument(&'static str),

    /// Difficulty name not recognized.
    #[error(transparent)]
    Difficulty(#[from] ParseDifficultyError),
}

impl Command {
    /// Parse a line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "guess" | "g" => Command::Guess(rest.to_string()),
            "hint" => Command::Hint,
            "new" | "reset" => {
                if rest.is_empty() {
                    Command::NewGame(None)
                } else {
                    Command::NewGame(Some(rest.parse()?))
                }
            }
            "difficulty" | "level" => {
                if rest.is_empty() {
                    return Err(CommandError::MissingArgument("difficulty"));
                }
                Command::SetDifficulty(rest.parse()?)
            }
            "stats" => Command::Stats,
            "status" => Command::Status,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            _ => Command::Guess(line.to_string()),
        };

        Ok(Some(command))
    }
}

/// Command summary for `help`.
pub const HELP: &str = "\
Commands:
  <number> | guess <number>   make a guess
  hint                        get a hint (free)
  new [easy|medium|hard]      start a new game
  difficulty <level>          change difficulty (starts a new game)
  stats                       show statistics
  status                      show range and attempts
  help                        show this list
  quit                        leave";

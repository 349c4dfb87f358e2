//! Terminal Shell
//!
//! Line-oriented presentation layer over [`GameController`]. Reads one
//! command per line and prints the resulting messages. Holds no game state
//! of its own.

pub mod command;
pub mod message;

use std::io::{self, BufRead, Write};
use std::num::ParseIntError;
use std::str::FromStr;

use thiserror::Error;
use tracing::{debug, info};

use crate::controller::{ControllerConfig, GameController};
use crate::game::difficulty::{Difficulty, ParseDifficultyError};
use crate::game::outcome::GuessOutcome;

pub use command::{Command, CommandError};
pub use message::ShellMessage;

/// How messages are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidOutput(s.to_string())),
        }
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// GUESS_DIFFICULTY not recognized.
    #[error("GUESS_DIFFICULTY: {0}")]
    InvalidDifficulty(#[from] ParseDifficultyError),

    /// GUESS_SEED not a u64.
    #[error("GUESS_SEED '{value}': {source}")]
    InvalidSeed {
        /// Raw value
        value: String,
        /// Parse failure
        source: ParseIntError,
    },

    /// GUESS_OUTPUT not text or json.
    #[error("GUESS_OUTPUT '{0}': expected text or json")]
    InvalidOutput(String),
}

/// Shell configuration.
#[derive(Clone, Debug, Default)]
pub struct ShellConfig {
    /// Difficulty of the first game.
    pub difficulty: Difficulty,
    /// Fixed seed for reproducible secrets.
    pub seed: Option<u64>,
    /// Output format.
    pub output: OutputFormat,
    /// Tracing filter directive. `None` falls back to `RUST_LOG`.
    pub log_filter: Option<String>,
}

impl ShellConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create config from any key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let difficulty = match lookup("GUESS_DIFFICULTY") {
            Some(v) => v.parse()?,
            None => Difficulty::default(),
        };

        let seed = match lookup("GUESS_SEED") {
            Some(v) => Some(v.trim().parse::<u64>().map_err(|source| ConfigError::InvalidSeed {
                value: v.clone(),
                source,
            })?),
            None => None,
        };

        let output = match lookup("GUESS_OUTPUT") {
            Some(v) => v.parse()?,
            None => OutputFormat::default(),
        };

        Ok(Self {
            difficulty,
            seed,
            output,
            log_filter: lookup("GUESS_LOG").filter(|v| !v.trim().is_empty()),
        })
    }

    /// Controller part of the configuration.
    pub fn controller(&self) -> ControllerConfig {
        ControllerConfig {
            difficulty: self.difficulty,
            seed: self.seed,
        }
    }
}

/// The shell loop.
pub struct Shell {
    controller: GameController,
    output: OutputFormat,
}

impl Shell {
    /// Create a shell; the first game starts immediately.
    pub fn new(config: &ShellConfig) -> Self {
        Self {
            controller: GameController::new(&config.controller()),
            output: config.output,
        }
    }

    /// Controller behind the shell.
    pub fn controller(&self) -> &GameController {
        &self.controller
    }

    /// Messages for one input line.
    pub fn handle_line(&mut self, line: &str) -> Vec<ShellMessage> {
        let command = match Command::parse(line) {
            Ok(Some(command)) => command,
            Ok(None) => return Vec::new(),
            Err(e) => return vec![ShellMessage::Error { message: e.to_string() }],
        };
        debug!("Command {:?}", command);
        self.execute(command)
    }

    fn execute(&mut self, command: Command) -> Vec<ShellMessage> {
        match command {
            Command::Guess(raw) => match self.controller.submit_guess(&raw) {
                Ok(outcome) => {
                    let mut messages = vec![ShellMessage::Guess {
                        outcome,
                        view: self.controller.view(),
                    }];
                    if matches!(outcome, GuessOutcome::Won { .. }) {
                        messages.push(ShellMessage::Stats { stats: self.controller.stats() });
                    }
                    messages
                }
                Err(error) => vec![ShellMessage::Rejected { error }],
            },
            Command::Hint => vec![ShellMessage::hint(self.controller.request_hint())],
            Command::NewGame(difficulty) => {
                let difficulty = difficulty.unwrap_or(self.controller.difficulty());
                let view = self.controller.new_game(difficulty);
                vec![ShellMessage::SessionStarted { view }]
            }
            Command::SetDifficulty(difficulty) => {
                let view = self.controller.set_difficulty(difficulty);
                vec![ShellMessage::SessionStarted { view }]
            }
            Command::Stats => vec![ShellMessage::Stats { stats: self.controller.stats() }],
            Command::Status => vec![ShellMessage::Status { view: self.controller.view() }],
            Command::Help => vec![ShellMessage::Help],
            Command::Quit => vec![ShellMessage::Goodbye],
        }
    }

    /// Read commands until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        if self.output == OutputFormat::Text {
            self.emit(&mut output, &ShellMessage::Help)?;
        }
        let started = ShellMessage::SessionStarted { view: self.controller.view() };
        self.emit(&mut output, &started)?;

        let mut input = input;
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            // Undecodable bytes become U+FFFD and are rejected as a guess
            let line = String::from_utf8_lossy(&buf);
            let line = line.trim_end_matches(['\n', '\r']);
            let messages = self.handle_line(line);
            let quit = messages.iter().any(|m| matches!(m, ShellMessage::Goodbye));

            for message in &messages {
                self.emit(&mut output, message)?;
            }
            if quit {
                info!("Player quit");
                return Ok(());
            }
        }

        info!("Input closed");
        Ok(())
    }

    fn emit<W: Write>(&self, output: &mut W, message: &ShellMessage) -> io::Result<()> {
        match self.output {
            OutputFormat::Text => writeln!(output, "{}", message)?,
            OutputFormat::Json => {
                let json = message
                    .to_json()
                    .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
                writeln!(output, "{}", json)?;
            }
        }
        output.flush()
    }
}

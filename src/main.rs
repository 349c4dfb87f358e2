//! Guess Game
//!
//! Terminal front end. Game output goes to stdout, logs to stderr.

use std::io;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use guess_game::{
    VERSION, RANGE_MIN, RANGE_MAX,
    shell::{Shell, ShellConfig},
};

fn main() -> anyhow::Result<()> {
    let config = ShellConfig::from_env().context("invalid configuration")?;

    // Initialize logging
    let filter = match config.log_filter.as_deref() {
        Some(directive) => EnvFilter::try_new(directive)
            .with_context(|| format!("invalid GUESS_LOG '{}'", directive))?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    info!("Guess Game v{}", VERSION);
    info!("Range: {}..={}, difficulty: {}", RANGE_MIN, RANGE_MAX, config.difficulty);

    let mut shell = Shell::new(&config);
    let stdin = io::stdin();
    let stdout = io::stdout();
    shell
        .run(stdin.lock(), stdout.lock())
        .context("terminal I/O failed")?;

    Ok(())
}

//! Tic-tac-toe console entry point.

use anyhow::Result;
use clap::Parser;
use std::io;
use tictactoe_console::{Cli, Driver, run};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with the board.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    info!(?cli, "Starting tictactoe_console");

    let mut driver = Driver::new(io::stdin().lock(), io::stdout());
    run(&cli, &mut driver)?;

    Ok(())
}

//! Command-line interface for tictactoe_console.

use clap::Parser;
use std::path::PathBuf;

/// Two-player tic-tac-toe at the console
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "tictactoe_console")]
#[command(about = "Two-player tic-tac-toe played at the console", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Seed for choosing who moves first (random if omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// TOML file naming both players; skips the setup prompts
    #[arg(short, long)]
    pub players: Option<PathBuf>,
}

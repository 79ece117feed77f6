//! One complete game session from options to final board.

use crate::cli::Cli;
use crate::config::PlayersConfig;
use crate::driver::Driver;
use anyhow::Result;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{BufRead, Write};
use tictactoe_engine::Board;
use tracing::{info, instrument};

/// Sets up players, builds the board and plays until it reports game over.
///
/// Players come from `cli.players` when given, otherwise from the setup
/// prompts. `cli.seed` makes the starting order reproducible.
#[instrument(skip(driver))]
pub fn run<R: BufRead, W: Write>(cli: &Cli, driver: &mut Driver<R, W>) -> Result<Board> {
    let players = match &cli.players {
        Some(path) => {
            let players = PlayersConfig::from_file(path)?.into_players()?;
            driver.announce_players(&players)?;
            players
        }
        None => driver.setup_players()?,
    };

    let board = match cli.seed {
        Some(seed) => {
            info!(seed, "Using seeded player order");
            Board::with_rng(players, &mut StdRng::seed_from_u64(seed))
        }
        None => Board::new(players),
    };

    Ok(driver.play(board)?)
}

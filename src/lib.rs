//! Tic-tac-toe at the console.
//!
//! Wraps the [`tictactoe_engine`] board with everything that talks to a
//! person: command-line options, an optional players file, move parsing
//! and the prompt/turn loop.
//!
//! # Architecture
//!
//! - **Cli**: command-line options (`--seed`, `--players`)
//! - **Config**: players loaded from a TOML file
//! - **Input**: `row,col` move parsing
//! - **Driver**: prompts, turn alternation and the final announcement

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod driver;
mod game;
mod input;

pub use cli::Cli;
pub use config::{ConfigError, PlayersConfig};
pub use driver::{Driver, DriverError, Seat};
pub use game::run;
pub use input::{Coordinates, ParseMoveError};

pub use tictactoe_engine::{Board, MoveError, MoveOutcome, Outcome, Player};

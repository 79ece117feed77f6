//! Tic-tac-toe game engine.
//!
//! Owns the 3x3 grid, validates and applies moves, and detects wins and
//! ties. Console I/O, player setup and the turn loop live in the driver
//! crate; this crate never blocks or prints.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{Board, MoveOutcome, Outcome, Player};
//!
//! let ada = Player::new("Ada", "X");
//! let bob = Player::new("Bob", "O");
//! let mut board = Board::with_order(ada.clone(), bob);
//!
//! board.attempt_move(0, 0, &ada).unwrap();
//! board.attempt_move(0, 1, &ada).unwrap();
//! let outcome = board.attempt_move(0, 2, &ada).unwrap();
//!
//! assert_eq!(outcome, MoveOutcome::Finished(Outcome::Win { marker: "X".into() }));
//! assert!(board.game_over());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod cell;
mod error;
mod player;
pub mod rules;

pub use board::{Board, H_LINE_WIDTH, MoveOutcome, Outcome, SIZE};
pub use cell::Cell;
pub use error::MoveError;
pub use player::Player;

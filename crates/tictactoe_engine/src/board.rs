//! The game board: grid ownership, move application and turn order.

use crate::cell::Cell;
use crate::error::MoveError;
use crate::player::Player;
use crate::rules::{draw, win};
use derive_more::Display;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Side length of the square grid.
pub const SIZE: usize = 3;

/// Width of the rule printed between rendered rows.
pub const H_LINE_WIDTH: usize = SIZE * 3;

/// How a finished game ended.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Outcome {
    /// A line was completed by the player using `marker`.
    #[display("'{marker}' completed a line")]
    Win {
        /// Marker that fills the winning line.
        marker: String,
    },
    /// Every cell is occupied and no line is complete.
    #[display("tie")]
    Tie,
}

/// Result of a move the board accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The game continues.
    InProgress,
    /// This move ended the game.
    Finished(Outcome),
}

/// Game state for one session: the grid, the two players and the
/// game-over latch.
///
/// A board is built once per game and discarded afterwards; there is no
/// reset.
#[derive(Debug, Clone)]
pub struct Board {
    grid: [[Cell; SIZE]; SIZE],
    players: [Player; 2],
    current_player: Player,
    other_player: Player,
    game_over: bool,
    outcome: Option<Outcome>,
}

impl Board {
    /// Creates an empty board with the players in random order.
    #[instrument(skip(players))]
    pub fn new(players: [Player; 2]) -> Self {
        Self::with_rng(players, &mut rand::rng())
    }

    /// Creates an empty board, ordering the players with `rng`.
    #[instrument(skip(players, rng))]
    pub fn with_rng<R: Rng + ?Sized>(players: [Player; 2], rng: &mut R) -> Self {
        let mut order = players.clone();
        order.shuffle(rng);
        let [current, other] = order;
        Self {
            players,
            ..Self::with_order(current, other)
        }
    }

    /// Creates an empty board with a fixed player order.
    #[instrument(skip_all, fields(current = %current.name(), other = %other.name()))]
    pub fn with_order(current: Player, other: Player) -> Self {
        info!("Creating new board");
        Self {
            grid: std::array::from_fn(|_| std::array::from_fn(|_| Cell::new())),
            players: [current.clone(), other.clone()],
            current_player: current,
            other_player: other,
            game_over: false,
            outcome: None,
        }
    }

    /// Both players in the order they were handed to the constructor.
    ///
    /// Unaffected by shuffling and by [`Board::switch_player`].
    pub fn players(&self) -> [&Player; 2] {
        [&self.players[0], &self.players[1]]
    }

    /// Player whose turn it currently is.
    pub fn current_player(&self) -> &Player {
        &self.current_player
    }

    /// Player waiting for their turn.
    pub fn other_player(&self) -> &Player {
        &self.other_player
    }

    /// True once a win or tie has been detected. Never reverts.
    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// How the game ended, once it has.
    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    /// Returns the cell at `(row, col)`, or `None` if out of bounds.
    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.grid.get(row).and_then(|r| r.get(col))
    }

    /// Iterates over every cell with its `(row, col)` coordinates, row-major.
    pub fn cells(&self) -> impl Iterator<Item = ((usize, usize), &Cell)> {
        self.grid.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(col, cell)| ((row, col), cell))
        })
    }

    /// Swaps the current and other player.
    #[instrument(skip(self))]
    pub fn switch_player(&mut self) {
        std::mem::swap(&mut self.current_player, &mut self.other_player);
        debug!(current = %self.current_player.name(), "Switched player");
    }

    /// Places `player`'s marker at `(row, col)`, then evaluates whether the
    /// move ended the game.
    ///
    /// The board does not check whose turn it is; turn order belongs to
    /// the caller.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the game has already ended.
    /// - [`MoveError::OutOfBounds`] if `row` or `col` is not in `0..SIZE`.
    /// - [`MoveError::CellOccupied`] if the cell already holds a marker.
    ///
    /// A rejected move leaves the board unchanged.
    #[instrument(skip(self, player), fields(player = %player.name(), marker = %player.marker()))]
    pub fn attempt_move(
        &mut self,
        row: usize,
        col: usize,
        player: &Player,
    ) -> Result<MoveOutcome, MoveError> {
        if self.game_over {
            warn!("Move attempted after game over");
            return Err(MoveError::GameOver);
        }

        let cell = self
            .grid
            .get_mut(row)
            .and_then(|r| r.get_mut(col))
            .ok_or(MoveError::OutOfBounds {
                row,
                col,
                size: SIZE,
            })?;

        if !cell.is_empty() {
            debug!("Target cell already occupied");
            return Err(MoveError::CellOccupied { row, col });
        }

        cell.claim(player.marker());
        debug!("Marker placed");

        match self.outcome_of_move(row, col, player.marker()) {
            Some(outcome) => {
                info!(%outcome, "Game over");
                self.game_over = true;
                self.outcome = Some(outcome.clone());
                Ok(MoveOutcome::Finished(outcome))
            }
            None => Ok(MoveOutcome::InProgress),
        }
    }

    /// True if a line through `(row, col)` or either diagonal is complete,
    /// or the board is full.
    #[instrument(skip(self))]
    pub fn is_game_over(&self, row: usize, col: usize) -> bool {
        win::is_win(self, row, col) || draw::is_full(self)
    }

    /// True if every cell in `row` holds the same marker.
    pub fn row_win(&self, row: usize) -> bool {
        win::row_win(self, row)
    }

    /// True if every cell in `col` holds the same marker.
    pub fn col_win(&self, col: usize) -> bool {
        win::col_win(self, col)
    }

    /// True if every cell `(i, i)` holds the same marker.
    pub fn main_diagonal_win(&self) -> bool {
        win::main_diagonal_win(self)
    }

    /// True if every cell `(i, SIZE - 1 - i)` holds the same marker.
    pub fn anti_diagonal_win(&self) -> bool {
        win::anti_diagonal_win(self)
    }

    /// True if the board is full and no line anywhere is complete.
    pub fn is_tie(&self) -> bool {
        draw::is_tie(self)
    }

    // Win is checked before the full-board test, so a last move that both
    // fills the board and completes a line is a win.
    fn outcome_of_move(&self, row: usize, col: usize, marker: &str) -> Option<Outcome> {
        if win::is_win(self, row, col) {
            Some(Outcome::Win {
                marker: marker.to_string(),
            })
        } else if draw::is_full(self) {
            Some(Outcome::Tie)
        } else {
            None
        }
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.grid.iter().enumerate() {
            let line = row
                .iter()
                .map(|cell| cell.mark().unwrap_or(" "))
                .collect::<Vec<_>>()
                .join(" | ");
            writeln!(f, "{line}")?;
            if i != SIZE - 1 {
                writeln!(f, "{}", "-".repeat(H_LINE_WIDTH))?;
            }
        }
        Ok(())
    }
}

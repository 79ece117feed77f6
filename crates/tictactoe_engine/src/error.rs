//! Move rejection reasons.

use derive_more::{Display, Error};

/// Why [`Board::attempt_move`](crate::Board::attempt_move) refused a move.
///
/// Every variant leaves the board untouched, so the driver can simply
/// re-prompt.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// Row or column lies outside the grid.
    #[display("({row},{col}) is out of bounds: row and col must be in 0..{size}")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Side length of the board.
        size: usize,
    },

    /// The target cell already holds a marker.
    #[display("cell occupied: ({row},{col}) is already marked")]
    CellOccupied {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// A win or tie has already ended the game.
    #[display("game is already over")]
    GameOver,
}

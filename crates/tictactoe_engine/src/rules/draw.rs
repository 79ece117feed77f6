//! Draw detection logic for tic-tac-toe.

use super::win::any_line;
use crate::Board;
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
pub fn is_full(board: &Board) -> bool {
    board.cells().all(|(_, cell)| !cell.is_empty())
}

/// A full board with no completed line anywhere.
#[instrument(skip(board))]
pub fn is_tie(board: &Board) -> bool {
    is_full(board) && !any_line(board)
}

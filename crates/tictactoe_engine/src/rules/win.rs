//! Win detection logic for tic-tac-toe.

use crate::{Board, Cell, SIZE};
use tracing::{instrument, trace};

/// True if the line holds `SIZE` cells that all carry the same marker.
///
/// A missing cell (out-of-range index) or an empty one breaks the line.
fn line_complete<'a>(mut cells: impl Iterator<Item = Option<&'a Cell>>) -> bool {
    let Some(first) = cells.next().flatten().and_then(Cell::mark) else {
        return false;
    };
    cells.all(|cell| cell.and_then(Cell::mark) == Some(first))
}

/// All cells in `row` share a marker.
pub fn row_win(board: &Board, row: usize) -> bool {
    line_complete((0..SIZE).map(|col| board.cell(row, col)))
}

/// All cells in `col` share a marker.
pub fn col_win(board: &Board, col: usize) -> bool {
    line_complete((0..SIZE).map(|row| board.cell(row, col)))
}

/// All cells `(i, i)` share a marker.
pub fn main_diagonal_win(board: &Board) -> bool {
    line_complete((0..SIZE).map(|i| board.cell(i, i)))
}

/// All cells `(i, SIZE - 1 - i)` share a marker.
pub fn anti_diagonal_win(board: &Board) -> bool {
    line_complete((0..SIZE).map(|i| board.cell(i, SIZE - 1 - i)))
}

/// Checks the lines a marker at `(row, col)` could have completed.
///
/// Only those lines can change when that cell is claimed. Both diagonals
/// are checked for every move; for an off-diagonal cell they can only be
/// complete if they already were, which would have ended the game earlier.
#[instrument(skip(board))]
pub fn is_win(board: &Board, row: usize, col: usize) -> bool {
    let won = row_win(board, row)
        || col_win(board, col)
        || main_diagonal_win(board)
        || anti_diagonal_win(board);
    trace!(won, "Evaluated lines through move");
    won
}

/// True if any row, column or diagonal is complete.
pub(crate) fn any_line(board: &Board) -> bool {
    (0..SIZE).any(|i| row_win(board, i) || col_win(board, i))
        || main_diagonal_win(board)
        || anti_diagonal_win(board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;

    fn board_with(moves: &[(usize, usize, &str)]) -> Board {
        let mut board = Board::with_order(Player::new("Ada", "X"), Player::new("Bob", "O"));
        for &(row, col, marker) in moves {
            board
                .attempt_move(row, col, &Player::new("test", marker))
                .unwrap();
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = board_with(&[]);
        assert!(!row_win(&board, 0));
        assert!(!col_win(&board, 0));
        assert!(!main_diagonal_win(&board));
        assert!(!anti_diagonal_win(&board));
    }

    #[test]
    fn test_winner_middle_row() {
        let board = board_with(&[(1, 0, "O"), (1, 1, "O"), (1, 2, "O")]);
        assert!(row_win(&board, 1));
        assert!(!row_win(&board, 0));
        assert!(is_win(&board, 1, 2));
    }

    #[test]
    fn test_winner_column() {
        let board = board_with(&[(0, 2, "X"), (1, 2, "X"), (2, 2, "X")]);
        assert!(col_win(&board, 2));
        assert!(is_win(&board, 2, 2));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_with(&[(0, 2, "O"), (1, 1, "O"), (2, 0, "O")]);
        assert!(anti_diagonal_win(&board));
        assert!(!main_diagonal_win(&board));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_with(&[(0, 0, "X"), (0, 1, "O"), (0, 2, "X")]);
        assert!(!row_win(&board, 0));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(&[(0, 0, "X"), (0, 1, "X")]);
        assert!(!row_win(&board, 0));
        assert!(!is_win(&board, 0, 1));
    }

    #[test]
    fn test_out_of_range_line_is_not_a_win() {
        let board = board_with(&[(0, 0, "X"), (0, 1, "X"), (0, 2, "X")]);
        assert!(!row_win(&board, SIZE));
        assert!(!col_win(&board, SIZE + 4));
    }
}

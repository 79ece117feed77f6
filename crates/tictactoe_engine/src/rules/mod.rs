//! Game rules for tic-tac-toe.
//!
//! Pure predicates over a [`Board`](crate::Board). They never mutate, so
//! the board can call them right after placing a marker.

pub mod draw;
pub mod win;

pub use draw::{is_full, is_tie};
pub use win::{anti_diagonal_win, col_win, is_win, main_diagonal_win, row_win};

//! A single square of the grid.

use serde::{Deserialize, Serialize};

/// One square of the board, either empty or holding a player's marker.
///
/// The board is the only writer. A cell is claimed at most once per game
/// and is never cleared.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    mark: Option<String>,
}

impl Cell {
    /// Creates an empty cell.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the marker occupying this cell, if any.
    pub fn mark(&self) -> Option<&str> {
        self.mark.as_deref()
    }

    /// Returns true if no marker has been placed here.
    pub fn is_empty(&self) -> bool {
        self.mark.is_none()
    }

    /// Places a marker. Callers must have checked [`Cell::is_empty`].
    pub(crate) fn claim(&mut self, marker: &str) {
        debug_assert!(self.is_empty(), "claimed an occupied cell");
        self.mark = Some(marker.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cell_is_empty() {
        let cell = Cell::new();
        assert!(cell.is_empty());
        assert_eq!(cell.mark(), None);
    }

    #[test]
    fn test_claim_sets_mark() {
        let mut cell = Cell::new();
        cell.claim("X");
        assert!(!cell.is_empty());
        assert_eq!(cell.mark(), Some("X"));
    }
}

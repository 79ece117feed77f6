//! Player identity.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A participant: a display name and the marker they place on the board.
///
/// Immutable once built. The engine does not require markers to be
/// distinct or non-empty; the driver validates that during setup.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
pub struct Player {
    /// Name shown in prompts and the final announcement.
    name: String,
    /// Token written into claimed cells.
    marker: String,
}

impl Player {
    /// Creates a player.
    pub fn new(name: impl Into<String>, marker: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            marker: marker.into(),
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} uses '{}' as a marker.", self.name, self.marker)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_describes_marker() {
        let player = Player::new("Ada", "X");
        assert_eq!(player.to_string(), "Ada uses 'X' as a marker.");
    }

    #[test]
    fn test_getters() {
        let player = Player::new("Bob", "@");
        assert_eq!(player.name(), "Bob");
        assert_eq!(player.marker(), "@");
    }
}

//! Player setup loaded from a TOML file.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe_engine::Player;
use tracing::{debug, info, instrument};

/// Both players of a game, as written in a players file.
///
/// ```toml
/// [[players]]
/// name = "Ada"
/// marker = "X"
///
/// [[players]]
/// name = "Bob"
/// marker = "O"
/// ```
#[derive(Debug, Clone, Getters, Serialize, Deserialize)]
pub struct PlayersConfig {
    /// Players in seat order.
    players: Vec<Player>,
}

impl PlayersConfig {
    /// Loads and validates a players file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading players from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read players file: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Parses and validates players from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse players file: {}", e)))?;
        config.validate()?;
        info!(count = config.players.len(), "Players loaded successfully");
        Ok(config)
    }

    /// Consumes the config, returning the two players in seat order.
    pub fn into_players(self) -> Result<[Player; 2], ConfigError> {
        let count = self.players.len();
        <[Player; 2]>::try_from(self.players)
            .map_err(|_| ConfigError::new(format!("Expected 2 players, found {}", count)))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.players.len() != 2 {
            return Err(ConfigError::new(format!(
                "Expected 2 players, found {}",
                self.players.len()
            )));
        }
        for player in &self.players {
            if player.name().trim().is_empty() {
                return Err(ConfigError::new("Player name cannot be empty".to_string()));
            }
            if player.marker().trim().is_empty() {
                return Err(ConfigError::new(format!(
                    "Marker for {} cannot be empty",
                    player.name()
                )));
            }
        }
        if self.players[0].marker() == self.players[1].marker() {
            return Err(ConfigError::new(format!(
                "Both players use '{}' as a marker",
                self.players[0].marker()
            )));
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_two_players() {
        let config = PlayersConfig::from_toml(
            r#"
            [[players]]
            name = "Ada"
            marker = "X"

            [[players]]
            name = "Bob"
            marker = "O"
            "#,
        )
        .unwrap();
        let [one, two] = config.into_players().unwrap();
        assert_eq!(one, Player::new("Ada", "X"));
        assert_eq!(two, Player::new("Bob", "O"));
    }

    #[test]
    fn test_rejects_duplicate_markers() {
        let err = PlayersConfig::from_toml(
            r#"
            [[players]]
            name = "Ada"
            marker = "X"

            [[players]]
            name = "Bob"
            marker = "X"
            "#,
        )
        .unwrap_err();
        assert!(err.message.contains("'X'"));
    }

    #[test]
    fn test_rejects_single_player() {
        let err = PlayersConfig::from_toml(
            r#"
            [[players]]
            name = "Ada"
            marker = "X"
            "#,
        )
        .unwrap_err();
        assert!(err.message.contains("found 1"));
    }

    #[test]
    fn test_rejects_empty_marker() {
        let err = PlayersConfig::from_toml(
            r#"
            [[players]]
            name = "Ada"
            marker = " "

            [[players]]
            name = "Bob"
            marker = "O"
            "#,
        )
        .unwrap_err();
        assert!(err.message.contains("Marker for Ada"));
    }
}

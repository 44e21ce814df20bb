//! Game configuration.

use serde::{Deserialize, Serialize};

use crate::GameError;

/// Attempt budget used when none is configured.
pub const DEFAULT_ATTEMPTS: u32 = 10;

/// Read-only settings shared by every session on a server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// How many wrong guesses a player may make per round.
    pub attempts: u32,
}

impl GameConfig {
    /// Checks that the configuration can drive a game.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.attempts == 0 {
            return Err(GameError::InvalidConfig(
                "attempts must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            attempts: DEFAULT_ATTEMPTS,
        }
    }
}

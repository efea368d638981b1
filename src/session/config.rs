//! Session configuration.

use serde::{Deserialize, Serialize};

use crate::core::Player;
use crate::search::SearchConfig;

/// Which seat the computer plays.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AiSeat {
    /// Both seats are played by the caller's agent.
    None,
    /// Always the same seat.
    Fixed(Player),
    /// Coin flip at the start of every game.
    #[default]
    Random,
}

/// Session configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Seed for the session RNG (tie-breaks and seat coin flips).
    pub seed: u64,

    pub ai_seat: AiSeat,

    /// Settings for the computer player.
    pub search: SearchConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            ai_seat: AiSeat::Random,
            search: SearchConfig::default(),
        }
    }
}

impl SessionConfig {
    /// Create a new config with custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Create a new config with a custom AI seat.
    pub fn with_ai_seat(mut self, seat: AiSeat) -> Self {
        self.ai_seat = seat;
        self
    }

    /// Create a new config with custom search settings.
    pub fn with_search(mut self, search: SearchConfig) -> Self {
        self.search = search;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SessionConfig::default();
        assert_eq!(config.seed, 42);
        assert_eq!(config.ai_seat, AiSeat::Random);
        assert_eq!(config.search, SearchConfig::default());
    }

    #[test]
    fn test_serialization() {
        let config = SessionConfig::default()
            .with_seed(7)
            .with_ai_seat(AiSeat::Fixed(Player::X));

        let json = serde_json::to_string(&config).unwrap();
        let deserialized: SessionConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config, deserialized);
    }
}

//! Game configuration.

use thiserror::Error;

use crate::types::{GRAVITY_INTERVAL_MS, LINE_CLEAR_SCORE};

/// Rejected configuration values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("gravity interval must be at least 1 ms")]
    ZeroGravityInterval,
}

/// Tunables for a game session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Seed for piece selection
    pub seed: u32,
    /// Milliseconds between gravity steps
    pub gravity_interval_ms: u32,
    /// Points per cleared row
    pub line_clear_score: u32,
}

impl GameConfig {
    pub fn with_seed(seed: u32) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.gravity_interval_ms == 0 {
            return Err(ConfigError::ZeroGravityInterval);
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            gravity_interval_ms: GRAVITY_INTERVAL_MS,
            line_clear_score: LINE_CLEAR_SCORE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = GameConfig::default();
        assert_eq!(config.gravity_interval_ms, 500);
        assert_eq!(config.line_clear_score, 10);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn zero_gravity_interval_is_rejected() {
        let config = GameConfig {
            gravity_interval_ms: 0,
            ..GameConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroGravityInterval));
        assert_eq!(
            ConfigError::ZeroGravityInterval.to_string(),
            "gravity interval must be at least 1 ms"
        );
    }
}

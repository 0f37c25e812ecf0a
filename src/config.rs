//! Game configuration knobs.

use crate::error::ConfigError;

/// Number of upcoming pieces the queue holds.
pub const DEFAULT_QUEUE_CAPACITY: usize = 5;

/// Settings for one game session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    /// Fixed queue capacity; the session pre-fills this many pieces.
    pub capacity: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_QUEUE_CAPACITY,
        }
    }
}

impl GameConfig {
    /// Reject settings the session cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = GameConfig::default();
        assert_eq!(config.capacity, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_capacity_is_rejected() {
        let config = GameConfig { capacity: 0 };
        assert_eq!(config.validate(), Err(ConfigError::ZeroCapacity));
    }
}

//! Puzzle size configuration
//!
//! The two size constants are passed into board construction as a value, so
//! several games with different sizes can coexist in one process.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::core::error::{Result, TankError};

/// Items per tank at full capacity
pub const DEFAULT_MAX_ITEMS: usize = 4;

/// Number of tanks in the line
pub const DEFAULT_MAX_TANKS: usize = 3;

/// Largest tank capacity accepted; the screen draws one row per item
pub const MAX_ITEMS_LIMIT: usize = 32;

/// Largest number of tanks accepted; the screen draws one column per tank
pub const MAX_TANKS_LIMIT: usize = 16;

/// Configuration for one game
///
/// Changing these values changes the initial seeding and how many moves a
/// solution needs, but not the rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Capacity of every tank; the first tank starts with items `max_items..=1`
    pub max_items: usize,

    /// Number of tanks linked left to right
    pub max_tanks: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_items: DEFAULT_MAX_ITEMS,
            max_tanks: DEFAULT_MAX_TANKS,
        }
    }
}

impl GameConfig {
    pub fn new(max_items: usize, max_tanks: usize) -> Self {
        Self {
            max_items,
            max_tanks,
        }
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.max_items == 0 {
            return Err(TankError::InvalidConfig(
                "max_items must be at least 1".into(),
            ));
        }

        // With a single tank the last tank is the first one and no move exists
        if self.max_tanks < 2 {
            return Err(TankError::InvalidConfig(format!(
                "max_tanks ({}) must be at least 2",
                self.max_tanks
            )));
        }

        if self.max_items > MAX_ITEMS_LIMIT {
            return Err(TankError::InvalidConfig(format!(
                "max_items ({}) must be at most {}",
                self.max_items, MAX_ITEMS_LIMIT
            )));
        }

        if self.max_tanks > MAX_TANKS_LIMIT {
            return Err(TankError::InvalidConfig(format!(
                "max_tanks ({}) must be at most {}",
                self.max_tanks, MAX_TANKS_LIMIT
            )));
        }

        Ok(())
    }

    /// Parse a TOML document; missing keys keep their defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: GameConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "loading game config");
        Self::from_toml_str(&content)
    }
}

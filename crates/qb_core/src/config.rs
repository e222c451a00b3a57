//! # Stats Configuration
//!
//! Knobs for the derived quarterback metrics. The defaults reproduce the
//! standard season report: the opening stretch is Game1..Game3, passer
//! ratings carry one decimal and ranking ratios three.
//!
//! ```rust
//! use qb_core::config::StatsConfig;
//!
//! let config = StatsConfig::default();
//! assert_eq!(config.opening_games, ["Game1", "Game2", "Game3"]);
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Result, StatsError};
use crate::rating::MAX_DECIMAL_PLACES;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsConfig {
    /// Game identifiers combined for the opening-stretch passer rating
    pub opening_games: Vec<String>,
    /// Decimal places kept on every passer rating (default: 1, max: 15)
    pub rating_precision: u32,
    /// Decimal places on completion % and yards/attempt answers (default: 3, max: 15)
    pub ratio_precision: u32,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            opening_games: vec!["Game1".to_string(), "Game2".to_string(), "Game3".to_string()],
            rating_precision: 1,
            ratio_precision: 3,
        }
    }
}

impl StatsConfig {
    /// Opening stretch of `n` games named Game1..Game`n`.
    pub fn with_opening_games(mut self, n: usize) -> Self {
        self.opening_games = (1..=n).map(|i| format!("Game{}", i)).collect();
        self
    }

    /// # Errors
    /// * `StatsError::InvalidConfig` - a precision above 15 decimal places
    pub fn validate(&self) -> Result<()> {
        let precisions = [
            ("rating_precision", self.rating_precision),
            ("ratio_precision", self.ratio_precision),
        ];
        for (field, places) in precisions {
            if places > MAX_DECIMAL_PLACES {
                return Err(StatsError::InvalidConfig(format!(
                    "{} {} exceeds {} decimal places",
                    field, places, MAX_DECIMAL_PLACES
                )));
            }
        }
        Ok(())
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path)?;
        let config = Self::from_yaml_str(&yaml)?;
        log::debug!("Loaded stats config from {:?}", path);
        Ok(config)
    }
}

//! Validation for player data
//!
//! The only structural rule a player carries is a non-empty game log; stat
//! values themselves are never validated (missing keys count as zero).

use crate::error::{Result, StatsError};
use crate::models::GameRecord;

/// Player validation utility
pub struct PlayerValidator;

impl PlayerValidator {
    /// A player must have at least one recorded game.
    pub fn validate_games(name: &str, games: &[GameRecord]) -> Result<()> {
        if games.is_empty() {
            return Err(StatsError::EmptyGames { player: name.to_string() });
        }
        Ok(())
    }
}

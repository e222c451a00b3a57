use serde::Serialize;

use super::validation::PlayerValidator;
use crate::error::Result;
use crate::models::GameRecord;

/// Read access to a player's game log, shared by every position type.
pub trait GameLog {
    fn name(&self) -> &str;

    fn games(&self) -> &[GameRecord];

    /// Sum of `stat` over every game; games without the stat add 0.
    ///
    /// Stats are whole counts. A fractional value is truncated toward zero
    /// per game before summing, so 88.5 and 10.5 yards total 98.
    fn season_total(&self, stat: &str) -> i64 {
        self.games().iter().map(|game| game.stat(stat)).sum()
    }

    fn games_played(&self) -> usize {
        self.games().len()
    }
}

/// A named player and the box scores of every game they appeared in.
///
/// The name is fixed at construction. The game log can be replaced but never
/// emptied.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Player {
    name: String,
    games: Vec<GameRecord>,
}

impl Player {
    pub fn new(name: impl Into<String>, games: Vec<GameRecord>) -> Result<Self> {
        let name = name.into();
        PlayerValidator::validate_games(&name, &games)?;
        Ok(Self { name, games })
    }

    /// Replace the game log. On error the current games are kept.
    pub fn set_games(&mut self, games: Vec<GameRecord>) -> Result<()> {
        PlayerValidator::validate_games(&self.name, &games)?;
        self.games = games;
        Ok(())
    }

    /// Value of `stat` in a single game, 0 when absent.
    pub fn game_total(stat: &str, game: &GameRecord) -> i64 {
        game.stat(stat)
    }
}

impl GameLog for Player {
    fn name(&self) -> &str {
        &self.name
    }

    fn games(&self) -> &[GameRecord] {
        &self.games
    }
}

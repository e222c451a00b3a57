use serde::Serialize;

use super::types::{GameLog, Player};
use crate::error::Result;
use crate::models::GameRecord;

/// Running back. Carries the plain player game log and nothing else yet;
/// it exists so rosters can tell the position apart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunningBack {
    player: Player,
}

impl RunningBack {
    pub fn new(name: impl Into<String>, games: Vec<GameRecord>) -> Result<Self> {
        Ok(Self { player: Player::new(name, games)? })
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn set_games(&mut self, games: Vec<GameRecord>) -> Result<()> {
        self.player.set_games(games)
    }
}

impl GameLog for RunningBack {
    fn name(&self) -> &str {
        self.player.name()
    }

    fn games(&self) -> &[GameRecord] {
        self.player.games()
    }
}

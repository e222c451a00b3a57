use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::config::StatsConfig;
use crate::error::{Result, StatsError};
use crate::models::GameRecord;
use crate::player::{GameLog, RunningBack};
use crate::quarterback::QuarterbackStats;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Position {
    #[serde(rename = "QB")]
    Quarterback,
    #[serde(rename = "RB")]
    RunningBack,
}

impl Position {
    /// Roster code used in the data files (e.g., "QB").
    pub fn code(&self) -> &'static str {
        match self {
            Position::Quarterback => "QB",
            Position::RunningBack => "RB",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Position {
    type Err = StatsError;

    fn from_str(code: &str) -> Result<Self> {
        match code {
            "QB" => Ok(Position::Quarterback),
            "RB" => Ok(Position::RunningBack),
            other => Err(StatsError::UnknownPosition(other.to_string())),
        }
    }
}

/// A constructed player of any supported position.
#[derive(Debug, Clone, PartialEq)]
pub enum RosterPlayer {
    Quarterback(QuarterbackStats),
    RunningBack(RunningBack),
}

impl RosterPlayer {
    pub fn position(&self) -> Position {
        match self {
            RosterPlayer::Quarterback(_) => Position::Quarterback,
            RosterPlayer::RunningBack(_) => Position::RunningBack,
        }
    }

    pub fn as_game_log(&self) -> &dyn GameLog {
        match self {
            RosterPlayer::Quarterback(qb) => qb,
            RosterPlayer::RunningBack(rb) => rb,
        }
    }
}

pub type PlayerConstructor = fn(String, Vec<GameRecord>, &StatsConfig) -> Result<RosterPlayer>;

fn build_quarterback(name: String, games: Vec<GameRecord>, config: &StatsConfig) -> Result<RosterPlayer> {
    QuarterbackStats::with_config(name, games, config).map(RosterPlayer::Quarterback)
}

fn build_running_back(name: String, games: Vec<GameRecord>, _config: &StatsConfig) -> Result<RosterPlayer> {
    RunningBack::new(name, games).map(RosterPlayer::RunningBack)
}

/// Maps roster position codes to player constructors.
#[derive(Clone, Default)]
pub struct PositionFactory {
    constructors: BTreeMap<String, PlayerConstructor>,
}

impl fmt::Debug for PositionFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PositionFactory").field("codes", &self.codes().collect::<Vec<_>>()).finish()
    }
}

impl PositionFactory {
    /// Factory with no positions registered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Factory for every modeled position: QB and RB.
    pub fn standard() -> Self {
        let mut factory = Self::new();
        factory.constructors.insert(Position::Quarterback.code().to_string(), build_quarterback);
        factory.constructors.insert(Position::RunningBack.code().to_string(), build_running_back);
        factory
    }

    /// Register a constructor under `code`.
    ///
    /// Codes are non-empty, uppercase ASCII letters and must not be taken.
    pub fn register(&mut self, code: &str, constructor: PlayerConstructor) -> Result<()> {
        if code.is_empty() || !code.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(StatsError::InvalidPositionCode(code.to_string()));
        }
        if self.constructors.contains_key(code) {
            return Err(StatsError::DuplicatePosition(code.to_string()));
        }
        self.constructors.insert(code.to_string(), constructor);
        Ok(())
    }

    pub fn is_registered(&self, code: &str) -> bool {
        self.constructors.contains_key(code)
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.constructors.keys().map(String::as_str)
    }

    /// # Errors
    /// * `StatsError::UnknownPosition` - `code` has no registered constructor
    /// * whatever the position's constructor rejects (empty games, zero attempts)
    pub fn build(&self, code: &str, name: String, games: Vec<GameRecord>, config: &StatsConfig) -> Result<RosterPlayer> {
        let constructor =
            self.constructors.get(code).ok_or_else(|| StatsError::UnknownPosition(code.to_string()))?;
        constructor(name, games, config)
    }
}

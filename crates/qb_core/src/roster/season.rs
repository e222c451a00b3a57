//! Season context: owns every constructed player and the teams built from
//! roster files.
//!
//! Each position keeps its own ordered registry; a team only stores slots
//! pointing into them, so cross-team ranking queries see every quarterback in
//! construction order.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use super::position::{Position, PositionFactory, RosterPlayer};
use crate::config::StatsConfig;
use crate::error::Result;
use crate::models::GameRecord;
use crate::player::{GameLog, RunningBack};
use crate::quarterback::{QuarterbackRegistry, QuarterbackStats};

/// One player as listed in a roster file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerEntry {
    #[serde(rename = "Player")]
    pub name: String,
    #[serde(rename = "Position")]
    pub position: String,
    #[serde(rename = "Games")]
    pub games: Vec<GameRecord>,
}

/// Where a constructed player lives: its position registry and index in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RosterSlot {
    pub position: Position,
    pub index: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Team {
    pub name: String,
    roster: BTreeMap<Position, Vec<usize>>,
}

impl Team {
    fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), roster: BTreeMap::new() }
    }

    /// Registry indexes of this team's players at `position`, in file order.
    pub fn players_at(&self, position: Position) -> &[usize] {
        self.roster.get(&position).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.roster.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.roster.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug)]
pub struct Season {
    factory: PositionFactory,
    players: Vec<RosterSlot>,
    quarterbacks: QuarterbackRegistry,
    running_backs: Vec<RunningBack>,
    teams: Vec<Team>,
}

impl Default for Season {
    fn default() -> Self {
        Self::new()
    }
}

impl Season {
    pub fn new() -> Self {
        Self::with_config(StatsConfig::default())
    }

    pub fn with_config(config: StatsConfig) -> Self {
        Self::with_factory(PositionFactory::standard(), config)
    }

    pub fn with_factory(factory: PositionFactory, config: StatsConfig) -> Self {
        Self {
            factory,
            players: Vec::new(),
            quarterbacks: QuarterbackRegistry::with_config(config),
            running_backs: Vec::new(),
            teams: Vec::new(),
        }
    }

    pub fn config(&self) -> &StatsConfig {
        self.quarterbacks.config()
    }

    pub fn factory(&self) -> &PositionFactory {
        &self.factory
    }

    pub fn quarterbacks(&self) -> &QuarterbackRegistry {
        &self.quarterbacks
    }

    pub fn running_backs(&self) -> &[RunningBack] {
        &self.running_backs
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn team(&self, name: &str) -> Option<&Team> {
        self.teams.iter().find(|t| t.name == name)
    }

    /// Every player of the season, in construction order.
    pub fn players(&self) -> impl Iterator<Item = &dyn GameLog> + '_ {
        self.players.iter().filter_map(move |slot| self.player(*slot))
    }

    pub fn player(&self, slot: RosterSlot) -> Option<&dyn GameLog> {
        match slot.position {
            Position::Quarterback => self.quarterbacks.get(slot.index).map(|qb| qb as &dyn GameLog),
            Position::RunningBack => self.running_backs.get(slot.index).map(|rb| rb as &dyn GameLog),
        }
    }

    /// Append an already constructed player to its position registry.
    pub fn add_player(&mut self, player: RosterPlayer) -> RosterSlot {
        let position = player.position();
        let index = match player {
            RosterPlayer::Quarterback(qb) => self.quarterbacks.register(qb),
            RosterPlayer::RunningBack(rb) => {
                self.running_backs.push(rb);
                self.running_backs.len() - 1
            }
        };
        let slot = RosterSlot { position, index };
        self.players.push(slot);
        slot
    }

    /// Build every entry and add them as a new team.
    ///
    /// Nothing is added if any entry fails to build.
    pub fn add_team(&mut self, name: &str, entries: Vec<PlayerEntry>) -> Result<&Team> {
        let config = self.quarterbacks.config().clone();
        let built = entries
            .into_iter()
            .map(|entry| self.factory.build(&entry.position, entry.name, entry.games, &config))
            .collect::<Result<Vec<_>>>()?;

        let mut team = Team::new(name);
        for player in built {
            let slot = self.add_player(player);
            team.roster.entry(slot.position).or_default().push(slot.index);
        }

        log::info!("Added team {} with {} players", name, team.len());
        self.teams.push(team);
        Ok(&self.teams[self.teams.len() - 1])
    }

    pub fn load_team_from_json_str(&mut self, name: &str, json: &str) -> Result<&Team> {
        let entries: Vec<PlayerEntry> = serde_json::from_str(json)?;
        self.add_team(name, entries)
    }

    pub fn load_team_from_json_file(&mut self, name: &str, path: impl AsRef<Path>) -> Result<&Team> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        log::debug!("Read {} bytes of roster data from {:?}", json.len(), path);
        self.load_team_from_json_str(name, &json)
    }

    pub fn team_quarterbacks<'a>(&'a self, team: &'a Team) -> impl Iterator<Item = &'a QuarterbackStats> + 'a {
        team.players_at(Position::Quarterback).iter().filter_map(move |&i| self.quarterbacks.get(i))
    }

    pub fn team_running_backs<'a>(&'a self, team: &'a Team) -> impl Iterator<Item = &'a RunningBack> + 'a {
        team.players_at(Position::RunningBack).iter().filter_map(move |&i| self.running_backs.get(i))
    }
}

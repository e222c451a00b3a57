//! Tests for roster construction and the season context

use super::*;
use crate::config::StatsConfig;
use crate::error::StatsError;
use crate::models::GameRecord;
use crate::player::{GameLog, RunningBack};
use crate::quarterback::fixtures::{qb1_games, SEASON_JSON};
use std::io::Write;

fn entry(name: &str, position: &str, games: Vec<GameRecord>) -> PlayerEntry {
    PlayerEntry { name: name.to_string(), position: position.to_string(), games }
}

fn build_tight_end(name: String, games: Vec<GameRecord>, _config: &StatsConfig) -> crate::Result<RosterPlayer> {
    RunningBack::new(name, games).map(RosterPlayer::RunningBack)
}

#[test]
fn test_position_codes() {
    assert_eq!(Position::Quarterback.code(), "QB");
    assert_eq!("RB".parse::<Position>().unwrap(), Position::RunningBack);
    assert!(matches!("WR".parse::<Position>(), Err(StatsError::UnknownPosition(ref c)) if c == "WR"));
    assert_eq!(serde_json::to_string(&Position::Quarterback).unwrap(), "\"QB\"");
}

#[test]
fn test_factory_builds_registered_positions() {
    let factory = PositionFactory::standard();
    let config = StatsConfig::default();

    let qb = factory.build("QB", "QB1".to_string(), qb1_games(), &config).unwrap();
    assert_eq!(qb.position(), Position::Quarterback);
    assert_eq!(qb.as_game_log().name(), "QB1");

    let rb = factory.build("RB", "RB1".to_string(), vec![GameRecord::new("Game1")], &config).unwrap();
    assert_eq!(rb.position(), Position::RunningBack);
}

#[test]
fn test_factory_rejects_unknown_code() {
    let factory = PositionFactory::standard();
    let err = factory
        .build("K", "Kicker".to_string(), vec![GameRecord::new("Game1")], &StatsConfig::default())
        .unwrap_err();
    assert!(matches!(err, StatsError::UnknownPosition(ref c) if c == "K"));
}

#[test]
fn test_factory_registration_is_validated() {
    let mut factory = PositionFactory::standard();

    assert!(matches!(factory.register("QB", build_tight_end), Err(StatsError::DuplicatePosition(_))));
    assert!(matches!(factory.register("", build_tight_end), Err(StatsError::InvalidPositionCode(_))));
    assert!(matches!(factory.register("te", build_tight_end), Err(StatsError::InvalidPositionCode(_))));

    factory.register("TE", build_tight_end).unwrap();
    assert!(factory.is_registered("TE"));
    assert_eq!(factory.codes().collect::<Vec<_>>(), vec!["QB", "RB", "TE"]);
}

#[test]
fn test_load_season_from_json() {
    let mut season = Season::new();
    let team = season.load_team_from_json_str("Denver Broncos", SEASON_JSON).unwrap();

    assert_eq!(team.name, "Denver Broncos");
    assert_eq!(team.players_at(Position::Quarterback), &[0, 1, 2]);
    assert_eq!(team.players_at(Position::RunningBack), &[0]);
    assert_eq!(team.len(), 4);

    assert_eq!(season.quarterbacks().len(), 3);
    assert_eq!(season.running_backs().len(), 1);
    let names: Vec<&str> = season.players().map(|p| p.name()).collect();
    assert_eq!(names, vec!["QB1", "QB2", "QB3", "RB1"]);
    assert_eq!(season.running_backs()[0].season_total("Rushes"), 39);
}

#[test]
fn test_registries_span_teams() {
    let mut season = Season::new();
    season.add_team("Home", vec![entry("QB1", "QB", qb1_games())]).unwrap();
    season
        .add_team("Away", vec![entry("RB9", "RB", vec![GameRecord::new("Game1")]), entry("QB2", "QB", qb1_games())])
        .unwrap();

    assert_eq!(season.quarterbacks().len(), 2);
    let away = season.team("Away").unwrap();
    let away_qbs: Vec<&str> = season.team_quarterbacks(away).map(|qb| qb.name()).collect();
    assert_eq!(away_qbs, vec!["QB2"]);
    assert_eq!(season.team_running_backs(away).count(), 1);
    assert!(season.team("Nobody").is_none());
}

#[test]
fn test_failed_team_adds_nothing() {
    let mut season = Season::new();
    let entries = vec![entry("QB1", "QB", qb1_games()), entry("WR1", "WR", vec![GameRecord::new("Game1")])];

    let err = season.add_team("Broncos", entries).unwrap_err();
    assert!(matches!(err, StatsError::UnknownPosition(_)));
    assert!(season.quarterbacks().is_empty());
    assert!(season.teams().is_empty());
    assert_eq!(season.players().count(), 0);
}

#[test]
fn test_empty_game_list_in_file() {
    let mut season = Season::new();
    let json = r#"[{"Player": "QB7", "Position": "QB", "Games": []}]"#;

    let err = season.load_team_from_json_str("Broncos", json).unwrap_err();
    assert!(matches!(err, StatsError::EmptyGames { ref player } if player == "QB7"));
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SEASON_JSON.as_bytes()).unwrap();

    let mut season = Season::new();
    season.load_team_from_json_file("Broncos", file.path()).unwrap();
    assert_eq!(season.quarterbacks().len(), 3);

    let err = season.load_team_from_json_file("Missing", "/nonexistent/qb_data.json").unwrap_err();
    assert!(matches!(err, StatsError::Io(_)));
}

#[test]
fn test_malformed_json_is_json_error() {
    let mut season = Season::new();
    let err = season.load_team_from_json_str("Broncos", "[{\"Player\": ").unwrap_err();
    assert!(matches!(err, StatsError::Json(_)));
}

#[test]
fn test_custom_factory_position() {
    let mut factory = PositionFactory::standard();
    factory.register("TE", build_tight_end).unwrap();
    let mut season = Season::with_factory(factory, StatsConfig::default());

    let team = season.add_team("Broncos", vec![entry("TE1", "TE", vec![GameRecord::new("Game1")])]).unwrap();
    assert_eq!(team.players_at(Position::RunningBack), &[0]);
}

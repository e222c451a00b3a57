//! Integration tests for the player model

use super::*;
use crate::error::StatsError;
use crate::models::{keys, GameRecord};

fn sample_games() -> Vec<GameRecord> {
    vec![
        GameRecord::new("Game1")
            .with_stat(keys::COMPLETIONS, 20)
            .with_stat(keys::ATTEMPTS, 30)
            .with_stat(keys::SACKS, 2),
        GameRecord::new("Game2").with_stat(keys::COMPLETIONS, 15).with_stat(keys::ATTEMPTS, 25),
    ]
}

#[test]
fn test_season_total_sums_every_game() {
    let player = Player::new("QB1", sample_games()).unwrap();

    assert_eq!(player.season_total(keys::COMPLETIONS), 35);
    assert_eq!(player.season_total(keys::ATTEMPTS), 55);
    // Only present in the first game
    assert_eq!(player.season_total(keys::SACKS), 2);
    assert_eq!(player.season_total("Fumbles"), 0);
    // Repeatable
    assert_eq!(player.season_total(keys::COMPLETIONS), 35);
}

#[test]
fn test_season_total_truncates_fractional_games() {
    let games: Vec<GameRecord> =
        serde_json::from_str(r#"[{"Game": "Game1", "Yards": 88.5}, {"Game": "Game2", "Yards": 10.5}]"#).unwrap();
    let player = Player::new("QB", games).unwrap();

    assert_eq!(player.season_total(keys::YARDS), 98);
}

#[test]
fn test_game_total_defaults_to_zero() {
    let game = GameRecord::new("Game1").with_stat(keys::YARDS, 143);
    assert_eq!(Player::game_total(keys::YARDS, &game), 143);
    assert_eq!(Player::game_total(keys::TOUCHDOWNS, &game), 0);
}

#[test]
fn test_empty_games_rejected_for_every_position() {
    assert!(matches!(Player::new("QB1", vec![]), Err(StatsError::EmptyGames { .. })));
    assert!(matches!(RunningBack::new("RB1", vec![]), Err(StatsError::EmptyGames { .. })));
}

#[test]
fn test_set_games_keeps_log_non_empty() {
    let mut player = Player::new("QB1", sample_games()).unwrap();

    let err = player.set_games(Vec::new()).unwrap_err();
    assert!(matches!(err, StatsError::EmptyGames { .. }));
    assert_eq!(player.games_played(), 2, "failed update must not touch the log");

    player.set_games(vec![GameRecord::new("Game9")]).unwrap();
    assert_eq!(player.games_played(), 1);
    assert_eq!(player.name(), "QB1");
}

#[test]
fn test_running_back_shares_player_behaviour() {
    let games = vec![
        GameRecord::new("Game1").with_stat("Rushes", 18).with_stat(keys::TOUCHDOWNS, 1),
        GameRecord::new("Game2").with_stat("Rushes", 21),
    ];
    let mut rb = RunningBack::new("RB1", games).unwrap();

    assert_eq!(rb.name(), "RB1");
    assert_eq!(rb.season_total("Rushes"), 39);
    assert_eq!(rb.season_total(keys::TOUCHDOWNS), 1);
    assert!(rb.set_games(vec![]).is_err());
    assert_eq!(rb.player().games_played(), 2);
}

mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: season total equals the plain sum with absent keys as zero
        #[test]
        fn prop_season_total_is_sum(values in prop::collection::vec(prop::option::of(0i64..500), 1..17)) {
            let games: Vec<GameRecord> = values
                .iter()
                .enumerate()
                .map(|(i, value)| {
                    let game = GameRecord::new(format!("Game{}", i + 1));
                    match value {
                        Some(v) => game.with_stat(keys::YARDS, *v),
                        None => game,
                    }
                })
                .collect();
            let expected: i64 = values.iter().map(|v| v.unwrap_or(0)).sum();

            let player = Player::new("QB", games).unwrap();
            prop_assert_eq!(player.season_total(keys::YARDS), expected);
        }
    }
}

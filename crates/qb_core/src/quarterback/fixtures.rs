//! Box scores shared by the quarterback, roster and report tests.

use crate::models::{keys, GameRecord};

pub fn game(id: &str, comps: i64, atts: i64, yds: i64, tds: i64, ints: i64) -> GameRecord {
    GameRecord::new(id)
        .with_stat(keys::COMPLETIONS, comps)
        .with_stat(keys::ATTEMPTS, atts)
        .with_stat(keys::YARDS, yds)
        .with_stat(keys::TOUCHDOWNS, tds)
        .with_stat(keys::INTERCEPTIONS, ints)
}

pub fn qb1_games() -> Vec<GameRecord> {
    vec![
        game("Game1", 22, 31, 281, 2, 0).with_stat(keys::SACKS, 1),
        game("Game2", 18, 29, 198, 1, 1).with_stat(keys::SACKS, 3),
        game("Game3", 25, 34, 312, 3, 1).with_stat(keys::SACKS, 0),
        game("Game4", 14, 27, 143, 0, 2).with_stat(keys::SACKS, 4),
        game("Game5", 20, 30, 240, 2, 1).with_stat(keys::SACKS, 2),
    ]
}

pub fn qb2_games() -> Vec<GameRecord> {
    vec![
        game("Game1", 19, 33, 220, 1, 2).with_stat(keys::SACKS, 2),
        game("Game2", 27, 36, 345, 4, 0),
        game("Game3", 16, 28, 167, 1, 1).with_stat(keys::SACKS, 1),
        game("Game4", 21, 30, 260, 2, 0).with_stat(keys::SACKS, 2),
        game("Game5", 15, 26, 150, 0, 1).with_stat(keys::SACKS, 3),
    ]
}

pub fn qb3_games() -> Vec<GameRecord> {
    vec![
        game("Game1", 12, 24, 110, 0, 1).with_stat(keys::SACKS, 5),
        game("Game2", 17, 25, 205, 2, 0).with_stat(keys::SACKS, 1),
        game("Game3", 20, 32, 230, 1, 0).with_stat(keys::SACKS, 2),
        game("Game4", 23, 35, 290, 3, 2).with_stat(keys::SACKS, 1),
        game("Game5", 11, 22, 95, 0, 3).with_stat(keys::SACKS, 4),
    ]
}

/// The same season as a roster file, plus one running back.
pub const SEASON_JSON: &str = include_str!("../../../../data/qb_data.json");

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Box-score keys shared with the data files.
pub mod keys {
    pub const GAME: &str = "Game";
    pub const COMPLETIONS: &str = "Completions";
    pub const ATTEMPTS: &str = "Attempts";
    pub const YARDS: &str = "Yards";
    pub const TOUCHDOWNS: &str = "Touchdowns";
    pub const INTERCEPTIONS: &str = "Interceptions";
    pub const SACKS: &str = "Sacks";
}

/// One player's box score for a single game.
///
/// Stats are sparse: a stat that is absent from the record counts as zero.
/// Keys that are not numeric (notes, opponent names) are preserved but also
/// read as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    #[serde(rename = "Game", default, skip_serializing_if = "Option::is_none")]
    game: Option<String>,
    #[serde(flatten)]
    stats: BTreeMap<String, Value>,
}

impl GameRecord {
    /// Create an empty record for the given game identifier.
    pub fn new(game: impl Into<String>) -> Self {
        Self { game: Some(game.into()), stats: BTreeMap::new() }
    }

    /// Create an empty record with no game identifier.
    pub fn unnamed() -> Self {
        Self::default()
    }

    pub fn with_stat(mut self, stat: impl Into<String>, value: i64) -> Self {
        self.set_stat(stat, value);
        self
    }

    pub fn set_stat(&mut self, stat: impl Into<String>, value: i64) {
        self.stats.insert(stat.into(), Value::from(value));
    }

    pub fn game_id(&self) -> Option<&str> {
        self.game.as_deref()
    }

    /// Numeric value of `stat`, 0 when absent.
    ///
    /// Fractional values are truncated toward zero.
    pub fn stat(&self, stat: &str) -> i64 {
        match self.stats.get(stat) {
            Some(value) => value
                .as_i64()
                .or_else(|| {
                    value.as_f64().map(|v| {
                        if v.fract() != 0.0 {
                            log::debug!("Fractional stat {} = {} truncated to {}", stat, v, v as i64);
                        }
                        v as i64
                    })
                })
                .unwrap_or_else(|| {
                    log::trace!("Non-numeric stat {} = {} read as 0", stat, value);
                    0
                }),
            None => 0,
        }
    }

    pub fn has_stat(&self, stat: &str) -> bool {
        self.stats.contains_key(stat)
    }

    /// Names of all stats present in this record, in key order.
    pub fn stat_names(&self) -> impl Iterator<Item = &str> {
        self.stats.keys().map(String::as_str)
    }
}

//! Ranking queries across every quarterback of a season.
//!
//! All "highest"/"lowest" queries scan the registry once in insertion order
//! with a strict comparison, so on a tie the first-registered quarterback
//! keeps the lead.

use serde::Serialize;

use super::stats::QuarterbackStats;
use crate::config::StatsConfig;
use crate::player::GameLog;
use crate::rating::round_to;

/// The quarterback leading a ranking query, with the winning value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Leader<T> {
    pub player: String,
    pub value: T,
}

impl<T> Leader<T> {
    pub fn map_value<U>(self, f: impl FnOnce(T) -> U) -> Leader<U> {
        Leader { player: self.player, value: f(self.value) }
    }
}

/// Ordered, append-only collection of a season's quarterbacks.
#[derive(Debug, Clone, Default)]
pub struct QuarterbackRegistry {
    quarterbacks: Vec<QuarterbackStats>,
    config: StatsConfig,
}

impl QuarterbackRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: StatsConfig) -> Self {
        Self { quarterbacks: Vec::new(), config }
    }

    pub fn config(&self) -> &StatsConfig {
        &self.config
    }

    /// Append a quarterback and return its registry index.
    pub fn register(&mut self, qb: QuarterbackStats) -> usize {
        log::debug!("Registered quarterback {} (#{})", qb.name(), self.quarterbacks.len());
        self.quarterbacks.push(qb);
        self.quarterbacks.len() - 1
    }

    pub fn len(&self) -> usize {
        self.quarterbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quarterbacks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &QuarterbackStats> {
        self.quarterbacks.iter()
    }

    pub fn get(&self, index: usize) -> Option<&QuarterbackStats> {
        self.quarterbacks.get(index)
    }

    /// First registered quarterback with this name.
    pub fn find(&self, name: &str) -> Option<&QuarterbackStats> {
        self.quarterbacks.iter().find(|qb| qb.name() == name)
    }

    fn leader_above<T: PartialOrd + Copy>(
        &self,
        floor: T,
        metric: impl Fn(&QuarterbackStats) -> Option<T>,
    ) -> Option<Leader<T>> {
        let mut highest = floor;
        let mut leader = None;
        for qb in &self.quarterbacks {
            if let Some(value) = metric(qb) {
                if value > highest {
                    highest = value;
                    leader = Some(qb);
                }
            }
        }
        leader.map(|qb| Leader { player: qb.name().to_string(), value: highest })
    }

    fn leader_below<T: PartialOrd + Copy>(
        &self,
        metric: impl Fn(&QuarterbackStats) -> Option<T>,
    ) -> Option<Leader<T>> {
        let mut leader: Option<Leader<T>> = None;
        for qb in &self.quarterbacks {
            if let Some(value) = metric(qb) {
                if leader.as_ref().map_or(true, |l| value < l.value) {
                    leader = Some(Leader { player: qb.name().to_string(), value });
                }
            }
        }
        leader
    }

    /// Best single-game completion %, as a percentage.
    pub fn highest_single_game_completion_pct(&self) -> Option<Leader<f64>> {
        let places = self.config.ratio_precision;
        self.leader_above(0.0, |qb| Some(qb.highest_single_game_completion_pct))
            .map(|l| l.map_value(|v| round_to(v * 100.0, places)))
    }

    pub fn lowest_single_game_yards_per_attempt(&self) -> Option<Leader<f64>> {
        let places = self.config.ratio_precision;
        self.leader_below(|qb| Some(qb.lowest_single_game_yards_per_attempt))
            .map(|l| l.map_value(|v| round_to(v, places)))
    }

    pub fn least_season_passing_yards(&self) -> Option<Leader<i64>> {
        self.leader_below(|qb| Some(qb.total_passing_yards))
    }

    pub fn most_season_touchdowns(&self) -> Option<Leader<i64>> {
        self.leader_above(0, |qb| Some(qb.total_touchdowns))
    }

    /// Names ordered by season completion %, highest first, joined by `,`.
    ///
    /// The sort is stable: tied quarterbacks keep registration order.
    pub fn season_completion_pct_ranking(&self) -> String {
        let mut ranked: Vec<&QuarterbackStats> = self.quarterbacks.iter().collect();
        ranked.sort_by(|a, b| {
            b.season_completion_pct
                .partial_cmp(&a.season_completion_pct)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        ranked.iter().map(|qb| qb.name()).collect::<Vec<_>>().join(",")
    }

    pub fn highest_single_game_passer_rating(&self) -> Option<Leader<f64>> {
        self.leader_above(0.0, |qb| Some(qb.highest_single_game_passer_rating))
    }

    pub fn lowest_single_game_passer_rating(&self) -> Option<Leader<f64>> {
        self.leader_below(|qb| Some(qb.lowest_single_game_passer_rating))
    }

    pub fn highest_season_passer_rating(&self) -> Option<Leader<f64>> {
        self.leader_above(0.0, |qb| Some(qb.season_passer_rating))
    }

    pub fn highest_passer_rating_opening_games(&self) -> Option<Leader<f64>> {
        self.leader_above(0.0, |qb| qb.passer_rating_opening_games)
    }

    pub fn highest_passer_rating_excluding_best_worst(&self) -> Option<Leader<f64>> {
        self.leader_above(0.0, |qb| qb.passer_rating_excluding_best_worst)
    }
}

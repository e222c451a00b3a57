//! Season and single-game passing metrics for one quarterback.
//!
//! Every metric is computed once, at construction, in dependency order:
//! season totals, per-game ratio extremes, per-game passer ratings, best and
//! worst rating games, season rating, then the two game-subset ratings.

use serde::Serialize;

use crate::config::StatsConfig;
use crate::error::{Result, StatsError};
use crate::models::{keys, GameRecord};
use crate::player::{GameLog, Player};
use crate::rating::{passer_rating, round_to, PassingLine};

/// Passer rating of one game, keyed by the record's `"Game"` identifier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameRating {
    pub game: Option<String>,
    pub rating: f64,
}

/// Whether a game-id list names the games to combine or the games to skip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameSelection {
    Include,
    Exclude,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuarterbackStats {
    player: Player,
    #[serde(skip)]
    rating_precision: u32,

    pub total_completions: i64,
    pub total_attempts: i64,
    pub total_interceptions: i64,
    pub total_touchdowns: i64,
    pub total_passing_yards: i64,
    pub total_sacks: i64,

    pub season_completion_pct: f64,
    pub highest_single_game_completion_pct: f64,
    pub lowest_single_game_yards_per_attempt: f64,

    /// Per-game ratings in first-seen game order
    pub passer_ratings: Vec<GameRating>,
    pub best_passer_rating_game: Option<String>,
    pub highest_single_game_passer_rating: f64,
    pub worst_passer_rating_game: Option<String>,
    pub lowest_single_game_passer_rating: f64,

    pub season_passer_rating: f64,
    /// `None` when none of the opening games have a pass attempt
    pub passer_rating_opening_games: Option<f64>,
    /// `None` when nothing is left after dropping the best and worst games
    pub passer_rating_excluding_best_worst: Option<f64>,
}

impl QuarterbackStats {
    pub fn new(name: impl Into<String>, games: Vec<GameRecord>) -> Result<Self> {
        Self::with_config(name, games, &StatsConfig::default())
    }

    pub fn with_config(name: impl Into<String>, games: Vec<GameRecord>, config: &StatsConfig) -> Result<Self> {
        let player = Player::new(name, games)?;
        let name = player.name();
        let precision = config.rating_precision;

        let total_completions = player.season_total(keys::COMPLETIONS);
        let total_attempts = player.season_total(keys::ATTEMPTS);
        let total_interceptions = player.season_total(keys::INTERCEPTIONS);
        let total_touchdowns = player.season_total(keys::TOUCHDOWNS);
        let total_passing_yards = player.season_total(keys::YARDS);
        let total_sacks = player.season_total(keys::SACKS);

        if total_attempts == 0 {
            return Err(StatsError::zero_attempts(name, "season"));
        }
        let season_completion_pct = total_completions as f64 / total_attempts as f64;

        let (highest_single_game_completion_pct, lowest_single_game_yards_per_attempt) =
            single_game_ratio_extremes(name, player.games())?;

        let passer_ratings = per_game_passer_ratings(name, player.games(), precision)?;
        let (best_passer_rating_game, highest_single_game_passer_rating) = best_game(&passer_ratings);
        let (worst_passer_rating_game, lowest_single_game_passer_rating) = worst_game(&passer_ratings);

        let season_line = PassingLine::new(
            total_completions,
            total_attempts,
            total_passing_yards,
            total_touchdowns,
            total_interceptions,
        );
        let season_passer_rating = round_to(passer_rating(&season_line)?, precision);

        let opening = PassingLine::from_games(
            player
                .games()
                .iter()
                .filter(|g| g.game_id().is_some_and(|id| config.opening_games.iter().any(|o| o == id))),
        );
        let passer_rating_opening_games = subset_rating(name, "opening games", &opening, precision);

        let best = best_passer_rating_game.as_deref();
        let worst = worst_passer_rating_game.as_deref();
        let remaining = PassingLine::from_games(
            player.games().iter().filter(|g| g.game_id() != best && g.game_id() != worst),
        );
        let passer_rating_excluding_best_worst =
            subset_rating(name, "excluding best and worst", &remaining, precision);

        log::debug!(
            "Computed stats for {}: {} games, season rating {}",
            name,
            player.games_played(),
            season_passer_rating
        );

        Ok(Self {
            player,
            rating_precision: precision,
            total_completions,
            total_attempts,
            total_interceptions,
            total_touchdowns,
            total_passing_yards,
            total_sacks,
            season_completion_pct,
            highest_single_game_completion_pct,
            lowest_single_game_yards_per_attempt,
            passer_ratings,
            best_passer_rating_game,
            highest_single_game_passer_rating,
            worst_passer_rating_game,
            lowest_single_game_passer_rating,
            season_passer_rating,
            passer_rating_opening_games,
            passer_rating_excluding_best_worst,
        })
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Passer rating recomputed from the combined counts of a set of games.
    ///
    /// With [`GameSelection::Include`] only games whose id is in `game_ids`
    /// count; with [`GameSelection::Exclude`] only games whose id is not.
    /// This is not an average of the per-game ratings.
    pub fn combined_passer_rating<S: AsRef<str>>(&self, game_ids: &[S], selection: GameSelection) -> Result<f64> {
        let listed = |game: &GameRecord| {
            game.game_id().is_some_and(|id| game_ids.iter().any(|g| g.as_ref() == id))
        };
        let line = PassingLine::from_games(self.games().iter().filter(|game| match selection {
            GameSelection::Include => listed(*game),
            GameSelection::Exclude => !listed(*game),
        }));

        if line.attempts == 0 {
            let ids: Vec<&str> = game_ids.iter().map(AsRef::as_ref).collect();
            return Err(StatsError::zero_attempts(self.name(), format!("games {:?} ({:?})", ids, selection)));
        }
        Ok(round_to(passer_rating(&line)?, self.rating_precision))
    }

    /// Rating of a single game by id, if the quarterback played it.
    pub fn game_passer_rating(&self, game: &str) -> Option<f64> {
        self.passer_ratings
            .iter()
            .find(|r| r.game.as_deref() == Some(game))
            .map(|r| r.rating)
    }
}

impl GameLog for QuarterbackStats {
    fn name(&self) -> &str {
        self.player.name()
    }

    fn games(&self) -> &[GameRecord] {
        self.player.games()
    }
}

fn game_label(game: &GameRecord) -> String {
    game.game_id().unwrap_or("unnamed game").to_string()
}

/// Highest completion % and lowest yards/attempt over single games.
fn single_game_ratio_extremes(name: &str, games: &[GameRecord]) -> Result<(f64, f64)> {
    let mut highest = 0.0;
    let mut lowest = f64::INFINITY;

    for game in games {
        let attempts = game.stat(keys::ATTEMPTS);
        if attempts == 0 {
            return Err(StatsError::zero_attempts(name, game_label(game)));
        }
        let completion_pct = game.stat(keys::COMPLETIONS) as f64 / attempts as f64;
        let yards_per_attempt = game.stat(keys::YARDS) as f64 / attempts as f64;

        if completion_pct > highest {
            highest = completion_pct;
        }
        if yards_per_attempt < lowest {
            lowest = yards_per_attempt;
        }
    }
    Ok((highest, lowest))
}

/// A repeated game id overwrites the earlier rating but keeps its position.
fn per_game_passer_ratings(name: &str, games: &[GameRecord], precision: u32) -> Result<Vec<GameRating>> {
    let mut ratings: Vec<GameRating> = Vec::with_capacity(games.len());

    for game in games {
        let line = PassingLine::from_game(game);
        if line.attempts == 0 {
            return Err(StatsError::zero_attempts(name, game_label(game)));
        }
        let rating = round_to(passer_rating(&line)?, precision);
        let id = game.game_id();

        if let Some(existing) = ratings.iter_mut().find(|r| r.game.as_deref() == id) {
            log::warn!("{} has more than one record for {:?}; keeping the last", name, id);
            existing.rating = rating;
            continue;
        }
        ratings.push(GameRating { game: id.map(str::to_string), rating });
    }
    Ok(ratings)
}

fn best_game(ratings: &[GameRating]) -> (Option<String>, f64) {
    let mut highest = 0.0;
    let mut best = None;
    for r in ratings {
        if r.rating > highest {
            highest = r.rating;
            best = r.game.clone();
        }
    }
    (best, highest)
}

fn worst_game(ratings: &[GameRating]) -> (Option<String>, f64) {
    let mut lowest = f64::INFINITY;
    let mut worst = None;
    for r in ratings {
        if r.rating < lowest {
            lowest = r.rating;
            worst = r.game.clone();
        }
    }
    (worst, lowest)
}

fn subset_rating(name: &str, scope: &str, line: &PassingLine, precision: u32) -> Option<f64> {
    match passer_rating(line) {
        Ok(rating) => Some(round_to(rating, precision)),
        Err(_) => {
            log::debug!("{} has no attempts {}; rating left empty", name, scope);
            None
        }
    }
}

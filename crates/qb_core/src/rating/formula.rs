//! # Passer Rating Module
//!
//! NFL/CFL passer rating computed from aggregate passing counts.
//!
//! ## Background
//!
//! Four per-attempt rates are each scaled onto [0, 2.375]:
//! - a: completion rate above 30%
//! - b: yards per attempt above 3
//! - c: touchdown rate
//! - d: interception rate (inverted)
//!
//! rating = (a + b + c + d) / 6 * 100, so a perfect line rates 158.3.
//!
//! ## Reference
//! - https://en.wikipedia.org/wiki/Passer_rating#NFL_and_CFL_formula

use serde::{Deserialize, Serialize};
use std::ops::AddAssign;

use crate::error::{Result, StatsError};
use crate::models::{keys, GameRecord};

/// Upper bound of each rating component.
pub const COMPONENT_MAX: f64 = 2.375;

/// Rating of a line where every component hits [`COMPONENT_MAX`].
pub const MAX_PASSER_RATING: f64 = COMPONENT_MAX * 4.0 / 6.0 * 100.0;

/// Passing counts the rating is computed from, for one game or many.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassingLine {
    pub completions: i64,
    pub attempts: i64,
    pub yards: i64,
    pub touchdowns: i64,
    pub interceptions: i64,
}

impl PassingLine {
    pub fn new(completions: i64, attempts: i64, yards: i64, touchdowns: i64, interceptions: i64) -> Self {
        Self { completions, attempts, yards, touchdowns, interceptions }
    }

    pub fn from_game(game: &GameRecord) -> Self {
        Self {
            completions: game.stat(keys::COMPLETIONS),
            attempts: game.stat(keys::ATTEMPTS),
            yards: game.stat(keys::YARDS),
            touchdowns: game.stat(keys::TOUCHDOWNS),
            interceptions: game.stat(keys::INTERCEPTIONS),
        }
    }

    /// Combined line over several games.
    pub fn from_games<'a>(games: impl IntoIterator<Item = &'a GameRecord>) -> Self {
        let mut line = Self::default();
        for game in games {
            line += Self::from_game(game);
        }
        line
    }

    pub fn components(&self) -> Option<RatingComponents> {
        if self.attempts == 0 {
            return None;
        }
        let atts = self.attempts as f64;

        Some(RatingComponents {
            a: clamp_component((self.completions as f64 / atts - 0.3) * 5.0),
            b: clamp_component((self.yards as f64 / atts - 3.0) * 0.25),
            c: clamp_component(self.touchdowns as f64 / atts * 20.0),
            d: clamp_component(COMPONENT_MAX - self.interceptions as f64 / atts * 25.0),
        })
    }
}

impl AddAssign for PassingLine {
    fn add_assign(&mut self, other: Self) {
        self.completions += other.completions;
        self.attempts += other.attempts;
        self.yards += other.yards;
        self.touchdowns += other.touchdowns;
        self.interceptions += other.interceptions;
    }
}

/// The four clamped sub-components of a passer rating.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingComponents {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl RatingComponents {
    pub fn rating(&self) -> f64 {
        (self.a + self.b + self.c + self.d) / 6.0 * 100.0
    }
}

fn clamp_component(value: f64) -> f64 {
    if value > COMPONENT_MAX {
        COMPONENT_MAX
    } else if value < 0.0 {
        0.0
    } else {
        value
    }
}

/// Unrounded passer rating of `line`.
///
/// # Errors
/// * `StatsError::ZeroAttempts` - when `line.attempts` is 0
///
/// # Examples
/// ```
/// use qb_core::rating::{passer_rating, PassingLine};
///
/// let rating = passer_rating(&PassingLine::new(20, 30, 300, 3, 1)).unwrap();
/// assert!((rating - 118.75).abs() < 1e-9);
/// ```
pub fn passer_rating(line: &PassingLine) -> Result<f64> {
    line.components()
        .map(|components| components.rating())
        .ok_or_else(|| StatsError::zero_attempts("passing line", "no attempts"))
}

/// Most decimal places [`round_to`] honours; an `f64` carries no more.
pub const MAX_DECIMAL_PLACES: u32 = 15;

/// Round to `places` decimals, exact halves going to the even digit.
///
/// The rating formula lands on exact halves often (66.25, 118.75), so the
/// tie rule decides answers. `places` above [`MAX_DECIMAL_PLACES`] is capped.
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places.min(MAX_DECIMAL_PLACES) as i32);
    (value * factor).round_ties_even() / factor
}

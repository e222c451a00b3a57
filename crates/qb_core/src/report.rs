//! Season report
//!
//! Answers the fixed battery of season questions from a quarterback registry
//! and renders them as numbered question/answer text.

use serde::Serialize;
use std::fmt::Write;

use crate::quarterback::{Leader, QuarterbackRegistry};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonReport {
    pub highest_single_game_completion_pct: Option<Leader<f64>>,
    pub lowest_single_game_yards_per_attempt: Option<Leader<f64>>,
    pub least_season_passing_yards: Option<Leader<i64>>,
    pub most_season_touchdowns: Option<Leader<i64>>,
    pub season_completion_pct_ranking: String,
    pub highest_single_game_passer_rating: Option<Leader<f64>>,
    pub lowest_single_game_passer_rating: Option<Leader<f64>>,
    pub highest_season_passer_rating: Option<Leader<f64>>,
    pub highest_passer_rating_opening_games: Option<Leader<f64>>,
    pub highest_passer_rating_excluding_best_worst: Option<Leader<f64>>,
    pub opening_games: Vec<String>,
}

const NONE: &str = "n/a";

/// Shortest round-trip form, always with a decimal point (75.0, 4.318).
fn number(value: f64) -> String {
    format!("{:?}", value)
}

fn name<T>(leader: &Option<Leader<T>>) -> &str {
    leader.as_ref().map_or(NONE, |l| l.player.as_str())
}

fn value(leader: &Option<Leader<f64>>) -> String {
    leader.as_ref().map_or_else(|| NONE.to_string(), |l| number(l.value))
}

impl SeasonReport {
    pub fn from_registry(registry: &QuarterbackRegistry) -> Self {
        log::debug!("Building season report over {} quarterbacks", registry.len());
        Self {
            highest_single_game_completion_pct: registry.highest_single_game_completion_pct(),
            lowest_single_game_yards_per_attempt: registry.lowest_single_game_yards_per_attempt(),
            least_season_passing_yards: registry.least_season_passing_yards(),
            most_season_touchdowns: registry.most_season_touchdowns(),
            season_completion_pct_ranking: registry.season_completion_pct_ranking(),
            highest_single_game_passer_rating: registry.highest_single_game_passer_rating(),
            lowest_single_game_passer_rating: registry.lowest_single_game_passer_rating(),
            highest_season_passer_rating: registry.highest_season_passer_rating(),
            highest_passer_rating_opening_games: registry.highest_passer_rating_opening_games(),
            highest_passer_rating_excluding_best_worst: registry.highest_passer_rating_excluding_best_worst(),
            opening_games: registry.config().opening_games.clone(),
        }
    }

    pub fn render_text(&self) -> String {
        let mut out = String::new();
        // Writing to a String cannot fail
        let _ = self.write_text(&mut out);
        out
    }

    fn write_text(&self, out: &mut String) -> std::fmt::Result {
        writeln!(out, "1. Which player had the highest single game Completion Percentage?")?;
        match &self.highest_single_game_completion_pct {
            Some(l) => writeln!(
                out,
                "    {} with a single game completion percentage of {}%",
                l.player,
                number(l.value)
            )?,
            None => writeln!(out, "    {}", NONE)?,
        }

        writeln!(out, "2. Which player had the lowest single game Yards Per Attempt?")?;
        match &self.lowest_single_game_yards_per_attempt {
            Some(l) => {
                writeln!(out, "    {} with a single game yards per attempt of {}", l.player, number(l.value))?
            }
            None => writeln!(out, "    {}", NONE)?,
        }

        writeln!(out, "3. Which player had the least Passing Yards for the season?")?;
        match &self.least_season_passing_yards {
            Some(l) => writeln!(out, "    {} with a season passing yards of {}", l.player, l.value)?,
            None => writeln!(out, "    {}", NONE)?,
        }

        writeln!(out, "4. Which player had the most Touchdowns for the season?")?;
        match &self.most_season_touchdowns {
            Some(l) => writeln!(out, "    {} with {} total touchdowns", l.player, l.value)?,
            None => writeln!(out, "    {}", NONE)?,
        }

        writeln!(
            out,
            "5. List the player names by their Season Completion Percentage in descending order. \
             List the names in order, separated by a comma with no spaces like this: QB1,QB2,QB3,QB4,QB5"
        )?;
        writeln!(out, "    {}", self.season_completion_pct_ranking)?;

        writeln!(out, "6. Which player had the highest single game Passer Rating?")?;
        writeln!(out, "    {}", name(&self.highest_single_game_passer_rating))?;
        writeln!(out, "7. What was the value of the highest single game Passer Rating?")?;
        writeln!(out, "    {}", value(&self.highest_single_game_passer_rating))?;

        writeln!(out, "8. Which player had the lowest single game Passer Rating?")?;
        writeln!(out, "    {}", name(&self.lowest_single_game_passer_rating))?;
        writeln!(out, "9. What was the value of the lowest single game Passer Rating?")?;
        writeln!(out, "    {}", value(&self.lowest_single_game_passer_rating))?;

        let rated = [
            (
                "10. Which player had the highest season Passer Rating?".to_string(),
                &self.highest_season_passer_rating,
            ),
            (
                format!(
                    "11. Which player had the highest season Passer Rating for the first {} games?",
                    self.opening_games.len()
                ),
                &self.highest_passer_rating_opening_games,
            ),
            (
                "12. Excluding each player's highest and lowest single game Passer Rating, \
                 which player had the highest Passer Rating for the season?"
                    .to_string(),
                &self.highest_passer_rating_excluding_best_worst,
            ),
        ];
        for (question, leader) in rated {
            writeln!(out, "{}", question)?;
            match leader {
                Some(l) => writeln!(out, "    {} with a passer rating of {}", l.player, number(l.value))?,
                None => writeln!(out, "    {}", NONE)?,
            }
        }
        Ok(())
    }
}

//! Quarterback module
//!
//! - `stats` - per-quarterback season and single-game metrics
//! - `registry` - season-wide collection and ranking queries

pub mod registry;
pub mod stats;

pub use registry::{Leader, QuarterbackRegistry};
pub use stats::{GameRating, GameSelection, QuarterbackStats};

#[cfg(test)]
pub(crate) mod fixtures;

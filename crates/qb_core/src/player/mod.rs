//! Player module
//!
//! This module contains the position-independent player model:
//! - Player struct with an immutable name and a non-empty game log
//! - GameLog trait providing season totals to every position type
//! - RunningBack position type
//! - Validation of game logs

pub mod running_back;
pub mod types;
pub mod validation;

pub use running_back::RunningBack;
pub use types::{GameLog, Player};
pub use validation::PlayerValidator;

#[cfg(test)]
mod tests;

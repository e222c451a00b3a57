//! Roster module
//!
//! Builds position-typed players from roster files and keeps them in a
//! season-wide context:
//! - `position` - Position codes and the code-to-constructor factory
//! - `season` - Season context, teams and roster file loading

pub mod position;
pub mod season;

pub use position::{PlayerConstructor, Position, PositionFactory, RosterPlayer};
pub use season::{PlayerEntry, RosterSlot, Season, Team};

#[cfg(test)]
mod tests;

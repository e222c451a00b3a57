//! Data records consumed from the box-score files.

pub mod game;

pub use game::{keys, GameRecord};

//! # Rating Module
//!
//! - `formula` - NFL/CFL passer rating and decimal rounding

pub mod formula;

pub use formula::*;

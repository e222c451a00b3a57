//! # qb_core - Quarterback Season Statistics
//!
//! Computes season and single-game passing statistics from per-game box
//! scores and answers the season-analysis questions over every quarterback
//! of a season.
//!
//! ## Features
//! - NFL/CFL passer rating with clamped components
//! - Eager per-quarterback season metrics (totals, extremes, game ratings)
//! - Ranking queries with first-registered tie-breaks
//! - Roster loading through a position-code factory
//! - JSON API for the full season report

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod player;
pub mod quarterback;
pub mod rating;
pub mod report;
pub mod roster;

// Re-export main API functions
pub use api::{season_report_json, SeasonReportRequest, SeasonReportResponse};
pub use error::{Result, StatsError};

pub use config::StatsConfig;
pub use models::GameRecord;
pub use player::{GameLog, Player, RunningBack};
pub use quarterback::{GameSelection, Leader, QuarterbackRegistry, QuarterbackStats};
pub use rating::{passer_rating, PassingLine};
pub use report::SeasonReport;
pub use roster::{PlayerEntry, Position, PositionFactory, RosterPlayer, Season, Team};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;

//! JSON API for the season report
//!
//! One request carries a team's roster records and answers with the full
//! season report, for callers that only speak JSON.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::StatsConfig;
use crate::error::{Result, StatsError};
use crate::report::SeasonReport;
use crate::roster::{PlayerEntry, Season};
use crate::SCHEMA_VERSION;

/// Season report request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonReportRequest {
    pub schema_version: u8,
    pub team: String,
    pub players: Vec<PlayerEntry>,
    #[serde(default)]
    pub config: Option<StatsConfig>,
}

/// Season report response
#[derive(Debug, Clone, Serialize)]
pub struct SeasonReportResponse {
    pub schema_version: u8,
    pub team: String,
    pub quarterbacks: usize,
    pub generated_at: DateTime<Utc>,
    pub report: SeasonReport,
}

pub fn build_season_report(request: SeasonReportRequest) -> Result<SeasonReportResponse> {
    if request.schema_version != SCHEMA_VERSION {
        warn!("Rejected report request with schema version {}", request.schema_version);
        return Err(StatsError::UnsupportedSchema { found: request.schema_version, expected: SCHEMA_VERSION });
    }

    let config = request.config.unwrap_or_default();
    config.validate()?;
    let mut season = Season::with_config(config);
    season.add_team(&request.team, request.players)?;
    let report = SeasonReport::from_registry(season.quarterbacks());

    info!("Built season report for {} ({} quarterbacks)", request.team, season.quarterbacks().len());
    Ok(SeasonReportResponse {
        schema_version: SCHEMA_VERSION,
        team: request.team,
        quarterbacks: season.quarterbacks().len(),
        generated_at: Utc::now(),
        report,
    })
}

/// Parse a [`SeasonReportRequest`], build the report and serialize the
/// [`SeasonReportResponse`].
pub fn season_report_json(request_json: &str) -> Result<String> {
    debug!("Processing season report request ({} bytes)", request_json.len());
    let request: SeasonReportRequest = serde_json::from_str(request_json)?;
    let response = build_season_report(request)?;
    Ok(serde_json::to_string(&response)?)
}

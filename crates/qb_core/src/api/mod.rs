pub mod report_json;

pub use report_json::{build_season_report, season_report_json, SeasonReportRequest, SeasonReportResponse};

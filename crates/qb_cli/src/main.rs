//! qbstats CLI
//!
//! Roster JSON → season report (text or JSON)
//! Roster JSON → one quarterback's season breakdown

#[cfg(feature = "cli")]
use anyhow::{Context, Result};
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand, ValueEnum};
#[cfg(feature = "cli")]
use qb_core::{GameLog, QuarterbackStats, Season, SeasonReport, StatsConfig};
#[cfg(feature = "cli")]
use std::path::{Path, PathBuf};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "qbstats")]
#[command(about = "Quarterback season statistics from box-score JSON", long_about = None)]
struct Cli {
    /// Log at debug level (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Answer the season questions for every quarterback in a roster file
    Report {
        /// Roster JSON file path
        #[arg(long)]
        data: PathBuf,

        /// Team name shown in the output
        #[arg(long, default_value = "Denver Broncos")]
        team: String,

        /// Stats config YAML file
        #[arg(long)]
        config: Option<PathBuf>,

        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Show the season breakdown of one quarterback
    Player {
        /// Roster JSON file path
        #[arg(long)]
        data: PathBuf,

        /// Quarterback name as listed in the roster file
        #[arg(long)]
        name: String,

        /// Stats config YAML file
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

#[cfg(feature = "cli")]
fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Report { data, team, config, format } => {
            let season = load_season(&data, &team, config.as_deref())?;
            let report = SeasonReport::from_registry(season.quarterbacks());

            match format {
                OutputFormat::Text => {
                    println!("🏈 {} ({} quarterbacks)", team, season.quarterbacks().len());
                    print!("{}", report.render_text());
                }
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&report)?);
                }
            }
        }

        Commands::Player { data, name, config } => {
            let season = load_season(&data, "roster", config.as_deref())?;
            let qb = season
                .quarterbacks()
                .find(&name)
                .with_context(|| format!("No quarterback named '{}' in {}", name, data.display()))?;
            print_quarterback(qb);
        }
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();
}

#[cfg(feature = "cli")]
fn load_season(data: &Path, team: &str, config: Option<&Path>) -> Result<Season> {
    let config = match config {
        Some(path) => StatsConfig::from_yaml_file(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => StatsConfig::default(),
    };

    let mut season = Season::with_config(config);
    season
        .load_team_from_json_file(team, data)
        .with_context(|| format!("Failed to load roster: {}", data.display()))?;
    log::info!("Loaded {} quarterbacks from {}", season.quarterbacks().len(), data.display());
    Ok(season)
}

#[cfg(feature = "cli")]
fn print_quarterback(qb: &QuarterbackStats) {
    let optional = |v: Option<f64>| v.map_or_else(|| "n/a".to_string(), |r| format!("{:.1}", r));

    println!("🏈 {} ({} games)", qb.name(), qb.games_played());
    println!(
        "   Season:          {}/{} ({:.1}%), {} yds, {} TD, {} INT, {} sacks",
        qb.total_completions,
        qb.total_attempts,
        qb.season_completion_pct * 100.0,
        qb.total_passing_yards,
        qb.total_touchdowns,
        qb.total_interceptions,
        qb.total_sacks
    );
    println!("   Passer rating:   {:.1}", qb.season_passer_rating);
    println!("   Opening games:   {}", optional(qb.passer_rating_opening_games));
    println!("   Excl. best/worst: {}", optional(qb.passer_rating_excluding_best_worst));
    println!("   Best single-game completion: {:.1}%", qb.highest_single_game_completion_pct * 100.0);
    println!("   Worst single-game Y/A:       {:.3}", qb.lowest_single_game_yards_per_attempt);
    for rating in &qb.passer_ratings {
        let marker = if rating.game == qb.best_passer_rating_game {
            " (best)"
        } else if rating.game == qb.worst_passer_rating_game {
            " (worst)"
        } else {
            ""
        };
        println!(
            "   {:<8} {:>6.1}{}",
            rating.game.as_deref().unwrap_or("-"),
            rating.rating,
            marker
        );
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;
    use std::io::Write;

    const ROSTER: &str = r#"[
        {"Player": "QB1", "Position": "QB", "Games": [
            {"Game": "Game1", "Completions": 20, "Attempts": 30, "Yards": 250, "Touchdowns": 2, "Interceptions": 1},
            {"Game": "Game2", "Completions": 15, "Attempts": 25, "Yards": 180, "Touchdowns": 1, "Interceptions": 0}
        ]}
    ]"#;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_season_with_config() {
        let roster = write_temp(ROSTER);
        let config = write_temp("rating_precision: 2\n");

        let season = load_season(roster.path(), "Broncos", Some(config.path())).unwrap();
        let qb = season.quarterbacks().find("QB1").unwrap();
        assert_eq!(qb.season_passer_rating, 98.3);
        assert_eq!(season.config().rating_precision, 2);
    }

    #[test]
    fn test_load_season_reports_path_on_error() {
        let err = load_season(Path::new("/nonexistent/roster.json"), "Broncos", None).unwrap_err();
        assert!(format!("{:#}", err).contains("/nonexistent/roster.json"));
    }

    #[test]
    fn test_cli_parses_report_command() {
        let cli = Cli::try_parse_from(["qbstats", "report", "--data", "qb_data.json", "--format", "json"]).unwrap();
        assert!(matches!(cli.command, Commands::Report { format: OutputFormat::Json, .. }));
        assert!(!cli.verbose);
    }
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("qbstats CLI is not available. Enable the 'cli' feature to use it.");
    std::process::exit(1);
}

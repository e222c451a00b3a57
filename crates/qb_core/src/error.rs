use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("Empty game list provided for player: '{player}'")]
    EmptyGames { player: String },

    #[error("Zero pass attempts for {player} ({scope})")]
    ZeroAttempts { player: String, scope: String },

    #[error("Unrecognized position: {0}")]
    UnknownPosition(String),

    #[error("Position already registered: {0}")]
    DuplicatePosition(String),

    #[error("Invalid position code: '{0}'")]
    InvalidPositionCode(String),

    #[error("Invalid stats config: {0}")]
    InvalidConfig(String),

    #[error("Unsupported schema version: found {found}, expected {expected}")]
    UnsupportedSchema { found: u8, expected: u8 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] serde_yaml::Error),
}

impl StatsError {
    /// Input problems the caller can fix by correcting the data set.
    pub fn is_data_error(&self) -> bool {
        matches!(
            self,
            StatsError::EmptyGames { .. }
                | StatsError::ZeroAttempts { .. }
                | StatsError::UnknownPosition(_)
                | StatsError::Json(_)
        )
    }

    pub(crate) fn zero_attempts(player: &str, scope: impl Into<String>) -> Self {
        StatsError::ZeroAttempts { player: player.to_string(), scope: scope.into() }
    }
}

pub type Result<T> = std::result::Result<T, StatsError>;

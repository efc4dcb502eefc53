use thiserror::Error;

use crate::Coord;

/// Why a board or session configuration was rejected.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConfigProblem {
    #[error("board size must be at least 1")]
    EmptyBoard,
    #[error("at least one mine is required")]
    NoMines,
    #[error("mine count must be lower than the number of cells")]
    TooManyMines,
    #[error("time budget must be at least 1")]
    ZeroTimeBudget,
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(ConfigProblem),
    #[error("Coordinates ({row}, {col}) are outside the board")]
    OutOfBounds { row: Coord, col: Coord },
    #[error("Session already finished, no new moves are accepted")]
    SessionTerminated,
    #[error("No flags available")]
    NoFlagsAvailable,
}

impl From<ConfigProblem> for GameError {
    fn from(problem: ConfigProblem) -> Self {
        Self::InvalidConfiguration(problem)
    }
}

pub type Result<T> = core::result::Result<T, GameError>;

/// Failure to load a [`SessionConfig`](crate::SessionConfig) from a document.
#[derive(Error, Debug)]
pub enum ConfigLoadError {
    #[error("Could not parse session config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Invalid(#[from] GameError),
}

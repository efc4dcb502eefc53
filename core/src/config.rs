use serde::{Deserialize, Serialize};

use crate::*;

/// Parameters a session is created from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    pub size: Coord,
    pub mines: CellCount,
    /// Number of ticks before the session times out.
    pub time_budget: u32,
}

impl SessionConfig {
    pub const fn new_unchecked(size: Coord, mines: CellCount, time_budget: u32) -> Self {
        Self {
            size,
            mines,
            time_budget,
        }
    }

    pub fn new(size: Coord, mines: CellCount, time_budget: u32) -> Result<Self> {
        let config = Self::new_unchecked(size, mines, time_budget);
        config.validate()?;
        Ok(config)
    }

    pub fn from_json(text: &str) -> core::result::Result<Self, ConfigLoadError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        validate_layout(self.size, self.mines)?;
        if self.time_budget == 0 {
            return Err(ConfigProblem::ZeroTimeBudget.into());
        }
        Ok(())
    }

    pub const fn total_cells(&self) -> CellCount {
        area(self.size)
    }

    pub const fn beginner() -> Self {
        Self::new_unchecked(9, 10, 120)
    }

    pub const fn intermediate() -> Self {
        Self::new_unchecked(16, 40, 300)
    }

    pub const fn expert() -> Self {
        Self::new_unchecked(24, 99, 600)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new_unchecked(10, 10, 100)
    }
}

/// Checks that `mines` fits strictly between zero and the cell count of a `size`×`size` board.
pub(crate) fn validate_layout(size: Coord, mines: CellCount) -> Result<()> {
    if size == 0 {
        Err(ConfigProblem::EmptyBoard.into())
    } else if mines == 0 {
        Err(ConfigProblem::NoMines.into())
    } else if mines >= area(size) {
        Err(ConfigProblem::TooManyMines.into())
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn problem(result: Result<SessionConfig>) -> ConfigProblem {
        match result {
            Err(GameError::InvalidConfiguration(problem)) => problem,
            other => panic!("expected configuration error, got {other:?}"),
        }
    }

    #[test]
    fn presets_are_valid() {
        for config in [
            SessionConfig::default(),
            SessionConfig::beginner(),
            SessionConfig::intermediate(),
            SessionConfig::expert(),
        ] {
            assert_eq!(config.validate(), Ok(()));
        }
    }

    #[test]
    fn rejects_bad_parameters() {
        assert_eq!(problem(SessionConfig::new(0, 1, 10)), ConfigProblem::EmptyBoard);
        assert_eq!(problem(SessionConfig::new(3, 0, 10)), ConfigProblem::NoMines);
        assert_eq!(problem(SessionConfig::new(3, 9, 10)), ConfigProblem::TooManyMines);
        assert_eq!(problem(SessionConfig::new(3, 8, 0)), ConfigProblem::ZeroTimeBudget);
        assert!(SessionConfig::new(3, 8, 1).is_ok());
    }

    #[test]
    fn loads_from_json() {
        let config =
            SessionConfig::from_json(r#"{"size": 5, "mines": 3, "time_budget": 30}"#).unwrap();
        assert_eq!(config, SessionConfig::new_unchecked(5, 3, 30));
    }

    #[test]
    fn json_loading_distinguishes_parse_and_validation_errors() {
        assert!(matches!(
            SessionConfig::from_json("{\"size\": 5"),
            Err(ConfigLoadError::Parse(_))
        ));
        assert!(matches!(
            SessionConfig::from_json(r#"{"size": 2, "mines": 4, "time_budget": 30}"#),
            Err(ConfigLoadError::Invalid(GameError::InvalidConfiguration(
                ConfigProblem::TooManyMines
            )))
        ));
    }
}

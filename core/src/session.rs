use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - Active -> Won
/// - Active -> Lost
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    #[default]
    Active,
    Won,
    Lost,
}

impl SessionStatus {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LossCause {
    /// A mine was revealed at these coordinates.
    Mine(Coord2),
    /// The countdown ran out.
    Timeout,
}

/// How a cell should be drawn.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    Hidden,
    Flagged,
    Revealed(u8),
    /// Mine shown after a loss, flagged or not.
    Mine,
    /// The mine that ended the session.
    Exploded,
    /// Flag on a safe cell, shown after a loss.
    WrongFlag,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RevealReport {
    pub revealed: Vec<RevealedCell>,
    pub status: SessionStatus,
}

impl RevealReport {
    pub fn has_update(&self) -> bool {
        !self.revealed.is_empty()
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FlagReport {
    pub coords: Coord2,
    pub cell_status: CellStatus,
    pub remaining_flags: CellCount,
    /// Whether the flag state of the cell changed.
    pub accepted: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TickReport {
    pub countdown: u32,
    pub status: SessionStatus,
    /// Every mine on the board when this tick timed the session out, empty otherwise.
    pub revealed_mines: Vec<Coord2>,
}

/// Full read-only view of a session, for re-rendering everything at once.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SessionSnapshot {
    pub size: Coord,
    pub mine_count: CellCount,
    pub remaining_flags: CellCount,
    pub countdown: u32,
    pub status: SessionStatus,
    pub loss_cause: Option<LossCause>,
    pub cells: Array2<CellView>,
}

/// One game from creation to a win or loss.
///
/// A finished session rejects every further move; starting over means building a new one.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Session {
    config: SessionConfig,
    board: Board,
    flags: FlagBudget,
    countdown: u32,
    status: SessionStatus,
    revealed_safe: CellCount,
    loss_cause: Option<LossCause>,
}

impl Session {
    /// Creates a session with a randomly seeded layout.
    pub fn new(config: SessionConfig) -> Result<Self> {
        Self::with_seed(config, rand::random())
    }

    pub fn with_seed(config: SessionConfig, seed: u64) -> Result<Self> {
        config.validate()?;
        let board = Board::generate(config.size, config.mines, seed)?;
        Ok(Self::from_parts(config, board))
    }

    /// Wraps a prepared board, e.g. one built with [`Board::from_mine_coords`].
    pub fn from_board(board: Board, time_budget: u32) -> Result<Self> {
        let config = SessionConfig::new(board.size(), board.mine_count(), time_budget)?;
        Ok(Self::from_parts(config, board))
    }

    fn from_parts(config: SessionConfig, board: Board) -> Self {
        log::debug!(
            "new session: {}x{}, {} mines, {} ticks",
            config.size,
            config.size,
            config.mines,
            config.time_budget
        );
        Self {
            flags: FlagBudget::new(board.mine_count()),
            countdown: config.time_budget,
            config,
            board,
            status: SessionStatus::Active,
            revealed_safe: 0,
            loss_cause: None,
        }
    }

    /// A fresh session with the same configuration and a new layout. `self` is left as is.
    pub fn restart(&self) -> Result<Self> {
        Self::new(self.config)
    }

    pub fn config(&self) -> SessionConfig {
        self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    pub fn countdown(&self) -> u32 {
        self.countdown
    }

    pub fn remaining_flags(&self) -> CellCount {
        self.flags.remaining()
    }

    pub fn revealed_safe_count(&self) -> CellCount {
        self.revealed_safe
    }

    pub fn loss_cause(&self) -> Option<LossCause> {
        self.loss_cause
    }

    pub fn handle_reveal(&mut self, coords: Coord2) -> Result<RevealReport> {
        self.check_active()?;
        let coords = self.board.validate_coords(coords)?;

        let delta = reveal(&mut self.board, coords);

        if delta.hit_mine {
            self.lose(LossCause::Mine(coords));
            return Ok(RevealReport {
                revealed: self.mine_cells(),
                status: self.status,
            });
        }

        // the cascade never opens more than the safe cells of the board
        self.revealed_safe += delta.revealed.len() as CellCount;
        if self.revealed_safe == self.board.safe_cell_count() {
            log::debug!("session won");
            self.status = SessionStatus::Won;
        }

        Ok(RevealReport {
            revealed: delta.revealed,
            status: self.status,
        })
    }

    pub fn handle_toggle_flag(&mut self, coords: Coord2) -> Result<FlagReport> {
        self.check_active()?;
        let coords = self.board.validate_coords(coords)?;

        let outcome = self.flags.toggle(self.board.cell_mut(coords))?;
        log::debug!("flag at {:?}: {:?}", coords, outcome);

        Ok(FlagReport {
            coords,
            cell_status: self.board[coords].status(),
            remaining_flags: self.flags.remaining(),
            accepted: outcome.has_update(),
        })
    }

    /// Advances the countdown by one step, timing the session out when it reaches zero.
    pub fn tick(&mut self) -> Result<TickReport> {
        self.check_active()?;

        self.countdown = self.countdown.saturating_sub(1);
        let revealed_mines = if self.countdown == 0 {
            self.lose(LossCause::Timeout);
            self.board.iter_mines().collect()
        } else {
            Vec::new()
        };

        Ok(TickReport {
            countdown: self.countdown,
            status: self.status,
            revealed_mines,
        })
    }

    pub fn describe(&self) -> SessionSnapshot {
        let size = self.board.size();
        let cells = Array2::from_shape_fn(self.board.cells().dim(), |(row, col)| {
            self.view_of((row as Coord, col as Coord))
        });

        SessionSnapshot {
            size,
            mine_count: self.board.mine_count(),
            remaining_flags: self.flags.remaining(),
            countdown: self.countdown,
            status: self.status,
            loss_cause: self.loss_cause,
            cells,
        }
    }

    pub fn cell_view(&self, coords: Coord2) -> Result<CellView> {
        let coords = self.board.validate_coords(coords)?;
        Ok(self.view_of(coords))
    }

    /// Callers must have bounds-checked `coords`.
    fn view_of(&self, coords: Coord2) -> CellView {
        use CellStatus::*;

        let cell = self.board[coords];
        let lost = matches!(self.status, SessionStatus::Lost);

        match (cell.status(), cell.has_mine()) {
            (_, true) if lost => {
                if self.loss_cause == Some(LossCause::Mine(coords)) {
                    CellView::Exploded
                } else {
                    CellView::Mine
                }
            }
            (Flagged, false) if lost => CellView::WrongFlag,
            (Hidden, _) => CellView::Hidden,
            (Flagged, _) => CellView::Flagged,
            (Revealed, _) => CellView::Revealed(cell.adjacent_mines().unwrap_or_default()),
        }
    }

    fn mine_cells(&self) -> Vec<RevealedCell> {
        self.board
            .iter_mines()
            .map(|coords| RevealedCell {
                coords,
                content: CellContent::Mine,
            })
            .collect()
    }

    fn lose(&mut self, cause: LossCause) {
        log::debug!("session lost: {:?}", cause);
        self.status = SessionStatus::Lost;
        self.loss_cause = Some(cause);
    }

    fn check_active(&self) -> Result<()> {
        if self.status.is_finished() {
            log::warn!("move rejected, session already {:?}", self.status);
            Err(GameError::SessionTerminated)
        } else {
            Ok(())
        }
    }
}

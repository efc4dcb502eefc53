use serde::{Deserialize, Serialize};

/// Player-visible status of a cell. A cell never leaves `Revealed`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellStatus {
    #[default]
    Hidden,
    Revealed,
    Flagged,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Cell {
    has_mine: bool,
    adjacent_mines: Option<u8>,
    status: CellStatus,
}

impl Cell {
    pub(crate) fn plant_mine(&mut self) {
        self.has_mine = true;
    }

    pub const fn has_mine(&self) -> bool {
        self.has_mine
    }

    pub const fn status(&self) -> CellStatus {
        self.status
    }

    /// Cached adjacency count, `None` until first computed and always `None` for mines.
    pub const fn adjacent_mines(&self) -> Option<u8> {
        self.adjacent_mines
    }

    pub(crate) fn cache_adjacent_mines(&mut self, count: u8) {
        self.adjacent_mines = Some(count);
    }

    pub(crate) fn set_status(&mut self, status: CellStatus) {
        debug_assert!(
            self.status != CellStatus::Revealed || status == CellStatus::Revealed,
            "revealed cells are final"
        );
        self.status = status;
    }
}

use core::ops::Index;
use ndarray::Array2;
use rand::{Rng, SeedableRng, rngs::SmallRng};
use serde::Serialize;

use crate::*;

/// Square grid of cells with a fixed mine layout.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Board {
    cells: Array2<Cell>,
    mine_count: CellCount,
}

impl Board {
    fn empty(size: Coord) -> Self {
        Self {
            cells: Array2::default((size, size).to_nd_index()),
            mine_count: 0,
        }
    }

    /// Places exactly `mine_count` mines by sampling random cells and retrying on collisions.
    ///
    /// The same `seed` always produces the same layout.
    pub fn generate(size: Coord, mine_count: CellCount, seed: u64) -> Result<Self> {
        validate_layout(size, mine_count)?;

        let mut board = Self::empty(size);
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut collisions = 0usize;

        while board.mine_count < mine_count {
            let coords: Coord2 = (rng.random_range(0..size), rng.random_range(0..size));
            let cell = &mut board.cells[coords.to_nd_index()];
            if cell.has_mine() {
                collisions += 1;
                continue;
            }
            cell.plant_mine();
            board.mine_count += 1;
        }

        log::trace!("placement retried {} times", collisions);
        log::debug!(
            "generated {}x{} board with {} mines (seed {})",
            size,
            size,
            mine_count,
            seed
        );
        Ok(board)
    }

    /// Builds a board with mines at the given coordinates, duplicates count once.
    pub fn from_mine_coords(size: Coord, mine_coords: &[Coord2]) -> Result<Self> {
        if size == 0 {
            return Err(ConfigProblem::EmptyBoard.into());
        }

        let mut board = Self::empty(size);
        for &coords in mine_coords {
            let coords = board.validate_coords(coords)?;
            let cell = &mut board.cells[coords.to_nd_index()];
            if !cell.has_mine() {
                cell.plant_mine();
                board.mine_count += 1;
            }
        }

        validate_layout(size, board.mine_count)?;
        Ok(board)
    }

    pub fn size(&self) -> Coord {
        // dimensions come from a `Coord`, so this never truncates
        self.cells.nrows() as Coord
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn total_cells(&self) -> CellCount {
        area(self.size())
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn is_in_bounds(&self, (row, col): Coord2) -> bool {
        let size = self.size();
        row < size && col < size
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if self.is_in_bounds(coords) {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds {
                row: coords.0,
                col: coords.1,
            })
        }
    }

    pub fn cell_at(&self, coords: Coord2) -> Result<&Cell> {
        let coords = self.validate_coords(coords)?;
        Ok(&self[coords])
    }

    /// Callers must have bounds-checked `coords`.
    pub(crate) fn cell_mut(&mut self, coords: Coord2) -> &mut Cell {
        &mut self.cells[coords.to_nd_index()]
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        NeighborIter::adjacent(coords, self.size())
    }

    pub fn iter_orthogonal(&self, coords: Coord2) -> NeighborIter {
        NeighborIter::orthogonal(coords, self.size())
    }

    pub fn iter_coords(&self) -> impl Iterator<Item = Coord2> + use<> {
        let size = self.size();
        (0..size).flat_map(move |row| (0..size).map(move |col| (row, col)))
    }

    pub fn iter_mines(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.iter_coords().filter(|&coords| self[coords].has_mine())
    }

    pub(crate) fn cells(&self) -> &Array2<Cell> {
        &self.cells
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, (row, col): Coord2) -> &Self::Output {
        &self.cells[(row as usize, col as usize)]
    }
}

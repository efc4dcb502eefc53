use std::collections::VecDeque;
use serde::{Deserialize, Serialize};

use crate::*;

/// What a revealed cell shows.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellContent {
    Safe(u8),
    Mine,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealedCell {
    pub coords: Coord2,
    pub content: CellContent,
}

/// Cells changed by a single reveal action.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealDelta {
    pub revealed: Vec<RevealedCell>,
    pub hit_mine: bool,
}

impl RevealDelta {
    pub fn has_update(&self) -> bool {
        self.hit_mine || !self.revealed.is_empty()
    }
}

/// Reveals a hidden safe cell and, if its count is zero, the orthogonally connected zero region
/// together with its non-zero border.
///
/// Out of bounds, revealed and flagged cells are left alone. A hidden mine is only reported
/// through `hit_mine`, the board itself is not touched.
pub fn reveal(board: &mut Board, coords: Coord2) -> RevealDelta {
    let mut delta = RevealDelta::default();

    if !board.is_in_bounds(coords) || board[coords].status() != CellStatus::Hidden {
        return delta;
    }

    if board[coords].has_mine() {
        delta.hit_mine = true;
        return delta;
    }

    // cells are revealed before they are queued, so each one is queued at most once
    let mut to_visit = VecDeque::new();
    if open_cell(board, coords, &mut delta) == 0 {
        to_visit.push_back(coords);
    }

    while let Some(visit_coords) = to_visit.pop_front() {
        for pos in board.iter_orthogonal(visit_coords) {
            let cell = board[pos];
            if cell.status() != CellStatus::Hidden || cell.has_mine() {
                log::trace!("Skipping cell at {:?}", pos);
                continue;
            }

            if open_cell(board, pos, &mut delta) == 0 {
                to_visit.push_back(pos);
            }
        }
    }

    log::debug!(
        "Reveal at {:?} opened {} cell(s)",
        coords,
        delta.revealed.len()
    );
    delta
}

/// Marks a hidden safe cell as revealed and records it, returning its adjacency count.
fn open_cell(board: &mut Board, coords: Coord2, delta: &mut RevealDelta) -> u8 {
    // only called for safe cells, which always have a count
    let count = cached_adjacent_mines(board, coords).unwrap_or_default();
    board.cell_mut(coords).set_status(CellStatus::Revealed);
    delta.revealed.push(RevealedCell {
        coords,
        content: CellContent::Safe(count),
    });
    log::trace!("Opened cell at {:?}, mine count: {}", coords, count);
    count
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    fn board(size: Coord, mines: &[Coord2]) -> Board {
        Board::from_mine_coords(size, mines).unwrap()
    }

    fn coords_of(delta: &RevealDelta) -> BTreeSet<Coord2> {
        delta.revealed.iter().map(|cell| cell.coords).collect()
    }

    #[test]
    fn nonzero_cell_reveals_only_itself() {
        let mut board = board(3, &[(0, 0)]);

        let delta = reveal(&mut board, (1, 1));

        assert_eq!(
            delta.revealed,
            vec![RevealedCell {
                coords: (1, 1),
                content: CellContent::Safe(1),
            }]
        );
        assert!(!delta.hit_mine);
        assert_eq!(board[(1, 1)].status(), CellStatus::Revealed);
        assert_eq!(board[(1, 0)].status(), CellStatus::Hidden);
    }

    #[test]
    fn zero_cell_cascades_over_safe_region() {
        let mut board = board(3, &[(0, 0)]);

        let delta = reveal(&mut board, (2, 2));

        // every safe cell is reachable through the zero region
        assert_eq!(delta.revealed.len(), 8);
        assert_eq!(board[(0, 0)].status(), CellStatus::Hidden);
        assert!(!delta.hit_mine);
    }

    #[test]
    fn cascade_spreads_orthogonally_only() {
        //   . . M
        //   . . .
        //   M . .
        let mut board = board(3, &[(0, 2), (2, 0)]);

        let delta = reveal(&mut board, (0, 0));

        let expected: BTreeSet<Coord2> = [(0, 0), (0, 1), (1, 0)].into_iter().collect();
        assert_eq!(coords_of(&delta), expected);
        // diagonal neighbor of the zero cell stays hidden
        assert_eq!(board[(1, 1)].status(), CellStatus::Hidden);
        assert_eq!(board[(2, 2)].status(), CellStatus::Hidden);
    }

    #[test]
    fn cascade_stops_at_nonzero_border() {
        // mine in the far corner of a 5x5 board
        let mut board = board(5, &[(4, 4)]);

        let delta = reveal(&mut board, (0, 0));

        assert_eq!(delta.revealed.len(), 24);
        for cell in &delta.revealed {
            let expected = count_adjacent_mines(&board, cell.coords).unwrap();
            assert_eq!(cell.content, CellContent::Safe(expected));
        }
    }

    #[test]
    fn cascade_does_not_open_flagged_cells() {
        let mut board = board(4, &[(3, 3)]);
        board.cell_mut((0, 3)).set_status(CellStatus::Flagged);

        let delta = reveal(&mut board, (0, 0));

        assert!(!coords_of(&delta).contains(&(0, 3)));
        assert_eq!(board[(0, 3)].status(), CellStatus::Flagged);
        assert_eq!(delta.revealed.len(), 14);
    }

    #[test]
    fn revealed_and_flagged_cells_are_noops() {
        let mut board = board(3, &[(0, 0)]);
        reveal(&mut board, (1, 1));
        board.cell_mut((2, 0)).set_status(CellStatus::Flagged);
        let before = board.clone();

        assert_eq!(reveal(&mut board, (1, 1)), RevealDelta::default());
        assert_eq!(reveal(&mut board, (2, 0)), RevealDelta::default());
        assert_eq!(board, before);
    }

    #[test]
    fn out_of_bounds_is_noop() {
        let mut board = board(3, &[(0, 0)]);
        assert!(!reveal(&mut board, (3, 3)).has_update());
    }

    #[test]
    fn mine_is_reported_without_touching_board() {
        let mut board = board(3, &[(0, 0)]);
        let before = board.clone();

        let delta = reveal(&mut board, (0, 0));

        assert!(delta.hit_mine);
        assert!(delta.revealed.is_empty());
        assert_eq!(board, before);
    }
}

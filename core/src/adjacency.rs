use crate::*;

/// Number of mines among the 8 cells surrounding `coords`, or `None` when `coords` itself is mined.
pub fn count_adjacent_mines(board: &Board, coords: Coord2) -> Option<u8> {
    if board[coords].has_mine() {
        return None;
    }

    let count = board
        .iter_neighbors(coords)
        .filter(|&pos| board[pos].has_mine())
        .count();
    // at most 8 neighbors
    Some(count as u8)
}

/// Like [`count_adjacent_mines`], but stores the result on the cell and reuses it afterwards.
pub(crate) fn cached_adjacent_mines(board: &mut Board, coords: Coord2) -> Option<u8> {
    if let Some(count) = board[coords].adjacent_mines() {
        return Some(count);
    }

    let count = count_adjacent_mines(board, coords)?;
    board.cell_mut(coords).cache_adjacent_mines(count);
    Some(count)
}

/// Single coordinate axis, used for the board side length and for positions.
pub type Coord = u8;

/// Count type used for mine counts, flag budgets and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

/// Number of cells on a square board with side `size`.
pub const fn area(size: Coord) -> CellCount {
    let size = size as CellCount;
    size.saturating_mul(size)
}

const ADJACENT: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

const ORTHOGONAL: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Applies `delta` to `coords`, returning a value only when it remains on a board of side `size`.
fn apply_delta(coords: Coord2, delta: (isize, isize), size: Coord) -> Option<Coord2> {
    let (row, col) = coords;
    let (d_row, d_col) = delta;

    let next_row = row.checked_add_signed(d_row.try_into().ok()?)?;
    if next_row >= size {
        return None;
    }

    let next_col = col.checked_add_signed(d_col.try_into().ok()?)?;
    if next_col >= size {
        return None;
    }

    Some((next_row, next_col))
}

/// In-bounds neighbors of a cell, either the full 8-ring or the 4 orthogonal cells.
#[derive(Debug)]
pub struct NeighborIter {
    center: Coord2,
    size: Coord,
    displacements: &'static [(isize, isize)],
    index: u8,
}

impl NeighborIter {
    pub fn adjacent(center: Coord2, size: Coord) -> Self {
        Self::new(center, size, &ADJACENT)
    }

    pub fn orthogonal(center: Coord2, size: Coord) -> Self {
        Self::new(center, size, &ORTHOGONAL)
    }

    fn new(center: Coord2, size: Coord, displacements: &'static [(isize, isize)]) -> Self {
        Self {
            center,
            size,
            displacements,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let delta = *self.displacements.get(usize::from(self.index))?;
            self.index += 1;

            if let Some(next_item) = apply_delta(self.center, delta, self.size) {
                return Some(next_item);
            }
        }
    }
}

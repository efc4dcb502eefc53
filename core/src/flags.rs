use serde::Serialize;

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarkOutcome {
    NoChange,
    Placed,
    Removed,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

/// Finite supply of flags, one per mine.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FlagBudget {
    remaining: CellCount,
    capacity: CellCount,
}

impl FlagBudget {
    pub const fn new(capacity: CellCount) -> Self {
        Self {
            remaining: capacity,
            capacity,
        }
    }

    pub const fn remaining(&self) -> CellCount {
        self.remaining
    }

    /// Flags a hidden cell or unflags a flagged one. Revealed cells are left alone.
    ///
    /// Fails without touching anything when a flag would be placed with none left.
    pub fn toggle(&mut self, cell: &mut Cell) -> Result<MarkOutcome> {
        use CellStatus::*;
        use MarkOutcome::*;

        Ok(match cell.status() {
            Revealed => NoChange,
            Flagged => {
                debug_assert!(self.remaining < self.capacity);
                cell.set_status(Hidden);
                self.remaining += 1;
                Removed
            }
            Hidden => {
                if self.remaining == 0 {
                    return Err(GameError::NoFlagsAvailable);
                }
                cell.set_status(Flagged);
                self.remaining -= 1;
                Placed
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_twice_restores_cell_and_budget() {
        let mut budget = FlagBudget::new(2);
        let mut cell = Cell::default();

        assert_eq!(budget.toggle(&mut cell), Ok(MarkOutcome::Placed));
        assert_eq!(cell.status(), CellStatus::Flagged);
        assert_eq!(budget.remaining(), 1);

        assert_eq!(budget.toggle(&mut cell), Ok(MarkOutcome::Removed));
        assert_eq!(cell.status(), CellStatus::Hidden);
        assert_eq!(budget.remaining(), 2);
    }

    #[test]
    fn exhausted_budget_rejects_new_flags() {
        let mut budget = FlagBudget::new(1);
        let mut first = Cell::default();
        let mut second = Cell::default();

        budget.toggle(&mut first).unwrap();

        assert_eq!(budget.toggle(&mut second), Err(GameError::NoFlagsAvailable));
        assert_eq!(second.status(), CellStatus::Hidden);
        assert_eq!(budget.remaining(), 0);

        // removing a flag is still allowed
        assert_eq!(budget.toggle(&mut first), Ok(MarkOutcome::Removed));
        assert_eq!(budget.toggle(&mut second), Ok(MarkOutcome::Placed));
    }

    #[test]
    fn revealed_cell_cannot_be_flagged() {
        let mut budget = FlagBudget::new(3);
        let mut cell = Cell::default();
        cell.set_status(CellStatus::Revealed);

        assert_eq!(budget.toggle(&mut cell), Ok(MarkOutcome::NoChange));
        assert_eq!(cell.status(), CellStatus::Revealed);
        assert_eq!(budget.remaining(), 3);
        assert_eq!(budget, FlagBudget::new(3));
    }
}

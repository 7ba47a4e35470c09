//! # Stepping-stone loops
//!
//! A loop starts at a non-basic cell and visits basic cells, alternating between vertical and
//! horizontal moves, until it can close back onto its starting cell. Shipping one extra unit
//! through the starting cell requires adding and removing units alternately along the loop to
//! keep all row and column sums intact.
use enum_map::{Enum, EnumMap};

use crate::data::allocation::Allocation;
use crate::data::grid::{Cell, Grid};
use crate::data::number_types::OrderedRing;

/// Whether a position in a loop receives or gives up quantity when shifting along the loop.
#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq)]
pub enum Role {
    /// Even positions, including the base cell at position 0.
    Add,
    /// Odd positions.
    Subtract,
}

impl Role {
    /// Role of the cell at a position in the loop.
    #[must_use]
    pub fn of(position: usize) -> Self {
        if position % 2 == 0 { Role::Add } else { Role::Subtract }
    }
}

/// Closed rectilinear path through a non-basic base cell and basic cells.
///
/// The first cell is the base cell. Consecutive cells, including the last and the first, share
/// either a row or a column, and these moves alternate between vertical and horizontal.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Loop {
    cells: Vec<Cell>,
}

impl Loop {
    /// Wrap a sequence of cells, the first one being the base cell.
    pub fn new(cells: Vec<Cell>) -> Self {
        debug_assert!(cells.len() >= 4);
        debug_assert_eq!(cells.len() % 2, 0);
        debug_assert!(cells[1].is_aligned_with(&cells[0]));
        debug_assert!(cells[cells.len() - 1].is_aligned_with(&cells[0]));

        Self { cells }
    }

    /// The non-basic cell this loop was found for.
    pub fn base(&self) -> Cell {
        self.cells[0]
    }

    /// All cells, starting with the base cell.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of cells, including the base cell.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`, a loop contains at least four cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cells together with the role they play when shifting quantity.
    pub fn iter_roles(&self) -> impl Iterator<Item = (Role, Cell)> + '_ {
        self.cells.iter().enumerate().map(|(position, &cell)| (Role::of(position), cell))
    }

    /// Change in total cost per unit shifted along this loop.
    ///
    /// Computed as the alternating sum `cost(0) - cost(1) + cost(2) - ...`. A negative value means
    /// that shipping through the base cell lowers the total cost by that amount per unit.
    pub fn value<F: OrderedRing>(&self, costs: &Grid<F>) -> F {
        let mut totals: EnumMap<Role, F> = EnumMap::from_fn(|_| F::zero());
        for (role, cell) in self.iter_roles() {
            totals[role] = totals[role].clone() + costs[cell].clone();
        }

        totals[Role::Add].clone() - totals[Role::Subtract].clone()
    }

    /// The largest quantity that can be shifted along this loop.
    ///
    /// # Return value
    ///
    /// The position within the loop of the first subtract cell holding the smallest quantity, and
    /// that quantity.
    pub fn theta<F: OrderedRing>(&self, allocation: &Allocation<F>) -> (usize, F) {
        let mut limiting = (1, allocation[self.cells[1]].clone());
        for position in (3..self.cells.len()).step_by(2) {
            let quantity = &allocation[self.cells[position]];
            if quantity < &limiting.1 {
                limiting = (position, quantity.clone());
            }
        }

        limiting
    }

    /// Shift a quantity along this loop.
    ///
    /// # Arguments
    ///
    /// * `allocation`: Allocation to start from, left untouched.
    /// * `theta`: Quantity to add to the even positions and remove from the odd positions.
    ///
    /// # Return value
    ///
    /// A new allocation with the same row and column sums.
    pub fn reallocate<F: OrderedRing>(&self, allocation: &Allocation<F>, theta: &F) -> Allocation<F> {
        let mut reallocated = allocation.clone();
        for (role, cell) in self.iter_roles() {
            let current = reallocated[cell].clone();
            let new = match role {
                Role::Add => current + theta.clone(),
                Role::Subtract => current - theta.clone(),
            };
            reallocated.set(cell, new);
        }

        reallocated
    }
}

/// A loop found during a round, together with its value.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct LoopRecord<F> {
    #[allow(missing_docs)]
    pub cycle: Loop,
    /// Change in total cost per unit shifted, see `Loop::value`.
    pub value: F,
}

impl<F: OrderedRing> LoopRecord<F> {
    /// Evaluate a loop.
    pub fn new(cycle: Loop, costs: &Grid<F>) -> Self {
        let value = cycle.value(costs);
        Self { cycle, value }
    }

    /// The non-basic cell this loop was found for.
    pub fn base(&self) -> Cell {
        self.cycle.base()
    }

    /// Whether shifting along the loop lowers the total cost.
    pub fn is_improving(&self) -> bool {
        self.value < F::zero()
    }
}

#[cfg(test)]
mod test {
    use crate::algorithm::stepping_stone::cycle::{Loop, LoopRecord, Role};
    use crate::data::allocation::Allocation;
    use crate::data::grid::{Cell, Grid};

    fn costs() -> Grid<i32> {
        Grid::from_rows(vec![
            vec![4, 6, 8],
            vec![5, 8, 7],
            vec![6, 9, 10],
        ], 3)
    }

    fn allocation() -> Allocation<i32> {
        Allocation::from_rows(vec![
            vec![10, 10, 0],
            vec![0, 0, 30],
            vec![0, 15, 10],
        ], 3)
    }

    fn corner_loop() -> Loop {
        Loop::new(vec![Cell::new(2, 0), Cell::new(0, 0), Cell::new(0, 1), Cell::new(2, 1)])
    }

    #[test]
    fn roles_alternate() {
        let roles = corner_loop().iter_roles().map(|(role, _)| role).collect::<Vec<_>>();
        assert_eq!(roles, vec![Role::Add, Role::Subtract, Role::Add, Role::Subtract]);
    }

    #[test]
    fn value() {
        assert_eq!(corner_loop().value(&costs()), 6 - 4 + 6 - 9);

        let long = Loop::new(vec![
            Cell::new(1, 0), Cell::new(0, 0), Cell::new(0, 1),
            Cell::new(2, 1), Cell::new(2, 2), Cell::new(1, 2),
        ]);
        let record = LoopRecord::new(long, &costs());
        assert_eq!(record.value, 5 - 4 + 6 - 9 + 10 - 7);
        assert!(!record.is_improving());
        assert_eq!(record.base(), Cell::new(1, 0));
    }

    #[test]
    fn theta_takes_first_minimum() {
        assert_eq!(corner_loop().theta(&allocation()), (1, 10));

        let tied = Allocation::from_rows(vec![
            vec![5, 10, 0],
            vec![0, 0, 30],
            vec![0, 5, 20],
        ], 3);
        assert_eq!(corner_loop().theta(&tied), (1, 5));
    }

    #[test]
    fn reallocate_keeps_sums() {
        let before = allocation();
        let after = corner_loop().reallocate(&before, &10);
        assert_eq!(after, Allocation::from_rows(vec![
            vec![0, 20, 0],
            vec![0, 0, 30],
            vec![10, 5, 10],
        ], 3));
        assert_eq!(after.row_sums(), before.row_sums());
        assert_eq!(after.column_sums(), before.column_sums());
        assert_eq!(before.total_cost(&costs()) - after.total_cost(&costs()), 10);
    }
}

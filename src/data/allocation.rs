//! # Allocations
//!
//! The quantity shipped for every (source, purchaser) combination, also known as the loaded
//! matrix. Cells with a nonzero quantity are basic, the others are non-basic.
use std::fmt::{self, Display, Formatter};
use std::ops::Index;

use crate::data::grid::{Cell, Grid};
use crate::data::number_types::{OrderedRing, sum};

/// Quantities shipped, one row per source and one column per purchaser.
///
/// Every round of the stepping-stone method owns its own `Allocation`; changes produce a new value
/// instead of modifying one that was already recorded.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Allocation<F> {
    quantities: Grid<F>,
}

impl<F> Allocation<F>
where
    F: OrderedRing,
{
    /// Create an allocation shipping nothing.
    pub fn zeros(nr_rows: usize, nr_columns: usize) -> Self {
        Self { quantities: Grid::constant(F::zero(), nr_rows, nr_columns) }
    }

    /// Create an allocation from a row of quantities per source.
    pub fn from_rows(rows: Vec<Vec<F>>, nr_columns: usize) -> Self {
        Self { quantities: Grid::from_rows(rows, nr_columns) }
    }

    /// Number of sources.
    pub fn nr_rows(&self) -> usize {
        self.quantities.nr_rows()
    }

    /// Number of purchasers.
    pub fn nr_columns(&self) -> usize {
        self.quantities.nr_columns()
    }

    /// Quantity shipped through a cell.
    pub fn quantity(&self, cell: Cell) -> &F {
        &self.quantities[cell]
    }

    pub(crate) fn set(&mut self, cell: Cell, quantity: F) {
        self.quantities[cell] = quantity;
    }

    /// Whether anything is shipped through a cell.
    pub fn is_basic(&self, cell: Cell) -> bool {
        !self.quantities[cell].is_zero()
    }

    /// The cells through which nothing is shipped, row by row.
    pub fn non_basic_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.quantities.iter()
            .filter(|(_, quantity)| quantity.is_zero())
            .map(|(cell, _)| cell)
    }

    /// Number of cells through which something is shipped.
    pub fn nr_basic(&self) -> usize {
        self.quantities.iter().filter(|(_, quantity)| !quantity.is_zero()).count()
    }

    /// Total quantity shipped from each source.
    pub fn row_sums(&self) -> Vec<F> {
        self.quantities.iter_rows().map(sum).collect()
    }

    /// Total quantity shipped to each purchaser.
    pub fn column_sums(&self) -> Vec<F> {
        (0..self.nr_columns())
            .map(|j| sum(self.quantities.column(j)))
            .collect()
    }

    /// Whether this allocation exactly ships all supply to satisfy all demand.
    pub fn is_feasible_for(&self, supply: &[F], demand: &[F]) -> bool {
        self.row_sums() == supply && self.column_sums() == demand
    }

    /// Whether no quantity is negative.
    pub fn is_nonnegative(&self) -> bool {
        self.quantities.iter().all(|(_, quantity)| *quantity >= F::zero())
    }

    /// Total cost of shipping, summed over the basic cells.
    ///
    /// # Arguments
    ///
    /// * `costs`: Cost per unit for every cell, of the same shape as this allocation.
    pub fn total_cost(&self, costs: &Grid<F>) -> F {
        debug_assert_eq!(costs.nr_rows(), self.nr_rows());
        debug_assert_eq!(costs.nr_columns(), self.nr_columns());

        self.quantities.iter()
            .filter(|(_, quantity)| !quantity.is_zero())
            .fold(F::zero(), |total, (cell, quantity)| {
                total + quantity.clone() * costs[cell].clone()
            })
    }

    /// The underlying grid of quantities.
    pub fn grid(&self) -> &Grid<F> {
        &self.quantities
    }
}

impl<F> Index<Cell> for Allocation<F> {
    type Output = F;

    fn index(&self, cell: Cell) -> &Self::Output {
        &self.quantities[cell]
    }
}

impl<F: Display> Display for Allocation<F> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        Display::fmt(&self.quantities, f)
    }
}

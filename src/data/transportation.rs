//! # Transportation problems
//!
//! A balanced transportation problem consists of sources with a capacity, purchasers with a
//! requirement, and a cost of shipping one unit for every (source, purchaser) combination.
use crate::data::grid::{Cell, Grid};
use crate::data::number_types::{OrderedRing, sum};

/// Supply, demand and cost data of a transportation problem.
///
/// Costs start out unset and are populated cell by cell. They should not change anymore once a
/// solve has started; the solvers in this crate take their own copy.
#[derive(Debug, Clone, PartialEq)]
pub struct Transportation<F> {
    /// Capacity of each source, one per row.
    supply: Vec<F>,
    /// Requirement of each purchaser, one per column.
    demand: Vec<F>,
    /// Cost of shipping one unit, `None` while unset.
    costs: Grid<Option<F>>,
}

impl<F> Transportation<F>
where
    F: OrderedRing,
{
    /// Create a new instance with all costs unset.
    ///
    /// # Arguments
    ///
    /// * `supply`: Capacity per source.
    /// * `demand`: Requirement per purchaser.
    pub fn new(supply: Vec<F>, demand: Vec<F>) -> Self {
        let costs = Grid::constant(None, supply.len(), demand.len());

        Self { supply, demand, costs }
    }

    /// Create a new instance with all costs given.
    ///
    /// # Arguments
    ///
    /// * `supply`: Capacity per source.
    /// * `demand`: Requirement per purchaser.
    /// * `costs`: One row of costs per source, each row containing a cost per purchaser.
    pub fn with_costs(supply: Vec<F>, demand: Vec<F>, costs: Vec<Vec<F>>) -> Self {
        debug_assert_eq!(costs.len(), supply.len());

        let nr_columns = demand.len();
        let costs = costs.into_iter()
            .map(|row| row.into_iter().map(Some).collect())
            .collect();

        Self {
            supply,
            demand,
            costs: Grid::from_rows(costs, nr_columns),
        }
    }

    /// Number of sources.
    pub fn nr_sources(&self) -> usize {
        self.supply.len()
    }

    /// Number of purchasers.
    pub fn nr_purchasers(&self) -> usize {
        self.demand.len()
    }

    /// Capacity of every source.
    pub fn supply(&self) -> &[F] {
        &self.supply
    }

    /// Requirement of every purchaser.
    pub fn demand(&self) -> &[F] {
        &self.demand
    }

    /// Cost of shipping one unit from source `i` to purchaser `j`, if it was set.
    pub fn cost(&self, i: usize, j: usize) -> Option<&F> {
        self.costs[(i, j)].as_ref()
    }

    /// Set the cost of shipping one unit from source `i` to purchaser `j`.
    pub fn set_cost(&mut self, i: usize, j: usize, value: F) {
        self.costs[(i, j)] = Some(value);
    }

    /// The first cell, row by row, of which the cost was never set.
    pub fn first_unset_cost(&self) -> Option<Cell> {
        self.costs.iter()
            .find(|(_, cost)| cost.is_none())
            .map(|(cell, _)| cell)
    }

    /// Whether the total supply equals the total demand.
    pub fn is_balanced(&self) -> bool {
        sum(&self.supply) == sum(&self.demand)
    }

    /// The cost grid with all values set.
    ///
    /// # Return value
    ///
    /// The first cell, row by row, of which the cost is unset, if any.
    pub fn complete_costs(&self) -> Result<Grid<F>, Cell> {
        self.costs.try_map(|cell, cost| cost.clone().ok_or(cell))
    }
}

#[cfg(test)]
mod test {
    use crate::data::grid::Cell;
    use crate::data::transportation::Transportation;

    #[test]
    fn costs_start_unset() {
        let mut problem = Transportation::new(vec![5, 5], vec![4, 6]);
        assert_eq!(problem.cost(0, 1), None);
        assert_eq!(problem.first_unset_cost(), Some(Cell::new(0, 0)));
        assert_eq!(problem.complete_costs(), Err(Cell::new(0, 0)));

        problem.set_cost(0, 0, 1);
        problem.set_cost(0, 1, 2);
        problem.set_cost(1, 0, 3);
        assert_eq!(problem.first_unset_cost(), Some(Cell::new(1, 1)));
        assert_eq!(problem.complete_costs(), Err(Cell::new(1, 1)));
        problem.set_cost(1, 1, 4);
        assert_eq!(problem.first_unset_cost(), None);
        assert_eq!(problem.cost(1, 0), Some(&3));

        let costs = problem.complete_costs().unwrap();
        assert_eq!(costs[(1, 1)], 4);
        assert_eq!(costs.iter().map(|(_, &cost)| cost).collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn balance() {
        let problem = Transportation::with_costs(vec![3, 4], vec![7], vec![vec![1], vec![2]]);
        assert!(problem.is_balanced());
        assert_eq!(problem.nr_sources(), 2);
        assert_eq!(problem.nr_purchasers(), 1);

        let problem = Transportation::with_costs(vec![3], vec![2], vec![vec![1]]);
        assert!(!problem.is_balanced());
    }
}

//! # Visitation queue
//!
//! The greedy initial allocation visits cells in order of ascending cost. Cells of equal cost are
//! grouped together, row by row, and within a row the purchaser with the larger requirement goes
//! first. Serving large requirements early keeps the initial allocation less fragmented.
//!
//! Purchasers in a row with both equal cost and equal requirement are always visited in column
//! order, however many of them there are.
use std::cmp::Ordering;

use itertools::Itertools;

use crate::data::grid::{Cell, Grid};
use crate::data::number_types::OrderedRing;

/// A cell in the visitation queue, together with its cost.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Queued<F> {
    #[allow(missing_docs)]
    pub cell: Cell,
    #[allow(missing_docs)]
    pub cost: F,
}

/// Order all cells by ascending cost.
///
/// Each pass selects the smallest cost strictly above the one of the previous pass and collects
/// every cell with that cost, row by row. Ties within a row are ordered by descending demand of
/// their purchasers; remaining ties keep their column order.
///
/// # Arguments
///
/// * `costs`: Cost per unit of every cell.
/// * `demand`: Requirement of each purchaser, one per column of `costs`.
///
/// # Return value
///
/// Every cell exactly once.
pub fn build<F>(costs: &Grid<F>, demand: &[F]) -> Vec<Queued<F>>
where
    F: OrderedRing,
{
    debug_assert_eq!(costs.nr_columns(), demand.len());

    let mut queue = Vec::with_capacity(costs.nr_rows() * costs.nr_columns());
    let mut previous = None;
    while let Some(threshold) = smallest_above(costs, previous.as_ref()) {
        for (i, row) in costs.iter_rows().enumerate() {
            let tied = row.iter()
                .positions(|cost| cost == &threshold)
                .sorted_by(|&left, &right| by_descending_demand(demand, left, right));
            queue.extend(tied.map(|j| Queued { cell: Cell::new(i, j), cost: threshold.clone() }));
        }

        previous = Some(threshold);
    }

    debug_assert_eq!(queue.len(), costs.nr_rows() * costs.nr_columns());
    queue
}

/// The smallest cost strictly larger than `previous`, or the smallest cost overall.
fn smallest_above<F: OrderedRing>(costs: &Grid<F>, previous: Option<&F>) -> Option<F> {
    costs.iter()
        .map(|(_, cost)| cost)
        .filter(|&cost| previous.is_none_or(|previous| cost > previous))
        .fold(None, |smallest: Option<&F>, cost| match smallest {
            Some(smallest) if smallest <= cost => Some(smallest),
            _ => Some(cost),
        })
        .cloned()
}

fn by_descending_demand<F: OrderedRing>(demand: &[F], left: usize, right: usize) -> Ordering {
    demand[right].partial_cmp(&demand[left]).unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod test {
    use std::collections::HashSet;

    use crate::algorithm::stepping_stone::queue::{build, Queued};
    use crate::data::grid::{Cell, Grid};

    fn cells<F>(queue: &[Queued<F>]) -> Vec<(usize, usize)> {
        queue.iter().map(|queued| (queued.cell.row, queued.cell.column)).collect()
    }

    #[test]
    fn ascending_cost() {
        let costs = Grid::from_rows(vec![
            vec![4, 6, 8],
            vec![5, 8, 7],
            vec![6, 9, 10],
        ], 3);
        let queue = build(&costs, &[10, 25, 40]);

        assert_eq!(cells(&queue), vec![
            (0, 0), (1, 0), (0, 1), (2, 0), (1, 2), (0, 2), (1, 1), (2, 1), (2, 2),
        ]);
        assert_eq!(
            queue.iter().map(|queued| queued.cost).collect::<Vec<_>>(),
            vec![4, 5, 6, 6, 7, 8, 8, 9, 10],
        );
    }

    /// Ties within a row are resolved by demand, not by column order; this is intentional policy.
    #[test]
    fn row_ties_prefer_larger_demand() {
        let costs = Grid::from_rows(vec![vec![3, 3, 1]], 3);
        let queue = build(&costs, &[10, 20, 5]);
        assert_eq!(cells(&queue), vec![(0, 2), (0, 1), (0, 0)]);

        // Equal demand keeps the column order
        let costs = Grid::from_rows(vec![vec![2, 2, 2]], 3);
        let queue = build(&costs, &[7, 9, 7]);
        assert_eq!(cells(&queue), vec![(0, 1), (0, 0), (0, 2)]);

        let queue = build(&costs, &[4, 5, 5]);
        assert_eq!(cells(&queue), vec![(0, 1), (0, 2), (0, 0)]);
    }

    /// Equal values in different rows are grouped in one pass, keeping row order.
    #[test]
    fn ties_across_rows_are_grouped() {
        let costs = Grid::from_rows(vec![
            vec![1, 9],
            vec![5, 5],
            vec![9, 1],
        ], 2);
        let queue = build(&costs, &[3, 4]);
        assert_eq!(cells(&queue), vec![(0, 0), (2, 1), (1, 1), (1, 0), (0, 1), (2, 0)]);
    }

    #[test]
    fn complete_and_deterministic() {
        let costs = Grid::from_rows(vec![
            vec![3, 1, 4, 1],
            vec![5, 9, 2, 6],
            vec![5, 3, 5, 8],
        ], 4);
        let demand = [2, 7, 1, 8];

        let first = build(&costs, &demand);
        assert_eq!(first.len(), 12);
        assert_eq!(first.iter().map(|queued| queued.cell).collect::<HashSet<Cell>>().len(), 12);
        assert!(first.windows(2).all(|pair| pair[0].cost <= pair[1].cost));
        assert_eq!(build(&costs, &demand), first);
    }

    #[test]
    fn fractional_costs() {
        let costs = Grid::from_rows(vec![vec![0.5, -1.5], vec![0.5, 2.0]], 2);
        let queue = build(&costs, &[1.0, 1.0]);
        assert_eq!(cells(&queue), vec![(0, 1), (0, 0), (1, 0), (1, 1)]);
    }
}

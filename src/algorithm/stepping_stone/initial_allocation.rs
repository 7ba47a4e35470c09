//! # Least cost initial allocation
//!
//! A basic feasible allocation is created by greedily shipping as much as possible through the
//! cheapest cells first. The result is feasible, but rarely optimal.
use crate::algorithm::stepping_stone::queue::Queued;
use crate::data::allocation::Allocation;
use crate::data::number_types::{OrderedRing, min};

/// Allocate along the queue.
///
/// Each cell receives the minimum of the supply left at its source and the demand left at its
/// purchaser. Cells visited after their row or column is exhausted stay at zero.
///
/// # Arguments
///
/// * `queue`: Visitation order, containing every cell.
/// * `supply`: Capacity per source. Not modified; a working copy is used.
/// * `demand`: Requirement per purchaser. Not modified; a working copy is used.
///
/// # Return value
///
/// An allocation which, for balanced input, ships all supply and satisfies all demand.
pub fn least_cost<F>(queue: &[Queued<F>], supply: &[F], demand: &[F]) -> Allocation<F>
where
    F: OrderedRing,
{
    let mut remaining_supply = supply.to_vec();
    let mut remaining_demand = demand.to_vec();
    let mut allocation = Allocation::zeros(supply.len(), demand.len());

    for Queued { cell, .. } in queue {
        let (i, j) = (cell.row, cell.column);
        let quantity = min(remaining_supply[i].clone(), remaining_demand[j].clone());
        if quantity.is_zero() {
            continue;
        }

        remaining_supply[i] = remaining_supply[i].clone() - quantity.clone();
        remaining_demand[j] = remaining_demand[j].clone() - quantity.clone();
        allocation.set(*cell, quantity);
    }

    debug_assert!(remaining_supply.iter().chain(&remaining_demand).all(|left| left.is_zero()));
    allocation
}

#[cfg(test)]
mod test {
    use crate::algorithm::stepping_stone::initial_allocation::least_cost;
    use crate::algorithm::stepping_stone::queue::build;
    use crate::data::allocation::Allocation;
    use crate::data::grid::Grid;

    #[test]
    fn follows_queue() {
        let costs = Grid::from_rows(vec![
            vec![4, 6, 8],
            vec![5, 8, 7],
            vec![6, 9, 10],
        ], 3);
        let supply = [20, 30, 25];
        let demand = [10, 25, 40];
        let queue = build(&costs, &demand);

        let allocation = least_cost(&queue, &supply, &demand);
        assert_eq!(allocation, Allocation::from_rows(vec![
            vec![10, 10, 0],
            vec![0, 0, 30],
            vec![0, 15, 10],
        ], 3));
        assert!(allocation.is_feasible_for(&supply, &demand));
        assert_eq!(allocation.total_cost(&costs), 545);
        // Inputs are left untouched
        assert_eq!(supply, [20, 30, 25]);
    }

    #[test]
    fn single_source() {
        let costs = Grid::from_rows(vec![vec![2, 1]], 2);
        let queue = build(&costs, &[3, 4]);
        let allocation = least_cost(&queue, &[7], &[3, 4]);
        assert_eq!(allocation, Allocation::from_rows(vec![vec![3, 4]], 2));
    }

    #[test]
    fn exhausted_rows_stay_non_basic() {
        let costs = Grid::from_rows(vec![
            vec![1, 2],
            vec![3, 1],
        ], 2);
        let queue = build(&costs, &[10, 10]);
        let allocation = least_cost(&queue, &[10, 10], &[10, 10]);
        assert_eq!(allocation.nr_basic(), 2);
        assert!(allocation.is_feasible_for(&[10, 10], &[10, 10]));
    }
}

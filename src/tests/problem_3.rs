//! Ties in the cost grid: within a row and within the limiting quantity of a loop.
use crate::algorithm::{SolveError, Solver};
use crate::data::allocation::Allocation;
use crate::data::grid::Cell;

/// Equally cheap cells in a row are visited in order of descending demand.
///
/// Deliberate policy: the purchaser with the larger requirement is served first, even though the
/// resulting initial allocation is improved upon later.
#[test]
fn row_tie_prefers_larger_demand() {
    let mut solver = Solver::with_costs(vec![15, 10], vec![5, 20], vec![
        vec![1, 1],
        vec![3, 2],
    ]);
    assert_eq!(solver.solve(), Ok(()));

    let queue = solver.queue().iter().map(|queued| queued.cell).collect::<Vec<_>>();
    assert_eq!(queue, vec![Cell::new(0, 1), Cell::new(0, 0), Cell::new(1, 1), Cell::new(1, 0)]);

    let trace = solver.trace();
    assert_eq!(trace.len(), 2);
    assert_eq!(trace[0].allocation, Allocation::from_rows(vec![vec![0, 15], vec![5, 5]], 2));
    assert_eq!(trace[0].z_min, 40);
    assert_eq!(trace[0].theta(), Some(&5));
    assert_eq!(trace[1].allocation, Allocation::from_rows(vec![vec![5, 10], vec![0, 10]], 2));
    assert_eq!(solver.result(), Some(&35));
}

fn degenerate_solver() -> Solver<i32> {
    Solver::with_costs(vec![20, 30, 25], vec![10, 25, 40], vec![
        vec![8, 6, 10],
        vec![9, 12, 13],
        vec![14, 9, 16],
    ])
}

/// Shifting along the best loop empties two cells at once, after which a loop is missing.
#[test]
fn degenerate_after_improvement() {
    let mut solver = degenerate_solver();
    assert_eq!(solver.solve(), Err(SolveError::Degenerate { round: 1, cell: Cell::new(0, 1) }));
    assert_eq!(solver.result(), None);
    assert_eq!(solver.allocation(), None);

    // The completed round is kept
    let trace = solver.trace();
    assert_eq!(trace.len(), 1);
    assert_eq!(trace[0].allocation, Allocation::from_rows(vec![
        vec![0, 20, 0],
        vec![10, 0, 20],
        vec![0, 5, 20],
    ], 3));
    assert_eq!(trace[0].z_min, 835);
    assert_eq!(trace[0].loops.iter().map(|record| record.value).collect::<Vec<_>>(), vec![-1, -3, 6, 2]);

    let improvement = trace[0].improvement.as_ref().unwrap();
    assert_eq!(improvement.loop_index, 1);
    // Both subtract positions hold 20, the first one is limiting
    assert_eq!(improvement.theta_index, 1);
    assert_eq!(improvement.reallocated, Allocation::from_rows(vec![
        vec![0, 0, 20],
        vec![10, 0, 20],
        vec![0, 25, 0],
    ], 3));
    assert_eq!(improvement.reallocated.nr_basic(), 4);
}

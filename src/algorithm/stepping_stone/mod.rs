//! # The stepping-stone method
//!
//! Starting from a feasible allocation, every round finds the loop of each non-basic cell and its
//! value. If one of these loops lowers the total cost, as much quantity as possible is shifted along
//! it, which results in the allocation of the next round. Otherwise, the allocation is optimal.
//!
//! Every round is recorded, such that the process can be inspected afterwards.
use crate::algorithm::stepping_stone::cycle::LoopRecord;
use crate::algorithm::stepping_stone::strategy::LoopSelection;
use crate::data::allocation::Allocation;
use crate::data::grid::{Cell, Grid};
use crate::data::number_types::OrderedRing;

pub mod cycle;
pub mod initial_allocation;
pub mod queue;
pub mod search;
pub mod strategy;

/// Data of a single round of the stepping-stone method.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Round<F> {
    /// Allocation at the start of this round.
    pub allocation: Allocation<F>,
    /// The loop of every non-basic cell of `allocation`, row by row.
    pub loops: Vec<LoopRecord<F>>,
    /// Total cost of `allocation`.
    pub z_min: F,
    /// How the allocation was improved, `None` if it is optimal.
    pub improvement: Option<Improvement<F>>,
}

/// Reallocation along the selected loop of a round.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Improvement<F> {
    /// Index of the selected loop in `Round::loops`.
    pub loop_index: usize,
    /// Position within the selected loop of the cell that limits the quantity shifted.
    pub theta_index: usize,
    /// Quantity shifted along the loop.
    pub theta: F,
    /// The allocation after shifting, input of the next round.
    pub reallocated: Allocation<F>,
}

impl<F> Round<F> {
    /// Whether the allocation of this round was improved upon.
    pub fn is_reloaded(&self) -> bool {
        self.improvement.is_some()
    }

    /// The loop quantity was shifted along, if any.
    pub fn best_loop(&self) -> Option<&LoopRecord<F>> {
        self.improvement.as_ref().map(|improvement| &self.loops[improvement.loop_index])
    }

    /// Quantity shifted along the best loop, if any.
    pub fn theta(&self) -> Option<&F> {
        self.improvement.as_ref().map(|improvement| &improvement.theta)
    }
}

/// Improve an allocation until no loop lowers its total cost anymore.
///
/// # Arguments
///
/// * `costs`: Cost per unit of every cell.
/// * `initial`: Feasible allocation to start from.
/// * `rule`: Decides which loop to improve along each round.
/// * `trace`: Every completed round is appended to this, also when the process fails.
///
/// # Return value
///
/// If a non-basic cell without a loop is encountered, the index of the round in which that
/// happened together with that cell.
pub fn optimize<F, S>(
    costs: &Grid<F>,
    initial: Allocation<F>,
    rule: &mut S,
    trace: &mut Vec<Round<F>>,
) -> Result<(), (usize, Cell)>
where
    F: OrderedRing,
    S: LoopSelection,
{
    let mut allocation = initial;
    loop {
        debug_assert!(allocation.is_nonnegative());

        let round_index = trace.len();
        let loops = search::find_all(&allocation, costs).map_err(|cell| (round_index, cell))?;
        let z_min = allocation.total_cost(costs);

        let improvement = rule.select(&loops).map(|loop_index| {
            let cycle = &loops[loop_index].cycle;
            let (theta_index, theta) = cycle.theta(&allocation);
            let reallocated = cycle.reallocate(&allocation, &theta);

            Improvement { loop_index, theta_index, theta, reallocated }
        });

        match &improvement {
            Some(Improvement { loop_index, theta, .. }) => log::debug!(
                "Round {}: total cost {}, {} loops, shifting {} along the loop of {} (value {})",
                round_index, z_min, loops.len(), theta, loops[*loop_index].base(), loops[*loop_index].value,
            ),
            None => log::debug!(
                "Round {}: total cost {}, {} loops, none improving",
                round_index, z_min, loops.len(),
            ),
        }

        let next = improvement.as_ref().map(|improvement| improvement.reallocated.clone());
        trace.push(Round { allocation, loops, z_min, improvement });

        match next {
            Some(reallocated) => allocation = reallocated,
            None => break Ok(()),
        }
    }
}

/// Minimal total cost derived from a completed trace.
///
/// With a single round, this is the cost of that round. Otherwise, the improvement made in the
/// second to last round is applied to the cost of that round: its best loop value times the
/// quantity at the limiting position of that loop.
///
/// # Return value
///
/// `None` if the trace is empty or its second to last round didn't improve.
pub fn minimal_cost<F: OrderedRing>(trace: &[Round<F>]) -> Option<F> {
    match trace {
        [] => None,
        [only] => Some(only.z_min.clone()),
        [.., last_but_one, _] => {
            let improvement = last_but_one.improvement.as_ref()?;
            let best = &last_but_one.loops[improvement.loop_index];
            let limiting = best.cycle.cells()[improvement.theta_index];
            let quantity = last_but_one.allocation[limiting].clone();

            Some(last_but_one.z_min.clone() + best.value.clone() * quantity)
        },
    }
}

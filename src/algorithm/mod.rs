//! # Algorithms
//!
//! The `Solver` runs the full pipeline on a transportation problem: ordering the cells by cost,
//! creating a greedy initial allocation and improving it with the stepping-stone method.
use crate::algorithm::stepping_stone::{Round, minimal_cost, optimize};
use crate::algorithm::stepping_stone::initial_allocation::least_cost;
use crate::algorithm::stepping_stone::queue::{self, Queued};
use crate::algorithm::stepping_stone::strategy::{LoopSelection, SteepestDescent};
use crate::data::allocation::Allocation;
use crate::data::number_types::OrderedRing;
use crate::data::transportation::Transportation;

pub use crate::algorithm::error::SolveError;

pub mod error;
pub mod stepping_stone;

/// Solves a single balanced transportation problem.
///
/// Costs are set cell by cell after construction, after which `solve` can be called. The visitation
/// queue, every intermediate allocation and the minimal total cost are kept for inspection.
///
/// The loop selection rule `S` determines which improving loop is used in each round.
#[derive(Debug, Clone)]
pub struct Solver<F, S = SteepestDescent> {
    problem: Transportation<F>,
    rule: S,

    queue: Vec<Queued<F>>,
    trace: Vec<Round<F>>,
    /// `None` until `solve` was called.
    outcome: Option<Result<F, SolveError>>,
}

impl<F> Solver<F, SteepestDescent>
where
    F: OrderedRing,
{
    /// Create a new instance with all costs unset.
    ///
    /// # Arguments
    ///
    /// * `supply`: Capacity per source.
    /// * `demand`: Requirement per purchaser. The total should equal the total supply.
    pub fn new(supply: Vec<F>, demand: Vec<F>) -> Self {
        Self::with_rule(Transportation::new(supply, demand), SteepestDescent)
    }

    /// Create a new instance with all costs given.
    ///
    /// # Arguments
    ///
    /// * `supply`: Capacity per source.
    /// * `demand`: Requirement per purchaser. The total should equal the total supply.
    /// * `costs`: One row of costs per source, each containing a cost per purchaser.
    pub fn with_costs(supply: Vec<F>, demand: Vec<F>, costs: Vec<Vec<F>>) -> Self {
        Self::with_rule(Transportation::with_costs(supply, demand, costs), SteepestDescent)
    }
}

impl<F, S> Solver<F, S>
where
    F: OrderedRing,
    S: LoopSelection,
{
    /// Create a new instance using a specific loop selection rule.
    pub fn with_rule(problem: Transportation<F>, rule: S) -> Self {
        Self {
            problem,
            rule,

            queue: Vec::new(),
            trace: Vec::new(),
            outcome: None,
        }
    }

    /// Cost of shipping one unit from source `i` to purchaser `j`, if it was set.
    pub fn cost(&self, i: usize, j: usize) -> Option<&F> {
        self.problem.cost(i, j)
    }

    /// Set the cost of shipping one unit from source `i` to purchaser `j`.
    ///
    /// Costs should be set before solving; changes made afterwards don't affect the results.
    pub fn set_cost(&mut self, i: usize, j: usize, value: F) {
        self.problem.set_cost(i, j, value);
    }

    /// Capacity of every source.
    pub fn supply(&self) -> &[F] {
        self.problem.supply()
    }

    /// Requirement of every purchaser.
    pub fn demand(&self) -> &[F] {
        self.problem.demand()
    }

    /// The problem being solved.
    pub fn problem(&self) -> &Transportation<F> {
        &self.problem
    }

    /// Compute an allocation of minimal total cost.
    ///
    /// Only the first call does any work, later calls return the same outcome.
    ///
    /// # Return value
    ///
    /// Whether an optimal allocation was found.
    pub fn solve(&mut self) -> Result<(), SolveError> {
        if self.outcome.is_none() {
            let outcome = self.run();
            match &outcome {
                Ok(result) => log::info!(
                    "Optimal allocation found after {} rounds, total cost {}", self.trace.len(), result,
                ),
                Err(error) => log::info!("Solving failed: {}", error),
            }
            self.outcome = Some(outcome);
        }

        match &self.outcome {
            Some(Err(error)) => Err(error.clone()),
            _ => Ok(()),
        }
    }

    fn run(&mut self) -> Result<F, SolveError> {
        let costs = self.problem.complete_costs()
            .map_err(|cell| SolveError::UnsetCost { cell })?;
        if !self.problem.is_balanced() {
            return Err(SolveError::Unbalanced);
        }

        log::info!(
            "Solving transportation problem with {} sources and {} purchasers",
            self.problem.nr_sources(), self.problem.nr_purchasers(),
        );

        self.queue = queue::build(&costs, self.problem.demand());
        let initial = least_cost(&self.queue, self.problem.supply(), self.problem.demand());
        debug_assert!(initial.is_feasible_for(self.problem.supply(), self.problem.demand()));

        optimize(&costs, initial, &mut self.rule, &mut self.trace)
            .map_err(|(round, cell)| SolveError::Degenerate { round, cell })?;

        // At least one round was recorded, and all but the last one improved
        let terminal = self.trace.last().map_or_else(F::zero, |round| round.z_min.clone());
        let result = minimal_cost(&self.trace).unwrap_or_else(|| terminal.clone());
        if result != terminal {
            log::warn!("Derived minimal cost {} differs from final total cost {}", result, terminal);
        }

        Ok(result)
    }

    /// The order in which cells were visited to create the initial allocation.
    ///
    /// Empty before solving.
    pub fn queue(&self) -> &[Queued<F>] {
        &self.queue
    }

    /// The minimal total cost, available after a successful solve.
    pub fn result(&self) -> Option<&F> {
        match &self.outcome {
            Some(Ok(result)) => Some(result),
            _ => None,
        }
    }

    /// An allocation of minimal total cost, available after a successful solve.
    pub fn allocation(&self) -> Option<&Allocation<F>> {
        self.result()?;

        self.trace.last().map(|round| &round.allocation)
    }

    /// Every round of the stepping-stone method, in order.
    ///
    /// After a failed solve, this contains the rounds completed before the failure.
    pub fn trace(&self) -> &[Round<F>] {
        &self.trace
    }
}

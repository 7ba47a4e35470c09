//! # Error reporting for solving
//!
//! A solve either completes with an optimal allocation, or fails with one of the errors below.
//! Failures are final for a solver instance; a new instance with corrected input is needed.
use std::error::Error;
use std::fmt::{self, Display};

use crate::data::grid::Cell;

/// Describes why a transportation problem could not be solved.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum SolveError {
    /// The cost of shipping through this cell was never set.
    UnsetCost {
        #[allow(missing_docs)]
        cell: Cell,
    },
    /// The total supply differs from the total demand.
    ///
    /// Only balanced transportation problems are supported.
    Unbalanced,
    /// A non-basic cell has no loop through basic cells.
    ///
    /// This happens when an allocation has too few basic cells, for example when shifting along a
    /// loop empties two cells at once. Rounds completed before the one in which this happened are
    /// still available.
    Degenerate {
        /// Index of the round in which the loop search failed.
        round: usize,
        /// Non-basic cell for which no loop exists.
        cell: Cell,
    },
}

impl Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SolveError::UnsetCost { cell } => write!(f, "Cost of cell {} was not set", cell),
            SolveError::Unbalanced => write!(f, "Total supply differs from total demand"),
            SolveError::Degenerate { round, cell } => write!(
                f, "Degenerate allocation in round {}: no loop for cell {}", round, cell,
            ),
        }
    }
}

impl Error for SolveError {
}

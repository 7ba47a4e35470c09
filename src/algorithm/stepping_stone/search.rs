//! # Loop search
//!
//! For every non-basic cell, a loop through basic cells is searched depth first. From the base
//! cell, the search moves vertically or horizontally to a basic cell, and from there on alternates
//! between the two directions. The search succeeds as soon as it reaches, through a vertical move,
//! a cell on the row of the base cell (or, through a horizontal move, a cell on its column).
//!
//! Candidates are tried upwards before downwards and leftwards before rightwards, in both cases
//! starting next to the current cell. The search uses an explicit stack of frames, so its depth is
//! not limited by the call stack.
use std::vec::IntoIter;

use crate::algorithm::stepping_stone::cycle::{Loop, LoopRecord};
use crate::data::allocation::Allocation;
use crate::data::grid::{Cell, Grid};
use crate::data::number_types::OrderedRing;

/// Direction of the next move from a cell.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Direction {
    Vertical,
    Horizontal,
}

impl Direction {
    fn perpendicular(self) -> Self {
        match self {
            Direction::Vertical => Direction::Horizontal,
            Direction::Horizontal => Direction::Vertical,
        }
    }
}

/// Cells on the current search path, in order, with constant time membership tests.
///
/// Cells are identified by their index in the allocation grid.
#[derive(Debug, Clone)]
pub struct VisitedStack {
    cells: Vec<Cell>,
    visited: Vec<bool>,
    nr_columns: usize,
}

impl VisitedStack {
    /// Create an empty stack for a grid of the given dimensions.
    pub fn new(nr_rows: usize, nr_columns: usize) -> Self {
        Self {
            cells: Vec::with_capacity(nr_rows + nr_columns),
            visited: vec![false; nr_rows * nr_columns],
            nr_columns,
        }
    }

    fn id(&self, cell: Cell) -> usize {
        cell.row * self.nr_columns + cell.column
    }

    /// Add a cell to the top of the stack.
    pub fn push(&mut self, cell: Cell) {
        debug_assert!(!self.contains(cell));

        let id = self.id(cell);
        self.visited[id] = true;
        self.cells.push(cell);
    }

    /// Remove the most recently added cell.
    pub fn pop(&mut self) -> Option<Cell> {
        let cell = self.cells.pop()?;
        let id = self.id(cell);
        self.visited[id] = false;

        Some(cell)
    }

    /// Whether a cell is on the stack.
    pub fn contains(&self, cell: Cell) -> bool {
        self.visited[self.id(cell)]
    }

    /// Number of cells on the stack.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the stack holds no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The cells on the stack, from bottom to top.
    pub fn into_cells(self) -> Vec<Cell> {
        self.cells
    }
}

/// A cell on the search path, and the moves from it that were not yet tried.
struct Frame {
    candidates: IntoIter<(Cell, Direction)>,
}

/// Search the loop of a non-basic cell.
///
/// # Arguments
///
/// * `allocation`: Current allocation; its basic cells are the only cells the loop may visit.
/// * `base`: Non-basic cell to start and end the loop at.
///
/// # Return value
///
/// The first loop found in search order, or `None` if there is no loop through `base`, which
/// happens for degenerate allocations.
pub fn find_loop<F>(allocation: &Allocation<F>, base: Cell) -> Option<Loop>
where
    F: OrderedRing,
{
    debug_assert!(!allocation.is_basic(base));

    let mut path = VisitedStack::new(allocation.nr_rows(), allocation.nr_columns());
    path.push(base);
    let initial = moves(allocation, base, Direction::Vertical)
        .into_iter()
        .chain(moves(allocation, base, Direction::Horizontal))
        .collect::<Vec<_>>();
    let mut frames = vec![Frame { candidates: initial.into_iter() }];

    while let Some(frame) = frames.last_mut() {
        match frame.candidates.find(|&(cell, _)| !path.contains(cell)) {
            Some((cell, direction)) => {
                path.push(cell);
                if closes(base, cell, direction) {
                    return Some(Loop::new(path.into_cells()));
                }
                frames.push(Frame { candidates: moves(allocation, cell, direction).into_iter() });
            },
            None => {
                frames.pop();
                path.pop();
            },
        }
    }

    debug_assert!(path.is_empty());
    None
}

/// Whether the path can be closed back onto the base cell from `cell`.
///
/// # Arguments
///
/// * `direction`: The direction in which the search would continue from `cell`. The closing move
///   back to the base cell is in this direction.
fn closes(base: Cell, cell: Cell, direction: Direction) -> bool {
    cell != base && match direction {
        Direction::Vertical => cell.column == base.column,
        Direction::Horizontal => cell.row == base.row,
    }
}

/// Basic cells reachable with a single move, in the order in which they should be tried.
///
/// Each candidate is paired with the direction in which the search continues from it.
fn moves<F: OrderedRing>(
    allocation: &Allocation<F>,
    from: Cell,
    direction: Direction,
) -> Vec<(Cell, Direction)> {
    let next_direction = direction.perpendicular();
    let targets: Vec<Cell> = match direction {
        Direction::Vertical => (0..from.row).rev()
            .chain((from.row + 1)..allocation.nr_rows())
            .map(|row| Cell::new(row, from.column))
            .collect(),
        Direction::Horizontal => (0..from.column).rev()
            .chain((from.column + 1)..allocation.nr_columns())
            .map(|column| Cell::new(from.row, column))
            .collect(),
    };

    targets.into_iter()
        .filter(|&cell| allocation.is_basic(cell))
        .map(|cell| (cell, next_direction))
        .collect()
}

/// Find and evaluate the loop of every non-basic cell.
///
/// # Return value
///
/// A loop per non-basic cell in row-major order, or the first non-basic cell without a loop.
pub fn find_all<F>(allocation: &Allocation<F>, costs: &Grid<F>) -> Result<Vec<LoopRecord<F>>, Cell>
where
    F: OrderedRing,
{
    allocation.non_basic_cells()
        .map(|base| match find_loop(allocation, base) {
            Some(cycle) => {
                let record = LoopRecord::new(cycle, costs);
                log::trace!("Loop of {} has value {}: {:?}", base, record.value, record.cycle.cells());
                Ok(record)
            },
            None => {
                log::debug!("No loop exists for non-basic cell {}", base);
                Err(base)
            },
        })
        .collect()
}

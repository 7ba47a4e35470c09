//! # Dense grids
//!
//! Both the cost of shipping and the quantity shipped are stored per (source, purchaser) pair.
//! A `Grid` stores such values row-major in a single `Vec`, one row per source and one column per
//! purchaser. Dimensions are fixed at creation.
use std::fmt::{self, Display, Formatter};
use std::ops::{Index, IndexMut};

use itertools::iproduct;

/// Coordinate of a (source, purchaser) combination.
///
/// `row` indexes the sources, `column` the purchasers.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Cell {
    #[allow(missing_docs)]
    pub row: usize,
    #[allow(missing_docs)]
    pub column: usize,
}

impl Cell {
    /// Create a new coordinate.
    #[must_use]
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Whether two cells lie on the same row or on the same column.
    ///
    /// A cell is not considered aligned with itself.
    #[must_use]
    pub fn is_aligned_with(&self, other: &Self) -> bool {
        self != other && (self.row == other.row || self.column == other.column)
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, column): (usize, usize)) -> Self {
        Self::new(row, column)
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// Uses a `Vec` as underlying data structure, row-major.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Grid<T> {
    data: Vec<T>,
    nr_rows: usize,
    nr_columns: usize,
}

impl<T> Grid<T> {
    /// Create a grid with all values being equal to a given value.
    ///
    /// # Arguments
    ///
    /// * `value`: The value which all elements of this grid are equal to.
    /// * `nr_rows`: Number of sources.
    /// * `nr_columns`: Number of purchasers.
    pub fn constant(value: T, nr_rows: usize, nr_columns: usize) -> Self
    where
        T: Clone,
    {
        Self {
            data: vec![value; nr_rows * nr_columns],
            nr_rows,
            nr_columns,
        }
    }

    /// Create a grid from a row of values per source.
    ///
    /// # Arguments
    ///
    /// * `rows`: Values, all rows should have length `nr_columns`.
    /// * `nr_columns`: Number of purchasers; needed to describe grids without rows.
    pub fn from_rows(rows: Vec<Vec<T>>, nr_columns: usize) -> Self {
        debug_assert!(rows.iter().all(|row| row.len() == nr_columns));

        let nr_rows = rows.len();
        Self {
            data: rows.into_iter().flatten().collect(),
            nr_rows,
            nr_columns,
        }
    }

    /// Number of rows (sources).
    pub fn nr_rows(&self) -> usize {
        self.nr_rows
    }

    /// Number of columns (purchasers).
    pub fn nr_columns(&self) -> usize {
        self.nr_columns
    }

    /// Position of a cell in the underlying storage.
    ///
    /// Every cell inside the grid has a unique index in `0..nr_rows * nr_columns`, which makes it
    /// usable as an identifier.
    pub fn index_of(&self, cell: Cell) -> usize {
        debug_assert!(cell.row < self.nr_rows);
        debug_assert!(cell.column < self.nr_columns);

        cell.row * self.nr_columns + cell.column
    }

    /// All coordinates of this grid, row by row.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + use<T> {
        iproduct!(0..self.nr_rows, 0..self.nr_columns).map(Cell::from)
    }

    /// Values of row `i`.
    pub fn row(&self, i: usize) -> &[T] {
        debug_assert!(i < self.nr_rows);

        &self.data[i * self.nr_columns..(i + 1) * self.nr_columns]
    }

    /// Values of column `j`, top to bottom.
    pub fn column(&self, j: usize) -> impl Iterator<Item = &T> {
        debug_assert!(j < self.nr_columns);

        self.data.iter().skip(j).step_by(self.nr_columns.max(1)).take(self.nr_rows)
    }

    /// Iterate over all rows.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> {
        (0..self.nr_rows).map(move |i| self.row(i))
    }

    /// Iterate over all values together with their coordinate, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, &T)> {
        self.cells().zip(self.data.iter())
    }

    /// Apply a function to every value, keeping the shape.
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid {
            data: self.data.iter().map(f).collect(),
            nr_rows: self.nr_rows,
            nr_columns: self.nr_columns,
        }
    }

    /// Apply a fallible function to every value, row by row, keeping the shape.
    ///
    /// # Return value
    ///
    /// The first error encountered, if any.
    pub fn try_map<U, E>(&self, mut f: impl FnMut(Cell, &T) -> Result<U, E>) -> Result<Grid<U>, E> {
        let data = self.iter()
            .map(|(cell, value)| f(cell, value))
            .collect::<Result<_, _>>()?;

        Ok(Grid {
            data,
            nr_rows: self.nr_rows,
            nr_columns: self.nr_columns,
        })
    }
}

impl<T> Index<Cell> for Grid<T> {
    type Output = T;

    fn index(&self, cell: Cell) -> &Self::Output {
        &self.data[self.index_of(cell)]
    }
}

impl<T> IndexMut<Cell> for Grid<T> {
    fn index_mut(&mut self, cell: Cell) -> &mut Self::Output {
        let index = self.index_of(cell);
        &mut self.data[index]
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        &self[Cell::new(i, j)]
    }
}

impl<T> IndexMut<(usize, usize)> for Grid<T> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut Self::Output {
        &mut self[Cell::new(i, j)]
    }
}

impl<T: Display> Display for Grid<T> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let width = 10;
        let counter_width = 5;
        // Column counter
        write!(f, "{0:width$}", "", width = counter_width)?;
        for column in 0..self.nr_columns {
            write!(f, "{0:>width$}", column, width = width)?;
        }
        writeln!(f)?;

        // Row counter and row data
        for (i, row) in self.iter_rows().enumerate() {
            write!(f, "{0: <width$}", i, width = counter_width)?;
            for value in row {
                write!(f, "{0:>width$}", value.to_string(), width = width)?;
            }
            writeln!(f)?;
        }
        write!(f, "")
    }
}

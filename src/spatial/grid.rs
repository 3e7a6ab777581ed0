//! Bounded two-dimensional cell storage
//!
//! Cells live in a single `Array2` of shape `(width, height)`, so axis 0 is
//! `x` and axis 1 is `y`. The array's logical order (outer `x`, inner `y`)
//! is the order every whole-grid enumeration reports cells in.
//!
//! Coordinates are accepted as any primitive integer. A coordinate that is
//! negative, does not fit `usize`, or lies past the edge never reaches the
//! storage: reads return `None` or an empty iterator and writes do nothing.

use ndarray::{Array2, ArrayView2};
use num_traits::PrimInt;

use crate::configuration::DEFAULT_DIMENSION;
use crate::error::{Result, invalid_dimension};
use crate::spatial::cell::Cell;

/// Rectangular grid of values with a fixed default
///
/// Every cell holds either the default value or a value written through
/// `set_cell` or `populate`. The default is fixed at construction; the
/// dimensions change only through `resize`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    cells: Array2<T>,
    default_value: T,
}

/// Validate a requested dimension
fn checked_dimension<C: PrimInt>(axis: &'static str, value: C) -> Result<usize> {
    value.to_usize().ok_or_else(|| {
        invalid_dimension(axis, &describe(value), &"must be a non-negative integer")
    })
}

fn describe<C: PrimInt>(value: C) -> String {
    value
        .to_i128()
        .map_or_else(|| "out of range".to_string(), |v| v.to_string())
}

impl<T: Clone> Grid<T> {
    /// Create a grid with every cell set to `default_value`
    ///
    /// A negative dimension, or one too large for `usize`, falls back to
    /// `DEFAULT_DIMENSION` for that axis rather than failing.
    pub fn new<C: PrimInt>(width: C, height: C, default_value: T) -> Self {
        let width = checked_dimension("width", width).unwrap_or(DEFAULT_DIMENSION);
        let height = checked_dimension("height", height).unwrap_or(DEFAULT_DIMENSION);

        Self {
            cells: Array2::from_elem((width, height), default_value.clone()),
            default_value,
        }
    }

    /// Create a grid of the default size
    pub fn with_default(default_value: T) -> Self {
        Self::new(DEFAULT_DIMENSION, DEFAULT_DIMENSION, default_value)
    }

    /// Restore the default value in a cell
    ///
    /// Returns whether the cell exists.
    pub fn reset_cell<C: PrimInt>(&mut self, x: C, y: C) -> bool {
        let default_value = self.default_value.clone();
        self.set_cell(x, y, default_value)
    }

    /// Restore the default value in every cell
    pub fn reset_all(&mut self) {
        self.cells.fill(self.default_value.clone());
    }

    /// Write many cells at once
    ///
    /// Each entry is `(x, y, value)`; a `None` value writes the default.
    /// Entries with invalid coordinates are skipped.
    pub fn populate<C, I>(&mut self, entries: I)
    where
        C: PrimInt,
        I: IntoIterator<Item = (C, C, Option<T>)>,
    {
        for (x, y, value) in entries {
            if let Some(index) = self.locate(x, y) {
                let value = value.unwrap_or_else(|| self.default_value.clone());
                if let Some(cell) = self.cells.get_mut([index.0, index.1]) {
                    *cell = value;
                }
            }
        }
    }

    /// Owned snapshot of every cell as `(x, y, value)` in row-major order
    pub fn to_contents(&self) -> Vec<(usize, usize, T)> {
        self.contents().map(|cell| cell.to_triple()).collect()
    }

    /// Change the grid dimensions, keeping overlapping contents
    ///
    /// Cells beyond the new bounds are dropped and cells that did not exist
    /// before hold the default value. The grid is left untouched on error.
    ///
    /// # Errors
    ///
    /// Returns `GridError::InvalidDimension` if either dimension is negative
    /// or does not fit `usize`
    pub fn resize<C: PrimInt>(&mut self, new_width: C, new_height: C) -> Result<()> {
        let width = checked_dimension("width", new_width)?;
        let height = checked_dimension("height", new_height)?;

        let previous = self.to_contents();
        self.cells = Array2::from_elem((width, height), self.default_value.clone());
        self.populate(
            previous
                .into_iter()
                .map(|(x, y, value)| (x, y, Some(value))),
        );

        Ok(())
    }
}

impl<T> Grid<T> {
    /// Number of columns along the first axis
    pub fn width(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of rows along the second axis
    pub fn height(&self) -> usize {
        self.cells.ncols()
    }

    /// Grid dimensions as `(width, height)`
    pub fn dimensions(&self) -> (usize, usize) {
        self.cells.dim()
    }

    /// Value given to unset and reset cells
    pub const fn default_value(&self) -> &T {
        &self.default_value
    }

    /// Read-only view of the underlying storage, indexed `[x, y]`
    pub fn as_array(&self) -> ArrayView2<'_, T> {
        self.cells.view()
    }

    /// Convert a coordinate pair into storage indices if it lies in the grid
    pub(crate) fn locate<C: PrimInt>(&self, x: C, y: C) -> Option<(usize, usize)> {
        let (x, y) = (x.to_usize()?, y.to_usize()?);
        (x < self.width() && y < self.height()).then_some((x, y))
    }

    /// Test whether a coordinate pair lies inside the grid
    pub fn is_valid<C: PrimInt>(&self, x: C, y: C) -> bool {
        self.locate(x, y).is_some()
    }

    /// Value stored at a cell, or `None` if the cell does not exist
    pub fn get_cell<C: PrimInt>(&self, x: C, y: C) -> Option<&T> {
        let (x, y) = self.locate(x, y)?;
        self.cells.get([x, y])
    }

    /// Mutable access to the value stored at a cell
    pub fn get_cell_mut<C: PrimInt>(&mut self, x: C, y: C) -> Option<&mut T> {
        let (x, y) = self.locate(x, y)?;
        self.cells.get_mut([x, y])
    }

    /// Addressed cell record at storage indices
    pub(crate) fn cell_at(&self, x: usize, y: usize) -> Option<Cell<'_, T>> {
        self.cells.get([x, y]).map(|value| Cell { x, y, value })
    }

    /// Values at each requested position, in request order
    ///
    /// Positions outside the grid are skipped, so the output can be shorter
    /// than the input.
    pub fn get_cells<C, I>(&self, positions: I) -> impl Iterator<Item = &T>
    where
        C: PrimInt,
        I: IntoIterator<Item = (C, C)>,
    {
        positions
            .into_iter()
            .filter_map(move |(x, y)| self.get_cell(x, y))
    }

    /// Write a value into a cell
    ///
    /// Returns whether the cell exists; nothing is written otherwise.
    pub fn set_cell<C: PrimInt>(&mut self, x: C, y: C, value: T) -> bool {
        if let Some(cell) = self.get_cell_mut(x, y) {
            *cell = value;
            true
        } else {
            false
        }
    }

    /// Every cell in row-major order (outer `x`, inner `y`)
    pub fn contents(&self) -> impl Iterator<Item = Cell<'_, T>> {
        self.cells
            .indexed_iter()
            .map(|((x, y), value)| Cell { x, y, value })
    }

    /// Values with first coordinate `x`, in increasing `y`
    ///
    /// Empty when `x` is outside the grid.
    pub fn row<C: PrimInt>(&self, x: C) -> impl Iterator<Item = &T> {
        x.to_usize()
            .filter(|&x| x < self.width())
            .map(|x| self.cells.row(x))
            .into_iter()
            .flatten()
    }

    /// Values with second coordinate `y`, in increasing `x`
    ///
    /// Empty when `y` is outside the grid.
    pub fn column<C: PrimInt>(&self, y: C) -> impl Iterator<Item = &T> {
        y.to_usize()
            .filter(|&y| y < self.height())
            .map(|y| self.cells.column(y))
            .into_iter()
            .flatten()
    }
}

impl<T: PartialEq> Grid<T> {
    /// Cells whose value differs from the default, in row-major order
    pub fn non_default_contents(&self) -> impl Iterator<Item = Cell<'_, T>> {
        self.contents()
            .filter(|cell| *cell.value != self.default_value)
    }
}

impl<T: Clone + Default> Default for Grid<T> {
    fn default() -> Self {
        Self::with_default(T::default())
    }
}

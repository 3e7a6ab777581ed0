//! Neighbor scans and directional rays over a grid
//!
//! Both are lazy iterators borrowing the grid: collect them for a sequence
//! or drive them with `for_each` to visit cells one at a time.

use std::iter::FusedIterator;

use num_traits::PrimInt;

use crate::configuration::NEIGHBOR_COUNT;
use crate::spatial::cell::{Cell, Lookup, Neighbor};
use crate::spatial::direction::{Direction, Offset};
use crate::spatial::grid::Grid;

/// Surrounding offsets in scan order: outer `dx`, inner `dy`, center skipped
const NEIGHBOR_OFFSETS: [Offset; NEIGHBOR_COUNT] = [
    Offset::new(-1, -1),
    Offset::new(-1, 0),
    Offset::new(-1, 1),
    Offset::new(0, -1),
    Offset::new(0, 1),
    Offset::new(1, -1),
    Offset::new(1, 0),
    Offset::new(1, 1),
];

impl<T> Grid<T> {
    /// Cell one step from `(x, y)` in `direction`
    ///
    /// The origin itself need not be inside the grid; only the target is
    /// checked. `Lookup::Invalid` is reserved for origins that cannot be
    /// represented as a signed position.
    pub fn get_neighbor<C: PrimInt>(&self, x: C, y: C, direction: Direction) -> Lookup<'_, T> {
        let offset = direction.offset();
        let target = x
            .to_isize()
            .zip(y.to_isize())
            .and_then(|(x, y)| x.checked_add(offset.dx).zip(y.checked_add(offset.dy)));

        match target {
            None => Lookup::Invalid,
            Some((nx, ny)) => self
                .get_cell(nx, ny)
                .map_or(Lookup::Outside, Lookup::Present),
        }
    }

    /// Like `get_neighbor`, but with a numeric direction token
    ///
    /// An unrecognized token yields `Lookup::Invalid`.
    pub fn get_neighbor_by_token<C: PrimInt>(&self, x: C, y: C, token: u8) -> Lookup<'_, T> {
        Direction::from_token(token)
            .map_or(Lookup::Invalid, |direction| self.get_neighbor(x, y, direction))
    }

    /// The eight cells surrounding `(x, y)`
    ///
    /// Yields exactly eight entries when `(x, y)` is in the grid, using
    /// `Neighbor::Outside` for positions past the edge, and nothing when it
    /// is not.
    pub fn neighbors<C: PrimInt>(&self, x: C, y: C) -> Neighbors<'_, T> {
        Neighbors {
            grid: self,
            origin: self.locate(x, y),
            next: 0,
        }
    }

    /// Cells strictly beyond `(x, y)` in `direction`, nearest first
    ///
    /// Stops at the first step that leaves the grid. Empty when `(x, y)`
    /// is not in the grid or the direction is `Center`.
    pub fn traverse<C: PrimInt>(&self, x: C, y: C, direction: Direction) -> Ray<'_, T> {
        let offset = direction.offset();
        let position = if offset.is_zero() {
            None
        } else {
            self.locate(x, y)
        };

        Ray {
            grid: self,
            position,
            offset,
        }
    }

    /// Like `traverse`, but with a numeric direction token
    ///
    /// An unrecognized token yields an empty ray.
    pub fn traverse_by_token<C: PrimInt>(&self, x: C, y: C, token: u8) -> Ray<'_, T> {
        match Direction::from_token(token) {
            Some(direction) => self.traverse(x, y, direction),
            None => Ray {
                grid: self,
                position: None,
                offset: Direction::Center.offset(),
            },
        }
    }
}

/// Iterator over the eight neighbors of a cell
#[derive(Debug)]
pub struct Neighbors<'a, T> {
    grid: &'a Grid<T>,
    origin: Option<(usize, usize)>,
    next: usize,
}

impl<'a, T> Iterator for Neighbors<'a, T> {
    type Item = Neighbor<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let (x, y) = self.origin?;
        let offset = NEIGHBOR_OFFSETS.get(self.next)?;
        self.next += 1;

        let cell = offset
            .step(x, y)
            .and_then(|(nx, ny)| self.grid.cell_at(nx, ny));

        Some(cell.map_or(Neighbor::Outside, Neighbor::Inside))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.origin.is_some() {
            NEIGHBOR_COUNT.saturating_sub(self.next)
        } else {
            0
        };
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Neighbors<'_, T> {}

impl<T> FusedIterator for Neighbors<'_, T> {}

/// Iterator stepping away from a cell in a fixed direction
#[derive(Debug)]
pub struct Ray<'a, T> {
    grid: &'a Grid<T>,
    position: Option<(usize, usize)>,
    offset: Offset,
}

impl<'a, T> Iterator for Ray<'a, T> {
    type Item = Cell<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let (x, y) = self.position?;
        let cell = self
            .offset
            .step(x, y)
            .and_then(|(nx, ny)| self.grid.cell_at(nx, ny));

        self.position = cell.map(|cell| cell.position());
        cell
    }
}

impl<T> FusedIterator for Ray<'_, T> {}

//! Generic two-dimensional grid container with bounded access, neighbor queries,
//! directional traversal and content-preserving resize
//!
//! Intended as a building block for board games, cellular automata and tile maps.
//! Bad coordinates never panic: reads come back empty and writes are skipped.

#![forbid(unsafe_code)]

/// Named constants for grid construction
pub mod configuration;
/// Error handling for operations that report failure
pub mod error;
/// Grid storage, directions and traversal
pub mod spatial;

use num_traits::PrimInt;

pub use error::{GridError, Result};
pub use spatial::{Cell, Direction, Grid, Lookup, Neighbor, Neighbors, Offset, Ray};

/// Create a grid with every cell set to `default_value`
///
/// Equivalent to `Grid::new`.
pub fn create<C: PrimInt, T: Clone>(width: C, height: C, default_value: T) -> Grid<T> {
    Grid::new(width, height, default_value)
}

/// Every direction in turn, from top-left to bottom-right
pub fn enumerate_directions() -> impl Iterator<Item = Direction> {
    Direction::ALL.into_iter()
}

//! Spatial data structures and grid queries
//!
//! This module contains spatial-related functionality including:
//! - Grid storage, validation and bulk access
//! - Direction vectors for the eight compass points and the center
//! - Neighbor scans and directional rays
//! - Cell records and lookup sentinels

/// Records and sentinels returned by grid queries
pub mod cell;
/// Compass directions and their unit offsets
pub mod direction;
/// Grid storage, validation and cell access
pub mod grid;
/// Neighbor scans and directional traversal
pub mod traversal;

pub use cell::{Cell, Lookup, Neighbor};
pub use direction::{Direction, Offset};
pub use grid::Grid;
pub use traversal::{Neighbors, Ray};

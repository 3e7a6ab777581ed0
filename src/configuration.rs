//! Grid constants and construction defaults

/// Dimension used for an axis whose requested size is unusable
pub const DEFAULT_DIMENSION: usize = 4;

/// Number of cells surrounding any cell, center excluded
pub const NEIGHBOR_COUNT: usize = 8;

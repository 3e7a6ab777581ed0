//! Records returned by grid queries
//!
//! Lookups distinguish a stored value from the two ways a query can miss:
//! the target lies outside the grid, or the query itself was not valid.
//! Neither sentinel can collide with a stored value.

/// A single addressed cell and a reference to its value
#[derive(Debug, PartialEq, Eq)]
pub struct Cell<'a, T> {
    /// Position along the first axis
    pub x: usize,
    /// Position along the second axis
    pub y: usize,
    /// Stored value
    pub value: &'a T,
}

impl<T> Cell<'_, T> {
    /// Position as an `(x, y)` pair
    pub const fn position(&self) -> (usize, usize) {
        (self.x, self.y)
    }
}

impl<T: Clone> Cell<'_, T> {
    /// Owned `(x, y, value)` triple, the shape `Grid::populate` accepts
    /// once the value is wrapped in `Some`
    pub fn to_triple(&self) -> (usize, usize, T) {
        (self.x, self.y, self.value.clone())
    }
}

// Copy for any `T`: only a reference is held
impl<T> Clone for Cell<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cell<'_, T> {}

/// One entry of a neighbor scan
#[derive(Debug, PartialEq, Eq)]
pub enum Neighbor<'a, T> {
    /// The neighbor lies inside the grid
    Inside(Cell<'a, T>),
    /// The neighbor would lie outside the grid
    Outside,
}

impl<'a, T> Neighbor<'a, T> {
    /// The neighbor cell, if it is inside the grid
    pub const fn cell(&self) -> Option<Cell<'a, T>> {
        match self {
            Self::Inside(cell) => Some(*cell),
            Self::Outside => None,
        }
    }

    /// Test whether the neighbor lies outside the grid
    pub const fn is_outside(&self) -> bool {
        matches!(self, Self::Outside)
    }
}

impl<T> Clone for Neighbor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Neighbor<'_, T> {}

/// Result of a directional lookup
#[derive(Debug, PartialEq, Eq)]
pub enum Lookup<'a, T> {
    /// The target cell exists and holds this value
    Present(&'a T),
    /// The target cell would lie outside the grid
    Outside,
    /// The query could not be resolved: an unrecognized direction token, or
    /// an origin that cannot be represented as a signed position
    Invalid,
}

impl<'a, T> Lookup<'a, T> {
    /// Stored value, collapsing both sentinels to `None`
    pub const fn value(&self) -> Option<&'a T> {
        match self {
            Self::Present(value) => Some(*value),
            Self::Outside | Self::Invalid => None,
        }
    }

    /// Test whether the lookup found a value
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }
}

impl<T> Clone for Lookup<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Lookup<'_, T> {}

//! The nine compass directions and their unit offsets
//!
//! Axis 0 (`x`) runs top to bottom and axis 1 (`y`) runs left to right, so
//! `Top` decreases `x` and `Left` decreases `y`. `Center` is a real
//! direction with a zero offset; an unrecognized token has no offset at all.

use std::fmt;
use std::str::FromStr;

use crate::error::GridError;

/// Unit step between a cell and one of its neighbors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Offset {
    /// Change along the first axis
    pub dx: isize,
    /// Change along the second axis
    pub dy: isize,
}

impl Offset {
    /// Create an offset from its two components
    pub const fn new(dx: isize, dy: isize) -> Self {
        Self { dx, dy }
    }

    /// Test whether this offset stays on its origin
    pub const fn is_zero(self) -> bool {
        self.dx == 0 && self.dy == 0
    }

    /// Apply the offset to a position, returning `None` when the result
    /// would be negative
    pub const fn step(self, x: usize, y: usize) -> Option<(usize, usize)> {
        match (x.checked_add_signed(self.dx), y.checked_add_signed(self.dy)) {
            (Some(nx), Some(ny)) => Some((nx, ny)),
            _ => None,
        }
    }
}

/// One of the eight compass points, or the center
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Up and to the left
    TopLeft,
    /// Straight up
    Top,
    /// Up and to the right
    TopRight,
    /// Straight left
    Left,
    /// No movement
    Center,
    /// Straight right
    Right,
    /// Down and to the left
    BottomLeft,
    /// Straight down
    Bottom,
    /// Down and to the right
    BottomRight,
}

impl Direction {
    /// Every direction, from top-left to bottom-right
    pub const ALL: [Self; 9] = [
        Self::TopLeft,
        Self::Top,
        Self::TopRight,
        Self::Left,
        Self::Center,
        Self::Right,
        Self::BottomLeft,
        Self::Bottom,
        Self::BottomRight,
    ];

    /// Offset one step in this direction moves by
    pub const fn offset(self) -> Offset {
        match self {
            Self::TopLeft => Offset::new(-1, -1),
            Self::Top => Offset::new(-1, 0),
            Self::TopRight => Offset::new(-1, 1),
            Self::Left => Offset::new(0, -1),
            Self::Center => Offset::new(0, 0),
            Self::Right => Offset::new(0, 1),
            Self::BottomLeft => Offset::new(1, -1),
            Self::Bottom => Offset::new(1, 0),
            Self::BottomRight => Offset::new(1, 1),
        }
    }

    /// Direction pointing the other way; `Center` is its own opposite
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::TopLeft => Self::BottomRight,
            Self::Top => Self::Bottom,
            Self::TopRight => Self::BottomLeft,
            Self::Left => Self::Right,
            Self::Center => Self::Center,
            Self::Right => Self::Left,
            Self::BottomLeft => Self::TopRight,
            Self::Bottom => Self::Top,
            Self::BottomRight => Self::TopLeft,
        }
    }

    /// Numeric token for this direction, 1 for top-left through 9 for
    /// bottom-right
    pub const fn token(self) -> u8 {
        match self {
            Self::TopLeft => 1,
            Self::Top => 2,
            Self::TopRight => 3,
            Self::Left => 4,
            Self::Center => 5,
            Self::Right => 6,
            Self::BottomLeft => 7,
            Self::Bottom => 8,
            Self::BottomRight => 9,
        }
    }

    /// Look up a direction by its numeric token
    pub const fn from_token(token: u8) -> Option<Self> {
        match token {
            1 => Some(Self::TopLeft),
            2 => Some(Self::Top),
            3 => Some(Self::TopRight),
            4 => Some(Self::Left),
            5 => Some(Self::Center),
            6 => Some(Self::Right),
            7 => Some(Self::BottomLeft),
            8 => Some(Self::Bottom),
            9 => Some(Self::BottomRight),
            _ => None,
        }
    }

    /// Upper snake case name, e.g. `TOP_LEFT`
    pub const fn name(self) -> &'static str {
        match self {
            Self::TopLeft => "TOP_LEFT",
            Self::Top => "TOP",
            Self::TopRight => "TOP_RIGHT",
            Self::Left => "LEFT",
            Self::Center => "CENTER",
            Self::Right => "RIGHT",
            Self::BottomLeft => "BOTTOM_LEFT",
            Self::Bottom => "BOTTOM",
            Self::BottomRight => "BOTTOM_RIGHT",
        }
    }
}

/// Resolve a numeric token straight to its offset
///
/// Returns `None` for tokens outside 1..=9, which is distinct from the
/// zero offset of `Center`.
pub const fn offset_for_token(token: u8) -> Option<Offset> {
    match Direction::from_token(token) {
        Some(direction) => Some(direction.offset()),
        None => None,
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace(['-', ' '], "_");
        Self::ALL
            .into_iter()
            .find(|direction| direction.name() == normalized)
            .ok_or_else(|| GridError::UnknownDirection {
                token: s.to_string(),
            })
    }
}

impl TryFrom<u8> for Direction {
    type Error = GridError;

    fn try_from(token: u8) -> Result<Self, Self::Error> {
        Self::from_token(token).ok_or_else(|| GridError::UnknownDirection {
            token: token.to_string(),
        })
    }
}

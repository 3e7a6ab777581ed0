//! Error types for grid operations that report failure explicitly
//!
//! Most grid operations fail soft: a bad coordinate yields `None`, an empty
//! iterator or a sentinel. Only operations whose silent failure would
//! surprise the caller surface a `GridError`.

use std::fmt;

/// Main error type for grid operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Requested grid dimension cannot be used
    InvalidDimension {
        /// Axis the dimension belongs to (`"width"` or `"height"`)
        axis: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Direction name or token does not match any of the nine directions
    UnknownDirection {
        /// The unrecognized token
        token: String,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension {
                axis,
                value,
                reason,
            } => {
                write!(f, "Invalid {axis} '{value}': {reason}")
            }
            Self::UnknownDirection { token } => {
                write!(f, "Unknown direction '{token}'")
            }
        }
    }
}

impl std::error::Error for GridError {}

/// Convenience type alias for grid results
pub type Result<T> = std::result::Result<T, GridError>;

/// Create an invalid dimension error
pub fn invalid_dimension(
    axis: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> GridError {
    GridError::InvalidDimension {
        axis,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

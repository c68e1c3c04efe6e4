//! Construction and deserialization errors.

use thiserror::Error;

/// Precondition violations surfaced at field construction boundaries.
/// The placement hot path never returns these; absence of a valid drop is
/// an `Option`, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("field dimensions must be non-zero, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("column slice {start}..{end} is not a valid range for width {width}")]
    InvalidSlice {
        start: usize,
        end: usize,
        width: usize,
    },

    #[error("grid payload has {got} cells, expected {expected}")]
    GridSizeMismatch { got: usize, expected: usize },

    #[error("grid payload contains the out-of-bounds sentinel")]
    SentinelInGrid,
}

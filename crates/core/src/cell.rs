//! Grid cell states, including the boundary sentinel.

use crate::Shape;
use serde::{Deserialize, Serialize};

/// One cell of a field.
///
/// `OutOfBounds` is never stored in a grid; it is the value boundary-safe
/// reads return for coordinates outside the field, so neighbor checks at the
/// edges behave as if the grid were surrounded by solid wall.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    OutOfBounds,
    Filled(Shape),
}

impl Cell {
    #[inline(always)]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Single printable character for the debug text dump.
    pub fn glyph(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::OutOfBounds => 'X',
            Cell::Filled(shape) => shape.glyph(),
        }
    }
}

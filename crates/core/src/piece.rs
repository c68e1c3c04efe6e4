//! Piece anchored in field coordinates.

use crate::{Rotation, Shape};
use serde::{Deserialize, Serialize};

/// A (row, col) position in field coordinates. Row 0 is the top of the
/// field; rows grow downward, which is the direction pieces fall.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    #[inline(always)]
    pub fn below(self) -> Self {
        Self {
            row: self.row + 1,
            col: self.col,
        }
    }

    #[inline(always)]
    pub fn left(self) -> Self {
        Self {
            row: self.row,
            col: self.col - 1,
        }
    }

    #[inline(always)]
    pub fn right(self) -> Self {
        Self {
            row: self.row,
            col: self.col + 1,
        }
    }
}

/// A shape at a chosen rotation with a top-left anchor in field coordinates.
///
/// The occupied cells are always derived from the anchor on demand, never
/// cached. The engine treats pieces as values: drop resolution works on
/// copies and never mutates a caller's piece.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub struct ActivePiece {
    pub shape: Shape,
    pub rotation: Rotation,
    pub anchor: Position,
}

impl ActivePiece {
    pub fn new(shape: Shape, rotation: Rotation, anchor: Position) -> Self {
        Self {
            shape,
            rotation,
            anchor,
        }
    }

    /// Absolute occupied cells: anchor + each rotation offset.
    #[inline]
    pub fn cells(&self) -> [Position; 4] {
        self.shape.cells(self.rotation).map(|(dr, dc)| Position {
            row: self.anchor.row + dr as i32,
            col: self.anchor.col + dc as i32,
        })
    }

    /// Copy of this piece with the anchor row replaced.
    #[inline]
    pub fn at_row(self, row: i32) -> Self {
        Self {
            anchor: Position { row, ..self.anchor },
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighbors() {
        let p = Position::new(3, 5);
        assert_eq!(p.below(), Position::new(4, 5));
        assert_eq!(p.left(), Position::new(3, 4));
        assert_eq!(p.right(), Position::new(3, 6));
    }

    #[test]
    fn test_cells_are_anchor_plus_offsets() {
        let piece = ActivePiece::new(Shape::O, Rotation::North, Position::new(2, 1));
        let cells = piece.cells();
        assert!(cells.contains(&Position::new(2, 1)));
        assert!(cells.contains(&Position::new(2, 2)));
        assert!(cells.contains(&Position::new(3, 1)));
        assert!(cells.contains(&Position::new(3, 2)));
    }

    #[test]
    fn test_at_row_only_changes_row() {
        let piece = ActivePiece::new(Shape::T, Rotation::East, Position::new(0, 4));
        let moved = piece.at_row(7);
        assert_eq!(moved.anchor, Position::new(7, 4));
        assert_eq!(moved.shape, Shape::T);
        assert_eq!(moved.rotation, Rotation::East);
        // original untouched
        assert_eq!(piece.anchor.row, 0);
    }

    #[test]
    fn test_cells_with_negative_anchor() {
        let piece = ActivePiece::new(Shape::I, Rotation::North, Position::new(-1, -2));
        assert!(piece.cells().contains(&Position::new(-1, -2)));
        assert!(piece.cells().contains(&Position::new(-1, 1)));
    }
}

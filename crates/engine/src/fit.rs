//! Perfect-fit evaluation - is a piece settled, blocked, or still falling?

use settle_core::{ActivePiece, Cell};

use crate::field::Field;

/// Outcome of evaluating a piece at its current anchor.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FitOutcome {
    /// Every cell is supported below and no probe disqualifies the spot.
    Perfect,
    /// Overlaps the stack or the boundary - terminal for this anchor.
    Collision,
    /// No overlap, but at least one cell rests on air - keep falling.
    Continue,
}

/// Classify `piece` against `field` without mutating either.
///
/// Neighbor probes below, left, and right of every occupied cell go through
/// a membership check against the piece's own cell set before the grid is
/// consulted, so the piece never has to be written into the field just to
/// be read back out. The boundary sentinel always counts as solid support;
/// an empty cell directly below means unsupported, while lateral air gaps
/// are tolerated.
pub fn evaluate_fit(field: &Field, piece: &ActivePiece) -> FitOutcome {
    let cells = piece.cells();
    if field.collides(&cells) {
        return FitOutcome::Collision;
    }
    for cell in cells {
        let probes = [(cell.below(), false), (cell.left(), true), (cell.right(), true)];
        for (neighbor, empty_ok) in probes {
            if cells.contains(&neighbor) {
                continue;
            }
            match field.cell(neighbor.row, neighbor.col) {
                Cell::OutOfBounds => {}
                Cell::Empty if !empty_ok => return FitOutcome::Continue,
                _ => {}
            }
        }
    }
    FitOutcome::Perfect
}

#[cfg(test)]
mod tests {
    use super::*;
    use settle_core::{Position, Rotation, Shape};

    #[test]
    fn test_square_on_floor_is_perfect() {
        let field = Field::new(4, 4).unwrap();
        let piece = ActivePiece::new(Shape::O, Rotation::North, Position::new(2, 0));
        assert_eq!(evaluate_fit(&field, &piece), FitOutcome::Perfect);
    }

    #[test]
    fn test_square_in_midair_continues() {
        let field = Field::new(4, 4).unwrap();
        let piece = ActivePiece::new(Shape::O, Rotation::North, Position::new(0, 0));
        assert_eq!(evaluate_fit(&field, &piece), FitOutcome::Continue);
    }

    #[test]
    fn test_overlap_is_collision() {
        let mut field = Field::new(4, 4).unwrap();
        field.set(3, 0, Cell::Filled(Shape::I));
        let piece = ActivePiece::new(Shape::O, Rotation::North, Position::new(2, 0));
        assert_eq!(evaluate_fit(&field, &piece), FitOutcome::Collision);
    }

    #[test]
    fn test_out_of_bounds_is_collision() {
        let field = Field::new(4, 4).unwrap();
        let piece = ActivePiece::new(Shape::O, Rotation::North, Position::new(3, 0));
        assert_eq!(evaluate_fit(&field, &piece), FitOutcome::Collision);
        let wide = ActivePiece::new(Shape::I, Rotation::North, Position::new(0, 1));
        assert_eq!(evaluate_fit(&field, &wide), FitOutcome::Collision);
    }

    #[test]
    fn test_committed_piece_collides_with_itself() {
        let mut field = Field::new(4, 4).unwrap();
        let piece = ActivePiece::new(Shape::O, Rotation::North, Position::new(2, 0));
        field.place(&piece);
        assert!(field.collides(&piece.cells()));
        assert_eq!(evaluate_fit(&field, &piece), FitOutcome::Collision);
    }

    #[test]
    fn test_s_neutral_on_flat_floor_continues() {
        // bottom pair rests on the floor but the overhanging top cell has
        // an empty cell directly beneath it
        let field = Field::new(4, 4).unwrap();
        let piece = ActivePiece::new(Shape::S, Rotation::North, Position::new(2, 0));
        assert_eq!(evaluate_fit(&field, &piece), FitOutcome::Continue);
    }

    #[test]
    fn test_rests_on_foreign_stack() {
        let mut field = Field::new(4, 4).unwrap();
        let base = ActivePiece::new(Shape::I, Rotation::North, Position::new(3, 0));
        field.place(&base);
        let piece = ActivePiece::new(Shape::O, Rotation::North, Position::new(1, 1));
        assert_eq!(evaluate_fit(&field, &piece), FitOutcome::Perfect);
    }

    #[test]
    fn test_same_shape_side_by_side_is_perfect() {
        // a committed square directly to the left does not disqualify the
        // spot: an occupied neighbor is support like any other
        let mut field = Field::new(4, 4).unwrap();
        let first = ActivePiece::new(Shape::O, Rotation::North, Position::new(2, 0));
        field.place(&first);
        let second = ActivePiece::new(Shape::O, Rotation::North, Position::new(2, 2));
        assert_eq!(evaluate_fit(&field, &second), FitOutcome::Perfect);
    }

    #[test]
    fn test_lateral_gap_is_tolerated() {
        // I piece standing in a 1-wide well: both sides read empty above
        // the stack, only vertical support matters
        let mut field = Field::new(3, 6).unwrap();
        for row in 2..6 {
            field.set(row, 0, Cell::Filled(Shape::J));
            field.set(row, 2, Cell::Filled(Shape::J));
        }
        let piece = ActivePiece::new(Shape::I, Rotation::East, Position::new(2, 1));
        assert_eq!(evaluate_fit(&field, &piece), FitOutcome::Perfect);
    }
}

//! Shape kinds and rotation offset tables.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum Shape {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Default, Serialize, Deserialize)]
pub enum Rotation {
    #[default]
    North,
    East,
    South,
    West,
}

impl Rotation {
    pub fn cw(self) -> Self {
        match self {
            Self::North => Self::East,
            Self::East => Self::South,
            Self::South => Self::West,
            Self::West => Self::North,
        }
    }

    pub fn ccw(self) -> Self {
        match self {
            Self::North => Self::West,
            Self::West => Self::South,
            Self::South => Self::East,
            Self::East => Self::North,
        }
    }
}

impl Shape {
    pub const ALL: [Shape; 7] = [
        Shape::I,
        Shape::O,
        Shape::T,
        Shape::S,
        Shape::Z,
        Shape::J,
        Shape::L,
    ];

    /// Cell offsets for this shape at the given rotation.
    ///
    /// Returns 4 (row, col) offsets relative to the top-left anchor. Every
    /// table is normalized: all offsets are non-negative, at least one
    /// touches row 0 and at least one touches col 0.
    pub fn cells(self, rot: Rotation) -> [(i8, i8); 4] {
        let idx = match rot {
            Rotation::North => 0,
            Rotation::East => 1,
            Rotation::South => 2,
            Rotation::West => 3,
        };
        match self {
            Shape::I => [
                [(0, 0), (0, 1), (0, 2), (0, 3)],
                [(0, 0), (1, 0), (2, 0), (3, 0)],
                [(0, 0), (0, 1), (0, 2), (0, 3)],
                [(0, 0), (1, 0), (2, 0), (3, 0)],
            ][idx],
            Shape::O => [(0, 0), (0, 1), (1, 0), (1, 1)],
            Shape::T => [
                [(0, 1), (1, 0), (1, 1), (1, 2)],
                [(0, 0), (1, 0), (1, 1), (2, 0)],
                [(0, 0), (0, 1), (0, 2), (1, 1)],
                [(0, 1), (1, 0), (1, 1), (2, 1)],
            ][idx],
            Shape::S => [
                [(0, 1), (0, 2), (1, 0), (1, 1)],
                [(0, 0), (1, 0), (1, 1), (2, 1)],
                [(0, 1), (0, 2), (1, 0), (1, 1)],
                [(0, 0), (1, 0), (1, 1), (2, 1)],
            ][idx],
            Shape::Z => [
                [(0, 0), (0, 1), (1, 1), (1, 2)],
                [(0, 1), (1, 0), (1, 1), (2, 0)],
                [(0, 0), (0, 1), (1, 1), (1, 2)],
                [(0, 1), (1, 0), (1, 1), (2, 0)],
            ][idx],
            Shape::J => [
                [(0, 0), (1, 0), (1, 1), (1, 2)],
                [(0, 0), (0, 1), (1, 0), (2, 0)],
                [(0, 0), (0, 1), (0, 2), (1, 2)],
                [(0, 1), (1, 1), (2, 0), (2, 1)],
            ][idx],
            Shape::L => [
                [(0, 2), (1, 0), (1, 1), (1, 2)],
                [(0, 0), (1, 0), (2, 0), (2, 1)],
                [(0, 0), (0, 1), (0, 2), (1, 0)],
                [(0, 0), (0, 1), (1, 1), (2, 1)],
            ][idx],
        }
    }

    /// Rotations with geometrically distinct offset tables.
    ///
    /// The full 4-entry tables repeat for the symmetric shapes; enumeration
    /// over placements only needs one representative per distinct table.
    pub fn distinct_rotations(self) -> &'static [Rotation] {
        match self {
            Shape::O => &[Rotation::North],
            Shape::I | Shape::S | Shape::Z => &[Rotation::North, Rotation::East],
            Shape::T | Shape::J | Shape::L => &[
                Rotation::North,
                Rotation::East,
                Rotation::South,
                Rotation::West,
            ],
        }
    }

    /// Display character for cells filled by this shape.
    pub fn glyph(self) -> char {
        match self {
            Shape::I => 'I',
            Shape::O => 'O',
            Shape::T => 'T',
            Shape::S => 'S',
            Shape::Z => 'Z',
            Shape::J => 'J',
            Shape::L => 'L',
        }
    }
}

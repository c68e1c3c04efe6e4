//! Rectangular field - per-cell shape tags plus a cached column-height
//! summary. Heights grow incrementally on placement and are rescanned on
//! removal; anything else treats the cache as a hint.

use std::fmt;
use std::ops::Range;

use serde::de::{self, Deserializer};
use serde::ser::{SerializeStruct, Serializer};
use serde::{Deserialize, Serialize};
use settle_core::{ActivePiece, Cell, Position};

use crate::error::FieldError;

/// Fixed-size grid of cell states. Row 0 is the top; pieces fall toward
/// row `height - 1`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Field {
    width: usize,
    height: usize,
    grid: Vec<Cell>,
    heights: Vec<usize>,
}

impl Field {
    pub fn new(width: usize, height: usize) -> Result<Self, FieldError> {
        if width == 0 || height == 0 {
            return Err(FieldError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            grid: vec![Cell::Empty; width * height],
            heights: vec![0; width],
        })
    }

    #[inline(always)]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline(always)]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Boundary-safe read - total over all integer coordinates. Anything
    /// outside `[0,height) x [0,width)` reads as `Cell::OutOfBounds`.
    #[inline(always)]
    pub fn cell(&self, row: i32, col: i32) -> Cell {
        if row < 0 || col < 0 || row >= self.height as i32 || col >= self.width as i32 {
            return Cell::OutOfBounds;
        }
        self.grid[row as usize * self.width + col as usize]
    }

    /// Write one in-bounds cell. Does not touch the height cache.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        debug_assert!(cell != Cell::OutOfBounds, "sentinel is never stored");
        self.grid[row * self.width + col] = cell;
    }

    /// True if any position is out of bounds or already occupied.
    /// Short-circuits on the first hit; no side effects.
    pub fn collides(&self, cells: &[Position]) -> bool {
        cells.iter().any(|p| self.cell(p.row, p.col) != Cell::Empty)
    }

    /// Write the piece's shape tag into every absolute cell.
    ///
    /// The height cache only grows here: placement can never lower a
    /// column's true height, so `max` keeps the cached value exact whenever
    /// it was exact before. Collision-freedom is the caller's obligation.
    pub fn place(&mut self, piece: &ActivePiece) {
        let tag = Cell::Filled(piece.shape);
        for p in piece.cells() {
            debug_assert_eq!(
                self.cell(p.row, p.col),
                Cell::Empty,
                "placement must be collision-free"
            );
            let (row, col) = (p.row as usize, p.col as usize);
            self.grid[row * self.width + col] = tag;
            self.heights[col] = self.heights[col].max(self.height - row);
        }
    }

    /// Clear every absolute cell of the piece, then rescan each distinct
    /// touched column. Removal can lower a column's height, which the
    /// grow-only rule cannot see, so the rescan is required for exactness.
    pub fn unplace(&mut self, piece: &ActivePiece) {
        let mut cols = [0usize; 4];
        let mut n = 0;
        for p in piece.cells() {
            let (row, col) = (p.row as usize, p.col as usize);
            self.grid[row * self.width + col] = Cell::Empty;
            if !cols[..n].contains(&col) {
                cols[n] = col;
                n += 1;
            }
        }
        for &col in &cols[..n] {
            self.recompute_column_height(col);
        }
    }

    /// Cached height for one column - exact only right after a recompute.
    #[inline(always)]
    pub fn column_height(&self, col: usize) -> usize {
        self.heights[col]
    }

    /// The whole cache - a hint unless every column was just refreshed.
    #[inline]
    pub fn column_heights(&self) -> &[usize] {
        &self.heights
    }

    /// Refresh one column from the grid and return the exact value:
    /// `height - topmost_occupied_row`, or 0 for an empty column.
    pub fn recompute_column_height(&mut self, col: usize) -> usize {
        let exact = (0..self.height)
            .find(|&row| self.grid[row * self.width + col] != Cell::Empty)
            .map_or(0, |row| self.height - row);
        self.heights[col] = exact;
        exact
    }

    /// Independent narrower field covering columns `range.start..range.end`.
    /// Storage is duplicated; mutating the slice never touches the source.
    pub fn slice_columns(&self, range: Range<usize>) -> Result<Field, FieldError> {
        if range.start >= range.end || range.end > self.width {
            return Err(FieldError::InvalidSlice {
                start: range.start,
                end: range.end,
                width: self.width,
            });
        }
        let width = range.end - range.start;
        let mut grid = Vec::with_capacity(width * self.height);
        for row in 0..self.height {
            let base = row * self.width;
            grid.extend_from_slice(&self.grid[base + range.start..base + range.end]);
        }
        Ok(Field {
            width,
            height: self.height,
            grid,
            heights: self.heights[range].to_vec(),
        })
    }

    /// 64-bit content fingerprint over width/height/grid. The height cache
    /// is derived state and deliberately excluded.
    pub fn fingerprint(&self) -> u64 {
        use std::hash::{Hash, Hasher};
        let mut hasher = rustc_hash::FxHasher::default();
        self.width.hash(&mut hasher);
        self.height.hash(&mut hasher);
        self.grid.hash(&mut hasher);
        hasher.finish()
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..self.width {
                write!(f, "{}", self.grid[row * self.width + col].glyph())?;
            }
        }
        Ok(())
    }
}

impl Serialize for Field {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = serializer.serialize_struct("Field", 3)?;
        s.serialize_field("width", &self.width)?;
        s.serialize_field("height", &self.height)?;
        s.serialize_field("grid", &self.grid)?;
        s.end()
    }
}

#[derive(Deserialize)]
struct FieldRepr {
    width: usize,
    height: usize,
    grid: Vec<Cell>,
}

impl<'de> Deserialize<'de> for Field {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let repr = FieldRepr::deserialize(deserializer)?;
        if repr.width == 0 || repr.height == 0 {
            return Err(de::Error::custom(FieldError::InvalidDimensions {
                width: repr.width,
                height: repr.height,
            }));
        }
        let expected = repr.width * repr.height;
        if repr.grid.len() != expected {
            return Err(de::Error::custom(FieldError::GridSizeMismatch {
                got: repr.grid.len(),
                expected,
            }));
        }
        if repr.grid.contains(&Cell::OutOfBounds) {
            return Err(de::Error::custom(FieldError::SentinelInGrid));
        }
        let mut field = Field {
            width: repr.width,
            height: repr.height,
            grid: repr.grid,
            heights: vec![0; repr.width],
        };
        // the cache is derived state - rebuild rather than trust the payload
        for col in 0..field.width {
            field.recompute_column_height(col);
        }
        Ok(field)
    }
}

//! Shape module - 16-bit occupancy pattern over the 4x4 grid
//!
//! Cell (row, col) has bit index `row * 4 + col`. Index 0 is the most significant
//! bit of the pattern, so a binary literal reads top-left to bottom-right and each
//! row's 4-bit slice has column 0 as its high bit.

use std::fmt;

use crate::types::{Coord, ShapeError, CELL_COUNT, GRID_DIM};

/// Mask covering one row's worth of bits
const ROW_MASK: u16 = (1 << GRID_DIM) - 1;

/// Bit index to coordinate, failing on indices outside the grid.
pub fn bitpos_to_coord(index: usize) -> Result<Coord, ShapeError> {
    Coord::from_bitpos(index)
}

/// Coordinate to bit index, failing on rows or columns outside the grid.
pub fn coord_to_bitpos(row: usize, col: usize) -> Result<usize, ShapeError> {
    Coord::new(row, col).map(|c| c.bitpos())
}

/// Occupancy of a 4x4 grid, one bit per cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Shape(u16);

impl Shape {
    pub const EMPTY: Shape = Shape(0);

    pub const fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    /// Build from a wider integer, rejecting anything above the low 16 bits.
    pub fn try_from_bits(bits: u32) -> Result<Self, ShapeError> {
        u16::try_from(bits)
            .map(Self)
            .map_err(|_| ShapeError::Overflow { bits })
    }

    pub const fn bits(&self) -> u16 {
        self.0
    }

    #[inline(always)]
    fn mask(coord: Coord) -> u16 {
        1 << (CELL_COUNT - 1 - coord.bitpos())
    }

    pub fn is_set(&self, coord: Coord) -> bool {
        self.0 & Self::mask(coord) != 0
    }

    /// Copy of this shape with `coord` occupied.
    #[must_use]
    pub fn with_cell(self, coord: Coord) -> Self {
        Self(self.0 | Self::mask(coord))
    }

    pub fn from_cells(cells: impl IntoIterator<Item = Coord>) -> Self {
        cells
            .into_iter()
            .fold(Self::EMPTY, |shape, coord| shape.with_cell(coord))
    }

    /// Occupied cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Coord> + '_ {
        Coord::all().filter(move |&c| self.is_set(c))
    }

    /// Number of occupied cells
    pub fn cell_count(&self) -> u32 {
        self.0.count_ones()
    }

    /// Extract the 4 bits of `row`, column 0 in the high bit of the nibble.
    ///
    /// Rows past the bottom of the grid read as empty.
    pub fn row_bits(&self, row: usize) -> u8 {
        if row >= GRID_DIM {
            return 0;
        }
        let shift = (GRID_DIM - 1 - row) * GRID_DIM;
        ((self.0 >> shift) & ROW_MASK) as u8
    }
}

impl From<Shape> for u16 {
    fn from(shape: Shape) -> u16 {
        shape.0
    }
}

impl TryFrom<u32> for Shape {
    type Error = ShapeError;

    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        Self::try_from_bits(bits)
    }
}

impl fmt::Binary for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(&self.0, f)
    }
}

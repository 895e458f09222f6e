//! Rendered grid: a shape drawn as 4 fixed-width text rows.

use std::fmt;

use arrayvec::ArrayString;

use crate::core::Shape;
use crate::types::{EMPTY_GLYPH, FILLED_GLYPH, GRID_DIM, ROW_WIDTH};

/// Visual state of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Filled,
    Empty,
}

impl Glyph {
    pub fn from_occupied(occupied: bool) -> Self {
        if occupied {
            Glyph::Filled
        } else {
            Glyph::Empty
        }
    }

    /// Two-character text for this cell
    pub fn as_str(&self) -> &'static str {
        match self {
            Glyph::Filled => FILLED_GLYPH,
            Glyph::Empty => EMPTY_GLYPH,
        }
    }
}

/// One rendered row, exactly `ROW_WIDTH` characters.
pub type RowString = ArrayString<ROW_WIDTH>;

/// A shape drawn as text, top row first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderedGrid {
    rows: [RowString; GRID_DIM],
}

impl RenderedGrid {
    pub fn rows(&self) -> &[RowString; GRID_DIM] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&str> {
        self.rows.get(index).map(|r| r.as_str())
    }
}

impl fmt::Display for RenderedGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}

/// Draw one row's 4-bit slice; the nibble's high bit is column 0.
fn render_row(bits: u8) -> RowString {
    let mut out = RowString::new();
    for col in 0..GRID_DIM {
        let occupied = (bits >> (GRID_DIM - 1 - col)) & 1 == 1;
        out.push_str(Glyph::from_occupied(occupied).as_str());
    }
    out
}

/// Render a shape into its 4x8 text grid.
pub fn render(shape: Shape) -> RenderedGrid {
    RenderedGrid {
        rows: std::array::from_fn(|row| render_row(shape.row_bits(row))),
    }
}

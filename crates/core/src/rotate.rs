//! Rotate module - quarter-turn transforms of a shape pattern
//!
//! Every destination cell is pulled from a source cell chosen by a fixed
//! affine map per rotation, so rotating never drops or duplicates a cell.

use crate::shape::Shape;
use crate::types::{Coord, Rotation, ShapeError, GRID_DIM, QUARTER_TURNS};

/// Largest row/column index in the grid
const LAST: usize = GRID_DIM - 1;

/// Source cell feeding destination `dest` under `rotation`
fn source_cell(rotation: Rotation, dest: Coord) -> Coord {
    let Coord { row: i, col: j } = dest;
    match rotation {
        Rotation::North => dest,
        Rotation::East => Coord { row: j, col: LAST - i },
        Rotation::South => Coord {
            row: LAST - i,
            col: LAST - j,
        },
        Rotation::West => Coord { row: LAST - j, col: i },
    }
}

impl Shape {
    /// Apply a typed rotation.
    #[must_use]
    pub fn rotated(self, rotation: Rotation) -> Shape {
        if rotation == Rotation::North {
            return self;
        }
        Coord::all()
            .filter(|&dest| self.is_set(source_cell(rotation, dest)))
            .fold(Shape::EMPTY, Shape::with_cell)
    }
}

/// Rotate `shape` by `rot` quarter turns.
///
/// `rot` is reduced modulo 4 first (negative counts included), so
/// `rotate(s, r) == rotate(s, r + 4)` for every `r`.
pub fn rotate(shape: Shape, rot: i32) -> Result<Shape, ShapeError> {
    let turns = rot.rem_euclid(QUARTER_TURNS);
    let rotation = u8::try_from(turns)
        .ok()
        .and_then(Rotation::from_turns)
        .ok_or(ShapeError::InvalidRotation { turns })
        .inspect_err(|err| log::error!("rotate({:#06x}, {}): {}", shape.bits(), rot, err))?;
    Ok(shape.rotated(rotation))
}

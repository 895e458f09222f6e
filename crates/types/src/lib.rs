//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! Everything here is plain data with no I/O, making it usable from the rotation
//! engine, the renderer and the tests alike.
//!
//! # Grid Dimensions
//!
//! Every tetromino lives in a fixed 4x4 grid:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `GRID_DIM` | 4 | Rows and columns per grid |
//! | `CELL_COUNT` | 16 | Cells per grid, one bit each |
//! | `QUARTER_TURNS` | 4 | Quarter turns in a full revolution |
//! | `PIECE_COUNT` | 7 | Tetromino kinds in the catalog |
//!
//! # Display Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `GLYPH_WIDTH` | 2 | Characters per rendered cell |
//! | `ROW_WIDTH` | 8 | Characters per rendered row |
//! | `FILLED_GLYPH` | `[]` | Occupied cell |
//! | `EMPTY_GLYPH` | `` ` `` + space | Empty cell |
//! | `SEPARATOR_WIDTH` | 14 | `=` characters between shapes |
//!
//! # Examples
//!
//! ```
//! use tetromino_types::{Coord, PieceKind, Rotation, CELL_COUNT, GRID_DIM};
//!
//! // Catalog order
//! assert_eq!(PieceKind::ALL[6], PieceKind::T);
//! assert_eq!(PieceKind::T.index(), 6);
//!
//! // Rotation counts wrap, negative counts included
//! assert_eq!(Rotation::normalize(5), Rotation::East);
//! assert_eq!(Rotation::normalize(-1), Rotation::West);
//!
//! // Coordinates map onto bit indices row-major
//! let coord = Coord::new(2, 3).unwrap();
//! assert_eq!(coord.bitpos(), 11);
//! assert_eq!(Coord::from_bitpos(11).unwrap(), coord);
//!
//! assert_eq!(GRID_DIM, 4);
//! assert_eq!(CELL_COUNT, 16);
//! ```

use thiserror::Error;

/// Rows and columns per shape grid (4)
pub const GRID_DIM: usize = 4;

/// Cells per shape grid (16), one bit per cell
pub const CELL_COUNT: usize = GRID_DIM * GRID_DIM;

/// Quarter turns in a full revolution
pub const QUARTER_TURNS: i32 = 4;

/// Number of tetromino kinds
pub const PIECE_COUNT: usize = 7;

/// Characters used to draw a single cell
pub const GLYPH_WIDTH: usize = 2;

/// Characters in one rendered row
pub const ROW_WIDTH: usize = GRID_DIM * GLYPH_WIDTH;

/// Glyph for an occupied cell
pub const FILLED_GLYPH: &str = "[]";

/// Glyph for an empty cell
pub const EMPTY_GLYPH: &str = "` ";

/// Width of the `=` line printed after each shape
pub const SEPARATOR_WIDTH: usize = 14;


/// Errors raised by shape construction, coordinate conversion and rotation.
///
/// None of these are reachable from well-formed inputs; they exist so that a
/// programming error surfaces immediately instead of producing a wrong shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("invalid rotation: {turns} quarter turns after normalization")]
    InvalidRotation { turns: i32 },

    #[error("invalid coordinate: row {row}, col {col} is outside the 4x4 grid")]
    InvalidCoordinate { row: usize, col: usize },

    #[error("invalid bit index: {index} is outside 0..16")]
    InvalidBitIndex { index: usize },

    #[error("shape pattern {bits:#x} uses bits above the low 16")]
    Overflow { bits: u32 },
}

/// The seven tetromino piece kinds, in catalog order
///
/// - **I**: vertical bar
/// - **O**: 2x2 square
/// - **S**: S-shaped
/// - **Z**: Z-shaped (mirror of S)
/// - **L**: L-shaped
/// - **J**: J-shaped (mirror of L)
/// - **T**: T-shaped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    S,
    Z,
    L,
    J,
    T,
}

impl PieceKind {
    /// All kinds in catalog order
    pub const ALL: [PieceKind; PIECE_COUNT] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::L,
        PieceKind::J,
        PieceKind::T,
    ];

    /// Position of this kind in the catalog
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Convert to uppercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
            PieceKind::L => "L",
            PieceKind::J => "J",
            PieceKind::T => "T",
        }
    }
}

/// Rotation states, one per quarter turn
///
/// - **North**: unrotated (0 turns)
/// - **East**: one quarter turn (90°)
/// - **South**: two quarter turns (180°)
/// - **West**: three quarter turns (270°)
///
/// The cycle goes: North → East → South → West → North
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Map a quarter-turn count in `0..4` to a rotation.
    ///
    /// Returns `None` for anything else; callers are expected to normalize first.
    pub fn from_turns(turns: u8) -> Option<Self> {
        match turns {
            0 => Some(Rotation::North),
            1 => Some(Rotation::East),
            2 => Some(Rotation::South),
            3 => Some(Rotation::West),
            _ => None,
        }
    }

    /// Reduce any signed quarter-turn count into a rotation.
    ///
    /// Uses Euclidean modulo, so `-1` is `West` rather than an invalid selector.
    pub fn normalize(count: i32) -> Self {
        match count.rem_euclid(QUARTER_TURNS) {
            0 => Rotation::North,
            1 => Rotation::East,
            2 => Rotation::South,
            _ => Rotation::West,
        }
    }

    /// Number of quarter turns this rotation represents
    pub fn turns(&self) -> u8 {
        *self as u8
    }
}

/// A cell position inside the 4x4 grid, row 0 at the top and column 0 at the left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub fn new(row: usize, col: usize) -> Result<Self, ShapeError> {
        if row >= GRID_DIM || col >= GRID_DIM {
            return Err(ShapeError::InvalidCoordinate { row, col });
        }
        Ok(Self { row, col })
    }

    /// Row-major bit index: `row * 4 + col`
    pub fn bitpos(&self) -> usize {
        self.row * GRID_DIM + self.col
    }

    /// Inverse of [`Coord::bitpos`]
    pub fn from_bitpos(index: usize) -> Result<Self, ShapeError> {
        if index >= CELL_COUNT {
            return Err(ShapeError::InvalidBitIndex { index });
        }
        Ok(Self {
            row: index / GRID_DIM,
            col: index % GRID_DIM,
        })
    }

    /// Every cell of the grid in row-major order
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..GRID_DIM).flat_map(|row| (0..GRID_DIM).map(move |col| Coord { row, col }))
    }
}

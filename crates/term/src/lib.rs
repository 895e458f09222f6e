//! Terminal rendering for tetromino shapes.
//!
//! Shapes are drawn 2 characters wide per cell so the 4x4 grid looks square
//! in a monospace terminal. Rendering is split in two:
//! - [`grid`]: shape to fixed-size text rows, no I/O
//! - [`renderer`]: rows to a crossterm command stream, flushed to stdout

pub mod grid;
pub mod renderer;

pub use tetromino_core as core;
pub use tetromino_types as types;

pub use grid::{render, Glyph, RenderedGrid, RowString};
pub use renderer::{encode_grid_into, encode_shape_into, encode_showcase_into, ShowcaseRenderer};

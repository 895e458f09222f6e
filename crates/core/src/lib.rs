//! Core shape logic - pure, deterministic, and testable
//!
//! This crate holds the bit-level tetromino representation and the rotation
//! transform. It has **no I/O**: every operation is a pure function over
//! `Copy` values, so the same inputs always produce the same bit pattern.
//!
//! # Module Structure
//!
//! - [`shape`]: 16-bit occupancy pattern, coordinate/bit-index conversion, row extraction
//! - [`catalog`]: the seven canonical tetromino patterns in I, O, S, Z, L, J, T order
//! - [`rotate`]: quarter-turn rotation with modulo-4 normalization
//!
//! # Example
//!
//! ```
//! use tetromino_core::{rotate, shape_of};
//! use tetromino_types::PieceKind;
//!
//! // The O square moves to the bottom-left quadrant after one turn.
//! let o = shape_of(PieceKind::O);
//! assert_eq!(rotate(o, 1).unwrap().bits(), 0b0000_0000_1100_1100);
//!
//! let i = shape_of(PieceKind::I);
//! assert_eq!(rotate(i, 1).unwrap().row_bits(3), 0b1111);
//! ```

pub mod catalog;
pub mod rotate;
pub mod shape;

pub use tetromino_types as types;

// Re-export commonly used items for convenience
pub use catalog::{catalog, shape_of, CATALOG};
pub use rotate::rotate;
pub use shape::{bitpos_to_coord, coord_to_bitpos, Shape};

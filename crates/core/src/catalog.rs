//! Catalog module - canonical (unrotated) tetromino patterns
//!
//! Each pattern is anchored to the top-left corner of the 4x4 grid.

use crate::shape::Shape;
use crate::types::{PieceKind, PIECE_COUNT};

/// The seven tetrominoes, indexed by [`PieceKind::index`]
pub const CATALOG: [Shape; PIECE_COUNT] = [
    Shape::from_bits(0b1000_1000_1000_1000), // I
    Shape::from_bits(0b1100_1100_0000_0000), // O
    Shape::from_bits(0b1000_1100_0100_0000), // S
    Shape::from_bits(0b1100_0110_0000_0000), // Z
    Shape::from_bits(0b1000_1000_1100_0000), // L
    Shape::from_bits(0b1000_1110_0000_0000), // J
    Shape::from_bits(0b1110_0100_0000_0000), // T
];

/// Canonical pattern for a piece kind
pub fn shape_of(kind: PieceKind) -> Shape {
    CATALOG[kind.index()]
}

/// Walk the catalog in order
pub fn catalog() -> impl Iterator<Item = (PieceKind, Shape)> {
    PieceKind::ALL.into_iter().map(|kind| (kind, shape_of(kind)))
}

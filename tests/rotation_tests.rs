//! Rotation tests - catalog shapes under quarter turns

use proptest::prelude::*;

use tetromino_rotations::core::{bitpos_to_coord, coord_to_bitpos, rotate, shape_of, Shape, CATALOG};
use tetromino_rotations::types::{Coord, PieceKind, ShapeError, GRID_DIM};

// ============== Coordinate Tests ==============

#[test]
fn test_coord_bitpos_round_trip() {
    for row in 0..GRID_DIM {
        for col in 0..GRID_DIM {
            let index = coord_to_bitpos(row, col).unwrap();
            assert_eq!(bitpos_to_coord(index).unwrap(), Coord { row, col });
        }
    }
}

#[test]
fn test_coord_out_of_grid() {
    assert_eq!(
        coord_to_bitpos(0, 4),
        Err(ShapeError::InvalidCoordinate { row: 0, col: 4 })
    );
    assert!(bitpos_to_coord(99).is_err());
}

// ============== Rotation Property Tests ==============

#[test]
fn test_identity_and_full_cycle() {
    for shape in CATALOG {
        assert_eq!(rotate(shape, 0).unwrap(), shape);
        assert_eq!(rotate(shape, 4).unwrap(), shape);
    }
}

#[test]
fn test_rotation_invertible() {
    for shape in CATALOG {
        for r in 0..4 {
            let turned = rotate(shape, r).unwrap();
            assert_eq!(rotate(turned, (4 - r) % 4).unwrap(), shape);
        }
    }
}

#[test]
fn test_four_quarter_turns() {
    for shape in CATALOG {
        let once = rotate(shape, 1).unwrap();
        let twice = rotate(once, 1).unwrap();
        let thrice = rotate(twice, 1).unwrap();
        assert_eq!(rotate(thrice, 1).unwrap(), shape);
    }
}

#[test]
fn test_cell_count_preserved() {
    for shape in CATALOG {
        for r in 0..4 {
            assert_eq!(rotate(shape, r).unwrap().cell_count(), 4);
        }
    }
}

// ============== Piece Scenarios ==============

/// True when the occupied cells form a single 2x2 square.
fn is_square_block(shape: Shape) -> bool {
    let cells: Vec<_> = shape.cells().collect();
    let Some(&top_left) = cells.first() else {
        return false;
    };
    // Cells come out row-major, so the first one is the square's top-left corner.
    cells.len() == 4
        && cells.iter().all(|c| {
            c.row <= top_left.row + 1 && (top_left.col..=top_left.col + 1).contains(&c.col)
        })
}

#[test]
fn test_o_piece_stays_a_square() {
    let o = shape_of(PieceKind::O);
    for r in 0..4 {
        let turned = rotate(o, r).unwrap();
        assert!(is_square_block(turned), "r = {}: {:016b}", r, turned);
    }
}

#[test]
fn test_o_piece_visits_each_corner() {
    let o = shape_of(PieceKind::O);
    assert_eq!(rotate(o, 0).unwrap().bits(), 0b1100_1100_0000_0000);
    assert_eq!(rotate(o, 1).unwrap().bits(), 0b0000_0000_1100_1100);
    assert_eq!(rotate(o, 2).unwrap().bits(), 0b0000_0000_0011_0011);
    assert_eq!(rotate(o, 3).unwrap().bits(), 0b0011_0011_0000_0000);
}

#[test]
fn test_i_piece_becomes_horizontal() {
    let turned = rotate(shape_of(PieceKind::I), 1).unwrap();
    let rows: Vec<u8> = (0..GRID_DIM).map(|r| turned.row_bits(r)).collect();
    assert_eq!(rows.iter().filter(|&&b| b != 0).count(), 1);
    assert!(rows.contains(&0b1111));
}

#[test]
fn test_i_piece_half_turn_stays_vertical() {
    let turned = rotate(shape_of(PieceKind::I), 2).unwrap();
    for row in 0..GRID_DIM {
        assert_eq!(turned.row_bits(row), 0b0001);
    }
}

#[test]
fn test_t_piece_quarter_turns_differ() {
    let t = shape_of(PieceKind::T);
    let turns: Vec<Shape> = (0..4).map(|r| rotate(t, r).unwrap()).collect();
    for (i, a) in turns.iter().enumerate() {
        for b in &turns[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

proptest! {
    #[test]
    fn test_rotation_period_four(kind in 0usize..7, r in any::<i32>()) {
        let shape = CATALOG[kind];
        prop_assert_eq!(rotate(shape, r).unwrap(), rotate(shape, r.wrapping_add(4)).unwrap());
    }
}

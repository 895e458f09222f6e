//! Tetromino rotations (workspace facade crate).
//!
//! Re-exports the member crates as `tetromino_rotations::{core,term,types}`;
//! the implementation lives under `crates/`.

pub use tetromino_core as core;
pub use tetromino_term as term;
pub use tetromino_types as types;

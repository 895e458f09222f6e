//! Tetromino showcase (default binary).
//!
//! Prints every catalog shape at 0, 1, 2 and 3 quarter turns. Takes no
//! arguments; set `RUST_LOG` for diagnostics on stderr.

use anyhow::Result;

use tetromino_rotations::term::ShowcaseRenderer;
use tetromino_rotations::types::PIECE_COUNT;

fn main() -> Result<()> {
    env_logger::init();
    log::info!("rendering {} tetrominoes", PIECE_COUNT);

    let mut renderer = ShowcaseRenderer::new();
    renderer.print_showcase()?;

    log::info!("done");
    Ok(())
}

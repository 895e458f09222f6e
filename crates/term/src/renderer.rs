//! ShowcaseRenderer: writes every catalog shape at every rotation to stdout.
//!
//! Encoding is split from flushing so the exact byte stream can be checked
//! without touching a terminal.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{style::Print, QueueableCommand};

use crate::core::{catalog, rotate, Shape};
use crate::grid::{render, RenderedGrid};
use crate::types::{QUARTER_TURNS, SEPARATOR_WIDTH};

pub struct ShowcaseRenderer {
    stdout: io::Stdout,
    buf: Vec<u8>,
}

impl ShowcaseRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(4 * 1024),
        }
    }

    /// Encode the whole showcase and flush it in one write.
    pub fn print_showcase(&mut self) -> Result<()> {
        self.buf.clear();
        encode_showcase_into(&mut self.buf)?;
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for ShowcaseRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode a rendered grid, one line per row, top to bottom.
pub fn encode_grid_into(grid: &RenderedGrid, out: &mut Vec<u8>) -> Result<()> {
    for row in grid.rows() {
        out.queue(Print(row.as_str()))?;
        out.queue(Print('\n'))?;
    }
    Ok(())
}

/// Encode one shape: each rotation step number followed by its grid, then the separator.
pub fn encode_shape_into(shape: Shape, out: &mut Vec<u8>) -> Result<()> {
    for step in 0..QUARTER_TURNS {
        log::trace!("rotation step {}", step);
        let rotated = rotate(shape, step)?;
        out.queue(Print(step))?;
        out.queue(Print('\n'))?;
        encode_grid_into(&render(rotated), out)?;
    }

    out.queue(Print('\n'))?;
    out.queue(Print("=".repeat(SEPARATOR_WIDTH)))?;
    out.queue(Print('\n'))?;
    Ok(())
}

/// Encode every catalog shape in order.
pub fn encode_showcase_into(out: &mut Vec<u8>) -> Result<()> {
    for (kind, shape) in catalog() {
        log::debug!("encoding {} piece ({:#018b})", kind.as_str(), shape);
        encode_shape_into(shape, out)?;
    }
    Ok(())
}

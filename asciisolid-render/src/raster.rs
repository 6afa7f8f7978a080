//! Mapping plane coordinates onto the discrete character grid

use asciisolid_core::{Error, Point2d, Result};

/// Multiplier combining a cell's column and row into one collision-free key.
///
/// Must exceed the largest possible row index; windows taller than this are
/// rejected at construction.
pub const CELL_KEY_STRIDE: u64 = 1 << 32;

/// Address of one character on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub col: usize,
    pub row: usize,
}

impl Cell {
    pub fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }

    /// `col * CELL_KEY_STRIDE + row`
    pub fn key(&self) -> u64 {
        self.col as u64 * CELL_KEY_STRIDE + self.row as u64
    }
}

/// Canvas bounds. Valid columns are `0..=width`, valid rows `0..=height`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    width: usize,
    height: usize,
}

impl Window {
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidWindow(format!(
                "window must be at least 1x1, got {}x{}",
                width, height
            )));
        }
        if width as u64 >= CELL_KEY_STRIDE || height as u64 >= CELL_KEY_STRIDE {
            return Err(Error::InvalidWindow(format!(
                "window {}x{} exceeds the maximum of {} per side",
                width,
                height,
                CELL_KEY_STRIDE - 1
            )));
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of glyphs per frame row
    pub fn columns(&self) -> usize {
        self.width + 1
    }

    /// Number of rows per frame
    pub fn rows(&self) -> usize {
        self.height + 1
    }

    /// Map plane coordinates in roughly [-1, 1] to a cell.
    ///
    /// Each axis is shifted to [0, 2], scaled by half the window size (integer
    /// halving), truncated toward zero and clamped into bounds.
    pub fn fit(&self, coords: &Point2d) -> Cell {
        Cell {
            col: fit_axis(coords.x, self.width),
            row: fit_axis(coords.y, self.height),
        }
    }

    pub fn contains(&self, cell: &Cell) -> bool {
        cell.col <= self.width && cell.row <= self.height
    }
}

impl Default for Window {
    fn default() -> Self {
        Self {
            width: 70,
            height: 35,
        }
    }
}

fn fit_axis(value: f64, size: usize) -> usize {
    let half = (size / 2) as f64;
    // `as` truncates toward zero and saturates; NaN maps to 0
    let index = ((value + 1.0) * half) as i64;
    index.clamp(0, size as i64) as usize
}

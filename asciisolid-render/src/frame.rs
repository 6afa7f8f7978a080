//! Fixed-size character frames

use crate::raster::{Cell, Window};
use crate::shading::BLANK_GLYPH;
use std::fmt;

/// One rendered animation tick: `columns() x rows()` glyphs, row 0 first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    columns: usize,
    rows: usize,
    glyphs: Vec<char>,
}

impl Frame {
    /// A frame covering `window`, filled with [`BLANK_GLYPH`]
    pub fn blank(window: &Window) -> Self {
        Self {
            columns: window.columns(),
            rows: window.rows(),
            glyphs: vec![BLANK_GLYPH; window.columns() * window.rows()],
        }
    }

    /// Write every (cell, glyph) pair onto a blank frame
    pub fn compose<I>(window: &Window, cells: I) -> Self
    where
        I: IntoIterator<Item = (Cell, char)>,
    {
        let mut frame = Self::blank(window);
        for (cell, glyph) in cells {
            frame.set(cell, glyph);
        }
        frame
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Overwrite one cell; returns false if the cell lies outside the frame
    pub fn set(&mut self, cell: Cell, glyph: char) -> bool {
        if cell.col >= self.columns || cell.row >= self.rows {
            return false;
        }
        self.glyphs[cell.row * self.columns + cell.col] = glyph;
        true
    }

    pub fn get(&self, cell: Cell) -> Option<char> {
        if cell.col >= self.columns || cell.row >= self.rows {
            return None;
        }
        Some(self.glyphs[cell.row * self.columns + cell.col])
    }

    /// Glyphs of one row
    pub fn row(&self, row: usize) -> Option<&[char]> {
        let start = row.checked_mul(self.columns)?;
        self.glyphs.get(start..start + self.columns)
    }

    /// Each row as a string, top row first
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.glyphs
            .chunks(self.columns)
            .map(|row| row.iter().collect())
    }

    /// Number of cells holding something other than [`BLANK_GLYPH`]
    pub fn filled_cells(&self) -> usize {
        self.glyphs.iter().filter(|&&g| g != BLANK_GLYPH).count()
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            f.write_str(&line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_frame_dimensions() {
        let window = Window::new(70, 35).unwrap();
        let frame = Frame::blank(&window);

        assert_eq!(frame.columns(), 71);
        assert_eq!(frame.rows(), 36);
        assert_eq!(frame.lines().count(), 36);
        assert!(frame.lines().all(|line| line.chars().count() == 71));
        assert!(frame.lines().all(|line| line.chars().all(|c| c == BLANK_GLYPH)));
        assert_eq!(frame.filled_cells(), 0);
    }

    #[test]
    fn test_compose_writes_cells() {
        let window = Window::new(4, 2).unwrap();
        let frame = Frame::compose(&window, vec![(Cell::new(0, 0), '@'), (Cell::new(4, 2), '-')]);

        assert_eq!(frame.to_string(), "@    \n     \n    -");
        assert_eq!(frame.get(Cell::new(4, 2)), Some('-'));
        assert_eq!(frame.filled_cells(), 2);
    }

    #[test]
    fn test_out_of_bounds_cells_are_ignored() {
        let window = Window::new(4, 2).unwrap();
        let mut frame = Frame::blank(&window);

        assert!(!frame.set(Cell::new(5, 0), '@'));
        assert!(!frame.set(Cell::new(0, 3), '@'));
        assert_eq!(frame.get(Cell::new(5, 0)), None);
        assert_eq!(frame.filled_cells(), 0);
    }

    #[test]
    fn test_row_access() {
        let window = Window::new(2, 1).unwrap();
        let frame = Frame::compose(&window, vec![(Cell::new(1, 1), '$')]);
        assert_eq!(frame.row(1), Some(&[' ', '$', ' '][..]));
        assert_eq!(frame.row(2), None);
    }
}

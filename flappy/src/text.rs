//! Character overlay drawn on top of the pixel surface by the display.
//!
//! One byte per cell, [`TEXT_COLUMNS`] by [`TEXT_ROWS`] visible cells, rows
//! [`TEXT_STRIDE`](crate::consts::TEXT_STRIDE) cells apart.

use crate::consts::{TEXT_COLUMNS, TEXT_ROWS};

#[inline]
pub const fn cell_offset(col: usize, row: usize) -> usize {
    (row << 7) + col
}

pub trait TextPlane {
    /// Write one glyph at cell `offset`
    fn put_char(&mut self, offset: usize, ch: u8) -> Result<(), &'static str>;

    /// Write `text` starting at `(col, row)`
    ///
    /// No wrapping, text running past the last column lands in the
    /// off-screen part of the row.
    fn draw_text(&mut self, col: usize, row: usize, text: &str) -> Result<(), &'static str> {
        let start = cell_offset(col, row);
        text.bytes()
            .enumerate()
            .try_for_each(|(n, ch)| self.put_char(start + n, ch))
    }

    fn clear_text(&mut self) -> Result<(), &'static str> {
        (0..TEXT_ROWS).try_for_each(|row| {
            (0..TEXT_COLUMNS).try_for_each(|col| self.put_char(cell_offset(col, row), b' '))
        })
    }
}

impl TextPlane for [u8] {
    fn put_char(&mut self, offset: usize, ch: u8) -> Result<(), &'static str> {
        self.get_mut(offset)
            .map(|cell| *cell = ch)
            .ok_or("Character cell out of bounds")
    }
}

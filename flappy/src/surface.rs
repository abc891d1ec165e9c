//! Pixel surface the game draws into.
//!
//! A surface is a row-major block of RGB565 words with a fixed power-of-two
//! stride of [`PIXEL_STRIDE`] pixels; only the leftmost [`SCREEN_WIDTH`]
//! columns of each row are visible. Implementors supply `store`, every other
//! operation is built on top of it.
//!
//! #Note:
//! There is no erase primitive. Sprites are removed by painting their old
//! footprint with the background color.

use crate::consts::{PIXEL_STRIDE, SCREEN_HEIGHT, SCREEN_WIDTH};

/// A 16-bit RGB565 color
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Color(pub u16);

impl Color {
    pub const BLACK: Color = Color(0x0000);
    pub const WHITE: Color = Color(0xFFFF);
    pub const YELLOW: Color = Color(0xFFE0);
    pub const GREEN: Color = Color(0x07E0);
    pub const SKY_BLUE: Color = Color(0x5CF9);

    pub const BACKGROUND: Color = Color::SKY_BLUE;
}

/// Box with inclusive corners, `x1 > x2` or `y1 > y2` covers nothing
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Rect {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl Rect {
    pub const SCREEN: Rect = Rect::new(0, 0, SCREEN_WIDTH - 1, SCREEN_HEIGHT - 1);

    pub const fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Clamp to the visible screen. Corners are never reordered.
    pub fn clip(self) -> Self {
        Self {
            x1: self.x1.max(0),
            y1: self.y1.max(0),
            x2: self.x2.min(SCREEN_WIDTH - 1),
            y2: self.y2.min(SCREEN_HEIGHT - 1),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.x1 > self.x2 || self.y1 > self.y2
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        (self.x1..=self.x2).contains(&x) && (self.y1..=self.y2).contains(&y)
    }
}

/// Word offset of a pixel inside a surface
#[inline]
pub const fn pixel_offset(x: usize, y: usize) -> usize {
    y * PIXEL_STRIDE + x
}

pub fn on_screen(x: i32, y: i32) -> bool {
    Rect::SCREEN.contains(x, y)
}

/// Trait aggregating drawing operations over a raw pixel buffer
pub trait Surface {
    /// Write a single pixel word at `offset`
    ///
    /// Offsets outside of the backing memory must be ignored.
    fn store(&mut self, offset: usize, color: Color);

    fn set_pixel(&mut self, x: i32, y: i32, color: Color) -> Result<(), &'static str> {
        if on_screen(x, y) {
            self.store(pixel_offset(x as usize, y as usize), color);
            Ok(())
        } else {
            Err("Pixel index out of bounds")
        }
    }

    /// Paint the inclusive box `(x1, y1)-(x2, y2)`, clipped to the screen
    fn fill_rect(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Color) {
        let area = Rect::new(x1, y1, x2, y2).clip();
        for row in area.y1..=area.y2 {
            let start = pixel_offset(0, row as usize);
            for col in area.x1..=area.x2 {
                self.store(start + col as usize, color);
            }
        }
    }

    fn paint(&mut self, rect: Rect, color: Color) {
        self.fill_rect(rect.x1, rect.y1, rect.x2, rect.y2, color);
    }

    fn fill_screen(&mut self, color: Color) {
        self.paint(Rect::SCREEN, color);
    }
}

/// In-memory surface, used on the host and in tests
impl Surface for [u16] {
    #[inline]
    fn store(&mut self, offset: usize, color: Color) {
        if let Some(px) = self.get_mut(offset) {
            *px = color.0;
        }
    }
}

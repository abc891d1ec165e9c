//! Volatile access to the video hardware.
//!
//! Every type here is a thin wrapper over a base address. Nothing is cached,
//! each access is a single volatile load or store.

use core::ptr;

use flappy::consts::{SURFACE_LEN, TEXT_LEN};
use flappy::{Color, Surface, TextPlane};

/// Pixel buffer in device memory
pub struct MmioSurface {
    base: *mut u16,
}

impl MmioSurface {
    /// # Safety
    ///
    /// `base` must point to [`SURFACE_LEN`] writable pixel words that stay
    /// valid for as long as the surface is used
    pub const unsafe fn new(base: usize) -> Self {
        Self {
            base: base as *mut u16,
        }
    }

    pub fn base(&self) -> usize {
        self.base as usize
    }

    /// Point the surface at another buffer
    ///
    /// # Safety
    ///
    /// Same requirements as [`MmioSurface::new`]
    pub unsafe fn rebase(&mut self, base: usize) {
        self.base = base as *mut u16;
    }
}

impl Surface for MmioSurface {
    fn store(&mut self, offset: usize, color: Color) {
        if offset < SURFACE_LEN {
            unsafe { ptr::write_volatile(self.base.add(offset), color.0) }
        }
    }
}

/// Character buffer in device memory
pub struct MmioText {
    base: *mut u8,
}

impl MmioText {
    /// # Safety
    ///
    /// `base` must point to [`TEXT_LEN`] writable bytes
    pub const unsafe fn new(base: usize) -> Self {
        Self {
            base: base as *mut u8,
        }
    }
}

impl TextPlane for MmioText {
    fn put_char(&mut self, offset: usize, ch: u8) -> Result<(), &'static str> {
        if offset >= TEXT_LEN {
            return Err("Character cell out of bounds");
        }
        unsafe { ptr::write_volatile(self.base.add(offset), ch) };
        Ok(())
    }
}

/// Pixel buffer controller
///
/// Four words: front buffer, back buffer, resolution, status. Writing any
/// value to the front buffer word requests a swap on the next vertical
/// sync, status bit 0 stays set until it happened.
pub struct PixelCtrl {
    base: *mut usize,
}

impl PixelCtrl {
    const FRONT: usize = 0;
    const BACK: usize = 1;
    const RESOLUTION: usize = 2;
    const STATUS: usize = 3;

    /// # Safety
    ///
    /// `base` must point to the controller's register block
    pub const unsafe fn new(base: usize) -> Self {
        Self {
            base: base as *mut usize,
        }
    }

    fn read(&self, word: usize) -> usize {
        unsafe { ptr::read_volatile(self.base.add(word)) }
    }

    fn write(&mut self, word: usize, value: usize) {
        unsafe { ptr::write_volatile(self.base.add(word), value) }
    }

    pub fn front(&self) -> usize {
        self.read(Self::FRONT)
    }

    pub fn back(&self) -> usize {
        self.read(Self::BACK)
    }

    pub fn set_back(&mut self, base: usize) {
        self.write(Self::BACK, base)
    }

    /// Visible `(width, height)` reported by the controller
    pub fn resolution(&self) -> (usize, usize) {
        let raw = self.read(Self::RESOLUTION);
        (raw & 0xFFFF, (raw >> 16) & 0xFFFF)
    }

    pub fn request_swap(&mut self) {
        self.write(Self::FRONT, 1)
    }

    pub fn is_swapping(&self) -> bool {
        self.read(Self::STATUS) & 1 != 0
    }
}

use core::ptr;

use flappy::Buttons;

/// Push button data register, KEY0 in bit 0
pub struct Keys {
    reg: *const u32,
}

impl Keys {
    /// # Safety
    ///
    /// `base` must be the address of a readable key data register
    pub const unsafe fn new(base: usize) -> Self {
        Self {
            reg: base as *const u32,
        }
    }

    pub fn raw(&self) -> u32 {
        unsafe { ptr::read_volatile(self.reg) }
    }

    pub fn read(&self) -> Buttons {
        Buttons::from_register(self.raw())
    }
}

/// Slide switch data register
pub struct Switches {
    reg: *const u32,
}

impl Switches {
    pub const MASK: u32 = 0x3FF;

    /// # Safety
    ///
    /// `base` must be the address of a readable switch data register
    pub const unsafe fn new(base: usize) -> Self {
        Self {
            reg: base as *const u32,
        }
    }

    /// Positions of SW0..SW9, up is 1
    pub fn read(&self) -> u32 {
        unsafe { ptr::read_volatile(self.reg) & Self::MASK }
    }
}

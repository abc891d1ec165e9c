//! Context for accessing the hardware the game runs on.
//!
//! The frame driver never touches registers itself; everything goes through
//! an implementation of [`Context`]. Firmware provides one backed by
//! memory-mapped registers, tests provide one backed by plain arrays.

use core::convert::Infallible;

use bitvec::prelude::*;

use crate::surface::Surface;
use crate::text::TextPlane;

/// Snapshot of the two game buttons
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Buttons {
    pub jump: bool,
    pub restart: bool,
}

impl Buttons {
    pub const JUMP_BIT: usize = 0;
    pub const RESTART_BIT: usize = 3;

    pub const NONE: Buttons = Buttons {
        jump: false,
        restart: false,
    };
    pub const JUMP: Buttons = Buttons {
        jump: true,
        restart: false,
    };
    pub const RESTART: Buttons = Buttons {
        jump: false,
        restart: true,
    };

    /// Decode the key register, active high
    pub fn from_register(raw: u32) -> Self {
        let bits = raw.view_bits::<Lsb0>();
        Self {
            jump: bits[Self::JUMP_BIT],
            restart: bits[Self::RESTART_BIT],
        }
    }
}

/// Trait aggregating platform functionalities
pub trait Context {
    type Surface: Surface + ?Sized;
    type Text: TextPlane + ?Sized;

    /// Sample the buttons
    ///
    /// Called by `tick` once per frame. Level sensed, a held button is
    /// reported on every frame.
    fn read_buttons(&mut self) -> Buttons;
    /// Seed for the pipe generator
    ///
    /// Called once at startup unless a seed was given to the builder
    fn read_seed(&mut self) -> u32;
    /// Pixel buffer currently not on display
    fn surface(&mut self) -> &mut Self::Surface;
    /// Character overlay
    fn text(&mut self) -> &mut Self::Text;
    /// Ask the display to swap buffers on the next vertical sync
    fn request_swap(&mut self);
    /// Check whether the requested swap has happened
    ///
    /// Called in a busy loop after `request_swap` until it stops returning
    /// `WouldBlock`. After that `surface` must return the new back buffer.
    fn poll_swap(&mut self) -> nb::Result<(), Infallible>;
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_key_register() {
        assert_eq!(Buttons::from_register(0b0000), Buttons::NONE);
        assert_eq!(Buttons::from_register(0b0001), Buttons::JUMP);
        assert_eq!(Buttons::from_register(0b1000), Buttons::RESTART);
        assert_eq!(
            Buttons::from_register(0b1001),
            Buttons {
                jump: true,
                restart: true
            }
        );
        // KEY1 and KEY2 are not used
        assert_eq!(Buttons::from_register(0b0110), Buttons::NONE);
        assert_eq!(Buttons::from_register(0xFFFF_FFF0), Buttons::NONE);
    }
}

#![cfg_attr(not(test), no_std)]

pub mod context;
pub mod keys;
pub mod logger;
pub mod mmio;

pub use context::De1SocContext;
pub use keys::{Keys, Switches};
pub use mmio::{MmioSurface, MmioText, PixelCtrl};

/// Physical addresses of the devices used by the game
pub mod address_map {
    pub const PIXEL_CTRL_BASE: usize = 0xFF20_3020;
    /// On-chip pixel buffer
    pub const PIXEL_BUFFER_BASE: usize = 0xC800_0000;
    pub const CHAR_BUFFER_BASE: usize = 0xC900_0000;
    pub const KEY_BASE: usize = 0xFF20_0050;
    pub const SW_BASE: usize = 0xFF20_0040;
    pub const JTAG_UART_BASE: usize = 0xFF20_1000;
}

/// Base addresses of the register blocks a [`De1SocContext`] talks to
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Registers {
    pub pixel_ctrl: usize,
    pub char_buffer: usize,
    pub keys: usize,
    pub switches: usize,
}

impl Registers {
    pub const DE1_SOC: Registers = Registers {
        pixel_ctrl: address_map::PIXEL_CTRL_BASE,
        char_buffer: address_map::CHAR_BUFFER_BASE,
        keys: address_map::KEY_BASE,
        switches: address_map::SW_BASE,
    };
}

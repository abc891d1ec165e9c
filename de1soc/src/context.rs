//! [`Context`] implementation over the DE1-SoC registers.

use core::convert::Infallible;

use flappy::{Buttons, Context};
use log::debug;

use crate::keys::{Keys, Switches};
use crate::mmio::{MmioSurface, MmioText, PixelCtrl};
use crate::{address_map, Registers};

pub struct De1SocContext {
    ctrl: PixelCtrl,
    surface: MmioSurface,
    text: MmioText,
    keys: Keys,
    switches: Switches,
}

impl De1SocContext {
    /// Program `back_buffer` as the controller's back buffer and start
    /// drawing into it
    ///
    /// # Safety
    ///
    /// Every address in `regs` must point at the matching device and
    /// `back_buffer` at a full pixel buffer. Only one context may exist
    /// for a register block.
    pub unsafe fn new(regs: Registers, back_buffer: usize) -> Self {
        let mut ctrl = PixelCtrl::new(regs.pixel_ctrl);
        ctrl.set_back(back_buffer);
        let (width, height) = ctrl.resolution();
        debug!(
            "pixel controller {}x{}, front {:#010x}, back {:#010x}",
            width,
            height,
            ctrl.front(),
            ctrl.back()
        );

        Self {
            surface: MmioSurface::new(ctrl.back()),
            ctrl,
            text: MmioText::new(regs.char_buffer),
            keys: Keys::new(regs.keys),
            switches: Switches::new(regs.switches),
        }
    }

    /// Context over the board's own devices, drawing into the on-chip
    /// pixel buffer
    ///
    /// # Safety
    ///
    /// Must be called once, on the DE1-SoC
    pub unsafe fn take() -> Self {
        Self::new(Registers::DE1_SOC, address_map::PIXEL_BUFFER_BASE)
    }
}

impl Context for De1SocContext {
    type Surface = MmioSurface;
    type Text = MmioText;

    fn read_buttons(&mut self) -> Buttons {
        self.keys.read()
    }

    fn read_seed(&mut self) -> u32 {
        self.switches.read()
    }

    fn surface(&mut self) -> &mut MmioSurface {
        &mut self.surface
    }

    fn text(&mut self) -> &mut MmioText {
        &mut self.text
    }

    fn request_swap(&mut self) {
        self.ctrl.request_swap()
    }

    fn poll_swap(&mut self) -> nb::Result<(), Infallible> {
        if self.ctrl.is_swapping() {
            return Err(nb::Error::WouldBlock);
        }
        unsafe { self.surface.rebase(self.ctrl.back()) };
        Ok(())
    }
}

//! `log` backend writing to the JTAG UART.
//!
//! Records are printed as `[LEVEL][module] message` lines. The UART FIFO is
//! never waited on: when it is full characters are dropped, so the game keeps
//! its frame rate with no debugger attached.
//!
//! The logger becomes available to the `log` facade after calling the unsafe
//! [`init`] function.
//!
//! # Examples
//!
//! ```no_run
//! # use de1soc::logger::*;
//! # use de1soc::address_map::JTAG_UART_BASE;
//! # use log::{info, debug};
//! #
//! # let seed = 15;
//! #
//! static LOGGER: JtagUartLogger = JtagUartLogger::new(LevelFilter::Info, JTAG_UART_BASE);
//!
//! unsafe {
//!     init(&LOGGER).unwrap();
//! }
//!
//! info!("Game started");
//! debug!("Seed: {}", seed);
//! ```

use core::fmt::{self, Write};
use core::ptr;

use log::{Log, Metadata, Record};

pub use log::LevelFilter;

/// Data and control words of a JTAG UART
pub struct JtagUart {
    base: *mut u32,
}

impl JtagUart {
    const DATA: usize = 0;
    const CONTROL: usize = 1;

    /// # Safety
    ///
    /// `base` must point to a JTAG UART register block
    pub const unsafe fn new(base: usize) -> Self {
        Self {
            base: base as *mut u32,
        }
    }

    /// Free slots in the write FIFO
    pub fn write_space(&self) -> u32 {
        unsafe { ptr::read_volatile(self.base.add(Self::CONTROL)) >> 16 }
    }

    /// Queue one character, dropping it when the FIFO is full
    pub fn put(&mut self, byte: u8) -> bool {
        if self.write_space() == 0 {
            return false;
        }
        unsafe { ptr::write_volatile(self.base.add(Self::DATA), u32::from(byte)) };
        true
    }
}

impl Write for JtagUart {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        s.bytes().for_each(|byte| {
            self.put(byte);
        });
        Ok(())
    }
}

/// Logger printing through the JTAG UART at `base`
pub struct JtagUartLogger {
    level: LevelFilter,
    base: usize,
}

impl JtagUartLogger {
    pub const fn new(level: LevelFilter, base: usize) -> Self {
        Self { level, base }
    }

    pub fn level(&self) -> LevelFilter {
        self.level
    }
}

impl Log for JtagUartLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let mut uart = unsafe { JtagUart::new(self.base) };
        let _ = writeln!(
            uart,
            "[{:5}][{}] {}",
            record.level(),
            record.module_path().unwrap_or("?"),
            record.args()
        );
    }

    fn flush(&self) {}
}

/// Install `logger` for the log facade
///
/// # Safety
///
/// From now on every log record is written to the address the logger was
/// created with, which must be a JTAG UART register block.
pub unsafe fn init(logger: &'static JtagUartLogger) -> Result<(), &'static str> {
    log::set_logger(logger).map_err(|_| "Logger already initialized")?;
    log::set_max_level(logger.level());
    Ok(())
}

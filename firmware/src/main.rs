#![no_main]
#![no_std]

use core::panic::PanicInfo;

use log::{error, info};

use de1soc::address_map::JTAG_UART_BASE;
use de1soc::logger::{init, JtagUartLogger, LevelFilter};
use de1soc::De1SocContext;
use flappy::Builder;

static LOGGER: JtagUartLogger = JtagUartLogger::new(LevelFilter::Info, JTAG_UART_BASE);

// Core 0 sets up a stack at the top of DDR, zeroes .bss and enters Rust.
// Core 1 is parked.
core::arch::global_asm!(
    r#"
.section .text.boot
.global _start

_start:
    mrc     p15, 0, r0, c0, c0, 5
    ands    r0, r0, #3
    bne     .Lpark

    ldr     sp, =0x3FFFFFF0

    ldr     r0, =__bss_start
    ldr     r1, =__bss_end
    mov     r2, #0
.Lclear_bss:
    cmp     r0, r1
    bge     .Ldone_bss
    str     r2, [r0], #4
    b       .Lclear_bss
.Ldone_bss:

    bl      rust_main

.Lpark:
    wfe
    b       .Lpark
"#
);

#[no_mangle]
pub extern "C" fn rust_main() -> ! {
    if unsafe { init(&LOGGER) }.is_err() {
        park();
    }
    info!("init process started");

    let ctx = unsafe { De1SocContext::take() };
    match Builder::new().with_context(ctx).build() {
        Ok(mut game) => game.run(),
        Err(e) => {
            error!("failed to start: {}", e);
            park()
        }
    }
}

fn park() -> ! {
    loop {
        core::hint::spin_loop();
    }
}

#[panic_handler]
fn panic(info: &PanicInfo) -> ! {
    error!("{}", info);
    park()
}

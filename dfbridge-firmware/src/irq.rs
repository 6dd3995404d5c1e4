//! UART interrupt handlers
//!
//! Both serial channels are serviced straight from their interrupts. The two
//! lines share one priority so neither handler can preempt the other while
//! it is writing to the console.

use defmt::*;
use embassy_rp::interrupt;
use embassy_rp::interrupt::{InterruptExt, Priority};
use portable_atomic::{AtomicU32, Ordering};

use dfbridge_core::{service_console, service_peripheral, BridgeError, Dispatcher};
use dfbridge_hal_rp2040::uart::RawUart;

use crate::config::BRIDGE_CONFIG;

/// Priority shared by both UART interrupts
const UART_PRIORITY: Priority = Priority::P2;

const DISPATCHER: Dispatcher = Dispatcher::new(BRIDGE_CONFIG.frame_format);

/// Operator bytes dispatched since boot
pub static CONSOLE_BYTES: AtomicU32 = AtomicU32::new(0);

/// Module bytes echoed since boot
pub static MODULE_BYTES: AtomicU32 = AtomicU32::new(0);

/// Unmask receive interrupts on both UARTs and enable them in the NVIC
pub fn enable() {
    RawUart::uart0().enable_rx_interrupts();
    RawUart::uart1().enable_rx_interrupts();

    interrupt::UART0_IRQ.set_priority(UART_PRIORITY);
    interrupt::UART1_IRQ.set_priority(UART_PRIORITY);

    // SAFETY: the handlers below only touch their own UART's registers plus
    // the console TX FIFO, and equal priorities keep them from nesting.
    unsafe {
        interrupt::UART0_IRQ.enable();
        interrupt::UART1_IRQ.enable();
    }

    info!("UART interrupts enabled");
}

#[interrupt]
unsafe fn UART0_IRQ() {
    let mut console = RawUart::uart0();
    let mut module = RawUart::uart1();

    match service_console(&mut console, &mut module, &DISPATCHER) {
        Ok(report) => {
            CONSOLE_BYTES.fetch_add(report.bytes as u32, Ordering::Relaxed);
            trace!("console irq {:#x}: {} bytes", report.status, report.bytes);
        }
        Err(BridgeError::Console(e)) | Err(BridgeError::Peripheral(e)) => match e {},
    }
}

#[interrupt]
unsafe fn UART1_IRQ() {
    let mut module = RawUart::uart1();
    let mut console = RawUart::uart0();

    match service_peripheral(&mut module, &mut console) {
        Ok(report) => {
            MODULE_BYTES.fetch_add(report.bytes as u32, Ordering::Relaxed);
            trace!("module irq {:#x}: {} bytes", report.status, report.bytes);
        }
        Err(e) => match e {},
    }
}
